//! Cart, wishlist and checkout flows.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use optimistics_integration_tests::{TestApp, body_text, location};
use optimistics_storefront::storage::keys;

#[tokio::test]
async fn test_add_to_cart_updates_header_and_total() {
    let app = TestApp::new();

    app.add_to_cart("castor-oil", 2).await;
    app.add_to_cart("african-black-soap", 1).await;

    let body = body_text(app.get("/cart").await).await;
    assert!(body.contains(r#"id="cart-count">3<"#));
    assert!(body.contains("₦12,500.00"));
}

#[tokio::test]
async fn test_adding_same_product_merges_lines() {
    let app = TestApp::new();

    app.add_to_cart("coconut-oil", 1).await;
    app.add_to_cart("coconut-oil", 2).await;

    let raw = app.storage.get(keys::CART).unwrap().unwrap();
    let lines: Vec<serde_json::Value> = serde_json::from_str(&raw).unwrap();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["quantity"], 3);
    assert_eq!(lines[0]["id"], "coconut-oil");
}

#[tokio::test]
async fn test_add_unknown_product_is_not_found() {
    let app = TestApp::new();

    let response = app.post_form("/cart/add", "product_id=candle").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_to_zero_removes_line() {
    let app = TestApp::new();
    app.add_to_cart("castor-oil", 2).await;

    let response = app
        .post_form("/cart/update", "product_id=castor-oil&quantity=0")
        .await;
    assert_eq!(location(&response), "/cart");

    let body = body_text(app.get("/cart").await).await;
    assert!(body.contains("Your cart is empty"));
}

#[tokio::test]
async fn test_checkout_with_empty_cart_shows_fallback() {
    let app = TestApp::new();
    app.login_demo().await;

    let response = app.get("/checkout").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Your cart is empty"));

    let response = app.post_form("/checkout", "").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Your cart is empty"));
}

#[tokio::test]
async fn test_checkout_prefills_email_and_clears_cart() {
    let app = TestApp::new();
    app.add_to_cart("castor-oil", 1).await;
    app.wishlist_toggle("hibiscus-toner").await;
    app.login_demo().await;

    let body = body_text(app.get("/checkout").await).await;
    assert!(body.contains(r#"value="user@test.com""#));

    let response = app
        .post_form("/checkout", "email=user%40test.com&full_name=Test+User")
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let target = location(&response).to_owned();
    assert!(target.starts_with("/?order=ORD-"), "{target}");

    let home = body_text(app.get(&target).await).await;
    assert!(home.contains("has been placed"));
    assert!(home.contains(r#"id="cart-count">0<"#));

    // Wishlist survives checkout
    assert!(home.contains(r#"id="wishlist-count">1<"#));
    let raw = app.storage.get(keys::CART).unwrap().unwrap();
    assert_eq!(raw.trim(), "[]");
}

#[tokio::test]
async fn test_wishlist_toggle_twice_restores() {
    let app = TestApp::new();

    app.wishlist_toggle("raw-shea-butter").await;
    let body = body_text(app.get("/wishlist").await).await;
    assert!(body.contains("Raw Shea Butter"));

    app.wishlist_toggle("raw-shea-butter").await;
    let body = body_text(app.get("/wishlist").await).await;
    assert!(body.contains("Your wishlist is empty"));
}

#[tokio::test]
async fn test_wishlist_rejects_unknown_products() {
    let app = TestApp::new();

    for id in ["nope-1", "nope-2"] {
        let response = app
            .post_form("/wishlist/toggle", &format!("product_id={id}"))
            .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    let home = body_text(app.get("/").await).await;
    assert!(home.contains(r#"id="wishlist-count">0<"#));
    assert!(app.storage.get(keys::WISHLIST).unwrap().is_none());
}

#[tokio::test]
async fn test_loyalty_points_follow_cart() {
    let app = TestApp::new();
    app.add_to_cart("hibiscus-toner", 2).await;

    let body = body_text(app.get("/loyalty").await).await;

    // ₦15,000 at 1 point per ₦100
    assert!(body.contains("<strong>150</strong>"));
    assert!(body.contains("<strong>Seedling</strong>"));
    assert!(body.contains("<strong>Radiant</strong>"));
    assert!(body.contains("grab 200 points"));
}
