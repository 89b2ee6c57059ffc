//! State survives a restart when backed by files.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use axum::http::StatusCode;
use optimistics_integration_tests::{TestApp, body_text};
use optimistics_storefront::storage::{FileStorage, KeyValueStore, keys};

fn file_app(dir: &tempfile::TempDir) -> TestApp {
    TestApp::with_storage(Arc::new(FileStorage::open(dir.path()).unwrap()))
}

#[tokio::test]
async fn test_stores_restore_after_restart() {
    let dir = tempfile::tempdir().unwrap();

    {
        let app = file_app(&dir);
        app.login_demo().await;
        app.add_to_cart("turmeric-soap", 2).await;
        app.wishlist_toggle("castor-oil").await;
    }

    let app = file_app(&dir);
    let body = body_text(app.get("/").await).await;

    assert!(body.contains(r#"id="cart-count">2<"#));
    assert!(body.contains(r#"id="wishlist-count">1<"#));
    assert!(body.contains("Hi, Test"));
    assert_eq!(app.get("/account").await.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_corrupt_snapshot_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::open(dir.path()).unwrap();
    storage.set(keys::CART, "{definitely not a cart").unwrap();
    storage.set(keys::SESSION, "null-ish").unwrap();

    let app = file_app(&dir);
    let body = body_text(app.get("/cart").await).await;

    assert!(body.contains("Your cart is empty"));
    assert_eq!(app.get("/checkout").await.status(), StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();

    let response = app.get("/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "ok");
}

#[tokio::test]
async fn test_unknown_product_is_not_found() {
    let app = TestApp::new();

    let response = app.get("/product/not-a-product").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("Product not found"));
}

#[tokio::test]
async fn test_responses_carry_request_id() {
    let app = TestApp::new();

    let response = app.get("/").await;

    assert!(response.headers().contains_key("x-request-id"));
}
