//! Login and registration through the forms.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use optimistics_integration_tests::{TestApp, body_text, location};
use optimistics_storefront::storage::keys;

#[tokio::test]
async fn test_unknown_email_shows_inline_error() {
    let app = TestApp::new();

    let response = app
        .post_form("/login", "email=nobody%40test.com&password=nope")
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Invalid email or password."));
    assert!(body.contains(r#"value="nobody@test.com""#));
    assert!(app.storage.get(keys::SESSION).unwrap().is_none());
}

#[tokio::test]
async fn test_registered_email_logs_in_with_any_password() {
    let app = TestApp::new();

    let response = app
        .post_form("/login", "email=user%40test.com&password=nope")
        .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/account");
    assert!(app.storage.get(keys::SESSION).unwrap().is_some());
}

#[tokio::test]
async fn test_register_signs_in_and_greets_by_first_name() {
    let app = TestApp::new();

    let response = app
        .post_form(
            "/register",
            "name=Ada+Obi&email=ada%40example.com&password=secret",
        )
        .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/account");

    let body = body_text(app.get("/account").await).await;
    assert!(body.contains("Hi, Ada"));
    assert!(body.contains("ada@example.com"));

    let raw = app.storage.get(keys::SESSION).unwrap().unwrap();
    let user: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(user["email"], "ada@example.com");
    assert_eq!(user["name"], "Ada Obi");
}

#[tokio::test]
async fn test_register_duplicate_email_is_refused() {
    let app = TestApp::new();

    let response = app
        .post_form(
            "/register",
            "name=Someone&email=user%40test.com&password=secret",
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("An account with this email already exists."));
    assert!(app.storage.get(keys::SESSION).unwrap().is_none());
}

#[tokio::test]
async fn test_registered_shopper_can_log_back_in() {
    let app = TestApp::new();
    app.post_form(
        "/register",
        "name=Bola&email=bola%40example.com&password=secret",
    )
    .await;
    app.post_form("/logout", "").await;

    let response = app
        .post_form("/login", "email=bola%40example.com&password=anything")
        .await;

    assert_eq!(location(&response), "/account");
}

#[tokio::test]
async fn test_login_ignores_offsite_from() {
    let app = TestApp::new();

    let response = app
        .post_form(
            "/login",
            "email=user%40test.com&password=password&from=https%3A%2F%2Fevil.example",
        )
        .await;

    assert_eq!(location(&response), "/account");
}

#[tokio::test]
async fn test_login_ignores_from_with_embedded_tab() {
    let app = TestApp::new();

    let response = app
        .post_form(
            "/login",
            "email=user%40test.com&password=password&from=%2F%09%2Fevil.example",
        )
        .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/account");
}
