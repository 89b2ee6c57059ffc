//! Integration tests for the Optimistics storefront.
//!
//! The full router (middleware included) is driven in-process with
//! `tower::ServiceExt::oneshot`; no server or network is needed.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p optimistics-integration-tests
//! ```

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, Response, StatusCode, header},
};
use optimistics_storefront::state::AppState;
use optimistics_storefront::storage::{KeyValueStore, MemoryStorage};
use tower::ServiceExt;

/// An in-process storefront with inspectable storage.
pub struct TestApp {
    router: Router,
    pub storage: Arc<dyn KeyValueStore>,
}

impl TestApp {
    /// A storefront over fresh in-memory storage.
    #[must_use]
    pub fn new() -> Self {
        Self::with_storage(Arc::new(MemoryStorage::new()))
    }

    /// A storefront restored from `storage`.
    #[must_use]
    pub fn with_storage(storage: Arc<dyn KeyValueStore>) -> Self {
        let state = AppState::new(Arc::clone(&storage));
        Self {
            router: optimistics_storefront::app(state),
            storage,
        }
    }

    /// Send a request through the full middleware stack.
    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }

    /// `GET path`.
    pub async fn get(&self, path: &str) -> Response<Body> {
        self.send(Request::get(path).body(Body::empty()).unwrap())
            .await
    }

    /// `POST path` with a url-encoded form body.
    pub async fn post_form(&self, path: &str, form: &str) -> Response<Body> {
        self.send(
            Request::post(path)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(form.to_owned()))
                .unwrap(),
        )
        .await
    }

    /// Sign in as the demo shopper.
    pub async fn login_demo(&self) {
        let response = self
            .post_form("/login", "email=user%40test.com&password=password")
            .await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
    }

    /// Add `quantity` of a catalog product to the cart.
    pub async fn add_to_cart(&self, product_id: &str, quantity: u32) {
        let response = self
            .post_form(
                "/cart/add",
                &format!("product_id={product_id}&quantity={quantity}"),
            )
            .await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
    }

    /// Add or remove a product from the wishlist.
    pub async fn wishlist_toggle(&self, product_id: &str) {
        let response = self
            .post_form("/wishlist/toggle", &format!("product_id={product_id}"))
            .await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// The `Location` header of a redirect.
#[must_use]
pub fn location(response: &Response<Body>) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
}

/// Read the whole body as UTF-8.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
