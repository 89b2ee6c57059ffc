//! Handler errors and Sentry context.
//!
//! Store operations absorb their own failures, so the only error a handler
//! returns is a request for a product that does not exist.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use optimistics_core::{OrderId, ProductId};

use crate::models::User;

/// Errors a storefront handler can return.
#[derive(Debug, Error)]
pub enum AppError {
    /// The product id is not in the catalog.
    #[error("product not found: {0}")]
    ProductNotFound(ProductId),
}

impl AppError {
    /// HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::ProductNotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

/// Standalone error page.
#[derive(Template, WebTemplate)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub heading: &'static str,
    pub detail: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let page = match &self {
            Self::ProductNotFound(id) => {
                tracing::debug!(product_id = %id, "Unknown product requested");
                ErrorTemplate {
                    heading: "Product not found",
                    detail: "We couldn't find that product. It may no longer be available.",
                }
            }
        };

        (self.status(), page).into_response()
    }
}

// =============================================================================
// Sentry context
// =============================================================================

/// Attach the signed-in shopper to subsequent Sentry events.
pub fn set_sentry_user(user: &User) {
    sentry::configure_scope(|scope| {
        scope.set_user(Some(sentry::User {
            id: Some(user.id.to_string()),
            email: Some(user.email.to_string()),
            ..Default::default()
        }));
    });
}

/// Detach the shopper from Sentry events (on logout).
pub fn clear_sentry_user() {
    sentry::configure_scope(|scope| scope.set_user(None));
}

/// Shopper actions worth a breadcrumb on later error reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShopperAction {
    AddedToCart { product_id: ProductId, quantity: i64 },
    PlacedOrder { order_id: OrderId, item_count: u64 },
}

impl ShopperAction {
    fn category(&self) -> &'static str {
        match self {
            Self::AddedToCart { .. } => "cart",
            Self::PlacedOrder { .. } => "checkout",
        }
    }

    fn message(&self) -> String {
        match self {
            Self::AddedToCart {
                product_id,
                quantity,
            } => format!("Added {quantity} x {product_id} to cart"),
            Self::PlacedOrder {
                order_id,
                item_count,
            } => format!("Placed order {order_id} ({item_count} items)"),
        }
    }
}

/// Record a shopper action as a Sentry breadcrumb.
pub fn record_action(action: &ShopperAction) {
    sentry::add_breadcrumb(sentry::Breadcrumb {
        category: Some(action.category().to_owned()),
        message: Some(action.message()),
        level: sentry::Level::Info,
        ..Default::default()
    });
}
