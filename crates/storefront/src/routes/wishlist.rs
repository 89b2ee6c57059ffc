//! Wishlist route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::instrument;

use optimistics_core::ProductId;

use crate::catalog::Product;
use crate::error::AppError;
use crate::filters;
use crate::routes::{Layout, back_to};
use crate::state::AppState;

/// Toggle form data.
#[derive(Debug, Deserialize)]
pub struct ToggleWishlistForm {
    pub product_id: String,
    /// Page to return to (defaults to the wishlist).
    pub redirect: Option<String>,
}

/// Wishlist page template.
#[derive(Template, WebTemplate)]
#[template(path = "wishlist/show.html")]
pub struct WishlistTemplate {
    pub layout: Layout,
    pub products: Vec<Product>,
}

/// Display the wishlisted products that are still in the catalog.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> impl IntoResponse {
    let storefront = state.storefront().lock().await;
    let products = storefront
        .wishlist()
        .ids()
        .iter()
        .filter_map(|id| state.catalog().find(id))
        .cloned()
        .collect();

    WishlistTemplate {
        layout: Layout::from_storefront(&storefront),
        products,
    }
}

/// Add or remove a product from the wishlist.
///
/// # Errors
///
/// Returns `AppError::ProductNotFound` when adding a product that is not in
/// the catalog. Ids already wishlisted can always be removed.
#[instrument(skip(state))]
pub async fn toggle(
    State(state): State<AppState>,
    Form(form): Form<ToggleWishlistForm>,
) -> Result<Response, AppError> {
    let id = ProductId::new(form.product_id);
    let mut storefront = state.storefront().lock().await;

    if state.catalog().find(&id).is_none() && !storefront.wishlist().is_wishlisted(&id) {
        return Err(AppError::ProductNotFound(id));
    }
    storefront.wishlist_mut().toggle(&id);

    Ok(Redirect::to(&back_to(form.redirect.as_deref(), "/wishlist")).into_response())
}
