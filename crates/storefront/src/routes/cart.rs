//! Cart route handlers.
//!
//! Forms post back and redirect, so a refresh never repeats a mutation.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::instrument;

use optimistics_core::{Price, ProductId};

use crate::error::{AppError, ShopperAction, record_action};
use crate::filters;
use crate::models::CartItem;
use crate::routes::{Layout, back_to};
use crate::state::AppState;

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: String,
    pub quantity: Option<i64>,
    /// Page to return to (defaults to the cart).
    pub redirect: Option<String>,
}

/// Update cart form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub product_id: String,
    pub quantity: i64,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub product_id: String,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub layout: Layout,
    pub items: Vec<CartItem>,
    pub total: Price,
}

/// Display cart page.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> impl IntoResponse {
    let storefront = state.storefront().lock().await;

    CartShowTemplate {
        layout: Layout::from_storefront(&storefront),
        items: storefront.cart().items().to_vec(),
        total: storefront.cart().total(),
    }
}

/// Add a catalog product to the cart.
///
/// # Errors
///
/// Returns `AppError::ProductNotFound` when the product is not in the catalog.
#[instrument(skip(state))]
pub async fn add(
    State(state): State<AppState>,
    Form(form): Form<AddToCartForm>,
) -> Result<Response, AppError> {
    let id = ProductId::new(form.product_id);
    let product = state
        .catalog()
        .find(&id)
        .ok_or_else(|| AppError::ProductNotFound(id.clone()))?;

    let quantity = form.quantity.unwrap_or(1);
    state
        .storefront()
        .lock()
        .await
        .cart_mut()
        .add_item(product.to_cart_product(), quantity);
    record_action(&ShopperAction::AddedToCart {
        product_id: id,
        quantity,
    });

    Ok(Redirect::to(&back_to(form.redirect.as_deref(), "/cart")).into_response())
}

/// Set the quantity of a cart line. Zero or less removes it.
#[instrument(skip(state))]
pub async fn update(State(state): State<AppState>, Form(form): Form<UpdateCartForm>) -> Redirect {
    state
        .storefront()
        .lock()
        .await
        .cart_mut()
        .update_quantity(&ProductId::new(form.product_id), form.quantity);

    Redirect::to("/cart")
}

/// Remove a line from the cart.
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Form(form): Form<RemoveFromCartForm>,
) -> Redirect {
    state
        .storefront()
        .lock()
        .await
        .cart_mut()
        .remove_item(&ProductId::new(form.product_id));

    Redirect::to("/cart")
}
