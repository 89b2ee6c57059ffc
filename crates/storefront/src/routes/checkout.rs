//! Checkout route handlers.
//!
//! Both handlers sit behind the route guard, so a shopper is always signed
//! in here. An empty cart renders a fallback instead of the order form.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::instrument;

use optimistics_core::{Email, Price};

use crate::error::{ShopperAction, record_action};
use crate::filters;
use crate::models::CartItem;
use crate::routes::Layout;
use crate::state::AppState;
use crate::stores::CheckoutOutcome;

/// Checkout form data.
///
/// Shipping and payment fields are collected but not processed.
#[derive(Debug, Default, Deserialize)]
pub struct CheckoutForm {
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub phone: Option<String>,
}

/// Checkout page template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/show.html")]
pub struct CheckoutTemplate {
    pub layout: Layout,
    pub items: Vec<CartItem>,
    pub total: Price,
    pub email: String,
    pub name: String,
}

/// Empty cart fallback template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/empty.html")]
pub struct CheckoutEmptyTemplate {
    pub layout: Layout,
}

/// Display the order summary, or the empty-cart fallback.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Response {
    let storefront = state.storefront().lock().await;
    let layout = Layout::from_storefront(&storefront);

    if storefront.cart().is_empty() {
        return CheckoutEmptyTemplate { layout }.into_response();
    }

    let user = storefront.session().current_user();
    CheckoutTemplate {
        layout,
        items: storefront.cart().items().to_vec(),
        total: storefront.cart().total(),
        email: user.map(|u| u.email.to_string()).unwrap_or_default(),
        name: user.map(|u| u.name.clone()).unwrap_or_default(),
    }
    .into_response()
}

/// Place the order: clear the cart and return home with a notice.
#[instrument(skip(state, form))]
pub async fn place_order(
    State(state): State<AppState>,
    Form(form): Form<CheckoutForm>,
) -> Response {
    let contact_email = form.email.as_deref().and_then(|e| Email::parse(e).ok());

    let mut storefront = state.storefront().lock().await;
    match storefront.checkout(contact_email) {
        CheckoutOutcome::Placed(confirmation) => {
            let uri = format!(
                "/?order={}",
                urlencoding::encode(confirmation.order_id.as_str())
            );
            record_action(&ShopperAction::PlacedOrder {
                order_id: confirmation.order_id,
                item_count: confirmation.item_count,
            });
            Redirect::to(&uri).into_response()
        }
        CheckoutOutcome::EmptyCart => CheckoutEmptyTemplate {
            layout: Layout::from_storefront(&storefront),
        }
        .into_response(),
    }
}
