//! Account route handlers.
//!
//! Guarded by the route guard middleware.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use tracing::instrument;

use crate::filters;
use crate::models::{PastOrder, User, order};
use crate::routes::Layout;
use crate::state::AppState;

/// Account overview page template.
#[derive(Template, WebTemplate)]
#[template(path = "account/index.html")]
pub struct AccountIndexTemplate {
    pub layout: Layout,
    pub user: User,
    pub orders: Vec<PastOrder>,
    /// Orders not yet delivered or cancelled.
    pub open_orders: usize,
}

/// Display the shopper's details and order history.
///
/// The guard has already run; a session cleared in between lands on login.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Response {
    let storefront = state.storefront().lock().await;
    let Some(user) = storefront.session().current_user().cloned() else {
        return Redirect::to("/login?from=%2Faccount").into_response();
    };

    let orders = order::sample_history();
    let open_orders = orders.iter().filter(|o| !o.status.is_final()).count();

    AccountIndexTemplate {
        layout: Layout::from_storefront(&storefront),
        user,
        orders,
        open_orders,
    }
    .into_response()
}
