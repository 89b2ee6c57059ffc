//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::instrument;

use crate::catalog::Product;
use crate::content::{TESTIMONIALS, Testimonial};
use crate::filters;
use crate::routes::Layout;
use crate::state::AppState;

/// Query parameters for the home page.
#[derive(Debug, Deserialize)]
pub struct HomeQuery {
    /// Set after checkout to show a confirmation notice.
    pub order: Option<String>,
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct HomeTemplate {
    pub layout: Layout,
    pub featured: Vec<Product>,
    pub testimonials: &'static [Testimonial],
    pub placed_order: Option<String>,
}

/// Display the home page.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>, Query(query): Query<HomeQuery>) -> impl IntoResponse {
    let layout = Layout::from_storefront(&*state.storefront().lock().await);

    HomeTemplate {
        layout,
        featured: state.catalog().featured().cloned().collect(),
        testimonials: TESTIMONIALS,
        placed_order: query.order.filter(|o| o.starts_with("ORD-")),
    }
}
