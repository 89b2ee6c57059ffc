//! Product route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::instrument;

use optimistics_core::ProductId;

use crate::catalog::{Category, Product};
use crate::error::AppError;
use crate::filters;
use crate::routes::Layout;
use crate::state::AppState;

/// Shop filter query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct ShopQuery {
    pub category: Option<String>,
    pub q: Option<String>,
}

/// A product with its wishlist flag for listing cards.
#[derive(Clone)]
pub struct ProductCard {
    pub product: Product,
    pub wishlisted: bool,
}

/// A category filter link.
#[derive(Clone)]
pub struct CategoryLink {
    pub slug: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// Shop listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub layout: Layout,
    pub products: Vec<ProductCard>,
    pub categories: Vec<CategoryLink>,
    pub all_selected: bool,
    pub query: String,
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub layout: Layout,
    pub product: Product,
    pub wishlisted: bool,
    pub in_cart: u32,
}

/// Display the shop listing.
///
/// An unknown category is ignored rather than rejected.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>, Query(query): Query<ShopQuery>) -> impl IntoResponse {
    let selected_category = query
        .category
        .as_deref()
        .filter(|c| !c.is_empty())
        .and_then(|c| c.parse::<Category>().ok());
    let search = query.q.unwrap_or_default();

    let storefront = state.storefront().lock().await;
    let products = state
        .catalog()
        .filter(selected_category, Some(&search))
        .into_iter()
        .map(|p| ProductCard {
            wishlisted: storefront.wishlist().is_wishlisted(&p.id),
            product: p.clone(),
        })
        .collect();

    ProductsIndexTemplate {
        layout: Layout::from_storefront(&storefront),
        products,
        categories: Category::ALL
            .into_iter()
            .map(|c| CategoryLink {
                slug: c.slug(),
                label: c.label(),
                selected: selected_category == Some(c),
            })
            .collect(),
        all_selected: selected_category.is_none(),
        query: search,
    }
}

/// Display a product detail page.
///
/// # Errors
///
/// Returns `AppError::ProductNotFound` for an unknown product id.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = ProductId::new(id);
    let product = state
        .catalog()
        .find(&id)
        .cloned()
        .ok_or_else(|| AppError::ProductNotFound(id.clone()))?;

    let storefront = state.storefront().lock().await;
    Ok(ProductShowTemplate {
        layout: Layout::from_storefront(&storefront),
        wishlisted: storefront.wishlist().is_wishlisted(&id),
        in_cart: storefront.cart().get(&id).map_or(0, |item| item.quantity),
        product,
    })
}
