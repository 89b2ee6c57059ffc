//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page (featured products, order notice)
//! GET  /health                 - Health check (registered in main)
//!
//! # Catalog
//! GET  /shop                   - Product listing (?category=, ?q=)
//! GET  /product/{id}           - Product detail
//!
//! # Cart & Wishlist
//! GET  /cart                   - Cart page
//! POST /cart/add               - Add to cart
//! POST /cart/update            - Set line quantity (<= 0 removes)
//! POST /cart/remove            - Remove line
//! GET  /wishlist               - Wishlist page
//! POST /wishlist/toggle        - Add or remove a product
//!
//! # Checkout (guarded)
//! GET  /checkout               - Order summary or empty-cart fallback
//! POST /checkout               - Place order
//!
//! # Auth
//! GET  /login                  - Login page (?from=)
//! POST /login                  - Login action
//! GET  /register               - Register page
//! POST /register               - Register action
//! POST /logout                 - Logout action
//!
//! # Account (guarded)
//! GET  /account                - Profile and order history
//!
//! # Content
//! GET  /about, /gallery, /blog, /testimonials, /policy, /faq, /loyalty
//! GET  /contact, POST /contact
//! ```

pub mod account;
pub mod auth;
pub mod cart;
pub mod checkout;
pub mod contact;
pub mod home;
pub mod pages;
pub mod products;
pub mod wishlist;

use axum::{
    Router,
    routing::{get, post},
};

use crate::guard;
use crate::state::AppState;
use crate::stores::Storefront;

/// Header data shared by every page.
#[derive(Debug, Clone, Default)]
pub struct Layout {
    pub cart_count: u64,
    pub wishlist_count: usize,
    /// First name of the signed-in shopper.
    pub first_name: Option<String>,
}

impl Layout {
    /// Snapshot the header values from the current stores.
    #[must_use]
    pub fn from_storefront(storefront: &Storefront) -> Self {
        Self {
            cart_count: storefront.cart().count(),
            wishlist_count: storefront.wishlist().count(),
            first_name: storefront
                .session()
                .current_user()
                .map(|u| u.first_name().to_owned()),
        }
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.first_name.is_some()
    }
}

/// Redirect target from a `redirect` form field, or `fallback` when it is
/// missing or off-site.
pub(crate) fn back_to(redirect: Option<&str>, fallback: &str) -> String {
    guard::same_site_path(redirect).unwrap_or(fallback).to_owned()
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
}

/// Create the content page routes router.
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/about", get(pages::about))
        .route("/gallery", get(pages::gallery))
        .route("/blog", get(pages::blog))
        .route("/testimonials", get(pages::testimonials))
        .route("/policy", get(pages::policy))
        .route("/faq", get(pages::faq))
        .route("/loyalty", get(pages::loyalty))
        .route("/contact", get(contact::show).post(contact::submit))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Catalog
        .route("/shop", get(products::index))
        .route("/product/{id}", get(products::show))
        // Cart routes
        .nest("/cart", cart_routes())
        // Wishlist
        .route("/wishlist", get(wishlist::show))
        .route("/wishlist/toggle", post(wishlist::toggle))
        // Checkout (guarded by middleware)
        .route("/checkout", get(checkout::show).post(checkout::place_order))
        // Auth
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/register", get(auth::register_page).post(auth::register))
        .route("/logout", post(auth::logout))
        // Account (guarded by middleware)
        .route("/account", get(account::index))
        // Content pages
        .merge(page_routes())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use optimistics_core::{Price, ProductId};

    use super::*;
    use crate::models::CartProduct;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_layout_reflects_stores() {
        let mut storefront = Storefront::restore(Arc::new(MemoryStorage::new()));
        let layout = Layout::from_storefront(&storefront);
        assert_eq!(layout.cart_count, 0);
        assert!(!layout.is_authenticated());

        storefront.cart_mut().add_item(
            CartProduct {
                id: ProductId::new("castor-oil"),
                name: "Castor Oil".to_string(),
                price: Price::from_naira(5_000),
                image_url: String::new(),
            },
            2,
        );
        storefront.wishlist_mut().toggle(&ProductId::new("coconut-oil"));

        let layout = Layout::from_storefront(&storefront);
        assert_eq!(layout.cart_count, 2);
        assert_eq!(layout.wishlist_count, 1);
    }

    #[test]
    fn test_back_to() {
        assert_eq!(back_to(Some("/shop?category=oils"), "/cart"), "/shop?category=oils");
        assert_eq!(back_to(Some("https://evil.example"), "/cart"), "/cart");
        assert_eq!(back_to(Some("/\t/evil.example"), "/cart"), "/cart");
        assert_eq!(back_to(None, "/cart"), "/cart");
    }
}
