//! Application state containers.
//!
//! Each store exclusively owns one piece of shopper state, exposes mutation
//! operations plus derived read-only values, and persists a snapshot to its
//! own storage slot on every change.
//!
//! ## Stores
//!
//! - **session** - The signed-in shopper and the shopper registry
//! - **cart** - Line items, quantities, count and total
//! - **wishlist** - Saved product ids
//!
//! ## Usage in Handlers
//!
//! The stores are owned by one [`Storefront`] held in `AppState` behind an
//! async mutex. A handler locks it once, so a mutation and its notification
//! complete before any other request observes the stores:
//!
//! ```ignore
//! async fn handler(State(state): State<AppState>) -> impl IntoResponse {
//!     let mut storefront = state.storefront().lock().await;
//!     storefront.cart_mut().clear();
//! }
//! ```

mod cart;
mod error;
mod session;
mod wishlist;

pub use cart::CartStore;
pub use error::AuthError;
pub use session::{DEMO_PASSWORD, SessionStore};
pub use wishlist::WishlistStore;

use std::sync::Arc;

use optimistics_core::{Email, OrderId, Price};

use crate::storage::KeyValueStore;

/// Root composition scope owning every store.
pub struct Storefront {
    session: SessionStore,
    cart: CartStore,
    wishlist: WishlistStore,
}

/// A placed (simulated) order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderConfirmation {
    pub order_id: OrderId,
    pub item_count: u64,
    pub total: Price,
    /// Where the confirmation would be sent.
    pub email: Option<Email>,
}

/// Result of a checkout attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// The order was placed and the cart cleared.
    Placed(OrderConfirmation),
    /// Nothing to order.
    EmptyCart,
}

impl Storefront {
    /// Restore every store from `storage`.
    #[must_use]
    pub fn restore(storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            session: SessionStore::restore(Arc::clone(&storage)),
            cart: CartStore::restore(Arc::clone(&storage)),
            wishlist: WishlistStore::restore(storage),
        }
    }

    #[must_use]
    pub const fn session(&self) -> &SessionStore {
        &self.session
    }

    pub const fn session_mut(&mut self) -> &mut SessionStore {
        &mut self.session
    }

    #[must_use]
    pub const fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub const fn cart_mut(&mut self) -> &mut CartStore {
        &mut self.cart
    }

    #[must_use]
    pub const fn wishlist(&self) -> &WishlistStore {
        &self.wishlist
    }

    pub const fn wishlist_mut(&mut self) -> &mut WishlistStore {
        &mut self.wishlist
    }

    /// Place a simulated order for the current cart.
    ///
    /// Clears the cart on success. An empty cart is reported, not an error.
    /// The wishlist is never touched.
    pub fn checkout(&mut self, contact_email: Option<Email>) -> CheckoutOutcome {
        if self.cart.is_empty() {
            return CheckoutOutcome::EmptyCart;
        }

        let email = self
            .session
            .current_user()
            .map(|u| u.email.clone())
            .or(contact_email);

        let suffix: String = uuid::Uuid::new_v4()
            .simple()
            .to_string()
            .chars()
            .take(8)
            .collect();
        let order_id = OrderId::new(format!("ORD-{}", suffix.to_uppercase()));
        let confirmation = OrderConfirmation {
            order_id,
            item_count: self.cart.count(),
            total: self.cart.total(),
            email,
        };

        self.cart.clear();
        tracing::info!(
            order_id = %confirmation.order_id,
            total = %confirmation.total,
            items = confirmation.item_count,
            "Order placed"
        );
        CheckoutOutcome::Placed(confirmation)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use secrecy::SecretString;

    use optimistics_core::ProductId;

    use super::*;
    use crate::models::CartProduct;
    use crate::storage::{MemoryStorage, keys};

    fn product(id: &str, naira: u64) -> CartProduct {
        CartProduct {
            id: ProductId::new(id),
            name: id.to_string(),
            price: Price::from_naira(naira),
            image_url: String::new(),
        }
    }

    #[test]
    fn test_checkout_empty_cart() {
        let mut storefront = Storefront::restore(Arc::new(MemoryStorage::new()));
        assert_eq!(storefront.checkout(None), CheckoutOutcome::EmptyCart);
    }

    #[test]
    fn test_checkout_clears_cart_but_not_wishlist() {
        let mut storefront = Storefront::restore(Arc::new(MemoryStorage::new()));
        storefront.cart_mut().add_item(product("a", 1_000), 2);
        storefront.wishlist_mut().toggle(&ProductId::new("a"));
        storefront
            .session_mut()
            .login("user@test.com", &SecretString::from("password".to_owned()))
            .unwrap();

        let CheckoutOutcome::Placed(confirmation) = storefront.checkout(None) else {
            panic!("expected an order");
        };

        assert_eq!(confirmation.item_count, 2);
        assert_eq!(confirmation.total, Price::from_naira(2_000));
        assert_eq!(confirmation.email.unwrap().as_str(), "user@test.com");
        assert!(confirmation.order_id.as_str().starts_with("ORD-"));
        assert!(storefront.cart().is_empty());
        assert_eq!(storefront.wishlist().count(), 1);
    }

    #[test]
    fn test_checkout_uses_contact_email_for_guests() {
        let mut storefront = Storefront::restore(Arc::new(MemoryStorage::new()));
        storefront.cart_mut().add_item(product("a", 1_000), 1);

        let email = Email::parse("guest@test.com").unwrap();
        let CheckoutOutcome::Placed(confirmation) = storefront.checkout(Some(email.clone()))
        else {
            panic!("expected an order");
        };
        assert_eq!(confirmation.email, Some(email));
    }

    #[test]
    fn test_stores_use_independent_slots() {
        let storage = Arc::new(MemoryStorage::new());
        let mut storefront = Storefront::restore(storage.clone());
        storefront.cart_mut().add_item(product("a", 1_000), 1);
        storefront.wishlist_mut().toggle(&ProductId::new("b"));

        assert!(storage.get(keys::CART).unwrap().is_some());
        assert!(storage.get(keys::WISHLIST).unwrap().is_some());
        assert!(storage.get(keys::SESSION).unwrap().is_none());

        storefront.cart_mut().clear();
        assert!(storefront.wishlist().is_wishlisted(&ProductId::new("b")));
    }
}
