//! Cart store: line items and their quantities.
//!
//! No two lines share a product id. Every committed mutation rewrites the
//! cart snapshot and broadcasts a fresh [`CartSummary`].

use std::sync::Arc;

use tokio::sync::watch;

use optimistics_core::{Price, ProductId};

use crate::models::{CartItem, CartProduct, CartSummary};
use crate::storage::{self, KeyValueStore, keys};

/// Exclusive owner of the shopper's cart.
pub struct CartStore {
    storage: Arc<dyn KeyValueStore>,
    items: Vec<CartItem>,
    changes: watch::Sender<CartSummary>,
}

impl CartStore {
    /// Restore the cart from storage.
    ///
    /// A missing or malformed snapshot yields an empty cart. Lines in a
    /// hand-edited snapshot that repeat an id are merged and lines with a
    /// zero quantity are dropped.
    #[must_use]
    pub fn restore(storage: Arc<dyn KeyValueStore>) -> Self {
        let snapshot: Vec<CartItem> =
            storage::load_snapshot(storage.as_ref(), keys::CART).unwrap_or_default();

        let mut items: Vec<CartItem> = Vec::with_capacity(snapshot.len());
        for item in snapshot.into_iter().filter(|i| i.quantity > 0) {
            match items.iter_mut().find(|existing| existing.id() == item.id()) {
                Some(existing) => {
                    existing.quantity = existing.quantity.saturating_add(item.quantity);
                }
                None => items.push(item),
            }
        }

        let (changes, _) = watch::channel(CartSummary::default());
        let store = Self {
            storage,
            items,
            changes,
        };
        store.changes.send_replace(store.summary());
        store
    }

    /// Lines in the order they were first added.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// The line for `id`, if present.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| i.id() == id)
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of quantities across all lines.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Sum of price times quantity across all lines.
    #[must_use]
    pub fn total(&self) -> Price {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Count and total together.
    #[must_use]
    pub fn summary(&self) -> CartSummary {
        CartSummary {
            count: self.count(),
            total: self.total(),
        }
    }

    /// Receive the summary after every change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<CartSummary> {
        self.changes.subscribe()
    }

    /// Add `quantity` units of a product.
    ///
    /// Increments the existing line if the product is already in the cart.
    /// Non-positive quantities are ignored.
    pub fn add_item(&mut self, product: CartProduct, quantity: i64) {
        if quantity <= 0 {
            tracing::debug!(product_id = %product.id, quantity, "Ignoring non-positive add");
            return;
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);

        match self.items.iter_mut().find(|i| i.id() == &product.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(quantity),
            None => self.items.push(CartItem { product, quantity }),
        }
        self.commit();
    }

    /// Remove the line for `id`. No-op when absent.
    pub fn remove_item(&mut self, id: &ProductId) {
        let before = self.items.len();
        self.items.retain(|i| i.id() != id);
        if self.items.len() != before {
            self.commit();
        }
    }

    /// Set the quantity of the line for `id`; zero or less removes it.
    pub fn update_quantity(&mut self, id: &ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(id);
            return;
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);

        if let Some(line) = self.items.iter_mut().find(|i| i.id() == id) {
            line.quantity = quantity;
            self.commit();
        }
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.items.clear();
        self.commit();
    }

    fn commit(&self) {
        storage::save_snapshot(self.storage.as_ref(), keys::CART, &self.items);
        let summary = self.summary();
        tracing::debug!(count = summary.count, total = %summary.total, "Cart updated");
        self.changes.send_replace(summary);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn product(id: &str, naira: u64) -> CartProduct {
        CartProduct {
            id: ProductId::new(id),
            name: id.to_string(),
            price: Price::from_naira(naira),
            image_url: format!("/static/img/{id}.jpg"),
        }
    }

    fn fresh() -> (Arc<MemoryStorage>, CartStore) {
        let storage = Arc::new(MemoryStorage::new());
        let store = CartStore::restore(storage.clone());
        (storage, store)
    }

    #[test]
    fn test_repeated_add_merges_lines() {
        let (_, mut cart) = fresh();
        cart.add_item(product("x", 100), 2);
        cart.add_item(product("x", 100), 3);

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.get(&ProductId::new("x")).unwrap().quantity, 5);
        assert_eq!(cart.count(), 5);
    }

    #[test]
    fn test_count_matches_quantities_over_mixed_adds() {
        let (_, mut cart) = fresh();
        let adds = [("a", 1), ("b", 4), ("a", 2), ("c", 1), ("b", 1), ("a", 0)];
        for (id, qty) in adds {
            cart.add_item(product(id, 10), qty);
        }

        assert_eq!(cart.count(), 9);
        let mut ids: Vec<_> = cart.items().iter().map(|i| i.id().clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), cart.items().len());
    }

    #[test]
    fn test_non_positive_add_is_ignored() {
        let (storage, mut cart) = fresh();
        cart.add_item(product("x", 100), 0);
        cart.add_item(product("x", 100), -3);

        assert!(cart.is_empty());
        assert!(storage.get(keys::CART).unwrap().is_none());
    }

    #[test]
    fn test_total_is_price_times_quantity() {
        let (_, mut cart) = fresh();
        cart.add_item(product("a", 2_500), 2);
        cart.add_item(product("b", 1_000), 3);

        assert_eq!(cart.total(), Price::from_naira(8_000));
    }

    #[test]
    fn test_update_to_zero_removes_line() {
        let (_, mut cart) = fresh();
        cart.add_item(product("a", 2_500), 1);
        cart.add_item(product("b", 1_000), 1);

        cart.update_quantity(&ProductId::new("a"), 0);

        assert!(cart.get(&ProductId::new("a")).is_none());
        assert_eq!(cart.total(), Price::from_naira(1_000));
    }

    #[test]
    fn test_update_sets_quantity() {
        let (_, mut cart) = fresh();
        cart.add_item(product("a", 100), 1);
        cart.update_quantity(&ProductId::new("a"), 7);
        cart.update_quantity(&ProductId::new("missing"), 7);

        assert_eq!(cart.count(), 7);
        assert_eq!(cart.items().len(), 1);
    }

    #[test]
    fn test_remove_item() {
        let (_, mut cart) = fresh();
        cart.add_item(product("a", 100), 1);
        cart.remove_item(&ProductId::new("missing"));
        assert_eq!(cart.count(), 1);

        cart.remove_item(&ProductId::new("a"));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_clear() {
        let (_, mut cart) = fresh();
        cart.add_item(product("a", 100), 3);
        cart.add_item(product("b", 200), 1);
        cart.clear();

        assert_eq!(cart.count(), 0);
        assert_eq!(cart.total(), Price::ZERO);
    }

    #[test]
    fn test_snapshot_survives_restore() {
        let (storage, mut cart) = fresh();
        cart.add_item(product("a", 100), 2);
        cart.add_item(product("b", 300), 1);

        let restored = CartStore::restore(storage);
        assert_eq!(restored.items(), cart.items());
        assert_eq!(restored.total(), Price::from_naira(500));
    }

    #[test]
    fn test_restore_repairs_hand_edited_snapshot() {
        let storage = Arc::new(MemoryStorage::new());
        storage
            .set(
                keys::CART,
                r#"[
                    {"id":"a","name":"A","price":100,"imageUrl":"","quantity":1},
                    {"id":"a","name":"A","price":100,"imageUrl":"","quantity":2},
                    {"id":"b","name":"B","price":100,"imageUrl":"","quantity":0}
                ]"#,
            )
            .unwrap();

        let cart = CartStore::restore(storage);
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.count(), 3);
    }

    #[test]
    fn test_restore_from_garbage_is_empty() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set(keys::CART, "not json at all").unwrap();

        assert!(CartStore::restore(storage).is_empty());
    }

    #[test]
    fn test_subscribers_receive_summary() {
        let (_, mut cart) = fresh();
        let rx = cart.subscribe();

        cart.add_item(product("a", 1_000), 2);
        assert_eq!(
            *rx.borrow(),
            CartSummary {
                count: 2,
                total: Price::from_naira(2_000)
            }
        );
    }

    #[test]
    fn test_summary_agrees_with_count_and_total() {
        let (storage, mut cart) = fresh();
        cart.add_item(product("a", 1_500), 2);
        cart.add_item(product("b", 700), 3);

        let summary = cart.summary();
        assert_eq!(summary.count, cart.count());
        assert_eq!(summary.total, cart.total());

        let restored = CartStore::restore(storage);
        assert_eq!(*restored.subscribe().borrow(), summary);
    }
}
