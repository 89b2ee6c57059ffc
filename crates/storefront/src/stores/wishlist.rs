//! Wishlist store: a set of saved product ids.
//!
//! Only explicit toggles change it; checkout and cart actions never do.

use std::sync::Arc;

use tokio::sync::watch;

use optimistics_core::ProductId;

use crate::storage::{self, KeyValueStore, keys};

/// Exclusive owner of the shopper's wishlist.
pub struct WishlistStore {
    storage: Arc<dyn KeyValueStore>,
    ids: Vec<ProductId>,
    changes: watch::Sender<usize>,
}

impl WishlistStore {
    /// Restore the wishlist from storage, dropping repeated ids.
    #[must_use]
    pub fn restore(storage: Arc<dyn KeyValueStore>) -> Self {
        let snapshot: Vec<ProductId> =
            storage::load_snapshot(storage.as_ref(), keys::WISHLIST).unwrap_or_default();

        let mut ids = Vec::with_capacity(snapshot.len());
        for id in snapshot {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }

        let (changes, _) = watch::channel(ids.len());
        Self {
            storage,
            ids,
            changes,
        }
    }

    /// Add `id` if absent, remove it if present.
    ///
    /// Returns whether the product is wishlisted afterwards.
    pub fn toggle(&mut self, id: &ProductId) -> bool {
        let now_wishlisted = if let Some(pos) = self.ids.iter().position(|i| i == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id.clone());
            true
        };

        storage::save_snapshot(self.storage.as_ref(), keys::WISHLIST, &self.ids);
        tracing::debug!(product_id = %id, now_wishlisted, "Wishlist toggled");
        self.changes.send_replace(self.ids.len());
        now_wishlisted
    }

    /// Whether `id` is wishlisted.
    #[must_use]
    pub fn is_wishlisted(&self, id: &ProductId) -> bool {
        self.ids.contains(id)
    }

    /// Number of wishlisted products.
    #[must_use]
    pub fn count(&self) -> usize {
        self.ids.len()
    }

    /// Wishlisted ids in the order they were saved.
    #[must_use]
    pub fn ids(&self) -> &[ProductId] {
        &self.ids
    }

    /// Receive the count after every change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<usize> {
        self.changes.subscribe()
    }
}
