//! Application state shared across handlers.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::catalog::Catalog;
use crate::storage::KeyValueStore;
use crate::stores::Storefront;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. The stores sit behind a
/// single async mutex, so each handler sees and mutates them as one unit.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    storefront: Mutex<Storefront>,
    catalog: Catalog,
}

impl AppState {
    /// Create a new application state, restoring the stores from `storage`.
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                storefront: Mutex::new(Storefront::restore(storage)),
                catalog: Catalog::default(),
            }),
        }
    }

    /// The shopper's stores.
    #[must_use]
    pub fn storefront(&self) -> &Mutex<Storefront> {
        &self.inner.storefront
    }

    /// The product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }
}
