//! Local key-value persistence for store snapshots.
//!
//! Each store owns one slot and writes a JSON snapshot of its collection on
//! every change. The port is synchronous: a write completes before the
//! mutation that caused it returns.
//!
//! # Slots
//!
//! ```text
//! optimistics_user      → User JSON (absent when signed out)
//! optimistics_cart      → [CartItem] JSON
//! optimistics_wishlist  → [ProductId] JSON
//! ```
//!
//! Snapshots carry no version. A snapshot that no longer parses is treated
//! as absent and logged, never surfaced to the shopper.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Slot keys used by the stores.
pub mod keys {
    /// Signed-in shopper.
    pub const SESSION: &str = "optimistics_user";

    /// Cart line items.
    pub const CART: &str = "optimistics_cart";

    /// Wishlisted product ids.
    pub const WISHLIST: &str = "optimistics_wishlist";

    /// Every slot, in display order.
    pub const ALL: [&str; 3] = [SESSION, CART, WISHLIST];
}

/// Errors raised by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing medium failed.
    #[error("storage I/O error on slot {key}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// The slot key cannot be mapped onto the backing medium.
    #[error("invalid slot key: {0}")]
    InvalidKey(String),
}

/// A synchronous string key-value store (the storefront's "local storage").
pub trait KeyValueStore: Send + Sync {
    /// Read a slot. `Ok(None)` when the slot is absent.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backing medium cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a slot, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backing medium cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a slot. Removing an absent slot succeeds.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backing medium cannot be written.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Restore a snapshot, treating every failure as "no snapshot".
pub fn load_snapshot<T: DeserializeOwned>(storage: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            tracing::warn!(slot = key, error = %e, "Failed to read snapshot, starting empty");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(slot = key, error = %e, "Discarding malformed snapshot");
            None
        }
    }
}

/// Persist a snapshot. Failures are logged; in-memory state stays authoritative.
pub fn save_snapshot<T: Serialize + ?Sized>(storage: &dyn KeyValueStore, key: &str, value: &T) {
    let json = match serde_json::to_string(value) {
        Ok(json) => json,
        Err(e) => {
            tracing::warn!(slot = key, error = %e, "Failed to serialize snapshot");
            return;
        }
    };

    if let Err(e) = storage.set(key, &json) {
        tracing::warn!(slot = key, error = %e, "Failed to persist snapshot");
    }
}

/// Remove a snapshot slot. Failures are logged.
pub fn clear_snapshot(storage: &dyn KeyValueStore, key: &str) {
    if let Err(e) = storage.remove(key) {
        tracing::warn!(slot = key, error = %e, "Failed to clear snapshot");
    }
}
