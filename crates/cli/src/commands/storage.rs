//! Snapshot slot inspection and reset.
//!
//! # Usage
//!
//! ```bash
//! # Print every slot
//! opt-cli storage show
//!
//! # Sign the shopper out and empty the cart
//! opt-cli storage clear --slot session
//! opt-cli storage clear --slot cart
//!
//! # Reset everything
//! opt-cli storage clear
//! ```

use std::io::Write;

use clap::ValueEnum;
use optimistics_storefront::storage::{KeyValueStore, StorageError, keys};
use thiserror::Error;

/// Errors from storage commands.
#[derive(Debug, Error)]
pub enum StorageCommandError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Which slot a command applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Slot {
    Session,
    Cart,
    Wishlist,
    All,
}

impl Slot {
    /// Storage keys covered by this selection.
    #[must_use]
    pub fn keys(self) -> &'static [&'static str] {
        match self {
            Self::Session => &[keys::SESSION],
            Self::Cart => &[keys::CART],
            Self::Wishlist => &[keys::WISHLIST],
            Self::All => &keys::ALL,
        }
    }
}

/// Print each slot's JSON, pretty-printed when it parses.
///
/// # Errors
///
/// Returns an error if a slot cannot be read or output cannot be written.
pub fn show(storage: &dyn KeyValueStore, out: &mut impl Write) -> Result<(), StorageCommandError> {
    for key in keys::ALL {
        match storage.get(key)? {
            Some(raw) => {
                let pretty = serde_json::from_str::<serde_json::Value>(&raw)
                    .ok()
                    .and_then(|v| serde_json::to_string_pretty(&v).ok());
                match pretty {
                    Some(json) => writeln!(out, "{key}:\n{json}")?,
                    None => writeln!(out, "{key}: (unreadable) {raw}")?,
                }
            }
            None => writeln!(out, "{key}: absent")?,
        }
    }
    Ok(())
}

/// Remove the selected slots. Absent slots are skipped silently.
///
/// # Errors
///
/// Returns an error if a slot cannot be removed.
pub fn clear(storage: &dyn KeyValueStore, slot: Slot) -> Result<(), StorageCommandError> {
    for key in slot.keys() {
        storage.remove(key)?;
        tracing::info!(slot = *key, "Slot cleared");
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use optimistics_storefront::storage::MemoryStorage;

    use super::*;

    #[test]
    fn test_show_reports_absent_and_present_slots() {
        let storage = MemoryStorage::new();
        storage.set(keys::WISHLIST, r#"["castor-oil"]"#).unwrap();

        let mut out = Vec::new();
        show(&storage, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("optimistics_user: absent"));
        assert!(text.contains("optimistics_cart: absent"));
        assert!(text.contains("\"castor-oil\""));
    }

    #[test]
    fn test_show_flags_unreadable_json() {
        let storage = MemoryStorage::new();
        storage.set(keys::CART, "{not json").unwrap();

        let mut out = Vec::new();
        show(&storage, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("optimistics_cart: (unreadable) {not json"));
    }

    #[test]
    fn test_clear_single_slot() {
        let storage = MemoryStorage::new();
        storage.set(keys::SESSION, "{}").unwrap();
        storage.set(keys::CART, "[]").unwrap();

        clear(&storage, Slot::Session).unwrap();

        assert!(storage.get(keys::SESSION).unwrap().is_none());
        assert!(storage.get(keys::CART).unwrap().is_some());
    }

    #[test]
    fn test_clear_all() {
        let storage = MemoryStorage::new();
        for key in keys::ALL {
            storage.set(key, "[]").unwrap();
        }

        clear(&storage, Slot::All).unwrap();

        assert!(storage.is_empty());
    }
}
