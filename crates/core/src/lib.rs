//! Optimistics Core - Shared types library.
//!
//! This crate provides common types used across all Optimistics components:
//! - `storefront` - The shopper-facing storefront and its state stores
//! - `cli` - Command-line tools for inspecting persisted snapshots
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access,
//! no HTTP. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
