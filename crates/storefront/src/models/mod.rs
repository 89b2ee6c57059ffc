//! Domain models for the storefront.
//!
//! These are the values the stores own and snapshot. Their serde shape is
//! the persisted format, so renaming a field silently invalidates existing
//! snapshots (they are then treated as absent on restore).

pub mod cart;
pub mod order;
pub mod user;

pub use cart::{CartItem, CartProduct, CartSummary};
pub use order::PastOrder;
pub use user::User;
