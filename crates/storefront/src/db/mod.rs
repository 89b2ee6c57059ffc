//! Repositories for storefront data.
//!
//! There is no database: the shopper registry lives in memory for the life
//! of the process. Repositories keep the same add/find surface a real
//! backend would expose, so swapping one in only touches this module.

pub mod users;

pub use users::UserRepository;

use thiserror::Error;

/// Errors raised by repository operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepositoryError {
    /// A uniqueness constraint would be violated.
    #[error("conflict: {0}")]
    Conflict(String),
}
