//! Session store error types.

use thiserror::Error;

use crate::db::RepositoryError;

/// Reasons a login or registration attempt is refused.
///
/// None of these change any state; the caller shows them inline.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] optimistics_core::EmailError),

    /// No account matched the credentials.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// An account with this email already exists.
    #[error("user already exists")]
    UserAlreadyExists,
}

impl From<RepositoryError> for AuthError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Conflict(_) => Self::UserAlreadyExists,
        }
    }
}

impl AuthError {
    /// Message shown next to the form.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidEmail(_) => "Please enter a valid email address.",
            Self::InvalidCredentials => "Invalid email or password.",
            Self::UserAlreadyExists => "An account with this email already exists.",
        }
    }
}
