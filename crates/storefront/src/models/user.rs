//! Shopper identity.

use serde::{Deserialize, Serialize};

use optimistics_core::{Email, UserId};

/// A registered shopper.
///
/// The email is the unique key in the registry; the id is opaque.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Display name as entered at registration.
    pub name: String,
    /// Email address, unique across the registry.
    pub email: Email,
}

impl User {
    /// The first word of the display name, for greetings.
    #[must_use]
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}
