//! Shopper registry.
//!
//! Registration appends here; login resolves accounts by exact email match.
//! Entries are never removed: logging out clears the session, not the account.

use optimistics_core::{Email, UserId};

use super::RepositoryError;
use crate::models::User;

/// Email of the account every registry starts with.
pub const DEMO_EMAIL: &str = "user@test.com";

/// The demo account.
#[must_use]
pub fn demo_user() -> Option<User> {
    Email::parse(DEMO_EMAIL).ok().map(|email| User {
        id: UserId::new("1"),
        name: "Test User".to_owned(),
        email,
    })
}

/// In-memory repository of registered shoppers.
#[derive(Debug, Clone, Default)]
pub struct UserRepository {
    users: Vec<User>,
}

impl UserRepository {
    /// Create an empty repository.
    #[must_use]
    pub const fn new() -> Self {
        Self { users: Vec::new() }
    }

    /// Create a repository holding the demo account.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            users: demo_user().into_iter().collect(),
        }
    }

    /// Find a user by exact email match.
    #[must_use]
    pub fn find_by_email(&self, email: &Email) -> Option<&User> {
        self.users.iter().find(|u| &u.email == email)
    }

    /// Whether an account with this email exists.
    #[must_use]
    pub fn contains_email(&self, email: &Email) -> bool {
        self.find_by_email(email).is_some()
    }

    /// Add a user.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the email is already registered.
    pub fn add(&mut self, user: User) -> Result<(), RepositoryError> {
        if self.contains_email(&user.email) {
            return Err(RepositoryError::Conflict(format!(
                "email already registered: {}",
                user.email
            )));
        }
        self.users.push(user);
        Ok(())
    }

    /// Number of registered users.
    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn user(id: &str, email: &str) -> User {
        User {
            id: UserId::new(id),
            name: "Someone".to_string(),
            email: Email::parse(email).unwrap(),
        }
    }

    #[test]
    fn test_seeded_contains_demo_user() {
        let repo = UserRepository::seeded();
        assert_eq!(repo.len(), 1);
        let demo = repo
            .find_by_email(&Email::parse(DEMO_EMAIL).unwrap())
            .unwrap();
        assert_eq!(demo.name, "Test User");
        assert_eq!(demo.id.as_str(), "1");
    }

    #[test]
    fn test_add_and_find() {
        let mut repo = UserRepository::new();
        repo.add(user("a", "amaka@test.com")).unwrap();

        let found = repo
            .find_by_email(&Email::parse("amaka@test.com").unwrap())
            .unwrap();
        assert_eq!(found.id.as_str(), "a");
        assert!(
            repo.find_by_email(&Email::parse("nobody@test.com").unwrap())
                .is_none()
        );
    }

    #[test]
    fn test_add_duplicate_email_conflicts() {
        let mut repo = UserRepository::new();
        repo.add(user("a", "amaka@test.com")).unwrap();

        let err = repo.add(user("b", "amaka@test.com")).unwrap_err();
        assert!(matches!(err, RepositoryError::Conflict(_)));
        assert_eq!(repo.len(), 1);
    }
}
