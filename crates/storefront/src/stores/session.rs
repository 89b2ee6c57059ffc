//! Session store: the signed-in shopper.
//!
//! Owns the shopper registry and the optional current user. Authentication
//! is a mock: the demo pair always works, and any registered email logs in
//! without its password being checked.

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use tokio::sync::watch;

use optimistics_core::{Email, UserId};

use super::AuthError;
use crate::db::UserRepository;
use crate::db::users::{DEMO_EMAIL, demo_user};
use crate::models::User;
use crate::storage::{self, KeyValueStore, keys};

/// Password of the demo account.
pub const DEMO_PASSWORD: &str = "password";

/// Exclusive owner of "who is signed in".
pub struct SessionStore {
    storage: Arc<dyn KeyValueStore>,
    users: UserRepository,
    user: Option<User>,
    changes: watch::Sender<Option<User>>,
}

impl SessionStore {
    /// Restore the session from storage with a freshly seeded registry.
    #[must_use]
    pub fn restore(storage: Arc<dyn KeyValueStore>) -> Self {
        Self::with_registry(storage, UserRepository::seeded())
    }

    /// Restore the session from storage using the given registry.
    ///
    /// A missing or malformed snapshot yields a signed-out session.
    #[must_use]
    pub fn with_registry(storage: Arc<dyn KeyValueStore>, users: UserRepository) -> Self {
        let user: Option<User> = storage::load_snapshot(storage.as_ref(), keys::SESSION);
        let (changes, _) = watch::channel(user.clone());
        Self {
            storage,
            users,
            user,
            changes,
        }
    }

    /// The signed-in shopper, if any.
    #[must_use]
    pub const fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Whether a shopper is signed in.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// The shopper registry.
    #[must_use]
    pub const fn users(&self) -> &UserRepository {
        &self.users
    }

    /// Receive the current user after every change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<User>> {
        self.changes.subscribe()
    }

    /// Sign in.
    ///
    /// Accepts the demo pair, or any email already in the registry.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` for malformed input and
    /// `AuthError::InvalidCredentials` when no account matches. The session
    /// is left untouched on error.
    pub fn login(&mut self, email: &str, password: &SecretString) -> Result<User, AuthError> {
        let email = Email::parse(email)?;

        let is_demo_pair =
            email.as_str() == DEMO_EMAIL && password.expose_secret() == DEMO_PASSWORD;

        // Registered accounts are accepted without a password check.
        let user = match self.users.find_by_email(&email) {
            Some(user) => user.clone(),
            None if is_demo_pair => demo_user().ok_or(AuthError::InvalidCredentials)?,
            None => return Err(AuthError::InvalidCredentials),
        };

        tracing::info!(user_id = %user.id, "Shopper logged in");
        self.set_user(Some(user.clone()));
        Ok(user)
    }

    /// Create an account and sign it in.
    ///
    /// The password is accepted but not stored.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` for malformed input and
    /// `AuthError::UserAlreadyExists` when the email is taken. Neither the
    /// registry nor the session changes on error.
    pub fn register(
        &mut self,
        name: &str,
        email: &str,
        _password: &SecretString,
    ) -> Result<User, AuthError> {
        let email = Email::parse(email)?;
        if self.users.contains_email(&email) {
            tracing::info!(email = %email, "Registration refused, email taken");
            return Err(AuthError::UserAlreadyExists);
        }

        let user = User {
            id: UserId::generate(),
            name: name.trim().to_owned(),
            email,
        };
        self.users.add(user.clone())?;

        tracing::info!(user_id = %user.id, "Shopper registered");
        self.set_user(Some(user.clone()));
        Ok(user)
    }

    /// Sign out. Idempotent.
    pub fn logout(&mut self) {
        if let Some(user) = &self.user {
            tracing::info!(user_id = %user.id, "Shopper logged out");
            self.set_user(None);
        }
    }

    fn set_user(&mut self, user: Option<User>) {
        match &user {
            Some(u) => storage::save_snapshot(self.storage.as_ref(), keys::SESSION, u),
            None => storage::clear_snapshot(self.storage.as_ref(), keys::SESSION),
        }
        self.user = user;
        self.changes.send_replace(self.user.clone());
    }
}
