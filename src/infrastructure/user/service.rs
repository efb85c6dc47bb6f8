//! User service binding the builder pipeline, the hasher, and a store

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::store::{Filter, Store};
use crate::domain::user::{validate_email, User, UserOption};
use crate::domain::DomainError;

use super::password::SecretHasher;

const EMAIL_FIELD: &str = "email";

/// User service for identity management and password validation.
///
/// Holds only a store handle and a hasher configuration, both read-only
/// after construction, so a single instance is safe to share across
/// concurrent callers. Every operation is a single attempt; failures
/// propagate to the caller unchanged.
#[derive(Debug)]
pub struct UserService<S: Store<User>> {
    store: Arc<S>,
    hasher: SecretHasher,
}

impl<S: Store<User>> UserService<S> {
    /// Create a service with the default hasher configuration.
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            hasher: SecretHasher::new(),
        }
    }

    /// Create a service with a custom hasher configuration.
    ///
    /// Passwords set through
    /// [`set_password_with`](super::set_password_with) must use the same
    /// configuration for verification to succeed.
    pub fn with_hasher(store: Arc<S>, hasher: SecretHasher) -> Self {
        Self { store, hasher }
    }

    /// Build a new user record without persisting it.
    ///
    /// Validates the email first, then assigns a fresh identifier and
    /// timestamps, then applies the options in order. The first failing
    /// option aborts the whole construction; nothing partial escapes
    /// because the record has not been stored yet.
    pub fn create_user(
        &self,
        email: &str,
        options: Vec<UserOption>,
    ) -> Result<User, DomainError> {
        validate_email(email)?;

        debug!(email = %email, "Creating user record");

        let mut user = User::new(email);
        for option in options {
            option(&mut user)?;
        }

        Ok(user)
    }

    /// Persist a record. Store failures, including uniqueness conflicts
    /// on email or id, surface unchanged.
    pub async fn store_user(&self, user: &User) -> Result<(), DomainError> {
        info!(email = %user.email(), id = %user.id(), "Storing user");
        self.store.save(user.clone()).await
    }

    /// Look up exactly one record by exact email match.
    pub async fn retrieve_user(&self, email: &str) -> Result<User, DomainError> {
        let filter = Filter::equals(EMAIL_FIELD, email);

        self.store
            .first(&filter)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("no user with email '{}'", email)))
    }

    /// Return every stored record; order is store-defined.
    pub async fn retrieve_users(&self) -> Result<Vec<User>, DomainError> {
        self.store.all(None).await
    }

    /// Persist changes to the record matched by its email.
    pub async fn update_user(&self, user: &User) -> Result<(), DomainError> {
        info!(email = %user.email(), "Updating user");
        let filter = Filter::equals(EMAIL_FIELD, user.email());
        self.store.update(&filter, user.clone()).await
    }

    /// Remove the record matched by its email.
    pub async fn delete_user(&self, user: &User) -> Result<(), DomainError> {
        info!(email = %user.email(), "Deleting user");
        let filter = Filter::equals(EMAIL_FIELD, user.email());
        self.store.delete(&filter).await
    }

    /// Verify a password against the record's stored hash and salt.
    ///
    /// Ban state and SSO flags are deliberately not consulted here;
    /// callers apply those policies around this check.
    pub fn validate_user_password(
        &self,
        user: &User,
        password: &str,
    ) -> Result<(), DomainError> {
        self.hasher.compare(
            user.encrypted_password(),
            password,
            user.encrypted_password_salt(),
        )
    }
}
