//! User entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::store::Record;

/// An identity record.
///
/// Credential material (`encrypted_password`, `encrypted_password_salt`,
/// `password_recovery_token`) is never part of the serialized form; only
/// the persisted copy carries it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier, assigned once at creation
    id: Uuid,
    /// Tenant/consumer tag this identity is scoped to
    #[serde(rename = "aud")]
    audience: String,
    /// Free-form role, not enforced here
    role: String,
    /// Externally-authenticated identity; no local password expected
    #[serde(skip_serializing, default)]
    is_sso_user: bool,

    /// Primary lookup key, validated at creation
    email: String,
    email_verified: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    email_verified_at: Option<DateTime<Utc>>,

    /// Argon2id derived key - never exposed in serialization
    #[serde(skip_serializing, default)]
    encrypted_password: String,
    #[serde(skip_serializing, default)]
    encrypted_password_salt: String,
    #[serde(skip_serializing, default)]
    password_recovery_token: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    password_recovery_sent_at: Option<DateTime<Utc>>,

    /// Count of successful authentications
    last_login: i64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    banned_until: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with a fresh identifier and UTC timestamps.
    ///
    /// The email is taken as given; callers validate it first (see
    /// [`validate_email`](super::validate_email)).
    pub fn new(email: impl Into<String>) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4(),
            audience: String::new(),
            role: String::new(),
            is_sso_user: false,
            email: email.into(),
            email_verified: false,
            email_verified_at: None,
            encrypted_password: String::new(),
            encrypted_password_salt: String::new(),
            password_recovery_token: String::new(),
            password_recovery_sent_at: None,
            last_login: 0,
            banned_until: None,
            created_at: now,
            updated_at: now,
        }
    }

    // Getters

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn audience(&self) -> &str {
        &self.audience
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn is_sso_user(&self) -> bool {
        self.is_sso_user
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn email_verified(&self) -> bool {
        self.email_verified
    }

    pub fn email_verified_at(&self) -> Option<DateTime<Utc>> {
        self.email_verified_at
    }

    pub fn encrypted_password(&self) -> &str {
        &self.encrypted_password
    }

    pub fn encrypted_password_salt(&self) -> &str {
        &self.encrypted_password_salt
    }

    pub fn password_recovery_token(&self) -> &str {
        &self.password_recovery_token
    }

    pub fn password_recovery_sent_at(&self) -> Option<DateTime<Utc>> {
        self.password_recovery_sent_at
    }

    pub fn last_login(&self) -> i64 {
        self.last_login
    }

    pub fn banned_until(&self) -> Option<DateTime<Utc>> {
        self.banned_until
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Whether this account carries a local password.
    pub fn has_password(&self) -> bool {
        !self.encrypted_password.is_empty()
    }

    // Mutators

    pub fn set_audience(&mut self, audience: impl Into<String>) {
        self.audience = audience.into();
        self.touch();
    }

    pub fn set_role(&mut self, role: impl Into<String>) {
        self.role = role.into();
        self.touch();
    }

    pub fn set_sso_user(&mut self, is_sso_user: bool) {
        self.is_sso_user = is_sso_user;
        self.touch();
    }

    /// Set the derived password hash and its salt together. The two are
    /// either both empty or both non-empty; there is deliberately no way
    /// to set one without the other.
    pub fn set_credentials(
        &mut self,
        encrypted_password: impl Into<String>,
        salt: impl Into<String>,
    ) {
        self.encrypted_password = encrypted_password.into();
        self.encrypted_password_salt = salt.into();
        self.touch();
    }

    /// Mark the email as verified at the current time.
    pub fn mark_email_verified(&mut self) {
        self.email_verified = true;
        self.email_verified_at = Some(Utc::now());
        self.touch();
    }

    /// Set a recovery token and stamp when it was issued.
    pub fn set_recovery_token(&mut self, token: impl Into<String>) {
        self.password_recovery_token = token.into();
        self.password_recovery_sent_at = Some(Utc::now());
        self.touch();
    }

    /// Record a successful authentication.
    pub fn record_login(&mut self) {
        self.last_login += 1;
        self.touch();
    }

    /// Gate authentication until the given instant.
    pub fn set_banned_until(&mut self, until: DateTime<Utc>) {
        self.banned_until = Some(until);
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Record for User {
    fn field(&self, name: &str) -> Option<String> {
        match name {
            "id" => Some(self.id.to_string()),
            "email" => Some(self.email.clone()),
            "audience" => Some(self.audience.clone()),
            "role" => Some(self.role.clone()),
            _ => None,
        }
    }

    fn unique_fields() -> &'static [&'static str] {
        &["id", "email"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_defaults() {
        let user = User::new("jon@doe.com");

        assert_eq!(user.email(), "jon@doe.com");
        assert!(!user.id().is_nil());
        assert!(user.audience().is_empty());
        assert!(!user.email_verified());
        assert!(!user.has_password());
        assert_eq!(user.last_login(), 0);
        assert!(user.banned_until().is_none());
        assert_eq!(user.created_at(), user.updated_at());
    }

    #[test]
    fn test_ids_are_unique() {
        let a = User::new("jon@doe.com");
        let b = User::new("jon@doe.com");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_mutators_touch_updated_at() {
        let mut user = User::new("jon@doe.com");
        let original_updated = user.updated_at();

        std::thread::sleep(std::time::Duration::from_millis(10));

        user.set_audience("mobile-app");
        assert_eq!(user.audience(), "mobile-app");
        assert!(user.updated_at() > original_updated);
        assert!(user.updated_at() >= user.created_at());
    }

    #[test]
    fn test_credentials_set_together() {
        let mut user = User::new("jon@doe.com");
        assert!(user.encrypted_password().is_empty());
        assert!(user.encrypted_password_salt().is_empty());

        user.set_credentials("hash", "salt");
        assert_eq!(user.encrypted_password(), "hash");
        assert_eq!(user.encrypted_password_salt(), "salt");
        assert!(user.has_password());
    }

    #[test]
    fn test_mark_email_verified() {
        let mut user = User::new("jon@doe.com");

        user.mark_email_verified();
        assert!(user.email_verified());
        assert!(user.email_verified_at().is_some());
    }

    #[test]
    fn test_record_login_increments() {
        let mut user = User::new("jon@doe.com");

        user.record_login();
        user.record_login();
        assert_eq!(user.last_login(), 2);
    }

    #[test]
    fn test_serialization_excludes_credentials() {
        let mut user = User::new("jon@doe.com");
        user.set_credentials("derived-key", "salt-value");
        user.set_recovery_token("recovery-token");

        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("derived-key"));
        assert!(!json.contains("salt-value"));
        assert!(!json.contains("recovery-token"));
        assert!(json.contains("jon@doe.com"));
    }

    #[test]
    fn test_record_field_access() {
        let mut user = User::new("jon@doe.com");
        user.set_audience("web");

        assert_eq!(user.field("email").as_deref(), Some("jon@doe.com"));
        assert_eq!(user.field("audience").as_deref(), Some("web"));
        assert_eq!(user.field("id"), Some(user.id().to_string()));
        assert!(user.field("encrypted_password").is_none());
        assert_eq!(User::unique_fields(), &["id", "email"]);
    }
}
