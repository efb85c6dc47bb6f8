//! authkit
//!
//! An identity and credential building block:
//! - a `User` record with verification, ban, and credential state
//! - email validation plus a composable options pipeline for
//!   construction and updates
//! - Argon2id password hashing with constant-time verification
//! - a `UserService` bound to an abstract persistence contract

pub mod domain;
pub mod infrastructure;

pub use domain::store::{Filter, Record, Store};
pub use domain::user::{
    ban_until, mark_email_verified, set_audience, set_recovery_token, set_role, validate_email,
    User, UserOption,
};
pub use domain::DomainError;
pub use infrastructure::store::InMemoryStore;
pub use infrastructure::user::{
    generate_salt, generate_salt_with, set_password, set_password_with, SecretHasher, UserService,
};
