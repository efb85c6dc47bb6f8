//! User infrastructure module
//!
//! Argon2id secret hashing, salt generation, the password option, and the
//! user service binding it all to a store.

mod password;
mod service;

pub use password::{
    generate_salt, generate_salt_with, set_password, set_password_with, SecretHasher,
};
pub use service::UserService;
