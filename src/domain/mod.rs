//! Domain layer - entities, validation, and the persistence contract

pub mod error;
pub mod store;
pub mod user;

pub use error::DomainError;
