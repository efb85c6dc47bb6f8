//! Infrastructure layer - hashing, services, and store backends

pub mod store;
pub mod user;
