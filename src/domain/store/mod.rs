//! Store domain - generic persistence contract
//!
//! This crate never talks to a concrete database; it consumes any backend
//! that can save, query, update, and delete records through the [`Store`]
//! trait, filtering by named fields.

mod filter;
mod record;
mod repository;

pub use filter::Filter;
pub use record::Record;
pub use repository::Store;
