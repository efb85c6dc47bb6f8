//! Store trait definition

use std::fmt::Debug;

use async_trait::async_trait;

use crate::domain::DomainError;

use super::filter::Filter;
use super::record::Record;

/// Generic persistence contract for any record type.
///
/// Backends surface their own failures as [`DomainError::Storage`] or
/// [`DomainError::Conflict`]; no retry or fallback happens at this layer.
#[async_trait]
pub trait Store<T>: Send + Sync + Debug
where
    T: Record + 'static,
{
    /// Persists a new record, honoring the record's unique fields.
    async fn save(&self, record: T) -> Result<(), DomainError>;

    /// Returns the first record matching the filter, if any.
    async fn first(&self, filter: &Filter) -> Result<Option<T>, DomainError>;

    /// Returns every record, optionally narrowed by a filter. Order is
    /// backend-defined.
    async fn all(&self, filter: Option<&Filter>) -> Result<Vec<T>, DomainError>;

    /// Replaces the record matched by the filter.
    async fn update(&self, filter: &Filter, record: T) -> Result<(), DomainError>;

    /// Removes every record matching the filter.
    async fn delete(&self, filter: &Filter) -> Result<(), DomainError>;
}
