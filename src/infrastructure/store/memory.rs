//! In-memory store implementation
//!
//! A reference backend for the generic store contract; production callers
//! plug in their own database-backed implementation.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::store::{Filter, Record, Store};
use crate::domain::DomainError;

/// In-memory implementation of [`Store`] over a vector of records.
///
/// Enforces the record type's declared unique fields on save.
#[derive(Debug)]
pub struct InMemoryStore<T> {
    records: Arc<RwLock<Vec<T>>>,
}

impl<T> InMemoryStore<T>
where
    T: Record + 'static,
{
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Create a store seeded with initial records.
    pub fn with_records(records: Vec<T>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }
}

impl<T> Default for InMemoryStore<T>
where
    T: Record + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T> Store<T> for InMemoryStore<T>
where
    T: Record + 'static,
{
    async fn save(&self, record: T) -> Result<(), DomainError> {
        let mut records = self.records.write().await;

        for field in T::unique_fields() {
            if let Some(value) = record.field(field) {
                let taken = records
                    .iter()
                    .any(|existing| existing.field(field).as_deref() == Some(value.as_str()));

                if taken {
                    return Err(DomainError::conflict(format!(
                        "record with {} '{}' already exists",
                        field, value
                    )));
                }
            }
        }

        records.push(record);
        Ok(())
    }

    async fn first(&self, filter: &Filter) -> Result<Option<T>, DomainError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|record| filter.matches(*record)).cloned())
    }

    async fn all(&self, filter: Option<&Filter>) -> Result<Vec<T>, DomainError> {
        let records = self.records.read().await;

        let result: Vec<T> = records
            .iter()
            .filter(|record| filter.is_none_or(|f| f.matches(*record)))
            .cloned()
            .collect();

        Ok(result)
    }

    async fn update(&self, filter: &Filter, record: T) -> Result<(), DomainError> {
        let mut records = self.records.write().await;

        match records.iter().position(|existing| filter.matches(existing)) {
            Some(index) => {
                records[index] = record;
                Ok(())
            }
            None => Err(DomainError::not_found(format!(
                "no record with {} '{}'",
                filter.field(),
                filter.value()
            ))),
        }
    }

    async fn delete(&self, filter: &Filter) -> Result<(), DomainError> {
        let mut records = self.records.write().await;
        records.retain(|record| !filter.matches(record));
        Ok(())
    }
}
