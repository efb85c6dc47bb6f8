//! Record trait for types that can be persisted

use std::fmt::Debug;

/// Trait for types a [`Store`](super::Store) can hold.
///
/// Field access goes through names rather than a fixed key so backends can
/// filter on any column-like field the record exposes.
pub trait Record: Clone + Debug + Send + Sync {
    /// Returns the value of a named field, or `None` if the record does
    /// not expose a field under that name.
    fn field(&self, name: &str) -> Option<String>;

    /// Fields a backend must keep unique across stored records.
    fn unique_fields() -> &'static [&'static str] {
        &[]
    }
}
