//! Repository Layer - Core Traits
//!
//! The local-storage seam: a flat string key/value store.
//! Implementations can use SQLite, in-memory, etc.

use crate::domain::DomainResult;

/// Key/value storage with browser local-storage semantics
pub trait KeyValueStorage: Send + Sync {
    /// Read a value; `None` when the key was never written or was removed
    fn get_item(&self, key: &str) -> DomainResult<Option<String>>;

    /// Write a value, replacing any previous one
    fn set_item(&self, key: &str, value: &str) -> DomainResult<()>;

    /// Delete a key; removing a missing key is not an error
    fn remove_item(&self, key: &str) -> DomainResult<()>;

    /// Every stored key starting with `prefix`, sorted
    fn keys_with_prefix(&self, prefix: &str) -> DomainResult<Vec<String>>;
}
