//! Domain Layer - Core Entity Trait and Errors
//!
//! Every checklist node (section or item) is addressed by a string id.

use thiserror::Error;

/// Core trait for addressable checklist nodes
pub trait Entity {
    /// Returns the node's unique identifier
    fn id(&self) -> &str;
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Error)]
pub enum DomainError {
    /// Requested tent size is not part of the catalog.
    #[error("unknown tent size: {0}")]
    UnknownSize(String),

    /// Item id does not exist in the assembled checklist.
    #[error("item not found: {0}")]
    ItemNotFound(String),

    /// Selection value could not be parsed.
    #[error("invalid selection: {0}")]
    InvalidSelection(String),

    /// Static catalog content breaks an invariant.
    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),

    /// Backing storage failed to read or write.
    #[error("storage error: {0}")]
    Storage(String),

    /// Stored value could not be decoded.
    #[error("corrupt stored value: {0}")]
    Corrupt(#[from] serde_json::Error),
}

impl From<rusqlite::Error> for DomainError {
    fn from(e: rusqlite::Error) -> Self {
        DomainError::Storage(e.to_string())
    }
}
