//! Error types for persistence and state commands.

use thiserror::Error;

/// Result of a storage backend operation
pub type StorageResult<T> = Result<T, StorageError>;

/// Result of a state container command
pub type StateResult<T> = Result<T, StateError>;

/// Storage backend failures
#[derive(Debug, Error)]
pub enum StorageError {
    /// Backend cannot be reached (no window, storage disabled, ...)
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    /// Backend refused the write (quota, private mode, ...)
    #[error("storage write failed: {0}")]
    Write(String),
    /// Persisted value is not a valid item list
    #[error("invalid item data: {0}")]
    Codec(#[from] serde_json::Error),
}

/// State container failures
#[derive(Debug, Error)]
pub enum StateError {
    /// The new list was published but could not be persisted
    #[error("failed to persist items: {0}")]
    Persist(#[from] StorageError),
}
