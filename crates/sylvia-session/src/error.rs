//! Error types for the session store and its persistence boundary.

use thiserror::Error;

/// Store and storage errors
#[derive(Error, Debug)]
pub enum StoreError {
    /// IO error from a storage backend
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization round-trip failure
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Local validation failure; recovered as an inline warning, never
    /// a state change
    #[error("{0}")]
    Validation(String),

    /// Snapshot index out of range
    #[error("Snapshot not found: {index}")]
    SnapshotNotFound { index: usize },

    #[error("Store error: {message}")]
    Other { message: String },
}

impl StoreError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }
}

/// Store result type
pub type StoreResult<T> = Result<T, StoreError>;
