//! Storage error types.
//!
//! Used by the record store, the mode store, and callers of [`crate::write_atomic`].

use thiserror::Error;

/// Errors that can occur when using storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// The durable record file exists but cannot be parsed. Unrecoverable for
    /// the operation that needed it; never silently swallowed.
    #[error("Corrupt record file: {0}")]
    Corrupt(String),
    #[error("Encode error: {0}")]
    Encode(#[from] serde_json::Error),
}
