//! Error types for the reading store.

use thiserror::Error;

/// Failures raised by [`crate::Database`].
#[derive(Error, Debug)]
pub enum StoreError {
    /// The store file is missing, unreadable or not a readings database
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// SQL or engine failure while running a statement
    #[error("query failed: {0}")]
    Query(#[from] rusqlite::Error),

    /// Failed to parse CSV import data
    #[error("failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Failed to read an import file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Results using StoreError
pub type Result<T> = std::result::Result<T, StoreError>;
