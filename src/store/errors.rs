//! Error types for the book store.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors from the persistence gateway
#[derive(Debug, Error)]
pub enum StoreError {
    /// The database file could not be opened
    #[error("{0}")]
    Open(rusqlite::Error),

    /// A SQL statement failed (connectivity or execution)
    #[error("{0}")]
    Sql(#[from] rusqlite::Error),
}
