//! Error types for the record store.

use thiserror::Error;

/// Errors produced by the record store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Underlying SQLite failure (open, query, or schema setup).
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Failed to create the directory holding the database file.
    #[error("failed to prepare database directory: {0}")]
    Io(#[from] std::io::Error),

    /// The connection mutex was poisoned by a panicking holder.
    #[error("store connection lock poisoned")]
    Poisoned,
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
