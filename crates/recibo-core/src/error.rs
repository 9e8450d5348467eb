//! Error types for the recibo-core library.

use thiserror::Error;

/// Errors produced while extracting a case record from an upload.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The uploaded bytes are not syntactically valid JSON.
    #[error("uploaded file is not valid JSON: {0}")]
    MalformedInput(String),

    /// `InvoiceDate` is missing or not in `YYYY-MM-DD HH:MM:SS` format.
    #[error("failed to process invoice date: {0}")]
    InvalidDate(String),

    /// Unexpected internal fault. Rare: every other field lookup defaults.
    #[error("internal extraction error: {0}")]
    Internal(String),
}

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractError>;
