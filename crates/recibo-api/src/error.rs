//! Boundary error taxonomy and its HTTP status mapping.

use serde_json::{json, Value};
use thiserror::Error;

use recibo_core::ExtractError;
use recibo_store::StoreError;

/// Errors surfaced by the boundary operations.
///
/// Every failure maps 1:1 onto an HTTP status plus a `{"error": <message>}`
/// body; nothing is retried or swallowed.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request carried no file part.
    #[error("no file was uploaded")]
    MissingUpload,

    /// The request carried a file part with an empty filename.
    #[error("no file was selected")]
    EmptyFilename,

    /// Extraction failure (malformed JSON, bad date, internal fault).
    #[error(transparent)]
    Extract(#[from] ExtractError),

    /// No stored case exists under the requested id.
    #[error("case record {0} not found")]
    NotFound(i64),

    /// The record store could not complete the operation.
    #[error("store unavailable: {0}")]
    StoreUnavailable(#[from] StoreError),
}

impl ApiError {
    /// HTTP status code this error translates to.
    pub fn status(&self) -> u16 {
        match self {
            ApiError::MissingUpload | ApiError::EmptyFilename => 400,
            ApiError::Extract(ExtractError::MalformedInput(_)) => 400,
            ApiError::Extract(ExtractError::InvalidDate(_)) => 400,
            ApiError::Extract(ExtractError::Internal(_)) => 500,
            ApiError::NotFound(_) => 404,
            ApiError::StoreUnavailable(_) => 500,
        }
    }

    /// JSON error body for the boundary response.
    pub fn to_body(&self) -> Value {
        json!({ "error": self.to_string() })
    }
}

/// Result type for boundary operations.
pub type ApiResult<T> = std::result::Result<T, ApiError>;
