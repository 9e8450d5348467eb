//! Boundary operations for the invoice case service.
//!
//! Framework-agnostic: each operation takes an explicit [`CaseStore`] handle
//! and returns a serializable response or an [`ApiError`] carrying its HTTP
//! status. A protocol layer (or the CLI) maps these 1:1 onto transport.

mod error;
mod service;

pub use error::{ApiError, ApiResult};
pub use service::{
    check_store, get_case, list_cases, process_upload, CaseDetail, CaseSummary, HealthReport,
    Upload,
};
