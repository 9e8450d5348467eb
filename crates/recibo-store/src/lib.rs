//! SQLite-backed record store for processed invoice cases.
//!
//! Owns the `json_documents` table: one row per persisted case, holding the
//! six display fields plus the original upload serialized verbatim. The core
//! only talks to this crate through insert-and-get-id and query operations.

mod error;
mod store;

pub use error::{Result, StoreError};
pub use store::CaseStore;
