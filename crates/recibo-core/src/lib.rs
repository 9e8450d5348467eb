//! Core library for electronic-invoice case processing.
//!
//! This crate provides:
//! - Display-name normalization (per-token capitalization)
//! - Field extraction from uploaded electronic-invoice JSON documents
//! - The case record model with its fixed wire representation

pub mod error;
pub mod extract;
pub mod models;

pub use error::{ExtractError, Result};
pub use extract::{extract_case, parse_upload, FormFields};
pub use models::{CaseRecord, StoredCase, PLATE_MODEL_PLACEHOLDER};
