//! The four boundary operations and their response projections.

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use recibo_core::{parse_upload, CaseRecord, ExtractError, FormFields};
use recibo_store::CaseStore;

use crate::error::{ApiError, ApiResult};

/// An uploaded file part: name as submitted plus its full content.
///
/// Content is read fully into memory before parsing; there is no streaming
/// contract.
#[derive(Debug, Clone, Copy)]
pub struct Upload<'a> {
    pub filename: &'a str,
    pub bytes: &'a [u8],
}

/// Projection of a stored case for the list operation.
#[derive(Debug, Serialize)]
pub struct CaseSummary {
    pub id: i64,
    /// Human-readable label: `"<customer> - <payment date>"`.
    pub name: String,
    #[serde(rename = "nombreCliente")]
    pub customer_name: Option<String>,
    #[serde(rename = "centroComercial")]
    pub shopping_center: Option<String>,
    #[serde(rename = "fechaPago")]
    pub payment_date: Option<String>,
    #[serde(rename = "horaPago")]
    pub payment_time: Option<String>,
    #[serde(rename = "modeloPlaca")]
    pub plate_model: Option<String>,
    #[serde(rename = "descripcion")]
    pub description: Option<String>,
}

/// Full stored case for the get-by-id operation, with the original upload
/// re-parsed under `jsonData`.
#[derive(Debug, Serialize)]
pub struct CaseDetail {
    pub id: i64,
    #[serde(rename = "nombreCliente")]
    pub customer_name: Option<String>,
    #[serde(rename = "centroComercial")]
    pub shopping_center: Option<String>,
    #[serde(rename = "fechaPago")]
    pub payment_date: Option<String>,
    #[serde(rename = "horaPago")]
    pub payment_time: Option<String>,
    #[serde(rename = "modeloPlaca")]
    pub plate_model: Option<String>,
    #[serde(rename = "descripcion")]
    pub description: Option<String>,
    #[serde(rename = "jsonData")]
    pub json_data: Value,
}

/// Health-check result: the probe scalar from a `SELECT 1` round-trip.
#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: String,
    pub message: String,
    pub result: i64,
}

/// Process an uploaded invoice: extract a case record and, iff a non-empty
/// case description was supplied, persist it and attach the assigned id.
pub fn process_upload(
    store: &CaseStore,
    upload: Option<Upload<'_>>,
    form: &FormFields,
) -> ApiResult<CaseRecord> {
    let upload = upload.ok_or(ApiError::MissingUpload)?;
    if upload.filename.is_empty() {
        return Err(ApiError::EmptyFilename);
    }

    let (mut record, document) = parse_upload(upload.bytes, form)?;

    if record.should_persist() {
        let raw = serde_json::to_string(&document)
            .map_err(|e| ExtractError::Internal(e.to_string()))?;
        let id = store.insert_case(&record, &raw)?;
        record.id = Some(id);
        info!(id, "case record persisted");
    } else {
        debug!("no case description supplied, skipping persistence");
    }

    Ok(record)
}

/// All stored cases, newest first, in the list projection.
pub fn list_cases(store: &CaseStore) -> ApiResult<Vec<CaseSummary>> {
    let cases = store.list_cases()?;
    let summaries = cases
        .into_iter()
        .map(|case| CaseSummary {
            id: case.id,
            name: format!(
                "{} - {}",
                case.customer_name.clone().unwrap_or_default(),
                case.payment_date.clone().unwrap_or_default()
            ),
            customer_name: case.customer_name,
            shopping_center: case.shopping_center,
            payment_date: case.payment_date,
            payment_time: case.payment_time,
            plate_model: case.plate_model,
            description: case.description,
        })
        .collect();
    Ok(summaries)
}

/// One stored case by id, including the re-parsed original document.
pub fn get_case(store: &CaseStore, id: i64) -> ApiResult<CaseDetail> {
    let case = store.get_case(id)?.ok_or(ApiError::NotFound(id))?;

    let json_data: Value = serde_json::from_str(&case.raw_json).map_err(|e| {
        warn!(id, "stored document is not parseable JSON");
        ExtractError::Internal(format!("stored document {id} is corrupt: {e}"))
    })?;

    Ok(CaseDetail {
        id: case.id,
        customer_name: case.customer_name,
        shopping_center: case.shopping_center,
        payment_date: case.payment_date,
        payment_time: case.payment_time,
        plate_model: case.plate_model,
        description: case.description,
        json_data,
    })
}

/// Run a trivial round-trip against the store and report the outcome.
pub fn check_store(store: &CaseStore) -> ApiResult<HealthReport> {
    let result = store.ping()?;
    Ok(HealthReport {
        status: "ok".to_string(),
        message: "database connection successful".to_string(),
        result,
    })
}
