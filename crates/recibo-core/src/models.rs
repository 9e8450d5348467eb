//! Case record models and their fixed wire representation.
//!
//! The serialized field names (`nombreCliente`, `centroComercial`, ...) are
//! consumed by an existing frontend and must not change.

use serde::{Deserialize, Serialize};

/// Placeholder used when the invoice carries no usable line-item description.
pub const PLATE_MODEL_PLACEHOLDER: &str = "No especificado";

/// A processed case record, produced per upload.
///
/// `id` is populated only after the record has been persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseRecord {
    /// Customer display name, already normalized.
    #[serde(rename = "nombreCliente")]
    pub customer_name: String,

    /// Shopping-center form field, passed through verbatim.
    #[serde(rename = "centroComercial")]
    pub shopping_center: Option<String>,

    /// Payment date, `DD-MM-YY`.
    #[serde(rename = "fechaPago")]
    pub payment_date: String,

    /// Payment time, 12-hour clock with `AM`/`PM` suffix.
    #[serde(rename = "horaPago")]
    pub payment_time: String,

    /// First line item's description, or [`PLATE_MODEL_PLACEHOLDER`].
    #[serde(rename = "modeloPlaca")]
    pub plate_model: String,

    /// Free-text case description, passed through verbatim.
    #[serde(rename = "descripcion")]
    pub description: Option<String>,

    /// Assigned row id, present only after successful persistence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

impl CaseRecord {
    /// Whether this record qualifies for persistence: a non-empty case
    /// description was supplied with the upload.
    pub fn should_persist(&self) -> bool {
        self.description.as_deref().is_some_and(|d| !d.is_empty())
    }
}

/// A persisted case row, as stored in `json_documents`.
///
/// Display fields are nullable in storage; absent form values are stored as
/// NULL. `raw_json` round-trips to the exact uploaded document.
#[derive(Debug, Clone)]
pub struct StoredCase {
    pub id: i64,
    pub customer_name: Option<String>,
    pub shopping_center: Option<String>,
    pub payment_date: Option<String>,
    pub payment_time: Option<String>,
    pub plate_model: Option<String>,
    pub description: Option<String>,
    /// The original uploaded document, serialized verbatim.
    pub raw_json: String,
    /// Insertion timestamp, RFC 3339.
    pub created_at: String,
}
