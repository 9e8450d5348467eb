//! Case extraction from uploaded electronic-invoice documents.
//!
//! The upload is treated as loosely-typed JSON: every field lookup defaults
//! when missing, except `InvoiceDate`, whose absence is a hard failure.

mod normalize;

pub use normalize::capitalize_words;

use chrono::NaiveDateTime;
use serde_json::Value;
use tracing::debug;

use crate::error::{ExtractError, Result};
use crate::models::{CaseRecord, PLATE_MODEL_PLACEHOLDER};

/// Sentinel billed-party name marking a generic walk-in customer.
const GENERIC_FIRST_NAME: &str = "Consumidor";
const GENERIC_LAST_NAME: &str = "Final";

/// Expected layout of the invoice's `InvoiceDate` field.
const INVOICE_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Form fields accompanying an upload. All optional.
#[derive(Debug, Clone, Default)]
pub struct FormFields {
    /// Overrides the derived customer name when non-empty.
    pub issuer_name: Option<String>,
    /// Passed through to the record verbatim.
    pub shopping_center: Option<String>,
    /// Passed through verbatim; a non-empty value gates persistence.
    pub description: Option<String>,
}

impl FormFields {
    fn issuer_override(&self) -> Option<&str> {
        self.issuer_name.as_deref().filter(|s| !s.is_empty())
    }
}

/// Parse uploaded bytes as JSON and extract a case record from them.
///
/// Returns the record together with the parsed document so the caller can
/// persist the original upload verbatim.
pub fn parse_upload(bytes: &[u8], form: &FormFields) -> Result<(CaseRecord, Value)> {
    let document: Value =
        serde_json::from_slice(bytes).map_err(|e| ExtractError::MalformedInput(e.to_string()))?;
    let record = extract_case(&document, form)?;
    Ok((record, document))
}

/// Extract a case record from a parsed invoice document.
pub fn extract_case(invoice: &Value, form: &FormFields) -> Result<CaseRecord> {
    let customer_name = resolve_customer_name(invoice, form);

    // The only hard requirement on the document itself.
    let invoice_date = invoice
        .get("InvoiceDate")
        .and_then(Value::as_str)
        .unwrap_or("");
    let moment = NaiveDateTime::parse_from_str(invoice_date, INVOICE_DATE_FORMAT)
        .map_err(|e| ExtractError::InvalidDate(e.to_string()))?;

    let payment_date = moment.format("%d-%m-%y").to_string();
    let payment_time = moment.format("%I:%M %p").to_string();

    let plate_model = first_item_description(invoice);

    debug!(customer = %customer_name, date = %payment_date, "extracted case record");

    Ok(CaseRecord {
        customer_name,
        shopping_center: form.shopping_center.clone(),
        payment_date,
        payment_time,
        plate_model,
        description: form.description.clone(),
        id: None,
    })
}

/// Derive the customer display name per the billed-party rules.
///
/// A non-empty `issuerName` always wins, which makes the generic-customer
/// branch observable only when no issuer override was supplied. Historical
/// behavior, kept intact for frontend compatibility.
fn resolve_customer_name(invoice: &Value, form: &FormFields) -> String {
    if let Some(issuer) = form.issuer_override() {
        return capitalize_words(issuer);
    }

    let electronic = invoice.get("ElectronicData");
    let name1 = str_field(electronic, "name1");
    let lastname1 = str_field(electronic, "lastname1");

    let is_generic_customer = name1 == GENERIC_FIRST_NAME && lastname1 == GENERIC_LAST_NAME;
    let candidate = if is_generic_customer {
        // Issuer override was empty or absent here, so the generic
        // placeholder resolves to an empty name.
        String::new()
    } else {
        format!("{} {}", name1, lastname1).trim().to_string()
    };

    capitalize_words(&candidate)
}

fn str_field<'a>(object: Option<&'a Value>, key: &str) -> &'a str {
    object
        .and_then(|o| o.get(key))
        .and_then(Value::as_str)
        .unwrap_or("")
}

fn first_item_description(invoice: &Value) -> String {
    invoice
        .get("items")
        .and_then(Value::as_array)
        .and_then(|items| items.first())
        .map(|item| {
            item.get("description")
                .and_then(Value::as_str)
                .unwrap_or(PLATE_MODEL_PLACEHOLDER)
        })
        .unwrap_or(PLATE_MODEL_PLACEHOLDER)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn invoice(date: &str) -> Value {
        json!({
            "ElectronicData": { "name1": "juan", "lastname1": "perez" },
            "InvoiceDate": date,
            "items": [{ "description": "Model X" }, { "description": "Model Y" }],
        })
    }

    #[test]
    fn test_named_customer() {
        let record = extract_case(&invoice("2024-03-05 14:30:00"), &FormFields::default()).unwrap();
        assert_eq!(record.customer_name, "Juan Perez");
    }

    #[test]
    fn test_generic_customer_without_issuer() {
        let doc = json!({
            "ElectronicData": { "name1": "Consumidor", "lastname1": "Final" },
            "InvoiceDate": "2024-03-05 14:30:00",
        });
        let record = extract_case(&doc, &FormFields::default()).unwrap();
        assert_eq!(record.customer_name, "");
    }

    #[test]
    fn test_generic_customer_with_issuer() {
        let doc = json!({
            "ElectronicData": { "name1": "Consumidor", "lastname1": "Final" },
            "InvoiceDate": "2024-03-05 14:30:00",
        });
        let form = FormFields {
            issuer_name: Some("acme corp".to_string()),
            ..Default::default()
        };
        let record = extract_case(&doc, &form).unwrap();
        assert_eq!(record.customer_name, "Acme Corp");
    }

    #[test]
    fn test_issuer_overrides_named_customer() {
        let form = FormFields {
            issuer_name: Some("override name".to_string()),
            ..Default::default()
        };
        let record = extract_case(&invoice("2024-03-05 14:30:00"), &form).unwrap();
        assert_eq!(record.customer_name, "Override Name");
    }

    #[test]
    fn test_empty_issuer_does_not_override() {
        let form = FormFields {
            issuer_name: Some(String::new()),
            ..Default::default()
        };
        let record = extract_case(&invoice("2024-03-05 14:30:00"), &form).unwrap();
        assert_eq!(record.customer_name, "Juan Perez");
    }

    #[test]
    fn test_missing_electronic_data_defaults_to_empty_name() {
        let doc = json!({ "InvoiceDate": "2024-03-05 14:30:00" });
        let record = extract_case(&doc, &FormFields::default()).unwrap();
        assert_eq!(record.customer_name, "");
    }

    #[test]
    fn test_date_and_time_formatting() {
        let record = extract_case(&invoice("2024-03-05 14:30:00"), &FormFields::default()).unwrap();
        assert_eq!(record.payment_date, "05-03-24");
        assert_eq!(record.payment_time, "02:30 PM");
    }

    #[test]
    fn test_midnight_formats_as_twelve_am() {
        let record = extract_case(&invoice("2024-03-05 00:05:00"), &FormFields::default()).unwrap();
        assert_eq!(record.payment_time, "12:05 AM");
    }

    #[test]
    fn test_missing_invoice_date_fails() {
        let doc = json!({ "ElectronicData": {} });
        let err = extract_case(&doc, &FormFields::default()).unwrap_err();
        assert!(matches!(err, ExtractError::InvalidDate(_)));
    }

    #[test]
    fn test_unparseable_invoice_date_fails() {
        let doc = json!({ "InvoiceDate": "not-a-date" });
        let err = extract_case(&doc, &FormFields::default()).unwrap_err();
        assert!(matches!(err, ExtractError::InvalidDate(_)));
    }

    #[test]
    fn test_invalid_calendar_date_fails() {
        let doc = json!({ "InvoiceDate": "2024-02-30 10:00:00" });
        let err = extract_case(&doc, &FormFields::default()).unwrap_err();
        assert!(matches!(err, ExtractError::InvalidDate(_)));
    }

    #[test]
    fn test_plate_model_from_first_item() {
        let record = extract_case(&invoice("2024-03-05 14:30:00"), &FormFields::default()).unwrap();
        assert_eq!(record.plate_model, "Model X");
    }

    #[test]
    fn test_plate_model_placeholder_when_items_empty() {
        let doc = json!({ "InvoiceDate": "2024-03-05 14:30:00", "items": [] });
        let record = extract_case(&doc, &FormFields::default()).unwrap();
        assert_eq!(record.plate_model, PLATE_MODEL_PLACEHOLDER);
    }

    #[test]
    fn test_plate_model_placeholder_when_items_absent() {
        let doc = json!({ "InvoiceDate": "2024-03-05 14:30:00" });
        let record = extract_case(&doc, &FormFields::default()).unwrap();
        assert_eq!(record.plate_model, PLATE_MODEL_PLACEHOLDER);
    }

    #[test]
    fn test_plate_model_placeholder_when_first_item_lacks_description() {
        let doc = json!({
            "InvoiceDate": "2024-03-05 14:30:00",
            "items": [{ "quantity": 2 }],
        });
        let record = extract_case(&doc, &FormFields::default()).unwrap();
        assert_eq!(record.plate_model, PLATE_MODEL_PLACEHOLDER);
    }

    #[test]
    fn test_form_fields_pass_through_verbatim() {
        let form = FormFields {
            issuer_name: None,
            shopping_center: Some("mall del sol".to_string()),
            description: Some("scratched bumper".to_string()),
        };
        let record = extract_case(&invoice("2024-03-05 14:30:00"), &form).unwrap();
        // No normalization on passthrough fields.
        assert_eq!(record.shopping_center.as_deref(), Some("mall del sol"));
        assert_eq!(record.description.as_deref(), Some("scratched bumper"));
    }

    #[test]
    fn test_parse_upload_rejects_invalid_json() {
        let err = parse_upload(b"{ not json", &FormFields::default()).unwrap_err();
        assert!(matches!(err, ExtractError::MalformedInput(_)));
    }

    #[test]
    fn test_parse_upload_returns_parsed_document() {
        let doc = invoice("2024-03-05 14:30:00");
        let bytes = serde_json::to_vec(&doc).unwrap();
        let (record, parsed) = parse_upload(&bytes, &FormFields::default()).unwrap();
        assert_eq!(record.customer_name, "Juan Perez");
        assert_eq!(parsed, doc);
    }
}
