//! The `json_documents` table and its access methods.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::{params, Connection, OptionalExtension};
use tracing::{debug, info};

use recibo_core::{CaseRecord, StoredCase};

use crate::error::{Result, StoreError};

/// Handle to the case store. Explicitly constructed and passed to the
/// boundary; never a process-global.
pub struct CaseStore {
    conn: Mutex<Connection>,
}

impl CaseStore {
    /// Open (or create) the store at `db_path` and ensure the schema exists.
    pub fn open(db_path: &Path) -> Result<Self> {
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(db_path)?;
        info!(path = %db_path.display(), "opened case store");
        Self::with_connection(conn)
    }

    /// Open an in-memory store. Used by tests.
    pub fn open_in_memory() -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS json_documents (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                nombre_cliente TEXT,
                centro_comercial TEXT,
                fecha_pago TEXT,
                hora_pago TEXT,
                modelo_placa TEXT,
                descripcion TEXT,
                json_data TEXT,
                created_at TEXT NOT NULL
            );",
        )?;
        Ok(CaseStore {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| StoreError::Poisoned)
    }

    /// Insert a processed case plus its original document; returns the new id.
    pub fn insert_case(&self, record: &CaseRecord, raw_json: &str) -> Result<i64> {
        let created_at = chrono::Utc::now().to_rfc3339();
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO json_documents
             (nombre_cliente, centro_comercial, fecha_pago, hora_pago,
              modelo_placa, descripcion, json_data, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                record.customer_name,
                record.shopping_center,
                record.payment_date,
                record.payment_time,
                record.plate_model,
                record.description,
                raw_json,
                created_at,
            ],
        )?;
        let id = conn.last_insert_rowid();
        debug!(id, "persisted case record");
        Ok(id)
    }

    /// All stored cases, newest first.
    pub fn list_cases(&self) -> Result<Vec<StoredCase>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, nombre_cliente, centro_comercial, fecha_pago, hora_pago,
                    modelo_placa, descripcion, json_data, created_at
             FROM json_documents
             ORDER BY created_at DESC, id DESC",
        )?;
        let rows = stmt.query_map([], row_to_case)?;
        let mut cases = Vec::new();
        for row in rows {
            cases.push(row?);
        }
        Ok(cases)
    }

    /// Fetch one stored case by id, or `None` if it does not exist.
    pub fn get_case(&self, id: i64) -> Result<Option<StoredCase>> {
        let conn = self.conn()?;
        let case = conn
            .query_row(
                "SELECT id, nombre_cliente, centro_comercial, fecha_pago, hora_pago,
                        modelo_placa, descripcion, json_data, created_at
                 FROM json_documents WHERE id = ?1",
                params![id],
                row_to_case,
            )
            .optional()?;
        Ok(case)
    }

    /// Trivial round-trip query; returns the probe scalar on success.
    pub fn ping(&self) -> Result<i64> {
        let conn = self.conn()?;
        let probe: i64 = conn.query_row("SELECT 1", [], |row| row.get(0))?;
        Ok(probe)
    }
}

fn row_to_case(row: &rusqlite::Row<'_>) -> rusqlite::Result<StoredCase> {
    Ok(StoredCase {
        id: row.get(0)?,
        customer_name: row.get(1)?,
        shopping_center: row.get(2)?,
        payment_date: row.get(3)?,
        payment_time: row.get(4)?,
        plate_model: row.get(5)?,
        description: row.get(6)?,
        raw_json: row.get::<_, Option<String>>(7)?.unwrap_or_default(),
        created_at: row.get(8)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sample_record(description: Option<&str>) -> CaseRecord {
        CaseRecord {
            customer_name: "Juan Perez".to_string(),
            shopping_center: Some("Mall del Sol".to_string()),
            payment_date: "05-03-24".to_string(),
            payment_time: "02:30 PM".to_string(),
            plate_model: "Model X".to_string(),
            description: description.map(str::to_string),
            id: None,
        }
    }

    #[test]
    fn test_insert_assigns_sequential_ids() {
        let store = CaseStore::open_in_memory().unwrap();
        let first = store.insert_case(&sample_record(Some("a")), "{}").unwrap();
        let second = store.insert_case(&sample_record(Some("b")), "{}").unwrap();
        assert_eq!(first, 1);
        assert_eq!(second, 2);
    }

    #[test]
    fn test_get_case_round_trips_raw_json() {
        let store = CaseStore::open_in_memory().unwrap();
        let document = json!({
            "ElectronicData": { "name1": "juan", "lastname1": "perez" },
            "InvoiceDate": "2024-03-05 14:30:00",
            "items": [{ "description": "Model X" }],
        });
        let raw = serde_json::to_string(&document).unwrap();

        let id = store.insert_case(&sample_record(Some("case")), &raw).unwrap();
        let stored = store.get_case(id).unwrap().unwrap();

        assert_eq!(stored.customer_name.as_deref(), Some("Juan Perez"));
        assert_eq!(stored.description.as_deref(), Some("case"));
        let reparsed: serde_json::Value = serde_json::from_str(&stored.raw_json).unwrap();
        assert_eq!(reparsed, document);
    }

    #[test]
    fn test_get_case_missing_id_is_none() {
        let store = CaseStore::open_in_memory().unwrap();
        assert!(store.get_case(42).unwrap().is_none());
    }

    #[test]
    fn test_list_cases_newest_first() {
        let store = CaseStore::open_in_memory().unwrap();
        store.insert_case(&sample_record(Some("first")), "{}").unwrap();
        store.insert_case(&sample_record(Some("second")), "{}").unwrap();
        store.insert_case(&sample_record(Some("third")), "{}").unwrap();

        let cases = store.list_cases().unwrap();
        let descriptions: Vec<_> = cases
            .iter()
            .map(|c| c.description.as_deref().unwrap())
            .collect();
        assert_eq!(descriptions, vec!["third", "second", "first"]);
    }

    #[test]
    fn test_absent_form_fields_stored_as_null() {
        let store = CaseStore::open_in_memory().unwrap();
        let mut record = sample_record(None);
        record.shopping_center = None;
        let id = store.insert_case(&record, "{}").unwrap();

        let stored = store.get_case(id).unwrap().unwrap();
        assert_eq!(stored.shopping_center, None);
        assert_eq!(stored.description, None);
    }

    #[test]
    fn test_ping_round_trips() {
        let store = CaseStore::open_in_memory().unwrap();
        assert_eq!(store.ping().unwrap(), 1);
    }

    #[test]
    fn test_open_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("cases.db");
        let store = CaseStore::open(&path).unwrap();
        store.insert_case(&sample_record(Some("on disk")), "{}").unwrap();
        assert!(path.exists());
    }
}
