//! CLI subcommands.

pub mod check;
pub mod list;
pub mod process;
pub mod show;

use std::path::PathBuf;

use recibo_store::CaseStore;

/// Default database file when neither `--db` nor `RECIBO_DB` is set.
const DEFAULT_DB: &str = "recibo.db";

/// Resolve the database path and open the store: `--db` wins, then the
/// `RECIBO_DB` environment variable, then [`DEFAULT_DB`].
pub fn open_store(db_flag: Option<PathBuf>) -> anyhow::Result<CaseStore> {
    let path = db_flag
        .or_else(|| std::env::var_os("RECIBO_DB").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DB));
    Ok(CaseStore::open(&path)?)
}
