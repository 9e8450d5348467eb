//! Check command - verify the record store is reachable.

use std::path::PathBuf;

use clap::Args;

use recibo_api::check_store;

use super::open_store;

/// Arguments for the check command.
#[derive(Args)]
pub struct CheckArgs {
    /// Database file (default: $RECIBO_DB or recibo.db)
    #[arg(long)]
    db: Option<PathBuf>,
}

pub fn run(args: CheckArgs) -> anyhow::Result<()> {
    let store = open_store(args.db)?;
    match check_store(&store) {
        Ok(report) => {
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
        Err(e) => anyhow::bail!("store health check failed: {e}"),
    }
}
