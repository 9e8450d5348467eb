//! List command - print all stored case records, newest first.

use std::path::PathBuf;

use clap::Args;

use recibo_api::list_cases;

use super::open_store;

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    /// Database file (default: $RECIBO_DB or recibo.db)
    #[arg(long)]
    db: Option<PathBuf>,
}

pub fn run(args: ListArgs) -> anyhow::Result<()> {
    let store = open_store(args.db)?;
    let summaries = list_cases(&store)?;
    println!("{}", serde_json::to_string_pretty(&summaries)?);
    Ok(())
}
