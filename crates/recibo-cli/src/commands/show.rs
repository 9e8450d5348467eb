//! Show command - print one stored case record, original document included.

use std::path::PathBuf;

use clap::Args;

use recibo_api::get_case;

use super::open_store;

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Id of the stored case record
    #[arg(required = true)]
    id: i64,

    /// Database file (default: $RECIBO_DB or recibo.db)
    #[arg(long)]
    db: Option<PathBuf>,
}

pub fn run(args: ShowArgs) -> anyhow::Result<()> {
    let store = open_store(args.db)?;
    let detail = get_case(&store, args.id)?;
    println!("{}", serde_json::to_string_pretty(&detail)?);
    Ok(())
}
