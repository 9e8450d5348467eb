//! Process command - extract a case record from an invoice JSON file.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use tracing::info;

use recibo_api::{process_upload, Upload};
use recibo_core::FormFields;

use super::open_store;

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Invoice JSON file to process
    #[arg(required = true)]
    input: PathBuf,

    /// Issuer name; overrides the customer name derived from the invoice
    #[arg(long)]
    issuer_name: Option<String>,

    /// Shopping-center name, stored verbatim
    #[arg(long)]
    shopping_center: Option<String>,

    /// Case description; supplying one persists the record
    #[arg(long)]
    description: Option<String>,

    /// Database file (default: $RECIBO_DB or recibo.db)
    #[arg(long)]
    db: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn run(args: ProcessArgs) -> anyhow::Result<()> {
    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());
    let bytes = fs::read(&args.input)?;
    let filename = args
        .input
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();

    let form = FormFields {
        issuer_name: args.issuer_name,
        shopping_center: args.shopping_center,
        description: args.description,
    };

    let store = open_store(args.db)?;
    let record = process_upload(&store, Some(Upload { filename, bytes: &bytes }), &form)?;

    let output = serde_json::to_string_pretty(&record)?;
    match &args.output {
        Some(path) => {
            fs::write(path, &output)?;
            println!("Wrote case record to {}", path.display());
        }
        None => println!("{output}"),
    }

    Ok(())
}
