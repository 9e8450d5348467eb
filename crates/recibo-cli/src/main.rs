//! CLI for the invoice case service.

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{check, list, process, show};

/// Invoice case service - extract case records from electronic-invoice JSON
#[derive(Parser)]
#[command(name = "recibo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process an invoice JSON file into a case record
    Process(process::ProcessArgs),

    /// List all stored case records
    List(list::ListArgs),

    /// Show one stored case record by id
    Show(show::ShowArgs),

    /// Check that the record store is reachable
    Check(check::CheckArgs),
}

fn main() -> anyhow::Result<()> {
    // Pick up RECIBO_DB from a .env file if one is present.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Process(args) => process::run(args),
        Commands::List(args) => list::run(args),
        Commands::Show(args) => show::run(args),
        Commands::Check(args) => check::run(args),
    }
}
