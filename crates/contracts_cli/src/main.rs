mod commands;
mod output;

use anyhow::Result;
use clap::Parser;
use contracts_validator::DEFAULT_CONTRACTS_DIR;
use output::OutputFormat;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "contract-check")]
#[command(
    version,
    about = "Check the scenario data contracts and print a pass/fail report",
    long_about = None
)]
struct Cli {
    /// Directory containing the scenario contract files
    #[arg(short = 'd', long, default_value = DEFAULT_CONTRACTS_DIR)]
    contracts_dir: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Disable coloured output
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; stdout is reserved for the report
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .with(filter)
        .init();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let passed = commands::check::execute(&cli.contracts_dir, cli.format)?;

    if !passed {
        std::process::exit(1);
    }

    Ok(())
}
