//! MRIO CLI - Command Line Operations for Embodied-Flow Analysis
//!
//! This is the operational entry point for the mrio-rust workspace.
//!
//! # Commands
//!
//! - `mrio analyze --year <year>` - Run the embodied-flow pipeline for a
//!   dataset year and render the results
//! - `mrio check --year <year>` - Verify configuration and dataset presence
//!
//! # Architecture
//!
//! As the service layer of the workspace, this crate orchestrates the
//! adapter and model layers behind a unified command-line interface; no
//! numeric semantics live here.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

/// MRIO Embodied-Flow Analysis CLI
#[derive(Parser)]
#[command(name = "mrio")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "mrio.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the embodied-flow pipeline for one dataset year
    Analyze {
        /// Dataset year to analyse
        #[arg(short, long)]
        year: u16,

        /// Data directory (overrides the configuration file)
        #[arg(short, long)]
        data_dir: Option<String>,

        /// Output format (table, json, csv)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Check configuration and dataset table presence
    Check {
        /// Dataset year to probe
        #[arg(short, long)]
        year: u16,
    },
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Analyze {
            year,
            data_dir,
            format,
        } => commands::analyze::run(&cli.config, year, data_dir.as_deref(), &format),
        Commands::Check { year } => commands::check::run(&cli.config, year),
    }
}
