mod commands;

use crate::commands::{info, tally};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[clap(version, about = "Count table reports and allocate legislative seats")]
struct Opts {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate and dump info about an election configuration.
    Info {
        /// Election configuration (JSON)
        config: PathBuf,
    },
    /// Report every table and print seats and the runoff decision.
    Tally {
        /// Election configuration (JSON)
        config: PathBuf,
        /// Table reports (JSON array)
        tables: PathBuf,
        /// Write the full report as JSON to this file
        #[clap(long)]
        output: Option<PathBuf>,
        /// Print the report as JSON instead of a summary
        #[clap(long)]
        json: bool,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn main() {
    init_tracing();
    let opts = Opts::parse();

    let result = match opts.command {
        Command::Info { config } => info(&config),
        Command::Tally {
            config,
            tables,
            output,
            json,
        } => tally(&config, &tables, output.as_deref(), json),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "❌ Failed:".red(), e);
        std::process::exit(1);
    }
}
