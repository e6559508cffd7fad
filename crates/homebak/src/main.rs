//! homebak CLI - back up a home directory allow-list with rsync
//!
//! This is the main entry point for the homebak command-line interface.

mod backup;
mod cli;
mod output;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::Cli;

fn main() -> Result<()> {
    // Parse CLI args
    let cli = Cli::parse();

    // Initialize tracing
    init_tracing(cli.verbose);

    backup::run(cli)
}

/// Initialize tracing with appropriate verbosity
fn init_tracing(verbose: u8) {
    let filter = match verbose {
        // Warnings (skipped include targets) are always shown
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
