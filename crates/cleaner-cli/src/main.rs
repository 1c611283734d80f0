//! build-cleaner CLI
//!
//! Keeps the generated source lists (`lib/jxl_lists.bzl`,
//! `lib/jxl_lists.cmake`, `lib/lib.gni`) in sync with the tracked files.

mod cli;
mod error;
mod output;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cleaner_core::BuildCleaner;
use cli::Cli;
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(e.exit_code());
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let config = cli.config();
    tracing::debug!(?config, "starting");
    let report = BuildCleaner::new(config).run()?;

    if cli.json {
        output::print_json(&report)?;
    } else {
        output::print_human(&report);
    }

    if report.is_success() {
        Ok(())
    } else {
        Err(CliError::Stale)
    }
}

/// Log to stderr: `debug` with `--verbose`, otherwise `RUST_LOG` or `warn`.
fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| CliError::Logging(e.to_string()))
}
