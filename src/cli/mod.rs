//! The tally command-line interface.
//!
//! This module is the main entry point for all CLI commands and
//! orchestrates the core library functions.

use std::path::Path;
use std::process;

use clap::Parser;

use crate::cli::args::{Command, TallyArgs};
use crate::diagnostics::TallyError;
use crate::discovery::load_path;
use crate::report::{render_listing, ReportConfig, Reporter, StdoutSink};

pub mod args;

/// The main entry point for the CLI.
///
/// Exits nonzero only when a dump cannot be loaded. Test failures inside
/// a dump are report content, not process failures.
pub fn run() {
    let args = TallyArgs::parse();

    let result = match args.command {
        Command::Report { path } => handle_report(&path),
        Command::List { path, filter } => handle_list(&path, filter.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("{:?}", miette::Report::new(e));
        process::exit(1);
    }
}

/// Handles the `report` subcommand.
fn handle_report(path: &Path) -> Result<(), TallyError> {
    let files = load_path(path)?;
    let reporter = Reporter::new(ReportConfig::default());
    reporter.finish(&files, &mut StdoutSink);
    Ok(())
}

/// Handles the `list` subcommand.
fn handle_list(path: &Path, filter: Option<&str>) -> Result<(), TallyError> {
    let files = load_path(path)?;
    let config = ReportConfig::default();
    render_listing(&files, filter, &config, &mut StdoutSink);
    Ok(())
}
