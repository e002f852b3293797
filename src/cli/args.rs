//! Defines the command-line arguments and subcommands for the tally CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "tally",
    version,
    about = "A test-result aggregation and reporting toolkit for grading harnesses."
)]
pub struct TallyArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Summarize a completed run as a single verdict block.
    Report {
        /// A result dump file, or a directory of per-suite dumps.
        #[arg(required = true)]
        path: PathBuf,
    },
    /// List every test outcome with a closing tally line.
    List {
        /// A result dump file, or a directory of per-suite dumps.
        #[arg(required = true)]
        path: PathBuf,
        /// Only list tests whose name contains this substring.
        #[arg(long)]
        filter: Option<String>,
    },
}
