//! Unified error type for the dump-loading boundary.
//!
//! The reporter core is infallible by contract: malformed nodes simply
//! contribute nothing. The only failure modes the crate has are reading
//! and parsing result dumps, and both carry the dump path so the CLI can
//! render an actionable miette report.

use std::path::{Path, PathBuf};

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TallyError {
    #[error("Failed to read result dump '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse result dump '{path}': {message}")]
    Parse { path: PathBuf, message: String },
}

impl TallyError {
    pub fn read(path: &Path, source: std::io::Error) -> Self {
        Self::Read {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn parse(path: &Path, source: impl std::fmt::Display) -> Self {
        Self::Parse {
            path: path.to_path_buf(),
            message: source.to_string(),
        }
    }
}

impl Diagnostic for TallyError {
    fn code<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        match self {
            TallyError::Read { .. } => Some(Box::new("tally::read")),
            TallyError::Parse { .. } => Some(Box::new("tally::parse")),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        match self {
            TallyError::Read { .. } => Some(Box::new(
                "Check that the path points to a result dump produced by the test engine.",
            )),
            TallyError::Parse { .. } => Some(Box::new(
                "Result dumps must be a JSON or YAML array of top-level suite objects.",
            )),
        }
    }
}
