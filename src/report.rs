//! Run reporting: the single-block verdict and the per-test listing.
//!
//! [`Reporter::finish`] is the entry point the test engine calls once per
//! completed run. It aggregates the suite tree and writes at most one
//! block to its output sink: a fixed success line when everything passed,
//! the extracted custom message when failures carried one, or nothing at
//! all when failures exist but no message was recorded.

use crate::aggregate::RunSummary;
use crate::extract::{find_custom_message, reflow, WRAP_COLUMNS};
use crate::flatten::Leaves;
use crate::tree::{SuiteFile, TestState};

/// Fixed verdict for a clean run.
pub const SUCCESS_MESSAGE: &str = "All tests passed successfully!";

// Color constants for terminal output
const RESET: &str = "\x1b[0m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";

/// Configuration for report rendering.
pub struct ReportConfig {
    pub wrap_columns: usize,
    pub use_colors: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            wrap_columns: WRAP_COLUMNS,
            use_colors: atty::is(atty::Stream::Stdout),
        }
    }
}

impl ReportConfig {
    /// Apply color formatting to text if colors are enabled.
    pub fn colorize(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{}{}{}", color, text, RESET)
        } else {
            text.to_string()
        }
    }
}

/// Destination for rendered report text.
pub trait OutputSink {
    fn emit(&mut self, text: &str);
}

/// OutputBuffer: collects output into a String for testing or
/// programmatic capture.
#[derive(Default)]
pub struct OutputBuffer {
    buffer: String,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }
}

impl OutputSink for OutputBuffer {
    fn emit(&mut self, text: &str) {
        if !self.buffer.is_empty() {
            self.buffer.push('\n');
        }
        self.buffer.push_str(text);
    }
}

/// StdoutSink: writes output to stdout for CLI use.
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn emit(&mut self, text: &str) {
        println!("{}", text);
    }
}

/// Renders the single-block verdict for a completed run.
pub struct Reporter {
    config: ReportConfig,
}

impl Reporter {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    /// Summarize a completed run and write the verdict.
    ///
    /// The decision order is fixed: a run with zero failures and zero
    /// todos gets the success line; otherwise, if any failure messages
    /// were collected, the extracted custom message is emitted, falling
    /// back to the first raw message untouched when no extraction rule
    /// fires; otherwise nothing is written. At most one sink write per
    /// call, and no other side effects.
    pub fn finish(&self, files: &[SuiteFile], out: &mut dyn OutputSink) -> RunSummary {
        let summary = RunSummary::collect(files);

        if summary.all_clear() {
            out.emit(SUCCESS_MESSAGE);
        } else if !summary.failure_messages.is_empty() {
            match find_custom_message(&summary.failure_messages) {
                Some(custom) => out.emit(&reflow(&custom, self.config.wrap_columns)),
                None => out.emit(&summary.failure_messages[0]),
            }
        }

        summary
    }
}

/// Print every test outcome with a closing tally line.
///
/// One line per leaf in traversal order, PASS/FAIL/SKIP/TODO colored when
/// the config allows, each tagged with its suite file. An optional
/// case-insensitive substring filter narrows the listing by test name.
pub fn render_listing(
    files: &[SuiteFile],
    filter: Option<&str>,
    config: &ReportConfig,
    out: &mut dyn OutputSink,
) {
    let filter = filter.map(|f| f.to_lowercase());
    let mut total = 0;
    let mut passed = 0;
    let mut failed = 0;
    let mut skipped = 0;
    let mut todo = 0;

    for file in files {
        for leaf in Leaves::new(&file.tasks) {
            if let Some(f) = filter.as_deref() {
                if !leaf.name.to_lowercase().contains(f) {
                    continue;
                }
            }
            total += 1;
            match leaf.state {
                Some(TestState::Pass) => {
                    passed += 1;
                    out.emit(&format!(
                        "{}: {} [{}]",
                        config.colorize("PASS", GREEN),
                        leaf.name,
                        file.name
                    ));
                }
                Some(TestState::Fail) => {
                    failed += 1;
                    out.emit(&format!(
                        "{}: {} [{}]",
                        config.colorize("FAIL", RED),
                        leaf.name,
                        file.name
                    ));
                    for error in &leaf.errors {
                        out.emit(&format!("  Error: {}", error.message));
                    }
                }
                Some(TestState::Todo) => {
                    todo += 1;
                    out.emit(&format!(
                        "{}: {} [{}]",
                        config.colorize("TODO", YELLOW),
                        leaf.name,
                        file.name
                    ));
                }
                Some(TestState::Skip) | None => {
                    skipped += 1;
                    out.emit(&format!(
                        "{}: {} [{}]",
                        config.colorize("SKIP", YELLOW),
                        leaf.name,
                        file.name
                    ));
                }
            }
        }
    }

    out.emit(&format!(
        "\nTest summary: total {}, {} {}, {} {}, {} {}, {} {}",
        total,
        config.colorize("passed", GREEN),
        passed,
        config.colorize("failed", RED),
        failed,
        config.colorize("skipped", YELLOW),
        skipped,
        config.colorize("todo", YELLOW),
        todo,
    ));
}
