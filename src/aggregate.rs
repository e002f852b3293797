//! Single-pass aggregation of a completed run into an immutable summary.

use crate::flatten::leaves_of_files;
use crate::tree::{SuiteFile, TestState};

/// Immutable snapshot of one completed run.
///
/// Produced once per run by [`RunSummary::collect`] and discarded after
/// rendering. Nothing here persists across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub passed: usize,
    pub failed: usize,
    pub todo: usize,
    /// Top-level suites whose own aggregate state is `Fail`, counted
    /// independently of leaf outcomes. Catches suite-setup and collection
    /// errors that never reach an individual test.
    pub failed_suites: usize,
    /// Every failed leaf's error messages, in traversal order.
    pub failure_messages: Vec<String>,
}

impl RunSummary {
    /// Aggregate a completed run.
    ///
    /// Each leaf increments exactly one counter: `Fail` -> failed, `Pass`
    /// -> passed, `Todo` -> todo. `Skip` leaves and leaves with no
    /// recorded state count nowhere. All state lives in the returned
    /// value, so repeated calls in one process can never contaminate each
    /// other.
    pub fn collect(files: &[SuiteFile]) -> Self {
        let mut summary = RunSummary::default();

        for file in files {
            if file.state == Some(TestState::Fail) {
                summary.failed_suites += 1;
            }
        }

        for leaf in leaves_of_files(files) {
            match leaf.state {
                Some(TestState::Fail) => {
                    summary.failed += 1;
                    for error in &leaf.errors {
                        summary.failure_messages.push(error.message.clone());
                    }
                }
                Some(TestState::Pass) => summary.passed += 1,
                Some(TestState::Todo) => summary.todo += 1,
                Some(TestState::Skip) | None => {}
            }
        }

        summary
    }

    /// True when nothing failed and nothing is left to do.
    pub fn all_clear(&self) -> bool {
        self.failed == 0 && self.todo == 0
    }
}
