//! Core data model for test run results.
//!
//! The external test engine hands the reporter a tree of suites and test
//! outcomes. This module is the strict, owned form of that tree: a tagged
//! variant with exclusive parent-to-child ownership and no back references.
//! The `adapter` module normalizes whatever shape the engine produces into
//! these types; everything downstream (flattening, aggregation, reporting)
//! only ever sees this model.

/// Outcome of a single executed test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestState {
    Pass,
    Fail,
    Skip,
    Todo,
}

/// A single failure record attached to a failed test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestError {
    pub message: String,
}

impl TestError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Outcome record for one test leaf.
///
/// `state` is `None` when the engine reported no recognizable outcome for
/// the leaf (collected but never ran, or an unknown state string). Such
/// leaves flow through flattening but contribute to no counter.
///
/// Invariant: `errors` is non-empty only when `state` is `Some(Fail)`.
/// The adapter enforces this at the boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestResult {
    pub name: String,
    pub state: Option<TestState>,
    pub errors: Vec<TestError>,
}

impl TestResult {
    /// A leaf with the given name and state, carrying no errors.
    pub fn new(name: impl Into<String>, state: TestState) -> Self {
        Self {
            name: name.into(),
            state: Some(state),
            errors: Vec::new(),
        }
    }

    /// A failed leaf carrying the given error messages, in order.
    pub fn failed<I, S>(name: impl Into<String>, messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            state: Some(TestState::Fail),
            errors: messages.into_iter().map(TestError::new).collect(),
        }
    }

    /// A leaf the engine never resolved to any state.
    pub fn unresolved(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: None,
            errors: Vec::new(),
        }
    }
}

/// One node of the suite tree: a test leaf, or a named group of child
/// nodes in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuiteNode {
    Case(TestResult),
    Group {
        name: String,
        children: Vec<SuiteNode>,
    },
}

impl SuiteNode {
    pub fn case(result: TestResult) -> Self {
        SuiteNode::Case(result)
    }

    pub fn group(name: impl Into<String>, children: Vec<SuiteNode>) -> Self {
        SuiteNode::Group {
            name: name.into(),
            children,
        }
    }
}

/// A top-level suite, usually one test file.
///
/// `state` is the engine's aggregate verdict for the whole file. It is
/// independent of the leaf outcomes: a file can fail at collection time
/// (setup error, unparsable source) without any individual test failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteFile {
    pub name: String,
    pub state: Option<TestState>,
    pub tasks: Vec<SuiteNode>,
}

impl SuiteFile {
    pub fn new(name: impl Into<String>, tasks: Vec<SuiteNode>) -> Self {
        Self {
            name: name.into(),
            state: None,
            tasks,
        }
    }

    pub fn with_state(name: impl Into<String>, state: TestState, tasks: Vec<SuiteNode>) -> Self {
        Self {
            name: name.into(),
            state: Some(state),
            tasks,
        }
    }
}
