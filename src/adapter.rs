//! Boundary normalization of external engine dumps.
//!
//! The test engine serializes its run as a loosely-shaped tree: tasks
//! with optional `type`, `mode`, and `result` fields, nested through
//! `tasks` arrays. Nothing about that shape is trusted here. Every field
//! is optional at deserialization time, unknown fields are ignored, and a
//! node that does not normalize cleanly contributes nothing instead of
//! failing the run. Downstream code only ever sees the strict tree from
//! [`crate::tree`].

use serde::Deserialize;
use serde_json::Value;

use crate::tree::{SuiteFile, SuiteNode, TestError, TestResult, TestState};

/// Raw top-level suite entry as the engine dumps it, one per test file.
#[derive(Debug, Clone, Deserialize)]
pub struct RawFile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub result: Option<RawResult>,
    #[serde(default)]
    pub tasks: Vec<Value>,
}

/// Raw task node: a test, a nested suite, or something unrecognizable.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTask {
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub result: Option<RawResult>,
    #[serde(default)]
    pub tasks: Option<Vec<Value>>,
}

/// Raw result record attached to a file or task.
#[derive(Debug, Clone, Deserialize)]
pub struct RawResult {
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub errors: Option<Vec<Value>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawError {
    #[serde(default)]
    pub message: Option<String>,
}

/// Normalize a dump's top-level suites into the strict tree.
pub fn normalize_files(raw: Vec<RawFile>) -> Vec<SuiteFile> {
    raw.into_iter().map(normalize_file).collect()
}

/// Normalize an already-parsed JSON dump (an array of top-level suites).
pub fn from_json_value(value: Value) -> Result<Vec<SuiteFile>, serde_json::Error> {
    let raw: Vec<RawFile> = serde_json::from_value(value)?;
    Ok(normalize_files(raw))
}

fn normalize_file(raw: RawFile) -> SuiteFile {
    SuiteFile {
        name: raw.name.unwrap_or_default(),
        state: raw
            .result
            .as_ref()
            .and_then(|r| parse_state(r.state.as_deref())),
        tasks: normalize_values(raw.tasks),
    }
}

/// Each candidate node is decoded on its own, so one malformed sibling
/// never takes the rest of the tree down with it.
fn normalize_values(values: Vec<Value>) -> Vec<SuiteNode> {
    values
        .into_iter()
        .filter_map(|value| serde_json::from_value::<RawTask>(value).ok())
        .filter_map(normalize_task)
        .collect()
}

/// A task is a leaf when the engine tagged it `test`; otherwise its
/// nested `tasks` make it a group. A task with neither tag nor children
/// does not normalize.
fn normalize_task(raw: RawTask) -> Option<SuiteNode> {
    if raw.kind.as_deref() == Some("test") {
        return Some(SuiteNode::Case(normalize_case(raw)));
    }
    if let Some(children) = raw.tasks {
        return Some(SuiteNode::Group {
            name: raw.name.unwrap_or_default(),
            children: normalize_values(children),
        });
    }
    None
}

fn normalize_case(raw: RawTask) -> TestResult {
    let state = resolved_state(&raw);
    // Error records on anything but a failed leaf violate the model
    // invariant; they are dropped here.
    let errors = if state == Some(TestState::Fail) {
        raw.result
            .and_then(|r| r.errors)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|value| serde_json::from_value::<RawError>(value).ok())
            .filter_map(|e| e.message)
            .map(TestError::new)
            .collect()
    } else {
        Vec::new()
    };

    TestResult {
        name: raw.name.unwrap_or_default(),
        state,
        errors,
    }
}

/// Fold the engine's separate result `state` and task `mode` into one
/// normalized state. A recorded state wins; a `todo` or `skip` mode fills
/// in when the result never resolved.
fn resolved_state(raw: &RawTask) -> Option<TestState> {
    let state = raw
        .result
        .as_ref()
        .and_then(|r| parse_state(r.state.as_deref()));
    if state.is_some() {
        return state;
    }
    match raw.mode.as_deref() {
        Some("todo") => Some(TestState::Todo),
        Some("skip") => Some(TestState::Skip),
        _ => None,
    }
}

fn parse_state(state: Option<&str>) -> Option<TestState> {
    match state? {
        "pass" => Some(TestState::Pass),
        "fail" => Some(TestState::Fail),
        "skip" => Some(TestState::Skip),
        "todo" => Some(TestState::Todo),
        _ => None,
    }
}
