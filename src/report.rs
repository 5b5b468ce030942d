//! Result reporting for the command line.

use serde::Serialize;

use crate::engine::Outcome;
use crate::types::{EngineError, SIMULATION_FAILED};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    pub code: &'static str,
    pub message: String,
    /// Token that was being played when the error happened
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement: Option<String>,
}

/// JSON shape printed by `--json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub ok: bool,
    /// Final stack height, or -1 on failure
    pub stack_height: i64,
    pub lines_cleared: usize,
    pub turns: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorReport>,
}

impl Report {
    pub fn success(outcome: &Outcome) -> Self {
        Self {
            ok: true,
            stack_height: outcome.stack_height as i64,
            lines_cleared: outcome.lines_cleared,
            turns: outcome.turns,
            skipped: outcome.skipped.clone(),
            error: None,
        }
    }

    /// `progress` is the state reached before the failing placement.
    pub fn failure(err: &EngineError, placement: Option<&str>, progress: &Outcome) -> Self {
        Self {
            ok: false,
            stack_height: SIMULATION_FAILED as i64,
            lines_cleared: progress.lines_cleared,
            turns: progress.turns,
            skipped: progress.skipped.clone(),
            error: Some(ErrorReport {
                code: err.code(),
                message: err.to_string(),
                placement: placement.map(str::to_string),
            }),
        }
    }

    /// Plain-text form: just the stack height
    pub fn to_line(&self) -> String {
        self.stack_height.to_string()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
