//! Machine-readable replay report

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::runner::RunOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Passed,
    Failed,
}

/// JSON report written by `glide replay`
#[derive(Debug, Serialize)]
pub struct Report {
    pub scenario: String,
    pub status: Status,
    pub steps_run: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_step: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assertion: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub final_position: [f64; 2],
    pub final_scale: f64,
    pub event_count: usize,
    pub events: Vec<&'static str>,
    pub elapsed_ms: f64,
}

impl Report {
    pub fn new(scenario: &str, outcome: &RunOutcome) -> Self {
        Self {
            scenario: scenario.to_string(),
            status: if outcome.passed() {
                Status::Passed
            } else {
                Status::Failed
            },
            steps_run: outcome.steps_run,
            failed_step: outcome.failed_step,
            assertion: outcome.failure.as_ref().map(|f| f.code()),
            message: outcome.failure.as_ref().map(|f| f.to_string()),
            final_position: [outcome.position.x, outcome.position.y],
            final_scale: outcome.scale,
            event_count: outcome.events.len(),
            events: outcome.events.iter().map(|kind| kind.as_str()).collect(),
            elapsed_ms: outcome.elapsed_ms,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize report")
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_json()?)
            .with_context(|| format!("Failed to write {}", path.display()))
    }
}
