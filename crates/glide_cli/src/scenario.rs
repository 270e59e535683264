//! Gesture scenario files
//!
//! A scenario is a JSON document describing a container, its content and a
//! list of steps: input samples, clock advances, control calls and
//! assertions. Input samples are stamped with the headless clock, so
//! `wait` is the only way time passes between them.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A replayable gesture script
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Scenario {
    #[serde(default)]
    pub name: Option<String>,
    /// Container `[width, height]`
    pub container: [f64; 2],
    /// Natural content `[width, height]`
    pub content: [f64; 2],
    #[serde(default)]
    pub steps: Vec<ScenarioStep>,
}

/// One scenario step
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScenarioStep {
    DragStart {
        x: f64,
        y: f64,
        #[serde(default = "default_touches")]
        touches: u32,
    },
    DragMove {
        x: f64,
        y: f64,
        #[serde(default = "default_touches")]
        touches: u32,
    },
    DragEnd {
        x: f64,
        y: f64,
        #[serde(default = "default_touches")]
        touches: u32,
    },
    PinchStart,
    PinchChange {
        scale: f64,
    },
    PinchEnd {
        scale: f64,
    },
    /// Let time pass, delivering frames as they come due
    Wait {
        ms: f64,
    },
    /// Pump frames until nothing is animating
    Settle,
    ScrollTo {
        x: f64,
        y: f64,
        #[serde(default)]
        duration_ms: f64,
    },
    Snap {
        x: f64,
        y: f64,
    },
    Stop,
    Reset,
    AssertPosition {
        x: f64,
        y: f64,
        #[serde(default = "default_tolerance")]
        tolerance: f64,
    },
    AssertScale {
        scale: f64,
        #[serde(default = "default_tolerance")]
        tolerance: f64,
    },
    AssertIdle,
    /// `kind` was emitted; exactly `count` times when given
    AssertEvent {
        kind: String,
        #[serde(default)]
        count: Option<usize>,
    },
}

fn default_touches() -> u32 {
    1
}

fn default_tolerance() -> f64 {
    0.5
}

impl ScenarioStep {
    /// Step type as written in the scenario file
    pub fn name(&self) -> &'static str {
        match self {
            Self::DragStart { .. } => "drag_start",
            Self::DragMove { .. } => "drag_move",
            Self::DragEnd { .. } => "drag_end",
            Self::PinchStart => "pinch_start",
            Self::PinchChange { .. } => "pinch_change",
            Self::PinchEnd { .. } => "pinch_end",
            Self::Wait { .. } => "wait",
            Self::Settle => "settle",
            Self::ScrollTo { .. } => "scroll_to",
            Self::Snap { .. } => "snap",
            Self::Stop => "stop",
            Self::Reset => "reset",
            Self::AssertPosition { .. } => "assert_position",
            Self::AssertScale { .. } => "assert_scale",
            Self::AssertIdle => "assert_idle",
            Self::AssertEvent { .. } => "assert_event",
        }
    }
}

impl Scenario {
    /// Load a scenario from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let mut scenario = Self::from_json(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        if scenario.name.is_none() {
            scenario.name = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned());
        }
        Ok(scenario)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let scenario: Scenario = serde_json::from_str(content)?;
        for (label, [w, h]) in [("container", scenario.container), ("content", scenario.content)] {
            if !(w.is_finite() && h.is_finite() && w >= 0.0 && h >= 0.0) {
                anyhow::bail!("{label} size must be two non-negative numbers, got [{w}, {h}]");
            }
        }
        Ok(scenario)
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("scenario")
    }
}
