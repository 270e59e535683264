//! Glide configuration file handling (glide.toml)

use anyhow::{Context, Result};
use glide_animation::Easing;
use glide_gesture::Configuration;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Top-level configuration file
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GlideConfig {
    #[serde(default)]
    pub gesture: GestureConfig,
    #[serde(default)]
    pub replay: ReplayConfig,
}

/// Controller options, one field per `Configuration` option
#[derive(Debug, Deserialize, Serialize)]
pub struct GestureConfig {
    #[serde(default)]
    pub horizontal_scroll: bool,
    #[serde(default)]
    pub vertical_scroll: bool,
    #[serde(default = "default_true")]
    pub momentum: bool,
    #[serde(default = "default_true")]
    pub elastic_bounce: bool,
    #[serde(default)]
    pub bounce_max_x: Option<f64>,
    #[serde(default)]
    pub bounce_max_y: Option<f64>,
    #[serde(default = "default_speed_scale")]
    pub speed_scale: f64,
    #[serde(default = "default_true")]
    pub zoom_enabled: bool,
    #[serde(default = "default_true")]
    pub auto_handoff_vertical: bool,
    #[serde(default)]
    pub use_external_transition: bool,
    #[serde(default)]
    pub snap_enabled: bool,
    #[serde(default = "default_snap_threshold")]
    pub snap_threshold: f64,
    /// Curve name: linear, ease-out-quad, ease-out-cubic or circ-out
    #[serde(default = "default_easing")]
    pub easing: String,
    #[serde(default = "default_step_duration")]
    pub bounce_duration_ms: f64,
    #[serde(default = "default_step_duration")]
    pub snap_duration_ms: f64,
}

fn default_true() -> bool {
    true
}

fn default_speed_scale() -> f64 {
    1.0
}

fn default_snap_threshold() -> f64 {
    200.0
}

fn default_easing() -> String {
    "circ-out".to_string()
}

fn default_step_duration() -> f64 {
    200.0
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            horizontal_scroll: false,
            vertical_scroll: false,
            momentum: true,
            elastic_bounce: true,
            bounce_max_x: None,
            bounce_max_y: None,
            speed_scale: default_speed_scale(),
            zoom_enabled: true,
            auto_handoff_vertical: true,
            use_external_transition: false,
            snap_enabled: false,
            snap_threshold: default_snap_threshold(),
            easing: default_easing(),
            bounce_duration_ms: default_step_duration(),
            snap_duration_ms: default_step_duration(),
        }
    }
}

/// Headless host settings used by `glide replay`
#[derive(Debug, Deserialize, Serialize)]
pub struct ReplayConfig {
    /// Frame interval of the manual clock
    #[serde(default = "default_frame_interval")]
    pub frame_interval_ms: f64,
    /// Advertise timed transitions on the headless renderer
    #[serde(default)]
    pub timed_transitions: bool,
    /// Frames `settle` steps may pump before giving up
    #[serde(default = "default_settle_budget")]
    pub settle_budget: usize,
}

fn default_frame_interval() -> f64 {
    17.0
}

fn default_settle_budget() -> usize {
    1000
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            frame_interval_ms: default_frame_interval(),
            timed_transitions: false,
            settle_budget: default_settle_budget(),
        }
    }
}

impl GlideConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            anyhow::bail!("No configuration file at {}", path.display());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        Self::from_toml(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Parse and validate a TOML document
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: GlideConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    fn validate(&self) -> Result<()> {
        let gesture = &self.gesture;
        for (name, value) in [
            ("bounce_duration_ms", gesture.bounce_duration_ms),
            ("snap_duration_ms", gesture.snap_duration_ms),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                anyhow::bail!("gesture.{name} must be a non-negative number, got {value}");
            }
        }
        if !gesture.snap_threshold.is_finite() {
            anyhow::bail!("gesture.snap_threshold must be finite");
        }
        if Easing::from_name(&gesture.easing).is_none() {
            anyhow::bail!("Unknown easing '{}'", gesture.easing);
        }
        if !(self.replay.frame_interval_ms.is_finite() && self.replay.frame_interval_ms > 0.0) {
            anyhow::bail!("replay.frame_interval_ms must be positive");
        }
        Ok(())
    }

    /// Resolve into controller options
    pub fn configuration(&self) -> Result<Configuration> {
        let g = &self.gesture;
        let easing = Easing::from_name(&g.easing)
            .with_context(|| format!("Unknown easing '{}'", g.easing))?;
        Ok(Configuration {
            horizontal_scroll: g.horizontal_scroll,
            vertical_scroll: g.vertical_scroll,
            momentum: g.momentum,
            elastic_bounce: g.elastic_bounce,
            bounce_max_x: g.bounce_max_x,
            bounce_max_y: g.bounce_max_y,
            speed_scale: g.speed_scale,
            zoom_enabled: g.zoom_enabled,
            auto_handoff_vertical: g.auto_handoff_vertical,
            use_external_transition: g.use_external_transition,
            snap_enabled: g.snap_enabled,
            snap_threshold: g.snap_threshold,
            easing,
            bounce_duration_ms: g.bounce_duration_ms,
            snap_duration_ms: g.snap_duration_ms,
        })
    }
}
