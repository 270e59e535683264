//! Scenario replay against a headless controller

use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use glide_animation::FrameSource;
use glide_core::events::GestureEventKind;
use glide_core::geometry::{Point, Size};
use glide_core::input::{PinchSample, TouchSample};
use glide_gesture::{GestureController, GesturePhase, HeadlessHost};
use thiserror::Error;

use crate::config::GlideConfig;
use crate::scenario::{Scenario, ScenarioStep};

/// Why a step stopped the replay
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StepFailure {
    #[error("expected position ({x:.1}, {y:.1}) within {tolerance}, found ({actual_x:.1}, {actual_y:.1})")]
    Position {
        x: f64,
        y: f64,
        tolerance: f64,
        actual_x: f64,
        actual_y: f64,
    },

    #[error("expected scale {expected:.3} within {tolerance}, found {actual:.3}")]
    Scale {
        expected: f64,
        tolerance: f64,
        actual: f64,
    },

    #[error("expected idle, found {phase:?} with {queued} queued step(s)")]
    NotIdle { phase: GesturePhase, queued: usize },

    #[error("event '{kind}' emitted {actual} time(s), expected {expected}")]
    EventCount {
        kind: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("event '{0}' was never emitted")]
    MissingEvent(&'static str),

    #[error("unknown event kind '{0}'")]
    UnknownEvent(String),

    #[error("still animating after {0} frames")]
    NeverSettled(usize),
}

impl StepFailure {
    /// Stable failure code for reports
    pub fn code(&self) -> &'static str {
        match self {
            Self::Position { .. } => "position_mismatch",
            Self::Scale { .. } => "scale_mismatch",
            Self::NotIdle { .. } => "not_idle",
            Self::EventCount { .. } => "event_count_mismatch",
            Self::MissingEvent(_) => "missing_event",
            Self::UnknownEvent(_) => "unknown_event",
            Self::NeverSettled(_) => "never_settled",
        }
    }
}

/// Result of replaying a scenario
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub steps_run: usize,
    /// Index of the failing step
    pub failed_step: Option<usize>,
    pub failure: Option<StepFailure>,
    pub position: Point,
    pub scale: f64,
    pub events: Vec<GestureEventKind>,
    /// Headless clock at the end of the run
    pub elapsed_ms: f64,
}

impl RunOutcome {
    pub fn passed(&self) -> bool {
        self.failure.is_none()
    }
}

/// Drives one controller through a scenario
pub struct Runner {
    controller: GestureController<HeadlessHost>,
    events: Arc<Mutex<Vec<GestureEventKind>>>,
    settle_budget: usize,
}

impl Runner {
    pub fn new(scenario: &Scenario, config: &GlideConfig) -> Result<Self> {
        let [cw, ch] = scenario.container;
        let [w, h] = scenario.content;
        let mut host = HeadlessHost::new(Size::new(cw, ch), Size::new(w, h))
            .with_frame_interval(config.replay.frame_interval_ms);
        if config.replay.timed_transitions {
            host = host.with_timed_transitions();
        }

        let mut controller = GestureController::new(host, config.configuration()?);
        controller
            .refresh_bounds()
            .with_context(|| format!("Invalid geometry in {}", scenario.display_name()))?;

        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = events.clone();
        controller.on_all(move |event| {
            if let Ok(mut log) = sink.lock() {
                log.push(event.kind);
            }
        });

        Ok(Self {
            controller,
            events,
            settle_budget: config.replay.settle_budget,
        })
    }

    /// Replay `steps` in order, stopping at the first failure
    pub fn run(mut self, steps: &[ScenarioStep]) -> RunOutcome {
        let mut steps_run = 0;
        let mut failed = None;
        for (index, step) in steps.iter().enumerate() {
            tracing::debug!("replay: step {} {}", index, step.name());
            steps_run += 1;
            if let Err(failure) = self.apply(step) {
                tracing::warn!("replay: step {} ({}) failed: {}", index, step.name(), failure);
                failed = Some((index, failure));
                break;
            }
        }

        let (failed_step, failure) = match failed {
            Some((index, failure)) => (Some(index), Some(failure)),
            None => (None, None),
        };
        RunOutcome {
            steps_run,
            failed_step,
            failure,
            position: self.controller.position(),
            scale: self.controller.scale(),
            events: self.recorded(),
            elapsed_ms: self.controller.host().now(),
        }
    }

    fn recorded(&self) -> Vec<GestureEventKind> {
        self.events
            .lock()
            .map(|log| log.clone())
            .unwrap_or_default()
    }

    fn touch(&self, x: f64, y: f64, touches: u32) -> TouchSample {
        TouchSample::single(x, y, self.controller.host().now()).with_touches(touches)
    }

    fn apply(&mut self, step: &ScenarioStep) -> Result<(), StepFailure> {
        let now = self.controller.host().now();
        match *step {
            ScenarioStep::DragStart { x, y, touches } => {
                let sample = self.touch(x, y, touches);
                self.controller.drag_start(sample);
            }
            ScenarioStep::DragMove { x, y, touches } => {
                let sample = self.touch(x, y, touches);
                let disposition = self.controller.drag_move(sample);
                tracing::trace!("replay: move -> {:?}", disposition);
            }
            ScenarioStep::DragEnd { x, y, touches } => {
                let sample = self.touch(x, y, touches);
                let release = self.controller.drag_end(sample);
                tracing::debug!("replay: release -> {:?}", release);
            }
            ScenarioStep::PinchStart => self.controller.pinch_start(PinchSample::new(1.0, now)),
            ScenarioStep::PinchChange { scale } => {
                self.controller.pinch_change(PinchSample::new(scale, now))
            }
            ScenarioStep::PinchEnd { scale } => {
                self.controller.pinch_end(PinchSample::new(scale, now))
            }
            ScenarioStep::Wait { ms } => self.controller.wait(ms),
            ScenarioStep::Settle => {
                let pumped = self.controller.run_frames(self.settle_budget);
                if self.controller.is_animating() {
                    return Err(StepFailure::NeverSettled(pumped));
                }
            }
            ScenarioStep::ScrollTo { x, y, duration_ms } => {
                self.controller.scroll_to(duration_ms, x, y)
            }
            ScenarioStep::Snap { x, y } => {
                self.controller.snap(x, y);
            }
            ScenarioStep::Stop => self.controller.stop(),
            ScenarioStep::Reset => self.controller.reset_state(),
            ScenarioStep::AssertPosition { x, y, tolerance } => {
                let actual = self.controller.position();
                if (actual.x - x).abs() > tolerance || (actual.y - y).abs() > tolerance {
                    return Err(StepFailure::Position {
                        x,
                        y,
                        tolerance,
                        actual_x: actual.x,
                        actual_y: actual.y,
                    });
                }
            }
            ScenarioStep::AssertScale { scale, tolerance } => {
                let actual = self.controller.scale();
                if (actual - scale).abs() > tolerance {
                    return Err(StepFailure::Scale {
                        expected: scale,
                        tolerance,
                        actual,
                    });
                }
            }
            ScenarioStep::AssertIdle => {
                let phase = self.controller.phase();
                if self.controller.is_animating() || phase != GesturePhase::Idle {
                    return Err(StepFailure::NotIdle {
                        phase,
                        queued: self.controller.queued_steps(),
                    });
                }
            }
            ScenarioStep::AssertEvent { ref kind, count } => {
                let kind = GestureEventKind::from_name(kind)
                    .ok_or_else(|| StepFailure::UnknownEvent(kind.clone()))?;
                let actual = self.recorded().iter().filter(|k| **k == kind).count();
                match count {
                    Some(expected) if expected != actual => {
                        return Err(StepFailure::EventCount {
                            kind: kind.as_str(),
                            expected,
                            actual,
                        });
                    }
                    None if actual == 0 => return Err(StepFailure::MissingEvent(kind.as_str())),
                    _ => {}
                }
            }
        }
        Ok(())
    }
}
