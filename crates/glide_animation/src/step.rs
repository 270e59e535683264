//! Scheduled position steps

use glide_core::geometry::Point;

/// Why a step was scheduled; selects the completion event fired after it plays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StepKind {
    /// Plain scroll-to or momentum glide
    #[default]
    Transition,
    /// Corrective return into bounds
    Bounce,
    /// Snap that advances to a new offset
    SnapUpdate,
    /// Snap that falls back to its origin
    SnapBounce,
}

/// One animated transition to a target position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub target: Point,
    pub duration_ms: f64,
    pub kind: StepKind,
}

impl Step {
    /// Create a step; negative or non-finite durations become instant
    pub fn new(target: Point, duration_ms: f64, kind: StepKind) -> Self {
        let duration_ms = if duration_ms.is_finite() && duration_ms > 0.0 {
            duration_ms
        } else {
            0.0
        };
        Self {
            target,
            duration_ms,
            kind,
        }
    }

    /// A plain transition step
    pub fn to(x: f64, y: f64, duration_ms: f64) -> Self {
        Self::new(Point::new(x, y), duration_ms, StepKind::Transition)
    }

    pub fn with_kind(mut self, kind: StepKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn is_instant(&self) -> bool {
        self.duration_ms <= 0.0
    }
}
