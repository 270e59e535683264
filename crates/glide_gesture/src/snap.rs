//! Horizontal snap decisions
//!
//! With snapping on, a release never glides: the surface either advances by
//! exactly one threshold from where the drag began, or falls back to that
//! origin.

use glide_animation::StepKind;

use crate::bounds::AxisBounds;

/// Releases quicker than this (ms) always advance
pub const SNAP_WINDOW_MS: f64 = 250.0;

/// Releases longer than this fraction of the container always advance
pub const SNAP_TRIGGER_RATIO: f64 = 0.1;

/// In-flight snap, selecting which completion event fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SnapState {
    #[default]
    None,
    SnapUpdate,
    SnapBounce,
}

impl SnapState {
    pub fn is_active(&self) -> bool {
        !matches!(self, SnapState::None)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SnapState::None => "none",
            SnapState::SnapUpdate => "snap_update",
            SnapState::SnapBounce => "snap_bounce",
        }
    }
}

impl From<StepKind> for SnapState {
    fn from(kind: StepKind) -> Self {
        match kind {
            StepKind::SnapUpdate => SnapState::SnapUpdate,
            StepKind::SnapBounce => SnapState::SnapBounce,
            StepKind::Transition | StepKind::Bounce => SnapState::None,
        }
    }
}

/// Where a snap release lands
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapDecision {
    pub target: f64,
    pub kind: StepKind,
}

impl SnapDecision {
    fn fall_back(origin: f64) -> Self {
        Self {
            target: origin,
            kind: StepKind::SnapBounce,
        }
    }
}

/// Decide a horizontal snap target.
///
/// The candidate is `origin ± threshold` in the direction of the release. It
/// is taken when it lies inside `bounds` and the release was either quick
/// or long; anything else falls back to `origin`.
pub fn decide_snap(
    origin: f64,
    delta: f64,
    elapsed_ms: f64,
    bounds: &AxisBounds,
    threshold: f64,
    container: f64,
) -> SnapDecision {
    if delta == 0.0 || !delta.is_finite() || !threshold.is_finite() {
        return SnapDecision::fall_back(origin);
    }

    let candidate = origin + delta.signum() * threshold;
    let decisive = elapsed_ms < SNAP_WINDOW_MS || delta.abs() > SNAP_TRIGGER_RATIO * container;
    if !bounds.contains(candidate) || !decisive || candidate == origin {
        return SnapDecision::fall_back(origin);
    }

    SnapDecision {
        target: candidate,
        kind: StepKind::SnapUpdate,
    }
}
