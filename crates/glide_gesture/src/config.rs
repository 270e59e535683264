//! Controller configuration

use glide_animation::Easing;
use glide_core::geometry::{Axis, Size};

/// Immutable controller options.
///
/// A controller is reconfigured by swapping in a whole new value with
/// `GestureController::set_config`.
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    /// Pan horizontally even when the content fits the container
    pub horizontal_scroll: bool,
    /// Pan vertically even when the content fits the container
    pub vertical_scroll: bool,
    /// Glide after a fast release
    pub momentum: bool,
    /// Soften motion past the bounds and animate back instead of clamping
    pub elastic_bounce: bool,
    /// Horizontal elastic allowance (absent or zero: container width)
    pub bounce_max_x: Option<f64>,
    /// Vertical elastic allowance (absent or zero: container height)
    pub bounce_max_y: Option<f64>,
    /// Release velocity multiplier (non-positive: 1)
    pub speed_scale: f64,
    /// Accept pinch samples
    pub zoom_enabled: bool,
    /// Let ambient scrolling take over when a vertical drag pushes out of
    /// a region that already rests on that edge
    pub auto_handoff_vertical: bool,
    /// Hand whole steps to the renderer's timed transition when it has one
    pub use_external_transition: bool,
    /// Replace momentum with fixed-offset horizontal snapping
    pub snap_enabled: bool,
    /// Snap offset from the pre-drag origin
    pub snap_threshold: f64,
    /// Curve used for frame-by-frame playback
    pub easing: Easing,
    /// Duration of a corrective bounce
    pub bounce_duration_ms: f64,
    /// Duration of a snap step
    pub snap_duration_ms: f64,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            horizontal_scroll: false,
            vertical_scroll: false,
            momentum: true,
            elastic_bounce: true,
            bounce_max_x: None,
            bounce_max_y: None,
            speed_scale: 1.0,
            zoom_enabled: true,
            auto_handoff_vertical: true,
            use_external_transition: false,
            snap_enabled: false,
            snap_threshold: 200.0,
            easing: Easing::CircOut,
            bounce_duration_ms: 200.0,
            snap_duration_ms: 200.0,
        }
    }
}

impl Configuration {
    /// Hard clamp at the bounds, no corrective animation
    pub fn no_bounce() -> Self {
        Self {
            elastic_bounce: false,
            ..Default::default()
        }
    }

    /// Horizontal pager that snaps by `threshold` per swipe
    pub fn paging(threshold: f64) -> Self {
        Self {
            horizontal_scroll: true,
            snap_enabled: true,
            snap_threshold: threshold,
            ..Default::default()
        }
    }

    /// Delegate step playback to the renderer's own timed transitions
    pub fn external_transitions() -> Self {
        Self {
            use_external_transition: true,
            ..Default::default()
        }
    }

    /// Velocity multiplier actually applied
    pub fn effective_speed_scale(&self) -> f64 {
        if self.speed_scale.is_finite() && self.speed_scale > 0.0 {
            self.speed_scale
        } else {
            1.0
        }
    }

    /// Elastic allowance on `axis` for a container of the given size
    pub fn bounce_allowance(&self, axis: Axis, container: Size) -> f64 {
        let configured = match axis {
            Axis::X => self.bounce_max_x,
            Axis::Y => self.bounce_max_y,
        };
        match configured.map(f64::abs) {
            Some(value) if value.is_finite() && value > 0.0 => value,
            _ => container.along(axis),
        }
    }

    /// Whether `axis` is forced scrollable
    pub fn forces(&self, axis: Axis) -> bool {
        match axis {
            Axis::X => self.horizontal_scroll,
            Axis::Y => self.vertical_scroll,
        }
    }
}
