//! Boundary fix-up
//!
//! After motion ends the rendered content must cover the container wherever
//! it can. Any gap on an overflowing axis is closed by moving the content
//! back to the nearest edge; axes that fit the container return to 0.

use glide_core::geometry::{Axis, Point, Rect, Size};

use crate::scale::clamp_scale;

/// Gaps below this are treated as flush
pub const SETTLE_EPSILON: f64 = 1e-6;

/// Resting position and zoom after a fix-up
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settlement {
    pub target: Point,
    pub scale: f64,
}

impl Settlement {
    /// Whether the surface already rests at `position` with `scale`
    pub fn is_noop(&self, position: Point, scale: f64) -> bool {
        close(self.target.x, position.x)
            && close(self.target.y, position.y)
            && close(self.scale, scale)
    }
}

/// Compute the settled position for content whose rendered box is `extent`.
///
/// Corrections are measured in rendered pixels and divided by `scale` to
/// become translations. The returned zoom is clamped to at least 1.
pub fn settle(extent: Rect, container: Size, current: Point, scale: f64) -> Settlement {
    let divisor = if scale.is_finite() && scale > 0.0 {
        scale
    } else {
        1.0
    };
    Settlement {
        target: Point::new(
            settle_axis(extent, container, current, divisor, Axis::X),
            settle_axis(extent, container, current, divisor, Axis::Y),
        ),
        scale: clamp_scale(scale),
    }
}

fn settle_axis(extent: Rect, container: Size, current: Point, scale: f64, axis: Axis) -> f64 {
    let limit = container.along(axis);
    if extent.size().along(axis) <= limit {
        return 0.0;
    }

    let position = current.along(axis);
    let start = extent.start(axis);
    let end = extent.end(axis);
    if start > SETTLE_EPSILON {
        position - start / scale
    } else if end < limit - SETTLE_EPSILON {
        position - (end - limit) / scale
    } else {
        position
    }
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= SETTLE_EPSILON
}
