//! Scroll extents
//!
//! Positions are translations of the content relative to its container, so
//! panning towards the end of the content makes them negative. The legal
//! range grows symmetrically as the content zooms about its center.

use glide_core::geometry::{Axis, Size};

/// Legal `[min, max]` range on one axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisBounds {
    pub min: f64,
    pub max: f64,
    /// The axis follows the finger (scaled content overflows, or forced)
    pub movable: bool,
}

impl AxisBounds {
    /// Collapsed, non-movable range
    pub const FIXED: AxisBounds = AxisBounds {
        min: 0.0,
        max: 0.0,
        movable: false,
    };

    /// Compute the range for one axis.
    ///
    /// Content that fits the container collapses the range to `[0, 0]`; a
    /// forced axis still moves (elastically) but always settles back to 0.
    pub fn compute(container: f64, content: f64, scale: f64, forced: bool) -> Self {
        if !(content * scale > container) {
            return Self {
                movable: forced,
                ..Self::FIXED
            };
        }
        let max = (scale - 1.0) * content / 2.0;
        Self {
            min: container - content - max,
            max,
            movable: true,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }

    /// Distance that may still be travelled towards `max`
    pub fn room_above(&self, value: f64) -> f64 {
        self.max - value
    }

    /// Distance that may still be travelled towards `min`
    pub fn room_below(&self, value: f64) -> f64 {
        value - self.min
    }

    /// Soften the part of `value` lying outside the range by
    /// `allowance / container`
    pub fn elastic(&self, value: f64, allowance: f64, container: f64) -> f64 {
        if !(container > 0.0) {
            return self.clamp(value);
        }
        let ratio = allowance / container;
        if value > self.max {
            (value - self.max) * ratio + self.max
        } else if value < self.min {
            (value - self.min) * ratio + self.min
        } else {
            value
        }
    }
}

impl Default for AxisBounds {
    fn default() -> Self {
        Self::FIXED
    }
}

/// Extents on both axes
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub x: AxisBounds,
    pub y: AxisBounds,
}

impl Bounds {
    pub fn compute(
        container: Size,
        content: Size,
        scale: f64,
        force_x: bool,
        force_y: bool,
    ) -> Self {
        Self {
            x: AxisBounds::compute(container.width, content.width, scale, force_x),
            y: AxisBounds::compute(container.height, content.height, scale, force_y),
        }
    }

    pub fn along(&self, axis: Axis) -> &AxisBounds {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
        }
    }
}
