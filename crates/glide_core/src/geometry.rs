//! Geometry primitives shared by the physics and the host collaborators

use crate::error::{GestureError, Result};

/// Scroll axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

/// A 2D position in surface units
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component along an axis
    pub fn along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }
}

/// Width and height of a box
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Extent along an axis
    pub fn along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.width,
            Axis::Y => self.height,
        }
    }

    /// Reject NaN, infinite and negative extents
    pub fn validate(self) -> Result<Self> {
        let ok = |v: f64| v.is_finite() && v >= 0.0;
        if ok(self.width) && ok(self.height) {
            Ok(self)
        } else {
            Err(GestureError::InvalidGeometry(format!(
                "{}x{}",
                self.width, self.height
            )))
        }
    }
}

/// A measured box: offset relative to its container plus size
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Leading edge along an axis
    pub fn start(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.left,
            Axis::Y => self.top,
        }
    }

    /// Trailing edge along an axis
    pub fn end(&self, axis: Axis) -> f64 {
        self.start(axis) + self.size().along(axis)
    }
}

/// Scale-then-translate transform pushed to the renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub scale: f64,
    pub x: f64,
    pub y: f64,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        scale: 1.0,
        x: 0.0,
        y: 0.0,
    };

    /// Build a transform, substituting identity components for non-finite input
    pub fn new(scale: f64, x: f64, y: f64) -> Self {
        let scale = if scale.is_finite() && scale != 0.0 {
            scale
        } else {
            1.0
        };
        let finite_or_zero = |v: f64| if v.is_finite() { v } else { 0.0 };
        Self {
            scale,
            x: finite_or_zero(x),
            y: finite_or_zero(y),
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Where a box of natural `size` lands inside its container once this
    /// transform is applied: scaled about its center, translation in scaled
    /// units.
    pub fn apply_to(&self, size: Size) -> Rect {
        let width = size.width * self.scale;
        let height = size.height * self.scale;
        Rect::new(
            self.x * self.scale - (width - size.width) / 2.0,
            self.y * self.scale - (height - size.height) / 2.0,
            width,
            height,
        )
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
