//! Normalized input samples
//!
//! The platform layer converts raw touch and gesture events into these
//! samples before handing them to a controller.

/// One drag sample (press, move or release)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchSample {
    /// Page X of the first touch point
    pub page_x: f64,
    /// Page Y of the first touch point
    pub page_y: f64,
    /// Number of active touch points
    pub touch_count: u32,
    /// Timestamp in milliseconds
    pub timestamp: f64,
}

impl TouchSample {
    /// A single-finger sample
    pub fn single(page_x: f64, page_y: f64, timestamp: f64) -> Self {
        Self {
            page_x,
            page_y,
            touch_count: 1,
            timestamp,
        }
    }

    /// Same sample with a different touch count
    pub fn with_touches(mut self, touch_count: u32) -> Self {
        self.touch_count = touch_count;
        self
    }

    /// Exactly one finger down
    pub fn is_single(&self) -> bool {
        self.touch_count == 1
    }

    /// Coordinates are usable
    pub fn is_finite(&self) -> bool {
        self.page_x.is_finite() && self.page_y.is_finite() && self.timestamp.is_finite()
    }
}

/// One pinch sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinchSample {
    /// Scale relative to the scale at pinch start (1.0 = unchanged)
    pub scale_delta: f64,
    /// Timestamp in milliseconds
    pub timestamp: f64,
}

impl PinchSample {
    pub fn new(scale_delta: f64, timestamp: f64) -> Self {
        Self {
            scale_delta,
            timestamp,
        }
    }

    /// A usable, strictly positive scale factor
    pub fn is_valid(&self) -> bool {
        self.scale_delta.is_finite() && self.scale_delta > 0.0
    }
}
