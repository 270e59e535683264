//! Pinch scale tracking
//!
//! A pinch reports its scale relative to the moment it started, so the live
//! zoom is `delta * base`. The base only moves when the pinch ends.

use glide_core::input::PinchSample;

/// Lowest zoom the surface settles at
pub const MIN_SCALE: f64 = 1.0;

/// Clamp a settled zoom to [`MIN_SCALE`]; garbage becomes 1
pub fn clamp_scale(scale: f64) -> f64 {
    if !scale.is_finite() {
        return 1.0;
    }
    scale.max(MIN_SCALE)
}

/// Tracks one pinch against a base scale
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScaleController {
    pinching: bool,
    live: Option<f64>,
}

impl ScaleController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pinching(&self) -> bool {
        self.pinching
    }

    /// Zoom currently shown, if the pinch has produced one
    pub fn live(&self) -> Option<f64> {
        self.live
    }

    pub fn begin(&mut self) {
        self.pinching = true;
        self.live = None;
    }

    /// Apply a pinch sample to `base`. Invalid samples are dropped.
    pub fn update(&mut self, base: f64, sample: PinchSample) -> Option<f64> {
        if !self.pinching || !sample.is_valid() {
            return None;
        }
        let scale = sample.scale_delta * base;
        if !scale.is_finite() {
            return None;
        }
        self.live = Some(scale);
        Some(scale)
    }

    /// Finish the pinch, yielding the new base if anything changed
    pub fn end(&mut self) -> Option<f64> {
        self.pinching = false;
        self.live.take()
    }

    pub fn cancel(&mut self) {
        self.pinching = false;
        self.live = None;
    }
}
