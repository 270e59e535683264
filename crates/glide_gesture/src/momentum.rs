//! Release momentum
//!
//! Projects the release velocity into a glide under constant deceleration.
//! A glide that would leave the bounds is slowed down so that it lands a
//! little past the edge instead of being clipped hard; the settle pass then
//! brings it back.

/// Constant deceleration in px/ms²
pub const DECELERATION: f64 = 0.0006;

/// Only motion within this window (ms) counts towards release velocity
pub const MOMENTUM_WINDOW_MS: f64 = 300.0;

/// Shortest glide ever scheduled (ms)
pub const MIN_GLIDE_MS: f64 = 10.0;

/// A projected glide along one axis
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Momentum {
    /// Signed travel distance, same sign as the release delta
    pub distance: f64,
    /// Duration in whole milliseconds
    pub duration_ms: f64,
}

impl Momentum {
    pub const NONE: Momentum = Momentum {
        distance: 0.0,
        duration_ms: 0.0,
    };

    pub fn is_none(&self) -> bool {
        self.distance == 0.0
    }
}

/// Project a release into a glide.
///
/// - `delta`: distance covered in the velocity window
/// - `elapsed_ms`: length of the velocity window
/// - `room_above` / `room_below`: distance left before the bound in the
///   positive / negative direction
/// - `elastic_allowance`: how far past a bound a glide may land, as a scale
///   for the overshoot (0 disables overshoot)
///
/// Degenerate input (no time, no motion, non-finite numbers) yields
/// [`Momentum::NONE`].
pub fn momentum(
    delta: f64,
    elapsed_ms: f64,
    room_above: f64,
    room_below: f64,
    elastic_allowance: f64,
    speed_scale: f64,
) -> Momentum {
    if !(elapsed_ms > 0.0) || delta == 0.0 || !delta.is_finite() || !elapsed_ms.is_finite() {
        return Momentum::NONE;
    }

    let mut speed = delta.abs() * speed_scale / elapsed_ms;
    if !(speed > 0.0) || !speed.is_finite() {
        return Momentum::NONE;
    }
    let mut distance = speed * speed / (2.0 * DECELERATION);

    let room = if delta > 0.0 { room_above } else { room_below };
    let room = if room.is_finite() { room.max(0.0) } else { 0.0 };
    if distance > room {
        let overshoot = elastic_allowance / (6.0 / (distance / speed * DECELERATION));
        let landing = room + overshoot;
        speed *= landing / distance;
        distance = landing;
    }

    Momentum {
        distance: distance.copysign(delta),
        duration_ms: (speed / DECELERATION).round(),
    }
}
