//! Easing functions for step playback

/// Easing function type
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseOutQuad,
    EaseOutCubic,
    /// Quarter-circle ease-out: `sqrt(1 - (t - 1)²)`. Fast start, smooth stop.
    #[default]
    CircOut,
}

impl Easing {
    /// Apply the easing function to a progress value (0.0 to 1.0)
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::CircOut => {
                let shifted = t - 1.0;
                (1.0 - shifted * shifted).sqrt()
            }
        }
    }

    /// Parse a curve name (`linear`, `ease-out-quad`, `ease-out-cubic`, `circ-out`)
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "linear" => Some(Easing::Linear),
            "ease-out-quad" => Some(Easing::EaseOutQuad),
            "ease-out-cubic" => Some(Easing::EaseOutCubic),
            "circ-out" => Some(Easing::CircOut),
            _ => None,
        }
    }
}
