//! Collaborator capabilities
//!
//! A controller never draws or measures anything itself. It talks to its
//! host through three capabilities: a [`Renderer`] that moves the surface,
//! a [`Measure`] that reports container and content sizes, and a
//! [`FrameSource`] that paces animation frames.

use glide_animation::FrameSource;
use glide_core::geometry::{Rect, Size, Transform};

/// Moves the surface
pub trait Renderer {
    /// Show the surface with `transform` applied, immediately
    fn apply_transform(&mut self, transform: Transform);

    /// Whether the renderer can animate to a transform on its own and report
    /// back through `GestureController::transition_end`
    fn supports_timed_transition(&self) -> bool {
        false
    }

    /// Animate to `transform` over `duration_ms`
    fn transition_to(&mut self, transform: Transform, duration_ms: f64) {
        let _ = duration_ms;
        self.apply_transform(transform);
    }
}

/// Reports layout measurements
pub trait Measure {
    /// Container size, `None` if the container is missing
    fn measure_container(&self) -> Option<Size>;

    /// Natural content size, `None` if the content is missing
    fn measure_content(&self) -> Option<Size>;

    /// Box the content currently occupies relative to the container, with
    /// every transform applied. Hosts that cannot report it return `None`
    /// and the controller derives it from the last transform it rendered.
    fn rendered_content(&self) -> Option<Rect> {
        None
    }
}

/// Everything a controller needs from its environment
pub trait Host: Renderer + Measure + FrameSource {}

impl<T: Renderer + Measure + FrameSource> Host for T {}
