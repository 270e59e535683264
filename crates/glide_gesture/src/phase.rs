//! Gesture lifecycle phases

use glide_core::fsm::StateTransitions;

/// Where a controller is in its press/release/settle cycle.
///
/// Pinching runs in parallel and is tracked separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GesturePhase {
    #[default]
    Idle,
    /// A finger is down
    Tracking,
    /// Finger lifted, outcome being decided
    Releasing,
    /// A step is playing or a timed transition is running
    Animating,
}

/// Phase machine input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhaseEvent {
    Press,
    Release,
    Animate,
    Settle,
}

impl StateTransitions for GesturePhase {
    type Event = PhaseEvent;

    fn on_event(&self, event: PhaseEvent) -> Option<Self> {
        use GesturePhase::*;
        use PhaseEvent::*;

        match (self, event) {
            (Idle | Releasing | Animating, Press) => Some(Tracking),
            (Tracking, Release) => Some(Releasing),
            (Idle | Releasing, Animate) => Some(Animating),
            (Releasing | Animating, Settle) => Some(Idle),
            _ => None,
        }
    }
}
