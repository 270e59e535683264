//! State Machine Runtime
//!
//! Flat state machines for gesture lifecycles. States are plain `Copy` enums
//! that describe their own transitions through [`StateTransitions`]; a
//! [`StateMachine`] drives one of them and records the transition history.
//!
//! # Example
//!
//! ```rust
//! use glide_core::fsm::{StateMachine, StateTransitions};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
//! enum Door {
//!     Open,
//!     Closed,
//! }
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
//! enum Push {
//!     Open,
//!     Close,
//! }
//!
//! impl StateTransitions for Door {
//!     type Event = Push;
//!
//!     fn on_event(&self, event: Push) -> Option<Self> {
//!         match (self, event) {
//!             (Door::Closed, Push::Open) => Some(Door::Open),
//!             (Door::Open, Push::Close) => Some(Door::Closed),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let mut door = StateMachine::new(Door::Closed);
//! door.send(Push::Open);
//! assert!(door.is_in(Door::Open));
//! ```

use smallvec::SmallVec;
use std::fmt::Debug;
use std::hash::Hash;

/// A state that knows which event moves it where.
pub trait StateTransitions: Clone + Copy + PartialEq + Eq + Hash + Debug + 'static {
    /// Event type accepted by this state machine
    type Event: Clone + Copy + PartialEq + Eq + Debug;

    /// Handle an event and return the new state, or None if no transition
    fn on_event(&self, event: Self::Event) -> Option<Self>;
}

/// Maximum number of transitions kept for debugging
const HISTORY_LIMIT: usize = 32;

/// A state machine instance
#[derive(Debug, Clone)]
pub struct StateMachine<S: StateTransitions> {
    current_state: S,
    /// History of state transitions (for debugging)
    history: SmallVec<[(S, S::Event, S); 8]>,
}

impl<S: StateTransitions> StateMachine<S> {
    /// Create a new state machine in its initial state
    pub fn new(initial_state: S) -> Self {
        Self {
            current_state: initial_state,
            history: SmallVec::new(),
        }
    }

    /// Get the current state
    pub fn current_state(&self) -> S {
        self.current_state
    }

    /// Check if we're in a specific state
    pub fn is_in(&self, state: S) -> bool {
        self.current_state == state
    }

    /// Check if an event can trigger a transition from current state
    pub fn can_send(&self, event: S::Event) -> bool {
        self.current_state.on_event(event).is_some()
    }

    /// Send an event to the state machine, potentially triggering a transition
    pub fn send(&mut self, event: S::Event) -> S {
        let current = self.current_state;
        let Some(to_state) = current.on_event(event) else {
            tracing::trace!("fsm: {:?} ignores {:?}", current, event);
            return current;
        };

        if self.history.len() == HISTORY_LIMIT {
            self.history.remove(0);
        }
        self.history.push((current, event, to_state));
        self.current_state = to_state;

        tracing::trace!("fsm: {:?} --{:?}--> {:?}", current, event, to_state);
        to_state
    }

    /// Force a state without consulting the transition table
    pub fn reset(&mut self, state: S) {
        self.current_state = state;
    }

    /// Get transition history
    pub fn history(&self) -> &[(S, S::Event, S)] {
        &self.history
    }

    /// Clear transition history
    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

impl<S: StateTransitions + Default> Default for StateMachine<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}
