//! Glide Core
//!
//! Foundational primitives for the Glide kinetic viewport:
//!
//! - **Geometry**: points, sizes, measured boxes and render transforms
//! - **Input**: normalized drag and pinch samples
//! - **Events**: typed lifecycle events and their dispatcher
//! - **State Machines**: small typed statecharts for gesture phases
//!
//! # Example
//!
//! ```rust
//! use glide_core::events::{EventDispatcher, GestureEvent, GestureEventKind};
//! use glide_core::geometry::Point;
//!
//! let mut dispatcher = EventDispatcher::new();
//! dispatcher.register(GestureEventKind::ScrollEnd, |e| {
//!     println!("settled at {:?}", e.position);
//! });
//!
//! dispatcher.dispatch(&GestureEvent::new(
//!     GestureEventKind::ScrollEnd,
//!     Point::new(0.0, -120.0),
//!     1.0,
//!     16.0,
//! ));
//! ```

pub mod error;
pub mod events;
pub mod fsm;
pub mod geometry;
pub mod input;

pub use error::{GestureError, Result};
pub use events::{EventDispatcher, EventHandler, GestureEvent, GestureEventKind};
pub use fsm::{StateMachine, StateTransitions};
pub use geometry::{Axis, Point, Rect, Size, Transform};
pub use input::{PinchSample, TouchSample};
