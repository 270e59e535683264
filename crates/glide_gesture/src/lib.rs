//! Glide Gesture Engine
//!
//! Kinetic pan with elastic bounds, release momentum, horizontal snapping
//! and pinch zoom, driven by normalized input samples.

pub mod bounds;
pub mod config;
pub mod controller;
pub mod headless;
pub mod host;
pub mod momentum;
pub mod phase;
pub mod scale;
pub mod settle;
pub mod snap;
pub mod state;

pub use bounds::{AxisBounds, Bounds};
pub use config::Configuration;
pub use controller::{GestureController, Release, SampleDisposition};
pub use headless::HeadlessHost;
pub use host::{Host, Measure, Renderer};
pub use momentum::Momentum;
pub use phase::{GesturePhase, PhaseEvent};
pub use scale::ScaleController;
pub use settle::Settlement;
pub use snap::{SnapDecision, SnapState};
pub use state::{BaseKey, DataKey, DataValue, Geometry, GestureState};
