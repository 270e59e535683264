//! Glide Animation System
//!
//! Step playback for kinetic scrolling.
//!
//! # Features
//!
//! - **Easing**: ease-out curves, including the quarter-circle used for glides
//! - **Steps**: immutable position/duration instructions
//! - **Frame sources**: cancellable next-frame requests with a manual clock
//! - **Single-flight scheduler**: FIFO step queue, one step in flight at a time

pub mod easing;
pub mod frame;
pub mod scheduler;
pub mod step;

pub use easing::Easing;
pub use frame::{FrameId, FrameSource, ManualFrames};
pub use scheduler::{Playback, StepScheduler};
pub use step::{Step, StepKind};
