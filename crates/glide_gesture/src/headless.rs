//! Headless host
//!
//! A deterministic [`Host`](crate::host::Host) for tests and scenario
//! replay: fixed sizes, a transform log and a manual frame clock. When timed
//! transitions are enabled it "finishes" them once the clock passes their
//! deadline; `GestureController::pump` forwards that completion.

use glide_animation::{FrameId, FrameSource, ManualFrames};
use glide_core::geometry::{Rect, Size, Transform};

use crate::host::{Measure, Renderer};

/// Transition handed to the host and not yet finished
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunningTransition {
    pub transform: Transform,
    pub ends_at: f64,
}

/// In-memory host
#[derive(Debug, Clone)]
pub struct HeadlessHost {
    container: Option<Size>,
    content: Option<Size>,
    frames: ManualFrames,
    transforms: Vec<Transform>,
    timed_transitions: bool,
    transition: Option<RunningTransition>,
}

impl HeadlessHost {
    pub fn new(container: Size, content: Size) -> Self {
        Self {
            container: Some(container),
            content: Some(content),
            frames: ManualFrames::new(),
            transforms: Vec::new(),
            timed_transitions: false,
            transition: None,
        }
    }

    /// Host whose container and content cannot be measured
    pub fn unmeasured() -> Self {
        Self {
            container: None,
            content: None,
            ..Self::new(Size::default(), Size::default())
        }
    }

    /// Advertise timed transitions
    pub fn with_timed_transitions(mut self) -> Self {
        self.timed_transitions = true;
        self
    }

    pub fn with_frame_interval(mut self, interval_ms: f64) -> Self {
        self.frames = ManualFrames::with_interval(interval_ms);
        self
    }

    pub fn set_container(&mut self, container: Option<Size>) {
        self.container = container;
    }

    pub fn set_content(&mut self, content: Option<Size>) {
        self.content = content;
    }

    pub fn frames(&self) -> &ManualFrames {
        &self.frames
    }

    pub fn frames_mut(&mut self) -> &mut ManualFrames {
        &mut self.frames
    }

    /// Every transform shown so far, oldest first
    pub fn transforms(&self) -> &[Transform] {
        &self.transforms
    }

    /// Transform currently shown
    pub fn last_transform(&self) -> Transform {
        self.transforms.last().copied().unwrap_or_default()
    }

    pub fn clear_log(&mut self) {
        self.transforms.clear();
    }

    /// Timed transition still running
    pub fn running_transition(&self) -> Option<RunningTransition> {
        self.transition
    }

    /// Take the running transition if the clock has passed its end
    pub fn take_finished_transition(&mut self) -> Option<RunningTransition> {
        match self.transition {
            Some(running) if self.frames.now() >= running.ends_at => self.transition.take(),
            _ => None,
        }
    }

    /// Move the clock forward
    pub fn advance(&mut self, ms: f64) {
        self.frames.advance(ms);
    }
}

impl Renderer for HeadlessHost {
    fn apply_transform(&mut self, transform: Transform) {
        tracing::trace!(
            "headless: scale={:.3} x={:.1} y={:.1}",
            transform.scale,
            transform.x,
            transform.y
        );
        self.transition = None;
        self.transforms.push(transform);
    }

    fn supports_timed_transition(&self) -> bool {
        self.timed_transitions
    }

    fn transition_to(&mut self, transform: Transform, duration_ms: f64) {
        self.transforms.push(transform);
        self.transition = Some(RunningTransition {
            transform,
            ends_at: self.frames.now() + duration_ms,
        });
    }
}

impl Measure for HeadlessHost {
    fn measure_container(&self) -> Option<Size> {
        self.container
    }

    fn measure_content(&self) -> Option<Size> {
        self.content
    }

    fn rendered_content(&self) -> Option<Rect> {
        self.content
            .map(|content| self.last_transform().apply_to(content))
    }
}

impl FrameSource for HeadlessHost {
    fn now(&self) -> f64 {
        self.frames.now()
    }

    fn request_frame(&mut self) -> FrameId {
        self.frames.request_frame()
    }

    fn cancel_frame(&mut self, id: FrameId) {
        self.frames.cancel_frame(id);
    }
}
