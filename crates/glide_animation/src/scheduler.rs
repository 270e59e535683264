//! Step scheduler
//!
//! Plays queued [`Step`]s one at a time. The scheduler never touches the
//! renderer: `start` and `tick` return a [`Playback`] describing what the
//! owner has to push to the screen. At most one step is in flight, and the
//! only pending frame request is the one this scheduler holds.

use std::collections::VecDeque;

use glide_core::geometry::Point;

use crate::easing::Easing;
use crate::frame::{FrameId, FrameSource};
use crate::step::Step;

/// What the owner must do after a `start` or `tick`
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Playback {
    /// Nothing to play
    Idle,
    /// Render this intermediate position; another frame has been requested
    Frame(Point),
    /// Hand the whole step to the renderer's timed transition; the
    /// scheduler is already idle again and completion arrives from outside
    Transition(Step),
    /// Render the exact target; the step is done and the scheduler is idle
    Finished(Step),
}

#[derive(Debug, Clone, Copy)]
struct InFlight {
    step: Step,
    from: Point,
    started_at: f64,
}

/// Single-flight step player
#[derive(Debug, Clone)]
pub struct StepScheduler {
    queue: VecDeque<Step>,
    in_flight: Option<InFlight>,
    frame: Option<FrameId>,
    easing: Easing,
}

impl StepScheduler {
    pub fn new() -> Self {
        Self::with_easing(Easing::default())
    }

    pub fn with_easing(easing: Easing) -> Self {
        Self {
            queue: VecDeque::new(),
            in_flight: None,
            frame: None,
            easing,
        }
    }

    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }

    /// A step is playing through the tick loop
    pub fn is_animating(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Steps waiting behind the one in flight
    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    /// The step currently playing
    pub fn current_step(&self) -> Option<&Step> {
        self.in_flight.as_ref().map(|f| &f.step)
    }

    /// Frame request this scheduler is waiting on
    pub fn pending_frame(&self) -> Option<FrameId> {
        self.frame
    }

    /// Append a step and start it if nothing is playing.
    ///
    /// While a step is in flight this only queues; it never preempts.
    pub fn enqueue<F: FrameSource + ?Sized>(
        &mut self,
        step: Step,
        from: Point,
        external_transition: bool,
        frames: &mut F,
    ) -> Playback {
        self.queue.push_back(step);
        self.start(from, external_transition, frames)
    }

    /// Dequeue the next step and begin playing it from `from`.
    ///
    /// No-op if a step is already in flight or the queue is empty.
    pub fn start<F: FrameSource + ?Sized>(
        &mut self,
        from: Point,
        external_transition: bool,
        frames: &mut F,
    ) -> Playback {
        if self.in_flight.is_some() {
            return Playback::Idle;
        }
        let Some(mut step) = self.queue.pop_front() else {
            return Playback::Idle;
        };

        if step.target == from {
            step.duration_ms = 0.0;
        }

        if external_transition && !step.is_instant() {
            tracing::trace!(
                "scheduler: external transition to ({:.1}, {:.1}) over {:.0}ms",
                step.target.x,
                step.target.y,
                step.duration_ms
            );
            return Playback::Transition(step);
        }

        self.in_flight = Some(InFlight {
            step,
            from,
            started_at: frames.now(),
        });
        self.advance(frames)
    }

    /// Deliver a fired frame. Frames other than the one we asked for are stale.
    pub fn tick<F: FrameSource + ?Sized>(&mut self, id: FrameId, frames: &mut F) -> Playback {
        if self.frame != Some(id) {
            tracing::trace!("scheduler: ignoring stale frame {:?}", id);
            return Playback::Idle;
        }
        self.frame = None;
        self.advance(frames)
    }

    /// Cancel the pending frame, drop the queue and the step in flight.
    /// Safe to call at any time.
    pub fn stop<F: FrameSource + ?Sized>(&mut self, frames: &mut F) {
        if let Some(id) = self.frame.take() {
            frames.cancel_frame(id);
        }
        self.queue.clear();
        self.in_flight = None;
    }

    fn advance<F: FrameSource + ?Sized>(&mut self, frames: &mut F) -> Playback {
        let Some(flight) = self.in_flight else {
            return Playback::Idle;
        };

        let elapsed = frames.now() - flight.started_at;
        if elapsed >= flight.step.duration_ms {
            self.in_flight = None;
            return Playback::Finished(flight.step);
        }

        let progress = self.easing.apply(elapsed / flight.step.duration_ms);
        let position = Point::new(
            flight.from.x + (flight.step.target.x - flight.from.x) * progress,
            flight.from.y + (flight.step.target.y - flight.from.y) * progress,
        );
        self.frame = Some(frames.request_frame());
        Playback::Frame(position)
    }
}

impl Default for StepScheduler {
    fn default() -> Self {
        Self::new()
    }
}
