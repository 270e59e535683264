//! Gesture controller
//!
//! Turns drag and pinch samples into surface transforms. One controller owns
//! one [`GestureState`], one step scheduler and one host; it is driven
//! entirely by its caller (input samples, fired frames, transition
//! completions) and never blocks.
//!
//! # Example
//!
//! ```rust
//! use glide_core::geometry::Size;
//! use glide_core::input::TouchSample;
//! use glide_gesture::{Configuration, GestureController, HeadlessHost, Release};
//!
//! let host = HeadlessHost::new(Size::new(1000.0, 600.0), Size::new(3000.0, 600.0));
//! let mut controller = GestureController::new(host, Configuration::default());
//!
//! controller.drag_start(TouchSample::single(500.0, 300.0, 0.0));
//! controller.drag_move(TouchSample::single(450.0, 300.0, 50.0));
//! let release = controller.drag_end(TouchSample::single(450.0, 300.0, 50.0));
//! assert!(matches!(release, Release::Momentum(_)));
//!
//! controller.run_frames(500);
//! assert!(controller.position().x < -50.0);
//! ```

use glide_animation::{FrameId, Playback, Step, StepKind, StepScheduler};
use glide_core::error::{GestureError, Result};
use glide_core::events::{EventDispatcher, GestureEvent, GestureEventKind};
use glide_core::fsm::StateMachine;
use glide_core::geometry::{Axis, Point, Rect, Transform};
use glide_core::input::{PinchSample, TouchSample};

use crate::bounds::Bounds;
use crate::config::Configuration;
use crate::headless::HeadlessHost;
use crate::host::Host;
use crate::momentum::{momentum, Momentum, MIN_GLIDE_MS, MOMENTUM_WINDOW_MS};
use crate::phase::{GesturePhase, PhaseEvent};
use crate::scale::ScaleController;
use crate::settle::settle;
use crate::snap::{decide_snap, SnapState};
use crate::state::{BaseKey, DataKey, DataValue, Geometry, GestureState};

/// What the caller should do with a move sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleDisposition {
    /// The controller moved the surface; suppress native scrolling
    Consumed,
    /// Vertical hand-off: let the outer region scroll instead
    Deferred,
    /// Nothing happened (disabled, malformed or suppressed)
    Ignored,
}

/// How a drag ended
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Release {
    /// No drag was being tracked
    Ignored,
    /// Released without moving; the caller may dispatch a click
    Tap,
    /// A snap step was scheduled
    Snap(StepKind),
    /// A glide was scheduled
    Momentum(Step),
    /// The surface settled (or is bouncing back) without a glide
    Settle,
}

/// Kinetic viewport controller
pub struct GestureController<H: Host> {
    host: H,
    config: Configuration,
    state: GestureState,
    geometry: Geometry,
    scheduler: StepScheduler,
    pinch: ScaleController,
    snap: SnapState,
    phase: StateMachine<GesturePhase>,
    dispatcher: EventDispatcher,
    touch_enabled: bool,
    gesture_enabled: bool,
    /// The current drag still drives the surface
    captured: bool,
    /// Zoom of the last transform pushed to the host
    rendered_scale: f64,
    /// Step handed to the host's timed transition
    transition: Option<Step>,
}

impl<H: Host> GestureController<H> {
    /// Create a controller and take a first measurement.
    ///
    /// A failed measurement is logged; drags are ignored until a later
    /// measurement (on drag start or [`refresh_bounds`](Self::refresh_bounds))
    /// succeeds.
    pub fn new(host: H, config: Configuration) -> Self {
        let mut controller = Self {
            host,
            scheduler: StepScheduler::with_easing(config.easing),
            config,
            state: GestureState::default(),
            geometry: Geometry::default(),
            pinch: ScaleController::new(),
            snap: SnapState::None,
            phase: StateMachine::new(GesturePhase::Idle),
            dispatcher: EventDispatcher::new(),
            touch_enabled: true,
            gesture_enabled: true,
            captured: false,
            rendered_scale: 1.0,
            transition: None,
        };
        if let Err(err) = controller.refresh_bounds() {
            tracing::warn!("gesture: initial measurement failed: {}", err);
        }
        controller
    }

    // =========================================================================
    // Configuration and events
    // =========================================================================

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Replace the whole configuration
    pub fn set_config(&mut self, config: Configuration) {
        self.scheduler.set_easing(config.easing);
        self.config = config;
        self.recompute_bounds();
    }

    /// Register a handler for one event kind
    pub fn on<F>(&mut self, kind: GestureEventKind, handler: F)
    where
        F: Fn(&GestureEvent) + Send + Sync + 'static,
    {
        self.dispatcher.register(kind, handler);
    }

    /// Register one handler for every event kind
    pub fn on_all<F>(&mut self, handler: F)
    where
        F: Fn(&GestureEvent) + Send + Sync + Clone + 'static,
    {
        self.dispatcher.register_all(handler);
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn bounds(&self) -> &Bounds {
        &self.state.bounds
    }

    /// Last rendered position
    pub fn position(&self) -> Point {
        self.state.current
    }

    /// Settled zoom
    pub fn scale(&self) -> f64 {
        self.state.scale
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase.current_state()
    }

    pub fn is_pinching(&self) -> bool {
        self.pinch.is_pinching()
    }

    /// A step is playing or a timed transition has not reported back
    pub fn is_animating(&self) -> bool {
        self.scheduler.is_animating() || self.transition.is_some()
    }

    /// Steps queued behind the one playing
    pub fn queued_steps(&self) -> usize {
        self.scheduler.queued()
    }

    pub fn snap_state(&self) -> SnapState {
        self.snap
    }

    pub fn set_snap_state(&mut self, snap: SnapState) {
        self.snap = snap;
    }

    pub fn get_data(&self, key: DataKey) -> DataValue {
        self.state.get(key)
    }

    /// Trusted direct write into the gesture state
    pub fn set_data(&mut self, key: DataKey, value: impl Into<DataValue>) -> Result<()> {
        self.state.set(key, value.into())
    }

    pub fn get_base_data(&self, key: BaseKey) -> f64 {
        self.geometry.get(key)
    }

    /// Trusted direct write into the measured geometry
    pub fn set_base_data(&mut self, key: BaseKey, value: f64) {
        self.geometry.set(key, value);
    }

    // =========================================================================
    // Enable / disable
    // =========================================================================

    pub fn is_touch_enabled(&self) -> bool {
        self.touch_enabled
    }

    pub fn enable_touch(&mut self) {
        self.touch_enabled = true;
    }

    /// Stop any animation and ignore drag samples until re-enabled
    pub fn disable_touch(&mut self) {
        self.stop();
        self.touch_enabled = false;
        self.captured = false;
        if self.phase.is_in(GesturePhase::Tracking) {
            let phase = if self.is_animating() {
                GesturePhase::Animating
            } else {
                GesturePhase::Idle
            };
            self.phase.reset(phase);
        }
    }

    pub fn is_gesture_enabled(&self) -> bool {
        self.gesture_enabled
    }

    pub fn enable_gesture(&mut self) {
        self.gesture_enabled = true;
    }

    /// Ignore pinch samples until re-enabled
    pub fn disable_gesture(&mut self) {
        self.gesture_enabled = false;
        if self.pinch.live().is_some() {
            let timestamp = self.host.now();
            self.render(self.state.scale, self.state.current, timestamp);
        }
        self.pinch.cancel();
    }

    /// Tear down, returning the host. Pending frames are cancelled and
    /// handlers dropped.
    pub fn destroy(mut self) -> H {
        self.scheduler.stop(&mut self.host);
        self.dispatcher.clear();
        self.host
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Re-measure container and content and recompute the bounds
    pub fn refresh_bounds(&mut self) -> Result<()> {
        let container = self
            .host
            .measure_container()
            .ok_or(GestureError::MissingContainer)?
            .validate()?;
        let content = self
            .host
            .measure_content()
            .ok_or(GestureError::MissingContent)?
            .validate()?;
        self.geometry = Geometry::new(container, content);
        self.recompute_bounds();
        Ok(())
    }

    fn recompute_bounds(&mut self) {
        self.state.bounds = Bounds::compute(
            self.geometry.container,
            self.geometry.content,
            self.state.scale,
            self.config.forces(Axis::X),
            self.config.forces(Axis::Y),
        );
        tracing::debug!(
            "gesture: bounds x=[{:.1}, {:.1}] y=[{:.1}, {:.1}] scale={:.3}",
            self.state.bounds.x.min,
            self.state.bounds.x.max,
            self.state.bounds.y.min,
            self.state.bounds.y.max,
            self.state.scale
        );
    }

    fn allowance(&self, axis: Axis) -> f64 {
        self.config.bounce_allowance(axis, self.geometry.container)
    }

    // =========================================================================
    // Drag
    // =========================================================================

    pub fn drag_start(&mut self, sample: TouchSample) {
        if !self.touch_enabled {
            return;
        }
        if !sample.is_finite() {
            tracing::debug!("gesture: ignoring malformed drag start {:?}", sample);
            return;
        }
        if let Err(err) = self.refresh_bounds() {
            tracing::warn!("gesture: drag ignored, {}", err);
            self.captured = false;
            return;
        }

        self.captured = true;
        self.state.pinched = false;
        self.state.gesture_start_time = sample.timestamp;
        if !self.snap.is_active() {
            self.scheduler.stop(&mut self.host);
            self.transition = None;
        }
        self.state.origin = self.state.current;
        self.state.drag_start = self.state.current;
        self.state.moved = false;
        self.state.dist = Point::ZERO;
        self.state.adjusted = Point::ZERO;
        if sample.is_single() {
            self.state.pointer = Point::new(sample.page_x, sample.page_y);
        }

        self.phase.send(PhaseEvent::Press);
        self.emit(GestureEventKind::DragStart, sample.timestamp);
    }

    pub fn drag_move(&mut self, sample: TouchSample) -> SampleDisposition {
        if !self.touch_enabled
            || !self.phase.is_in(GesturePhase::Tracking)
            || sample.touch_count == 0
            || !sample.is_finite()
        {
            return SampleDisposition::Ignored;
        }
        let page = Point::new(sample.page_x, sample.page_y);

        if self.snap.is_active() || !sample.is_single() {
            self.state.pointer = page;
            self.captured = false;
            self.emit(GestureEventKind::DragMoveStart, sample.timestamp);
            return SampleDisposition::Ignored;
        }

        let state = &mut self.state;
        state.moved = true;
        state.dist = Point::new(page.x - state.pointer.x, page.y - state.pointer.y);
        let along = |movable: bool, d: f64| if movable { d } else { 0.0 };
        let raw = Point::new(
            along(state.bounds.x.movable, state.dist.x) / state.scale + state.origin.x,
            along(state.bounds.y.movable, state.dist.y) / state.scale + state.origin.y,
        );

        if sample.timestamp - state.gesture_start_time > MOMENTUM_WINDOW_MS {
            state.gesture_start_time = sample.timestamp;
            state.drag_start = state.current;
        }

        let mut disposition = SampleDisposition::Consumed;
        if self.config.auto_handoff_vertical {
            let y = &self.state.bounds.y;
            let origin_y = self.state.origin.y;
            if (raw.y > y.max && origin_y == y.max) || (raw.y < y.min && origin_y == y.min) {
                self.captured = false;
                disposition = SampleDisposition::Deferred;
            }
        }

        let bounds = self.state.bounds;
        self.state.adjusted = if self.config.elastic_bounce {
            Point::new(
                bounds.x.elastic(raw.x, self.allowance(Axis::X), self.geometry.container.width),
                bounds.y.elastic(raw.y, self.allowance(Axis::Y), self.geometry.container.height),
            )
        } else {
            Point::new(bounds.x.clamp(raw.x), bounds.y.clamp(raw.y))
        };

        self.emit(GestureEventKind::DragMoveStart, sample.timestamp);
        if !self.captured {
            return match disposition {
                SampleDisposition::Deferred => SampleDisposition::Deferred,
                _ => SampleDisposition::Ignored,
            };
        }

        self.render(self.state.scale, self.state.adjusted, sample.timestamp);
        self.emit(GestureEventKind::DragMoveEnd, sample.timestamp);
        disposition
    }

    pub fn drag_end(&mut self, sample: TouchSample) -> Release {
        if !self.touch_enabled || !self.phase.is_in(GesturePhase::Tracking) {
            return Release::Ignored;
        }
        let timestamp = self.stamp(sample.timestamp);
        let elapsed = timestamp - self.state.gesture_start_time;
        self.phase.send(PhaseEvent::Release);

        let release = if !self.captured {
            self.state.origin = self.state.current;
            if self.snap.is_active() {
                Release::Ignored
            } else if self.config.snap_enabled {
                self.release_snap(elapsed)
            } else if self.state.pinched {
                self.fix_position(timestamp);
                Release::Settle
            } else {
                Release::Ignored
            }
        } else if self.state.moved {
            self.emit(GestureEventKind::MomentumStart, timestamp);
            if self.config.snap_enabled {
                self.release_snap(elapsed)
            } else if let Some(step) = self.release_momentum(elapsed) {
                Release::Momentum(step)
            } else {
                self.fix_position(timestamp);
                Release::Settle
            }
        } else {
            Release::Tap
        };

        self.captured = false;
        tracing::debug!("gesture: released after {:.0}ms -> {:?}", elapsed, release);
        self.emit(GestureEventKind::DragEnd, timestamp);
        self.sync_phase();
        release
    }

    fn release_snap(&mut self, elapsed: f64) -> Release {
        let decision = decide_snap(
            self.state.origin.x,
            self.state.dist.x,
            elapsed,
            &self.state.bounds.x,
            self.config.snap_threshold,
            self.geometry.container.width,
        );
        let kind = self.snap(decision.target, self.state.current.y);
        Release::Snap(kind)
    }

    fn release_momentum(&mut self, elapsed: f64) -> Option<Step> {
        if !(self.config.momentum && elapsed < MOMENTUM_WINDOW_MS) {
            return None;
        }

        let current = self.state.current;
        let bounds = self.state.bounds;
        let speed_scale = self.config.effective_speed_scale();
        let project = |axis: Axis| {
            let b = bounds.along(axis);
            if !b.movable {
                return Momentum::NONE;
            }
            let position = current.along(axis);
            let allowance = if self.config.elastic_bounce {
                self.allowance(axis)
            } else {
                0.0
            };
            let mut m = momentum(
                position - self.state.drag_start.along(axis),
                elapsed,
                b.room_above(position),
                b.room_below(position),
                allowance,
                speed_scale,
            );
            // Already past a bound and still heading out: no glide
            let landing = position + m.distance;
            if (position > b.max && landing > b.max) || (position < b.min && landing < b.min) {
                m = Momentum::NONE;
            }
            m
        };
        let mx = project(Axis::X);
        let my = project(Axis::Y);
        if mx.is_none() && my.is_none() {
            return None;
        }

        let duration = mx.duration_ms.max(my.duration_ms).max(MIN_GLIDE_MS);
        let target = Point::new(
            (current.x + mx.distance).round(),
            (current.y + my.distance).round(),
        );
        let step = Step::new(target, duration, StepKind::Transition);
        tracing::debug!(
            "gesture: glide to ({:.0}, {:.0}) over {:.0}ms",
            target.x,
            target.y,
            duration
        );
        self.scroll_to_step(step);
        self.state.origin = target;
        Some(step)
    }

    // =========================================================================
    // Pinch
    // =========================================================================

    fn accepts_pinch(&self) -> bool {
        self.gesture_enabled && self.config.zoom_enabled
    }

    pub fn pinch_start(&mut self, sample: PinchSample) {
        if !self.accepts_pinch() {
            return;
        }
        self.pinch.begin();
        self.emit(GestureEventKind::GestureStart, self.stamp(sample.timestamp));
    }

    pub fn pinch_change(&mut self, sample: PinchSample) {
        if !self.accepts_pinch() {
            return;
        }
        let Some(scale) = self.pinch.update(self.state.scale, sample) else {
            return;
        };
        let timestamp = self.stamp(sample.timestamp);
        self.render(scale, self.state.origin, timestamp);
        self.emit(GestureEventKind::GestureChange, timestamp);
    }

    pub fn pinch_end(&mut self, sample: PinchSample) {
        if !self.pinch.is_pinching() {
            return;
        }
        let timestamp = self.stamp(sample.timestamp);
        if let Some(scale) = self.pinch.end() {
            self.state.scale = scale;
            self.state.pinched = true;
            self.recompute_bounds();
        }
        self.emit(GestureEventKind::GestureEnd, timestamp);

        // Without a finger tracking, nothing else will settle the new zoom
        if self.state.pinched && self.phase.is_in(GesturePhase::Idle) && !self.is_animating() {
            self.fix_position(timestamp);
            self.sync_phase();
        }
    }

    // =========================================================================
    // Control
    // =========================================================================

    /// Animate to `(x, y)` over `duration_ms`, replacing any playback
    pub fn scroll_to(&mut self, duration_ms: f64, x: f64, y: f64) {
        self.scroll_to_step(Step::to(x, y, duration_ms));
    }

    /// Play `step`, replacing any playback
    pub fn scroll_to_step(&mut self, step: Step) {
        self.scheduler.stop(&mut self.host);
        self.transition = None;
        let external = self.wants_external_transition();
        let playback = self
            .scheduler
            .enqueue(step, self.state.current, external, &mut self.host);
        self.apply_playback(playback);
        self.sync_phase();
    }

    /// Queue `step` behind the one playing without interrupting it
    pub fn enqueue(&mut self, step: Step) {
        let external = self.wants_external_transition();
        let playback = self
            .scheduler
            .enqueue(step, self.state.current, external, &mut self.host);
        self.apply_playback(playback);
        self.sync_phase();
    }

    /// Snap to `(x, y)`. Moving away from the current origin is an update,
    /// staying on it a bounce; returns which.
    pub fn snap(&mut self, x: f64, y: f64) -> StepKind {
        let kind = if x != self.state.origin.x {
            StepKind::SnapUpdate
        } else {
            StepKind::SnapBounce
        };
        self.state.origin = Point::new(x, y);
        self.snap = SnapState::from(kind);
        let timestamp = self.host.now();
        self.emit(GestureEventKind::SnapStart, timestamp);
        self.scroll_to_step(Step::new(
            Point::new(x, y),
            self.config.snap_duration_ms,
            kind,
        ));
        kind
    }

    /// Cancel the pending frame and drop every queued step. Always safe.
    pub fn stop(&mut self) {
        self.scheduler.stop(&mut self.host);
        self.transition = None;
        self.sync_phase();
    }

    /// Return to the initial state (unzoomed, at the origin)
    pub fn reset_state(&mut self) {
        self.scheduler.stop(&mut self.host);
        self.transition = None;
        self.pinch.cancel();
        self.snap = SnapState::None;
        self.captured = false;

        let previous = std::mem::take(&mut self.state);
        self.recompute_bounds();
        self.phase.reset(GesturePhase::Idle);

        let overflows = self.geometry.content.height > self.geometry.container.height;
        let moved = previous.current != Point::ZERO;
        if previous.scale != 1.0 || self.rendered_scale != 1.0 || overflows || moved {
            let timestamp = self.host.now();
            self.render(1.0, Point::ZERO, timestamp);
        }
    }

    // =========================================================================
    // Playback
    // =========================================================================

    /// Deliver a fired frame from the host
    pub fn on_frame(&mut self, id: FrameId) {
        let playback = self.scheduler.tick(id, &mut self.host);
        self.apply_playback(playback);
        self.sync_phase();
    }

    /// Completion hook for the host's timed transitions
    pub fn transition_end(&mut self) {
        let Some(step) = self.transition.take() else {
            tracing::trace!("gesture: transition end without a transition");
            return;
        };
        let timestamp = self.host.now();
        self.fix_position(timestamp);
        self.emit_completion(step.kind, timestamp);
        self.emit(GestureEventKind::TransitionEnd, timestamp);
        self.snap = SnapState::None;
        self.start_next();
        self.sync_phase();
    }

    fn wants_external_transition(&self) -> bool {
        self.config.use_external_transition && self.host.supports_timed_transition()
    }

    fn start_next(&mut self) {
        let external = self.wants_external_transition();
        let playback = self
            .scheduler
            .start(self.state.current, external, &mut self.host);
        self.apply_playback(playback);
    }

    fn apply_playback(&mut self, playback: Playback) {
        match playback {
            Playback::Idle => {}
            Playback::Frame(position) => {
                let timestamp = self.host.now();
                self.render(self.state.scale, position, timestamp);
            }
            Playback::Transition(step) => {
                let transform = Transform::new(self.state.scale, step.target.x, step.target.y);
                self.host.transition_to(transform, step.duration_ms);
                self.transition = Some(step);
                self.state.current = transform.position();
                self.rendered_scale = transform.scale;
                let timestamp = self.host.now();
                self.emit(GestureEventKind::Scroll, timestamp);
            }
            Playback::Finished(step) => {
                let timestamp = self.host.now();
                self.render(self.state.scale, step.target, timestamp);
                self.fix_position(timestamp);
                self.emit(GestureEventKind::TransitionEnd, timestamp);
                self.emit_completion(step.kind, timestamp);
                self.snap = SnapState::None;
                self.start_next();
            }
        }
    }

    /// Kind-specific completion event
    fn emit_completion(&self, kind: StepKind, timestamp: f64) {
        let event = match kind {
            StepKind::Bounce => GestureEventKind::BounceEnd,
            StepKind::SnapBounce => GestureEventKind::SnapBounceEnd,
            StepKind::SnapUpdate => GestureEventKind::SnapUpdateEnd,
            StepKind::Transition => return,
        };
        self.emit(event, timestamp);
    }

    // =========================================================================
    // Settle
    // =========================================================================

    fn content_extent(&self) -> Rect {
        let current = self.state.current;
        if self.config.zoom_enabled {
            self.host.rendered_content().unwrap_or_else(|| {
                Transform::new(self.rendered_scale, current.x, current.y)
                    .apply_to(self.geometry.content)
            })
        } else {
            Rect::new(
                current.x,
                current.y,
                self.geometry.content.width,
                self.geometry.content.height,
            )
        }
    }

    /// Bring the surface back inside the container, or report that it rests
    fn fix_position(&mut self, timestamp: f64) {
        let settlement = settle(
            self.content_extent(),
            self.geometry.container,
            self.state.current,
            self.state.scale,
        );
        let scale_changed = settlement.scale != self.state.scale;
        self.state.scale = settlement.scale;
        self.state.pinched = false;
        self.state.origin = settlement.target;
        if scale_changed {
            self.recompute_bounds();
        }

        if settlement.is_noop(self.state.current, self.rendered_scale) {
            self.emit(GestureEventKind::ScrollEnd, timestamp);
            return;
        }

        tracing::debug!(
            "gesture: settling ({:.1}, {:.1}) -> ({:.1}, {:.1}) at scale {:.3}",
            self.state.current.x,
            self.state.current.y,
            settlement.target.x,
            settlement.target.y,
            settlement.scale
        );
        if self.config.elastic_bounce {
            self.scroll_to_step(Step::new(
                settlement.target,
                self.config.bounce_duration_ms,
                StepKind::Bounce,
            ));
        } else {
            self.render(self.state.scale, settlement.target, timestamp);
            self.emit(GestureEventKind::ScrollEnd, timestamp);
        }
    }

    // =========================================================================
    // Output
    // =========================================================================

    fn render(&mut self, scale: f64, position: Point, timestamp: f64) {
        let transform = Transform::new(scale, position.x, position.y);
        tracing::trace!(
            "gesture: render scale={:.3} ({:.1}, {:.1})",
            transform.scale,
            transform.x,
            transform.y
        );
        self.host.apply_transform(transform);
        self.state.current = transform.position();
        self.rendered_scale = transform.scale;
        self.emit(GestureEventKind::Scroll, timestamp);
    }

    fn emit(&self, kind: GestureEventKind, timestamp: f64) {
        self.dispatcher.dispatch(&GestureEvent::new(
            kind,
            self.state.current,
            self.rendered_scale,
            timestamp,
        ));
    }

    fn stamp(&self, timestamp: f64) -> f64 {
        if timestamp.is_finite() {
            timestamp
        } else {
            self.host.now()
        }
    }

    fn sync_phase(&mut self) {
        let event = if self.is_animating() {
            PhaseEvent::Animate
        } else {
            PhaseEvent::Settle
        };
        self.phase.send(event);
    }
}

impl GestureController<HeadlessHost> {
    /// Advance the headless clock by one frame and deliver what is due.
    ///
    /// Returns the number of frames delivered.
    pub fn pump(&mut self) -> usize {
        let interval = self.host.frames().interval_ms();
        self.host.advance(interval);

        let due = self.host.frames_mut().take_due();
        let delivered = due.len();
        for id in due {
            self.on_frame(id);
        }
        if self.host.take_finished_transition().is_some() {
            self.transition_end();
        }
        delivered
    }

    /// Pump until nothing is animating or `budget` frames have passed.
    ///
    /// Returns the number of frames pumped.
    pub fn run_frames(&mut self, budget: usize) -> usize {
        let mut pumped = 0;
        while pumped < budget && self.is_animating() {
            self.pump();
            pumped += 1;
        }
        pumped
    }

    /// Let `ms` of wall time pass, one frame interval at a time
    pub fn wait(&mut self, ms: f64) {
        let interval = self.host.frames().interval_ms();
        let mut remaining = ms;
        while remaining > 0.0 {
            self.pump();
            remaining -= interval;
        }
    }
}

impl<H: Host + std::fmt::Debug> std::fmt::Debug for GestureController<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GestureController")
            .field("host", &self.host)
            .field("config", &self.config)
            .field("state", &self.state)
            .field("geometry", &self.geometry)
            .field("phase", &self.phase.current_state())
            .field("snap", &self.snap)
            .field("dispatcher", &self.dispatcher)
            .finish_non_exhaustive()
    }
}
