//! End-to-end tests for the gesture controller
//!
//! Every scenario runs against the headless host: samples go in, frames are
//! pumped on the manual clock, and lifecycle events are collected through a
//! shared sink.

use std::sync::{Arc, Mutex};

use glide_animation::{FrameSource, Step, StepKind};
use glide_core::error::GestureError;
use glide_core::events::GestureEventKind;
use glide_core::geometry::{Point, Size, Transform};
use glide_core::input::{PinchSample, TouchSample};
use glide_gesture::{
    BaseKey, Configuration, DataKey, DataValue, GestureController, GesturePhase, HeadlessHost,
    Release, SampleDisposition, SnapState,
};

type Events = Arc<Mutex<Vec<GestureEventKind>>>;

const CONTAINER: Size = Size::new(1000.0, 600.0);
const WIDE: Size = Size::new(3000.0, 600.0);

fn setup(content: Size, config: Configuration) -> (GestureController<HeadlessHost>, Events) {
    setup_with_host(HeadlessHost::new(CONTAINER, content), config)
}

fn setup_with_host(
    host: HeadlessHost,
    config: Configuration,
) -> (GestureController<HeadlessHost>, Events) {
    let mut controller = GestureController::new(host, config);
    let events: Events = Arc::new(Mutex::new(Vec::new()));
    let sink = events.clone();
    controller.on_all(move |e| sink.lock().unwrap().push(e.kind));
    (controller, events)
}

fn touch(x: f64, y: f64, t: f64) -> TouchSample {
    TouchSample::single(x, y, t)
}

/// Drag horizontally by `dx` in one move sample, `duration` ms long
fn swipe(controller: &mut GestureController<HeadlessHost>, dx: f64, duration: f64) -> Release {
    let t0 = controller.host().now();
    controller.drag_start(touch(500.0, 300.0, t0));
    controller.drag_move(touch(500.0 + dx, 300.0, t0 + duration));
    controller.drag_end(touch(500.0 + dx, 300.0, t0 + duration))
}

fn saw(events: &Events, kind: GestureEventKind) -> bool {
    events.lock().unwrap().contains(&kind)
}

fn count(events: &Events, kind: GestureEventKind) -> usize {
    events.lock().unwrap().iter().filter(|k| **k == kind).count()
}

// ============================================================================
// Momentum
// ============================================================================

#[test]
fn test_quick_swipe_glides_in_drag_direction() {
    let (mut controller, events) = setup(WIDE, Configuration::default());

    let release = swipe(&mut controller, -50.0, 50.0);
    let Release::Momentum(step) = release else {
        panic!("expected a glide, got {release:?}");
    };

    let bounds = *controller.bounds();
    let bounce_max = controller.config().bounce_allowance(glide_core::geometry::Axis::X, CONTAINER);
    assert!(step.target.x < -50.0, "glide must continue leftwards");
    assert!(step.target.x <= bounds.x.max);
    assert!(step.target.x >= bounds.x.min - bounce_max);
    assert!(step.duration_ms > 0.0);
    // speed 1 px/ms glides ~833px past the release point
    assert_eq!(step.target.x, -883.0);

    assert!(controller.is_animating());
    assert_eq!(controller.phase(), GesturePhase::Animating);

    controller.run_frames(500);
    assert!(!controller.is_animating());
    assert_eq!(controller.position(), Point::new(-883.0, 0.0));
    assert_eq!(controller.phase(), GesturePhase::Idle);

    assert!(saw(&events, GestureEventKind::MomentumStart));
    assert!(saw(&events, GestureEventKind::DragEnd));
    assert!(saw(&events, GestureEventKind::TransitionEnd));
    assert!(saw(&events, GestureEventKind::ScrollEnd));
    assert!(!saw(&events, GestureEventKind::BounceEnd));
}

#[test]
fn test_glide_near_edge_overshoots_then_bounces_back() {
    let (mut controller, events) = setup(WIDE, Configuration::default());
    controller.scroll_to(0.0, -1950.0, 0.0);
    assert_eq!(controller.position().x, -1950.0);

    let release = swipe(&mut controller, -50.0, 50.0);
    let Release::Momentum(step) = release else {
        panic!("expected a glide, got {release:?}");
    };
    // No room left: lands a softened overshoot past min (-2000)
    assert_eq!(step.target.x, -2083.0);
    assert_eq!(step.duration_ms, 167.0);

    controller.run_frames(200);
    assert!(!controller.is_animating());
    assert_eq!(controller.position().x, -2000.0);
    assert_eq!(count(&events, GestureEventKind::BounceEnd), 1);
    assert!(saw(&events, GestureEventKind::ScrollEnd));
}

#[test]
fn test_slow_drag_past_edge_settles_without_glide() {
    let config = Configuration {
        bounce_max_x: Some(500.0),
        ..Default::default()
    };
    let (mut controller, events) = setup(WIDE, config);

    controller.drag_start(touch(500.0, 300.0, 0.0));
    assert_eq!(
        controller.drag_move(touch(600.0, 300.0, 100.0)),
        SampleDisposition::Consumed
    );
    // Pulled 100px past max, softened by 500 / 1000
    assert_eq!(controller.position().x, 50.0);

    let release = controller.drag_end(touch(600.0, 300.0, 400.0));
    assert_eq!(release, Release::Settle);
    assert!(controller.is_animating());

    controller.run_frames(100);
    assert_eq!(controller.position().x, 0.0);
    assert!(saw(&events, GestureEventKind::BounceEnd));
    assert!(saw(&events, GestureEventKind::ScrollEnd));
}

#[test]
fn test_release_without_movement_is_a_tap() {
    let (mut controller, events) = setup(WIDE, Configuration::default());
    controller.drag_start(touch(10.0, 10.0, 0.0));
    assert_eq!(controller.drag_end(touch(10.0, 10.0, 80.0)), Release::Tap);
    assert!(!controller.is_animating());
    assert_eq!(controller.phase(), GesturePhase::Idle);
    assert!(!saw(&events, GestureEventKind::MomentumStart));
    assert!(saw(&events, GestureEventKind::DragEnd));
}

#[test]
fn test_no_bounce_clamps_at_edge() {
    let (mut controller, events) = setup(WIDE, Configuration::no_bounce());
    controller.drag_start(touch(500.0, 300.0, 0.0));
    controller.drag_move(touch(580.0, 300.0, 40.0));
    assert_eq!(controller.position().x, 0.0);

    assert_eq!(controller.drag_end(touch(580.0, 300.0, 40.0)), Release::Settle);
    assert!(!controller.is_animating());
    assert!(saw(&events, GestureEventKind::ScrollEnd));
}

// ============================================================================
// Snap
// ============================================================================

fn pager() -> Configuration {
    Configuration {
        snap_enabled: true,
        ..Default::default()
    }
}

#[test]
fn test_quick_snap_advances_by_threshold() {
    let (mut controller, events) = setup(Size::new(1300.0, 600.0), pager());
    assert_eq!(controller.bounds().x.min, -300.0);

    let release = swipe(&mut controller, -50.0, 100.0);
    assert_eq!(release, Release::Snap(StepKind::SnapUpdate));
    assert_eq!(controller.snap_state(), SnapState::SnapUpdate);
    assert!(saw(&events, GestureEventKind::SnapStart));

    controller.run_frames(100);
    assert_eq!(controller.position().x, -200.0);
    assert_eq!(controller.snap_state(), SnapState::None);
    assert!(saw(&events, GestureEventKind::SnapUpdateEnd));
    assert!(!saw(&events, GestureEventKind::SnapBounceEnd));
}

#[test]
fn test_snap_outside_bounds_returns_to_origin() {
    let (mut controller, events) = setup(Size::new(1300.0, 600.0), pager());

    let release = swipe(&mut controller, 50.0, 100.0);
    assert_eq!(release, Release::Snap(StepKind::SnapBounce));
    assert_eq!(controller.snap_state(), SnapState::SnapBounce);

    controller.run_frames(100);
    assert_eq!(controller.position().x, 0.0);
    assert!(saw(&events, GestureEventKind::SnapBounceEnd));
    assert_eq!(controller.snap_state(), SnapState::None);
}

#[test]
fn test_snap_never_glides() {
    let (mut controller, _events) = setup(WIDE, Configuration::paging(200.0));
    let release = swipe(&mut controller, -300.0, 40.0);
    assert_eq!(release, Release::Snap(StepKind::SnapUpdate));
    controller.run_frames(100);
    assert_eq!(controller.position().x, -200.0);
}

#[test]
fn test_moves_during_snap_are_ignored() {
    let (mut controller, _events) = setup(Size::new(1300.0, 600.0), pager());
    swipe(&mut controller, -50.0, 100.0);
    controller.pump();

    // A new touch does not interrupt a settling snap
    let t = controller.host().now();
    controller.drag_start(touch(500.0, 300.0, t));
    assert!(controller.is_animating());
    assert_eq!(
        controller.drag_move(touch(300.0, 300.0, t + 20.0)),
        SampleDisposition::Ignored
    );
    assert_eq!(controller.drag_end(touch(300.0, 300.0, t + 20.0)), Release::Ignored);

    controller.run_frames(100);
    assert_eq!(controller.position().x, -200.0);
}

#[test]
fn test_pinch_release_does_not_reuse_previous_swipe() {
    let (mut controller, _events) = setup(WIDE, Configuration::paging(200.0));
    swipe(&mut controller, -50.0, 100.0);
    controller.run_frames(100);
    assert_eq!(controller.position().x, -200.0);

    // Two fingers down, zoom back to 1 and lift: no fresh drag distance
    let t = controller.host().now();
    controller.drag_start(touch(500.0, 300.0, t).with_touches(2));
    assert_eq!(controller.state().dist, Point::ZERO);
    controller.drag_move(touch(500.0, 300.0, t + 16.0).with_touches(2));
    controller.pinch_start(PinchSample::new(1.0, t + 16.0));
    controller.pinch_change(PinchSample::new(1.0, t + 32.0));
    controller.pinch_end(PinchSample::new(1.0, t + 48.0));
    let release = controller.drag_end(touch(500.0, 300.0, t + 48.0).with_touches(2));

    assert_eq!(release, Release::Snap(StepKind::SnapBounce));
    controller.run_frames(100);
    assert_eq!(controller.position().x, -200.0);
}

// ============================================================================
// Scheduling
// ============================================================================

#[test]
fn test_enqueue_while_playing_queues_behind() {
    let (mut controller, _events) = setup(WIDE, Configuration::default());
    controller.scroll_to(100.0, -300.0, 0.0);
    controller.enqueue(Step::to(-600.0, 0.0, 100.0));

    assert_eq!(controller.queued_steps(), 1);
    assert_eq!(controller.host().frames().pending_count(), 1);

    controller.run_frames(100);
    assert_eq!(controller.position().x, -600.0);
    assert_eq!(controller.queued_steps(), 0);
}

#[test]
fn test_stop_clears_playback() {
    let (mut controller, _events) = setup(WIDE, Configuration::default());
    controller.scroll_to(200.0, -500.0, 0.0);
    controller.enqueue(Step::to(-800.0, 0.0, 200.0));

    controller.stop();
    assert!(!controller.is_animating());
    assert_eq!(controller.queued_steps(), 0);
    assert_eq!(controller.host().frames().pending_count(), 0);
    assert_eq!(controller.phase(), GesturePhase::Idle);

    // Idempotent
    controller.stop();
    assert!(!controller.is_animating());
}

#[test]
fn test_stale_frame_is_ignored() {
    let (mut controller, _events) = setup(WIDE, Configuration::default());
    controller.scroll_to(200.0, -500.0, 0.0);

    controller.host_mut().advance(17.0);
    let due = controller.host_mut().frames_mut().take_due();
    assert_eq!(due.len(), 1);
    controller.stop();

    let rendered = controller.host().transforms().len();
    controller.on_frame(due[0]);
    assert_eq!(controller.host().transforms().len(), rendered);
    assert!(!controller.is_animating());
}

#[test]
fn test_new_drag_interrupts_glide() {
    let (mut controller, _events) = setup(WIDE, Configuration::default());
    swipe(&mut controller, -50.0, 50.0);
    controller.run_frames(5);
    assert!(controller.is_animating());

    let t = controller.host().now();
    controller.drag_start(touch(500.0, 300.0, t));
    assert!(!controller.is_animating());
    assert_eq!(controller.host().frames().pending_count(), 0);
    assert_eq!(controller.phase(), GesturePhase::Tracking);
    assert_eq!(controller.state().origin, controller.position());
}

#[test]
fn test_instant_scroll_finishes_synchronously() {
    let (mut controller, events) = setup(WIDE, Configuration::default());
    controller.scroll_to(0.0, -250.0, 0.0);
    assert!(!controller.is_animating());
    assert_eq!(controller.position().x, -250.0);
    assert_eq!(count(&events, GestureEventKind::TransitionEnd), 1);
}

// ============================================================================
// External transitions
// ============================================================================

#[test]
fn test_external_transition_completes_through_hook() {
    let host = HeadlessHost::new(CONTAINER, WIDE).with_timed_transitions();
    let (mut controller, events) = setup_with_host(host, Configuration::external_transitions());

    controller.scroll_to(200.0, -400.0, 0.0);
    assert!(controller.host().running_transition().is_some());
    assert_eq!(controller.host().frames().pending_count(), 0);
    assert_eq!(controller.position().x, -400.0);
    assert!(controller.is_animating());

    controller.run_frames(20);
    assert!(!controller.is_animating());
    assert!(saw(&events, GestureEventKind::TransitionEnd));
    assert!(saw(&events, GestureEventKind::ScrollEnd));
}

#[test]
fn test_instant_step_is_never_delegated() {
    let host = HeadlessHost::new(CONTAINER, WIDE).with_timed_transitions();
    let (mut controller, _events) = setup_with_host(host, Configuration::external_transitions());
    controller.scroll_to(0.0, -100.0, 0.0);
    assert!(controller.host().running_transition().is_none());
    assert!(!controller.is_animating());
}

#[test]
fn test_instant_scroll_replaces_pending_transition() {
    let host = HeadlessHost::new(CONTAINER, WIDE).with_timed_transitions();
    let (mut controller, _events) = setup_with_host(host, Configuration::external_transitions());
    controller.scroll_to(200.0, -500.0, 0.0);
    assert!(controller.host().running_transition().is_some());
    assert!(controller.is_animating());

    controller.scroll_to(0.0, -100.0, 0.0);
    assert!(!controller.is_animating());
    assert_eq!(controller.phase(), GesturePhase::Idle);

    controller.run_frames(1000);
    assert!(!controller.is_animating());
    assert_eq!(controller.phase(), GesturePhase::Idle);
    assert_eq!(controller.position(), Point::new(-100.0, 0.0));
}

#[test]
fn test_stop_drops_pending_transition() {
    let host = HeadlessHost::new(CONTAINER, WIDE).with_timed_transitions();
    let (mut controller, _events) = setup_with_host(host, Configuration::external_transitions());
    controller.scroll_to(200.0, -500.0, 0.0);
    assert!(controller.is_animating());

    controller.stop();
    assert!(!controller.is_animating());
    assert_eq!(controller.phase(), GesturePhase::Idle);

    controller.run_frames(100);
    assert!(!controller.is_animating());
    assert_eq!(controller.phase(), GesturePhase::Idle);
}

#[test]
fn test_external_snap_fires_snap_end_before_transition_end() {
    let host = HeadlessHost::new(CONTAINER, Size::new(1300.0, 600.0)).with_timed_transitions();
    let config = Configuration {
        use_external_transition: true,
        ..pager()
    };
    let (mut controller, events) = setup_with_host(host, config);

    swipe(&mut controller, -50.0, 100.0);
    controller.run_frames(20);

    let events = events.lock().unwrap();
    let snap_end = events
        .iter()
        .position(|k| *k == GestureEventKind::SnapUpdateEnd)
        .expect("snap update end");
    let transition_end = events
        .iter()
        .rposition(|k| *k == GestureEventKind::TransitionEnd)
        .expect("transition end");
    assert!(snap_end < transition_end);
    assert_eq!(controller.snap_state(), SnapState::None);
}

// ============================================================================
// Pinch
// ============================================================================

#[test]
fn test_pinch_zoom_in_holds_scale() {
    let (mut controller, events) = setup(WIDE, Configuration::default());
    controller.pinch_start(PinchSample::new(1.0, 0.0));
    assert!(controller.is_pinching());
    controller.pinch_change(PinchSample::new(2.0, 16.0));
    assert_eq!(controller.host().last_transform(), Transform::new(2.0, 0.0, 0.0));
    controller.pinch_end(PinchSample::new(2.0, 32.0));

    assert!(!controller.is_pinching());
    assert_eq!(controller.scale(), 2.0);
    assert_eq!(controller.bounds().x.max, 1500.0);
    assert!(!controller.is_animating());
    assert!(saw(&events, GestureEventKind::GestureStart));
    assert!(saw(&events, GestureEventKind::GestureChange));
    assert!(saw(&events, GestureEventKind::GestureEnd));
    assert!(saw(&events, GestureEventKind::ScrollEnd));
}

#[test]
fn test_pinch_below_unit_scale_settles_back() {
    let (mut controller, events) = setup(WIDE, Configuration::default());
    controller.pinch_start(PinchSample::new(1.0, 0.0));
    controller.pinch_change(PinchSample::new(0.5, 16.0));
    controller.pinch_end(PinchSample::new(0.5, 32.0));

    assert_eq!(controller.scale(), 1.0);
    controller.run_frames(100);
    assert!(!controller.is_animating());
    assert_eq!(controller.host().last_transform().scale, 1.0);
    assert!(controller.bounds().x.contains(controller.position().x));
    assert!(saw(&events, GestureEventKind::BounceEnd));
}

#[test]
fn test_pinch_ignored_when_disabled() {
    let (mut controller, _events) = setup(WIDE, Configuration::default());
    controller.disable_gesture();
    controller.pinch_start(PinchSample::new(1.0, 0.0));
    controller.pinch_change(PinchSample::new(2.0, 16.0));
    assert!(!controller.is_pinching());
    assert!(controller.host().transforms().is_empty());

    let config = Configuration {
        zoom_enabled: false,
        ..Default::default()
    };
    let (mut controller, _events) = setup(WIDE, config);
    controller.pinch_start(PinchSample::new(1.0, 0.0));
    controller.pinch_change(PinchSample::new(2.0, 16.0));
    assert!(controller.host().transforms().is_empty());
}

// ============================================================================
// Input anomalies and toggles
// ============================================================================

#[test]
fn test_multi_touch_move_releases_capture() {
    let (mut controller, events) = setup(WIDE, Configuration::default());
    controller.drag_start(touch(500.0, 300.0, 0.0));
    let two = touch(450.0, 300.0, 20.0).with_touches(2);
    assert_eq!(controller.drag_move(two), SampleDisposition::Ignored);
    assert_eq!(
        controller.drag_move(touch(400.0, 300.0, 40.0)),
        SampleDisposition::Ignored
    );
    assert_eq!(controller.position(), Point::ZERO);
    assert_eq!(controller.drag_end(touch(400.0, 300.0, 60.0)), Release::Ignored);
    assert!(saw(&events, GestureEventKind::DragMoveStart));
    assert!(!saw(&events, GestureEventKind::DragMoveEnd));
}

#[test]
fn test_zero_touch_and_malformed_samples_are_ignored() {
    let (mut controller, _events) = setup(WIDE, Configuration::default());
    controller.drag_start(touch(500.0, 300.0, 0.0));
    let none = touch(450.0, 300.0, 20.0).with_touches(0);
    assert_eq!(controller.drag_move(none), SampleDisposition::Ignored);
    assert_eq!(
        controller.drag_move(touch(f64::NAN, 300.0, 30.0)),
        SampleDisposition::Ignored
    );
    assert_eq!(controller.position(), Point::ZERO);
    assert_eq!(controller.state().dist, Point::ZERO);
}

#[test]
fn test_move_after_release_is_ignored() {
    let config = Configuration {
        momentum: false,
        ..Default::default()
    };
    let (mut controller, events) = setup(WIDE, config);
    controller.drag_start(touch(500.0, 300.0, 0.0));
    controller.drag_move(touch(400.0, 300.0, 20.0));
    controller.drag_end(touch(400.0, 300.0, 40.0));

    let before = controller.state().clone();
    let moves = count(&events, GestureEventKind::DragMoveStart);
    let rendered = controller.host().transforms().len();

    assert_eq!(
        controller.drag_move(touch(300.0, 300.0, 60.0)),
        SampleDisposition::Ignored
    );
    assert_eq!(count(&events, GestureEventKind::DragMoveStart), moves);
    assert_eq!(controller.state().dist, before.dist);
    assert_eq!(controller.state().moved, before.moved);
    assert_eq!(controller.position(), before.current);
    assert_eq!(controller.host().transforms().len(), rendered);
}

#[test]
fn test_disable_touch_stops_and_ignores_drags() {
    let (mut controller, _events) = setup(WIDE, Configuration::default());
    controller.scroll_to(200.0, -500.0, 0.0);
    controller.disable_touch();
    assert!(!controller.is_animating());

    controller.drag_start(touch(500.0, 300.0, 0.0));
    assert_eq!(controller.phase(), GesturePhase::Idle);
    assert_eq!(
        controller.drag_move(touch(400.0, 300.0, 10.0)),
        SampleDisposition::Ignored
    );
    assert_eq!(controller.drag_end(touch(400.0, 300.0, 20.0)), Release::Ignored);

    controller.enable_touch();
    controller.drag_start(touch(500.0, 300.0, 100.0));
    assert_eq!(
        controller.drag_move(touch(400.0, 300.0, 110.0)),
        SampleDisposition::Consumed
    );
}

#[test]
fn test_vertical_handoff_at_rest_edge() {
    let container = Size::new(600.0, 600.0);
    let tall = Size::new(600.0, 2000.0);
    let (mut controller, _events) =
        setup_with_host(HeadlessHost::new(container, tall), Configuration::default());

    // Resting on the top edge and pulling down: hand off to the outer page
    controller.drag_start(touch(300.0, 300.0, 0.0));
    assert_eq!(
        controller.drag_move(touch(300.0, 350.0, 16.0)),
        SampleDisposition::Deferred
    );
    assert_eq!(controller.position(), Point::ZERO);
    controller.drag_end(touch(300.0, 350.0, 32.0));

    // Pushing up scrolls the region itself
    controller.drag_start(touch(300.0, 300.0, 1000.0));
    assert_eq!(
        controller.drag_move(touch(300.0, 250.0, 1016.0)),
        SampleDisposition::Consumed
    );
    assert_eq!(controller.position().y, -50.0);
}

#[test]
fn test_handoff_can_be_turned_off() {
    let config = Configuration {
        auto_handoff_vertical: false,
        ..Default::default()
    };
    let host = HeadlessHost::new(Size::new(600.0, 600.0), Size::new(600.0, 2000.0));
    let (mut controller, _events) = setup_with_host(host, config);
    controller.drag_start(touch(300.0, 300.0, 0.0));
    assert_eq!(
        controller.drag_move(touch(300.0, 350.0, 16.0)),
        SampleDisposition::Consumed
    );
    assert_eq!(controller.position().y, 50.0);
}

// ============================================================================
// State
// ============================================================================

#[test]
fn test_reset_state_is_idempotent() {
    let (mut controller, _events) = setup(WIDE, Configuration::default());
    controller.pinch_start(PinchSample::new(1.0, 0.0));
    controller.pinch_change(PinchSample::new(1.5, 16.0));
    controller.pinch_end(PinchSample::new(1.5, 32.0));
    controller.scroll_to(0.0, -400.0, 0.0);

    controller.reset_state();
    let once = controller.state().clone();
    assert_eq!(once.scale, 1.0);
    assert_eq!(once.current, Point::ZERO);
    assert_eq!(controller.host().last_transform(), Transform::IDENTITY);
    assert_eq!(controller.phase(), GesturePhase::Idle);

    controller.reset_state();
    assert_eq!(controller.state(), &once);
}

#[test]
fn test_refresh_bounds_is_pure() {
    let (mut controller, _events) = setup(WIDE, Configuration::default());
    controller.refresh_bounds().unwrap();
    let first = controller.state().clone();
    controller.refresh_bounds().unwrap();
    assert_eq!(controller.state(), &first);
    assert!(controller.host().transforms().is_empty());
}

#[test]
fn test_missing_geometry_is_reported() {
    let (mut controller, _events) =
        setup_with_host(HeadlessHost::unmeasured(), Configuration::default());
    assert_eq!(controller.refresh_bounds(), Err(GestureError::MissingContainer));

    // Drags are no-ops until measurement succeeds
    controller.drag_start(touch(500.0, 300.0, 0.0));
    assert_eq!(controller.drag_end(touch(500.0, 300.0, 10.0)), Release::Ignored);
    assert!(controller.host().transforms().is_empty());

    controller.host_mut().set_container(Some(CONTAINER));
    assert_eq!(controller.refresh_bounds(), Err(GestureError::MissingContent));
    controller.host_mut().set_content(Some(Size::new(f64::NAN, 10.0)));
    assert!(matches!(
        controller.refresh_bounds(),
        Err(GestureError::InvalidGeometry(_))
    ));
    controller.host_mut().set_content(Some(WIDE));
    assert!(controller.refresh_bounds().is_ok());
    assert_eq!(controller.bounds().x.min, -2000.0);
}

#[test]
fn test_data_accessors() {
    let (mut controller, _events) = setup(WIDE, Configuration::default());
    controller.set_data(DataKey::OriginX, -120.0).unwrap();
    assert_eq!(controller.get_data(DataKey::OriginX), DataValue::Number(-120.0));
    assert_eq!(controller.get_data(DataKey::MoveAxisX), DataValue::Flag(true));
    assert_eq!(
        controller.set_data(DataKey::Moved, 3.0),
        Err(GestureError::DataTypeMismatch { key: "moved" })
    );

    assert_eq!(controller.get_base_data(BaseKey::ContentWidth), 3000.0);
    controller.set_base_data(BaseKey::ContainerWidth, 800.0);
    assert_eq!(controller.geometry().container.width, 800.0);
}

#[test]
fn test_destroy_returns_host_without_pending_frames() {
    let (mut controller, _events) = setup(WIDE, Configuration::default());
    controller.scroll_to(200.0, -500.0, 0.0);
    let host = controller.destroy();
    assert_eq!(host.frames().pending_count(), 0);
}
