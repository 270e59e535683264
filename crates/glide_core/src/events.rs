//! Lifecycle event dispatch
//!
//! Every observable moment of a gesture is reported as a [`GestureEvent`]
//! carrying a fixed payload. Handlers register per [`GestureEventKind`] on an
//! [`EventDispatcher`].

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::geometry::Point;

/// Closed set of lifecycle events a controller emits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureEventKind {
    /// Surface position changed (finger tracking or an animation frame)
    Scroll,
    /// A drag began
    DragStart,
    /// A drag sample arrived, before it is rendered
    DragMoveStart,
    /// A drag sample was rendered
    DragMoveEnd,
    /// The finger was lifted
    DragEnd,
    /// Pinch began
    GestureStart,
    /// Pinch scale changed
    GestureChange,
    /// Pinch ended
    GestureEnd,
    /// A scheduled step finished playing
    TransitionEnd,
    /// A corrective bounce finished
    BounceEnd,
    /// Release with movement, before momentum/snap is decided
    MomentumStart,
    /// Surface came to rest within bounds
    ScrollEnd,
    /// A snap step was scheduled
    SnapStart,
    /// A snap to a new offset finished
    SnapUpdateEnd,
    /// A snap back to the origin finished
    SnapBounceEnd,
}

impl GestureEventKind {
    /// All kinds, in declaration order
    pub const ALL: [GestureEventKind; 15] = [
        GestureEventKind::Scroll,
        GestureEventKind::DragStart,
        GestureEventKind::DragMoveStart,
        GestureEventKind::DragMoveEnd,
        GestureEventKind::DragEnd,
        GestureEventKind::GestureStart,
        GestureEventKind::GestureChange,
        GestureEventKind::GestureEnd,
        GestureEventKind::TransitionEnd,
        GestureEventKind::BounceEnd,
        GestureEventKind::MomentumStart,
        GestureEventKind::ScrollEnd,
        GestureEventKind::SnapStart,
        GestureEventKind::SnapUpdateEnd,
        GestureEventKind::SnapBounceEnd,
    ];

    /// Stable snake_case name, used by scenario files and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scroll => "scroll",
            Self::DragStart => "drag_start",
            Self::DragMoveStart => "drag_move_start",
            Self::DragMoveEnd => "drag_move_end",
            Self::DragEnd => "drag_end",
            Self::GestureStart => "gesture_start",
            Self::GestureChange => "gesture_change",
            Self::GestureEnd => "gesture_end",
            Self::TransitionEnd => "transition_end",
            Self::BounceEnd => "bounce_end",
            Self::MomentumStart => "momentum_start",
            Self::ScrollEnd => "scroll_end",
            Self::SnapStart => "snap_start",
            Self::SnapUpdateEnd => "snap_update_end",
            Self::SnapBounceEnd => "snap_bounce_end",
        }
    }

    /// Parse a name produced by [`GestureEventKind::as_str`]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }
}

/// A lifecycle event with a snapshot of the surface at emission time
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureEvent {
    pub kind: GestureEventKind,
    /// Last rendered surface position
    pub position: Point,
    /// Current zoom factor
    pub scale: f64,
    /// Timestamp in milliseconds of the sample or frame that caused the event
    pub timestamp: f64,
}

impl GestureEvent {
    pub fn new(kind: GestureEventKind, position: Point, scale: f64, timestamp: f64) -> Self {
        Self {
            kind,
            position,
            scale,
            timestamp,
        }
    }
}

/// Event handler function type
pub type EventHandler = Box<dyn Fn(&GestureEvent) + Send + Sync>;

/// Dispatches events to registered handlers
pub struct EventDispatcher {
    handlers: FxHashMap<GestureEventKind, SmallVec<[EventHandler; 2]>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self {
            handlers: FxHashMap::default(),
        }
    }

    /// Register an event handler for an event kind
    pub fn register<F>(&mut self, kind: GestureEventKind, handler: F)
    where
        F: Fn(&GestureEvent) + Send + Sync + 'static,
    {
        self.handlers.entry(kind).or_default().push(Box::new(handler));
    }

    /// Register one handler for every event kind
    pub fn register_all<F>(&mut self, handler: F)
    where
        F: Fn(&GestureEvent) + Send + Sync + Clone + 'static,
    {
        for kind in GestureEventKind::ALL {
            self.register(kind, handler.clone());
        }
    }

    /// Whether anything listens for `kind`
    pub fn has_handlers(&self, kind: GestureEventKind) -> bool {
        self.handlers.get(&kind).is_some_and(|h| !h.is_empty())
    }

    /// Dispatch an event to all handlers registered for its kind
    pub fn dispatch(&self, event: &GestureEvent) {
        if let Some(handlers) = self.handlers.get(&event.kind) {
            for handler in handlers {
                handler(event);
            }
        }
    }

    /// Drop every registered handler
    pub fn clear(&mut self) {
        self.handlers.clear();
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut kinds: Vec<_> = self
            .handlers
            .iter()
            .map(|(kind, handlers)| (kind.as_str(), handlers.len()))
            .collect();
        kinds.sort_unstable();
        f.debug_struct("EventDispatcher")
            .field("handlers", &kinds)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn event(kind: GestureEventKind) -> GestureEvent {
        GestureEvent::new(kind, Point::new(1.0, 2.0), 1.0, 10.0)
    }

    #[test]
    fn test_dispatch_only_reaches_matching_kind() {
        let mut dispatcher = EventDispatcher::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let seen_clone = seen.clone();
        dispatcher.register(GestureEventKind::DragStart, move |e| {
            seen_clone.lock().unwrap().push(e.kind);
        });

        dispatcher.dispatch(&event(GestureEventKind::DragStart));
        dispatcher.dispatch(&event(GestureEventKind::DragEnd));

        assert_eq!(*seen.lock().unwrap(), vec![GestureEventKind::DragStart]);
        assert!(dispatcher.has_handlers(GestureEventKind::DragStart));
        assert!(!dispatcher.has_handlers(GestureEventKind::DragEnd));
    }

    #[test]
    fn test_handlers_run_in_registration_order() {
        let mut dispatcher = EventDispatcher::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        for tag in 0..3 {
            let order = order.clone();
            dispatcher.register(GestureEventKind::Scroll, move |_| {
                order.lock().unwrap().push(tag);
            });
        }

        dispatcher.dispatch(&event(GestureEventKind::Scroll));
        assert_eq!(*order.lock().unwrap(), vec![0, 1, 2]);

        dispatcher.clear();
        dispatcher.dispatch(&event(GestureEventKind::Scroll));
        assert_eq!(order.lock().unwrap().len(), 3);
    }

    #[test]
    fn test_register_all_and_names() {
        let mut dispatcher = EventDispatcher::new();
        let count = Arc::new(Mutex::new(0));
        let count_clone = count.clone();
        dispatcher.register_all(move |_| *count_clone.lock().unwrap() += 1);

        for kind in GestureEventKind::ALL {
            dispatcher.dispatch(&event(kind));
            assert_eq!(GestureEventKind::from_name(kind.as_str()), Some(kind));
        }
        assert_eq!(*count.lock().unwrap(), GestureEventKind::ALL.len());
        assert_eq!(GestureEventKind::from_name("wheel"), None);
    }
}
