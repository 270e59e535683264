//! Frame sources
//!
//! A [`FrameSource`] is the "call me on the next frame" capability the step
//! scheduler plays through. Hosts back it with the platform's frame callback;
//! [`ManualFrames`] is a deterministic clock for tests and headless runs.

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle of one pending frame request
    pub struct FrameId;
}

/// Frame-paced callback capability
pub trait FrameSource {
    /// Current time in milliseconds
    fn now(&self) -> f64;

    /// Ask for one callback on the next frame
    fn request_frame(&mut self) -> FrameId;

    /// Withdraw a pending request. Unknown or already fired ids are ignored.
    fn cancel_frame(&mut self, id: FrameId);
}

/// Default frame interval (60 Hz, rounded the way timer fallbacks do)
pub const DEFAULT_FRAME_INTERVAL_MS: f64 = 17.0;

/// Manually driven frame source
#[derive(Debug, Clone)]
pub struct ManualFrames {
    now: f64,
    interval_ms: f64,
    pending: SlotMap<FrameId, f64>,
}

impl ManualFrames {
    pub fn new() -> Self {
        Self::with_interval(DEFAULT_FRAME_INTERVAL_MS)
    }

    pub fn with_interval(interval_ms: f64) -> Self {
        Self {
            now: 0.0,
            interval_ms: interval_ms.max(1.0),
            pending: SlotMap::with_key(),
        }
    }

    /// Time between frames
    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    /// Move the clock forward
    pub fn advance(&mut self, ms: f64) {
        if ms.is_finite() && ms > 0.0 {
            self.now += ms;
        }
    }

    /// Jump the clock to an absolute time; time never runs backwards
    pub fn set_now(&mut self, now: f64) {
        if now.is_finite() && now > self.now {
            self.now = now;
        }
    }

    /// Number of outstanding requests
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn is_pending(&self, id: FrameId) -> bool {
        self.pending.contains_key(id)
    }

    /// Drain every request made before now, oldest first
    pub fn take_due(&mut self) -> Vec<FrameId> {
        let now = self.now;
        let mut due: Vec<(FrameId, f64)> = self
            .pending
            .iter()
            .filter(|(_, requested_at)| **requested_at < now)
            .map(|(id, requested_at)| (id, *requested_at))
            .collect();
        due.sort_by(|a, b| a.1.total_cmp(&b.1));
        for (id, _) in &due {
            self.pending.remove(*id);
        }
        due.into_iter().map(|(id, _)| id).collect()
    }
}

impl Default for ManualFrames {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameSource for ManualFrames {
    fn now(&self) -> f64 {
        self.now
    }

    fn request_frame(&mut self) -> FrameId {
        self.pending.insert(self.now)
    }

    fn cancel_frame(&mut self, id: FrameId) {
        self.pending.remove(id);
    }
}
