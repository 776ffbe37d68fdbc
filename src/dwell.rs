use std::time::{Duration, Instant};

pub const HOVER_DELAY: Duration = Duration::from_millis(500);

/// Single-shot timer that auto-enables dwell mode after a sustained hover
/// over the dwell control. At most one timer is pending; an explicit toggle
/// or pointer-leave cancels it.
#[derive(Debug, Default)]
pub struct DwellHoverTimer {
    deadline: Option<Instant>,
}

impl DwellHoverTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Arm the timer unless dwell is already enabled or a timer is already
    /// pending.
    pub fn hover_start(&mut self, now: Instant, dwell_enabled: bool) {
        if dwell_enabled || self.deadline.is_some() {
            return;
        }
        self.deadline = Some(now + HOVER_DELAY);
    }

    /// Cancel a pending timer. No effect on already-enabled dwell mode.
    pub fn hover_end(&mut self) {
        self.deadline = None;
    }

    /// Explicit intent always wins: drop any pending timer. The caller flips
    /// the mode itself.
    pub fn explicit_toggle(&mut self) {
        self.deadline = None;
    }

    /// Fire if the deadline passed. Returns true exactly once per armed
    /// timer, and only if dwell mode has not meanwhile been enabled through
    /// another path.
    pub fn poll(&mut self, now: Instant, dwell_enabled: bool) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                !dwell_enabled
            }
            _ => false,
        }
    }
}
