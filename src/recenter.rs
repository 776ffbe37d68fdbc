use crate::engine::Engine;
use std::time::{Duration, Instant};

pub const COUNTDOWN_SECS: u32 = 5;

const TICK: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy)]
enum Phase {
    Idle,
    Running {
        remaining: u32,
        next_tick: Instant,
        was_tracking: bool,
    },
}

/// Coordinates the recenter flow against the engine: pause tracking, issue
/// the one-shot recenter, run a visible countdown, resume tracking.
///
/// At most one sequence is in flight; a trigger while the countdown runs is
/// ignored, so hotkey- and button-bound triggers are interchangeable as long
/// as they funnel through the same instance. Dropping the sequencer cancels
/// any pending countdown.
pub struct RecenterSequencer {
    phase: Phase,
}

impl Default for RecenterSequencer {
    fn default() -> Self {
        Self::new()
    }
}

impl RecenterSequencer {
    pub fn new() -> Self {
        Self { phase: Phase::Idle }
    }

    /// Observable countdown value: 0 when idle, otherwise seconds left.
    pub fn countdown(&self) -> u32 {
        match self.phase {
            Phase::Idle => 0,
            Phase::Running { remaining, .. } => remaining,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Running { .. })
    }

    /// When the next tick is due, for repaint scheduling.
    pub fn next_deadline(&self) -> Option<Instant> {
        match self.phase {
            Phase::Idle => None,
            Phase::Running { next_tick, .. } => Some(next_tick),
        }
    }

    /// Start a sequence. `tracking_on` is the tracking state at trigger
    /// time; it decides whether tracking is paused now and resumed when the
    /// countdown completes. Command failures are logged and the sequence
    /// proceeds: a failed recenter must not strand the user with tracking
    /// off.
    pub fn trigger(&mut self, now: Instant, tracking_on: bool, engine: &dyn Engine) {
        if self.is_running() {
            tracing::debug!("recenter already in flight, ignoring trigger");
            return;
        }
        if tracking_on {
            if let Err(err) = engine.set_tracking_enabled(false) {
                tracing::warn!("failed to pause tracking before recenter: {err:#}");
            }
        }
        if let Err(err) = engine.recenter() {
            tracing::warn!("recenter command failed: {err:#}");
        }
        self.phase = Phase::Running {
            remaining: COUNTDOWN_SECS,
            next_tick: now + TICK,
            was_tracking: tracking_on,
        };
    }

    /// Advance the countdown. Decrements once per elapsed second since the
    /// last tick; a late poll catches up one step at a time so no value is
    /// ever skipped. Returns true if the observable countdown changed.
    pub fn poll(&mut self, now: Instant, engine: &dyn Engine) -> bool {
        let mut changed = false;
        while let Phase::Running {
            remaining,
            next_tick,
            was_tracking,
        } = self.phase
        {
            if now < next_tick {
                break;
            }
            changed = true;
            let remaining = remaining - 1;
            if remaining == 0 {
                self.phase = Phase::Idle;
                if was_tracking {
                    if let Err(err) = engine.set_tracking_enabled(true) {
                        tracing::warn!("failed to resume tracking after recenter: {err:#}");
                    }
                }
            } else {
                self.phase = Phase::Running {
                    remaining,
                    next_tick: next_tick + TICK,
                    was_tracking,
                };
            }
        }
        changed
    }

    /// Abandon any pending countdown. In-flight engine commands are not
    /// rolled back and tracking is not resumed.
    pub fn cancel(&mut self) {
        self.phase = Phase::Idle;
    }
}
