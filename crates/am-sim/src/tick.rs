//! Periodic tick sources.

use std::time::{Duration, Instant};

use am_core::Generation;

/// A periodic timer the controller arms when a run starts and disarms when
/// it ends.  At most one source is active at a time.
pub trait TickSource {
    /// Start firing every `period`, tagging each tick with `epoch`.
    ///
    /// Replaces any source that is already active.
    fn arm(&mut self, epoch: Generation, period: Duration);

    /// Stop firing.  No-op if nothing is armed.
    fn disarm(&mut self);

    fn is_armed(&self) -> bool;
}

#[derive(Debug, Clone, Copy)]
struct Armed {
    epoch:  Generation,
    period: Duration,
    next:   Instant,
}

/// Deadline-based ticker polled by [`run_event_loop`][crate::run_event_loop].
///
/// The first tick fires one full period after arming.
#[derive(Debug, Default)]
pub struct IntervalTicker {
    armed: Option<Armed>,
}

impl IntervalTicker {
    pub fn new() -> Self {
        Self { armed: None }
    }

    /// When the next tick is due, if armed.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.armed.map(|a| a.next)
    }

    /// Return the epoch if a tick is due at `now`, and schedule the one after.
    pub fn poll(&mut self, now: Instant) -> Option<Generation> {
        let armed = self.armed.as_mut()?;
        if now < armed.next {
            return None;
        }
        armed.next += armed.period;
        if now > armed.next + armed.period {
            // Too far behind — reset to avoid a burst of catch-up ticks.
            armed.next = now + armed.period;
        }
        Some(armed.epoch)
    }
}

impl TickSource for IntervalTicker {
    fn arm(&mut self, epoch: Generation, period: Duration) {
        self.armed = Some(Armed {
            epoch,
            period,
            next: Instant::now() + period,
        });
    }

    fn disarm(&mut self) {
        self.armed = None;
    }

    fn is_armed(&self) -> bool {
        self.armed.is_some()
    }
}
