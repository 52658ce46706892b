//! Simulation time model.
//!
//! A run advances one `Tick` per fired timer period.  `SimClock` maps the
//! tick count to elapsed seconds so trace output can be plotted against
//! wall time:
//!
//!   elapsed_secs = tick * tick_period_ms / 1000

use std::fmt;
use std::time::Duration;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// Number of ticks processed since the current run began.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Tracks the current tick of a run and its timer period.
///
/// Reset to `Tick::ZERO` whenever a new run begins.
#[derive(Clone, Debug)]
pub struct SimClock {
    /// Milliseconds between two ticks.
    pub tick_period_ms: u64,
    /// The current tick — advanced by `SimClock::advance()` after each step.
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new(tick_period_ms: u64) -> Self {
        Self {
            tick_period_ms,
            current_tick: Tick::ZERO,
        }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Rewind to tick zero for a fresh run.
    #[inline]
    pub fn rewind(&mut self) {
        self.current_tick = Tick::ZERO;
    }

    /// Elapsed simulated seconds at `tick`.
    #[inline]
    pub fn elapsed_secs_at(&self, tick: Tick) -> f64 {
        tick.0 as f64 * self.tick_period_ms as f64 / 1000.0
    }

    /// The timer period as a `Duration`.
    #[inline]
    pub fn period(&self) -> Duration {
        Duration::from_millis(self.tick_period_ms)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (+{:.1}s)",
            self.current_tick,
            self.elapsed_secs_at(self.current_tick)
        )
    }
}
