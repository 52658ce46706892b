//! Simulation observer trait for progress reporting and data collection.

use am_core::Tick;

use crate::alert::AlertOutcome;
use crate::state::Step;

/// Callbacks invoked by the [`Controller`][crate::Controller] as it applies
/// effects.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — distance printer
///
/// ```rust,ignore
/// struct DistancePrinter;
///
/// impl SimObserver for DistancePrinter {
///     fn on_step(&mut self, tick: Tick, _elapsed_secs: f64, step: &Step) {
///         println!("{tick}: {:.1} m", step.proximity.distance_m);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once per tick, after the display has been told.
    ///
    /// `tick` is 1-based within the run: tick 1 reports route point 0.
    fn on_step(&mut self, _tick: Tick, _elapsed_secs: f64, _step: &Step) {}

    /// Called when a trigger reached the alert player without error.
    fn on_alert(&mut self, _tick: Tick, _outcome: AlertOutcome) {}

    /// Called once when the last route point has been reported.
    fn on_finished(&mut self, _final_tick: Tick) {}

    /// Called after a reset has returned the display to the start.
    fn on_reset(&mut self) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
