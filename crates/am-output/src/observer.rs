//! `TraceObserver<W>` — bridges `SimObserver` to a `TraceWriter`.

use am_core::Tick;
use am_sim::{SimObserver, Step};

use crate::row::TraceRow;
use crate::writer::TraceWriter;
use crate::OutputError;

/// A [`SimObserver`] that writes one [`TraceRow`] per tick.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After the event loop returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct TraceObserver<W: TraceWriter> {
    writer:     W,
    rows:       u64,
    last_error: Option<OutputError>,
}

impl<W: TraceWriter> TraceObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            rows:       0,
            last_error: None,
        }
    }

    /// Rows written so far.
    pub fn rows(&self) -> u64 {
        self.rows
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: TraceWriter> SimObserver for TraceObserver<W> {
    fn on_step(&mut self, tick: Tick, elapsed_secs: f64, step: &Step) {
        let row = TraceRow {
            tick: tick.0,
            elapsed_secs,
            lat: step.position.lat,
            lon: step.position.lon,
            hazard_distance_m: step.proximity.distance_m,
            alert: step.proximity.inside,
        };
        let result = self.writer.write_row(&row);
        if result.is_ok() {
            self.rows += 1;
        }
        self.store_err(result);
    }

    fn on_finished(&mut self, _final_tick: Tick) {
        let result = self.writer.flush();
        self.store_err(result);
    }

    fn on_reset(&mut self) {
        let result = self.writer.flush();
        self.store_err(result);
    }
}
