//! `am-output` — concrete sinks for the alertmap simulator.
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`row`]      | `TraceRow` — one line per tick                              |
//! | [`writer`]   | `TraceWriter` trait                                         |
//! | [`trace`]    | `CsvTraceWriter` — writes `trace.csv`                       |
//! | [`observer`] | `TraceObserver<W>` — bridges `SimObserver` to a writer      |
//! | [`bell`]     | `BellEngine` — terminal-bell `SoundEngine`                  |
//! | [`display`]  | `LogDisplay` — `DisplaySink` that logs what it would draw   |
//!
//! # Usage
//!
//! ```rust,ignore
//! use am_output::{CsvTraceWriter, TraceObserver};
//!
//! let writer = CsvTraceWriter::new(Path::new("./output"))?;
//! let mut obs = TraceObserver::new(writer);
//! run_event_loop(&mut controller, &rx, &mut obs, RunUntil::Settled);
//! obs.take_error().map(|e| log::error!("trace error: {e}"));
//! ```

pub mod bell;
pub mod display;
pub mod error;
pub mod observer;
pub mod row;
pub mod trace;
pub mod writer;

#[cfg(test)]
mod tests;

pub use bell::BellEngine;
pub use display::LogDisplay;
pub use error::{OutputError, OutputResult};
pub use observer::TraceObserver;
pub use row::TraceRow;
pub use trace::CsvTraceWriter;
pub use writer::TraceWriter;
