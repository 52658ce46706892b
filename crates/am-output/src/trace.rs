//! CSV trace backend.
//!
//! Creates `trace.csv` in the configured output directory.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::TraceWriter;
use crate::{OutputResult, TraceRow};

pub const TRACE_FILE: &str = "trace.csv";

/// Writes one CSV row per simulated tick.
pub struct CsvTraceWriter {
    rows: Writer<File>,
}

impl CsvTraceWriter {
    /// Create `trace.csv` in `dir` and write the header row.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut rows = Writer::from_path(dir.join(TRACE_FILE))?;
        rows.write_record(["tick", "elapsed_secs", "lat", "lon", "hazard_distance_m", "alert"])?;
        Ok(Self { rows })
    }
}

impl TraceWriter for CsvTraceWriter {
    fn write_row(&mut self, row: &TraceRow) -> OutputResult<()> {
        self.rows.write_record(&[
            row.tick.to_string(),
            format!("{:.3}", row.elapsed_secs),
            format!("{:.8}", row.lat),
            format!("{:.8}", row.lon),
            format!("{:.2}", row.hazard_distance_m),
            (row.alert as u8).to_string(),
        ])?;
        Ok(())
    }

    fn flush(&mut self) -> OutputResult<()> {
        self.rows.flush()?;
        Ok(())
    }
}
