//! The `TraceWriter` trait implemented by trace backends.

use crate::{OutputResult, TraceRow};

/// Trait implemented by trace backends.
///
/// Errors are stored by [`TraceObserver`][crate::TraceObserver] because
/// observer hooks have no return value.
pub trait TraceWriter {
    /// Append one row.
    fn write_row(&mut self, row: &TraceRow) -> OutputResult<()>;

    /// Flush buffered rows.  Called at the end of every run.
    fn flush(&mut self) -> OutputResult<()>;
}
