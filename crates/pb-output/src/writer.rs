//! The `OutputWriter` trait.

use crate::{EventRow, OutputResult, TrailRow};

/// Sink for trail samples and event log entries.
///
/// Errors surface to the observer, which keeps the first one for
/// [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    fn write_trail(&mut self, row: &TrailRow) -> OutputResult<()>;

    fn write_event(&mut self, row: &EventRow) -> OutputResult<()>;

    /// Flush all underlying handles.  Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
