//! The `OutputWriter` trait implemented by backend writers.

use crate::{FrameSummaryRow, OutputResult, PoseRow};

/// A sink for pose rows and frame summaries.
///
/// Errors surface through [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error]
/// when the writer is driven by the observer.
pub trait OutputWriter {
    /// Write one snapshot's worth of poses.
    fn write_poses(&mut self, rows: &[PoseRow]) -> OutputResult<()>;

    fn write_frame_summary(&mut self, row: &FrameSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
