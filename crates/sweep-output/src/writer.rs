//! The `OutputWriter` trait implemented by all backend writers.

use crate::{ClearedRow, DoorRow, EventRow, OutputResult, TrackRow, VisitHeatmap};

/// Trait implemented by the CSV and SQLite writers.
///
/// The observer never propagates these errors; it stores the first one,
/// retrievable with
/// [`SweepOutputObserver::take_error`][crate::SweepOutputObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of trajectory rows (one step, every agent).
    fn write_tracks(&mut self, rows: &[TrackRow]) -> OutputResult<()>;

    /// Write one event row.
    fn write_event(&mut self, row: &EventRow) -> OutputResult<()>;

    /// Write one cleared-count row.
    fn write_cleared(&mut self, row: &ClearedRow) -> OutputResult<()>;

    /// Write the final door states.
    fn write_doors(&mut self, rows: &[DoorRow]) -> OutputResult<()>;

    /// Write the visit heatmap.
    fn write_heatmap(&mut self, heatmap: &VisitHeatmap) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
