//! The `OutputWriter` trait implemented by backend writers.

use crate::{OutputResult, SignalSnapshotRow, TickSummaryRow, VehicleSnapshotRow};

/// Backend-agnostic sink for simulation telemetry.
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally by [`CsvObserver`][crate::CsvObserver] and retrieved
/// with `take_error`.
pub trait OutputWriter {
    /// Write a batch of vehicle position snapshots.
    fn write_vehicles(&mut self, rows: &[VehicleSnapshotRow]) -> OutputResult<()>;

    /// Write a batch of signal phase snapshots.
    fn write_signals(&mut self, rows: &[SignalSnapshotRow]) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
