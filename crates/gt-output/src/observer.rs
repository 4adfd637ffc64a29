//! `CsvObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use gt_core::{Axis, Heading, Tick};
use gt_sim::{Frame, SimObserver, TickSummary};

use crate::row::{SignalSnapshotRow, TickSummaryRow, VehicleSnapshotRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SimObserver`] that writes frames and tick summaries to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because observer methods
/// have no return value.  After `run_ticks` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct CsvObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> CsvObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after the run.
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

impl<W: OutputWriter> SimObserver for CsvObserver<W> {
    fn on_tick_end(&mut self, _tick: Tick, summary: &TickSummary) {
        let row = TickSummaryRow {
            tick:            summary.tick.0,
            spawned:         summary.spawned,
            departed:        summary.departed,
            vehicles:        summary.vehicles as u64,
            forced_releases: summary.forced_releases,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_frame(&mut self, tick: Tick, frame: &Frame) {
        let vehicles: Vec<VehicleSnapshotRow> = frame
            .vehicles
            .iter()
            .map(|marker| VehicleSnapshotRow {
                tick:    tick.0,
                axis:    match marker.lane.axis {
                    Axis::Ew => 'H',
                    Axis::Ns => 'V',
                },
                index:   marker.lane.index,
                heading: match marker.lane.heading {
                    Heading::Pos => 1,
                    Heading::Neg => -1,
                },
                pos:     marker.pos,
                vel:     marker.vel,
            })
            .collect();
        if !vehicles.is_empty() {
            let result = self.writer.write_vehicles(&vehicles);
            self.store_err(result);
        }

        let signals: Vec<SignalSnapshotRow> = frame
            .signals
            .iter()
            .map(|marker| SignalSnapshotRow {
                tick:  tick.0,
                col:   marker.cell.col,
                row:   marker.cell.row,
                phase: marker.phase,
            })
            .collect();
        let result = self.writer.write_signals(&signals);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
