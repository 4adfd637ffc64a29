//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `vehicle_snapshots.csv`
//! - `signal_snapshots.csv`
//! - `tick_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, SignalSnapshotRow, TickSummaryRow, VehicleSnapshotRow};

/// Writes simulation telemetry to three CSV files.
pub struct CsvWriter {
    vehicles:  Writer<File>,
    signals:   Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the three CSV files in `dir` and write the header
    /// rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut vehicles = Writer::from_path(dir.join("vehicle_snapshots.csv"))?;
        vehicles.write_record(["tick", "axis", "index", "heading", "pos", "vel"])?;

        let mut signals = Writer::from_path(dir.join("signal_snapshots.csv"))?;
        signals.write_record(["tick", "col", "row", "phase"])?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(["tick", "spawned", "departed", "vehicles", "forced_releases"])?;

        Ok(Self {
            vehicles,
            signals,
            summaries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_vehicles(&mut self, rows: &[VehicleSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.vehicles.write_record(&[
                row.tick.to_string(),
                row.axis.to_string(),
                row.index.to_string(),
                row.heading.to_string(),
                row.pos.to_string(),
                row.vel.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_signals(&mut self, rows: &[SignalSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.signals.write_record(&[
                row.tick.to_string(),
                row.col.to_string(),
                row.row.to_string(),
                row.phase.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.spawned.to_string(),
            row.departed.to_string(),
            row.vehicles.to_string(),
            row.forced_releases.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.vehicles.flush()?;
        self.signals.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
