//! `gt-output` — telemetry writers for the grid-traffic simulation.
//!
//! The CSV backend creates three files:
//!
//! | File                    | Contents                                  |
//! |-------------------------|-------------------------------------------|
//! | `vehicle_snapshots.csv` | per-frame vehicle positions               |
//! | `signal_snapshots.csv`  | per-frame signal phases                   |
//! | `tick_summaries.csv`    | spawn/departure/fleet counts per tick     |
//!
//! The backend implements [`OutputWriter`] and is driven by
//! [`CsvObserver`], which implements `gt_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use gt_output::{CsvObserver, CsvWriter};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = CsvObserver::new(writer);
//! world.run_ticks(1_800, &mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::CsvObserver;
pub use row::{SignalSnapshotRow, TickSummaryRow, VehicleSnapshotRow};
pub use writer::OutputWriter;
