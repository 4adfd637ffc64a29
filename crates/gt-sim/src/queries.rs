//! Shared counting queries over lanes and stop lines.
//!
//! Both consumers — the move phase's admission checks and the control
//! phase's demand/jam sensing — go through these, so the two always agree
//! on what "before", "past", and "stopped" mean.  Window bounds follow the
//! sensing convention: a vehicle exactly on the line counts as *before* it.

use gt_core::{Axis, CellId, CoreResult, SenseWindows};
use gt_signal::{AxisSense, Sensed};

use crate::{GridGeometry, LaneSet};

/// Read-only counting queries over one lane set.
pub struct TrafficQueries<'a> {
    geom:  &'a GridGeometry,
    lanes: &'a LaneSet,
}

impl<'a> TrafficQueries<'a> {
    pub fn new(geom: &'a GridGeometry, lanes: &'a LaneSet) -> Self {
        Self { geom, lanes }
    }

    /// Vehicles within `window` before the stop line on both lanes of
    /// `axis` at `cell` (0 ≤ d ≤ window), moving or not.
    pub fn approaching(&self, cell: CellId, axis: Axis, window: f64) -> CoreResult<u32> {
        let mut count = 0;
        for id in self.lanes.pair(cell, axis) {
            let lane = self.lanes.get(id)?;
            let stop = self.geom.stop_line(axis, id.heading, cell);
            for car in &lane.vehicles {
                let d = id.heading.distance(car.pos, stop);
                if (0.0..=window).contains(&d) {
                    count += 1;
                }
            }
        }
        Ok(count)
    }

    /// Vehicles within `window` past the stop line (−window ≤ d < 0),
    /// optionally restricted to halted ones.
    pub fn past_line(
        &self,
        cell:        CellId,
        axis:        Axis,
        window:      f64,
        halted_only: bool,
        halt_eps:    f64,
    ) -> CoreResult<u32> {
        let mut count = 0;
        for id in self.lanes.pair(cell, axis) {
            let lane = self.lanes.get(id)?;
            let stop = self.geom.stop_line(axis, id.heading, cell);
            for car in &lane.vehicles {
                let d = id.heading.distance(car.pos, stop);
                if -window <= d && d < 0.0 && (!halted_only || car.is_halted(halt_eps)) {
                    count += 1;
                }
            }
        }
        Ok(count)
    }

    /// Whether the vehicle nearest past the stop line (within `window`)
    /// leaves more than `min_gap` of room.  Vacuously true when the window
    /// is empty.
    pub fn clear_gap_past_line(
        &self,
        cell:    CellId,
        axis:    Axis,
        window:  f64,
        min_gap: f64,
    ) -> CoreResult<bool> {
        let mut nearest = f64::INFINITY;
        for id in self.lanes.pair(cell, axis) {
            let lane = self.lanes.get(id)?;
            let stop = self.geom.stop_line(axis, id.heading, cell);
            for car in &lane.vehicles {
                let d = id.heading.distance(car.pos, stop);
                if -window <= d && d < 0.0 {
                    nearest = nearest.min(-d);
                }
            }
        }
        Ok(nearest > min_gap)
    }

    /// The full sensor sweep one controller consumes for one tick.
    pub fn sense(
        &self,
        cell:     CellId,
        windows:  &SenseWindows,
        halt_eps: f64,
    ) -> CoreResult<Sensed> {
        let mut axes = [AxisSense::default(), AxisSense::default()];
        for axis in [Axis::Ew, Axis::Ns] {
            axes[axis.index()] = AxisSense {
                approaching: self.approaching(cell, axis, windows.approach)?,
                near_line:   self.approaching(cell, axis, windows.near_line)?,
                halted_past: self.past_line(cell, axis, windows.downstream, true, halt_eps)?,
            };
        }
        let [ew, ns] = axes;
        Ok(Sensed { ew, ns })
    }
}
