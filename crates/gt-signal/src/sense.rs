//! Sensed vehicle counts consumed by the controller.
//!
//! The world assembles one [`Sensed`] bundle per intersection per tick from
//! its counting queries, after the move phase.  Pre-collecting the counts
//! keeps the decision rules pure functions of `(controller, sensed)`.

use gt_core::Axis;

/// Counts observed on one axis of one intersection.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct AxisSense {
    /// Vehicles inside the pre-line approach window, moving or not.
    pub approaching: u32,
    /// Vehicles inside the very-near-line window (a subset of
    /// `approaching` under the default window sizes).
    pub near_line:   u32,
    /// Vehicles halted inside the downstream window past the stop line.
    pub halted_past: u32,
}

/// One intersection's sensor sweep for one tick.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Sensed {
    pub ew: AxisSense,
    pub ns: AxisSense,
}

impl Sensed {
    #[inline]
    pub fn axis(&self, axis: Axis) -> &AxisSense {
        match axis {
            Axis::Ew => &self.ew,
            Axis::Ns => &self.ns,
        }
    }

    /// Both axes show a stopped vehicle inside the crossing box.
    #[inline]
    pub fn both_blocked(&self) -> bool {
        self.ew.halted_past > 0 && self.ns.halted_past > 0
    }
}
