//! A lane: an ordered queue of vehicles on a fixed 1-D path.

use gt_core::{LaneId, MotionProfile, SimRng};

use crate::Vehicle;

/// One directed lane across the grid.
///
/// `start` is the entry coordinate, `end` the exit coordinate (start > end
/// for negative headings); `cross` is the fixed perpendicular coordinate
/// the lane runs along.  `vehicles` is kept sorted front-most first — call
/// [`sort`][Lane::sort] after any mutation that may disturb the order and
/// before any following-distance or queue-position computation.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lane {
    pub id:       LaneId,
    pub start:    f64,
    pub end:      f64,
    pub cross:    f64,
    /// Expected arrivals per tick before the traffic multiplier.
    pub rate:     f64,
    pub vehicles: Vec<Vehicle>,
}

impl Lane {
    pub fn new(id: LaneId, start: f64, end: f64, cross: f64, rate: f64) -> Self {
        Self {
            id,
            start,
            end,
            cross,
            rate,
            vehicles: Vec::new(),
        }
    }

    /// Draw this tick's Poisson arrivals and admit those that fit.
    ///
    /// Each prospective arrival is admitted at the lane start with zero
    /// velocity only if the vehicle nearest the start leaves more than the
    /// profile's spawn clearance; otherwise the arrival is silently
    /// dropped.  Checking against the nearest-the-start vehicle (not the
    /// front-most) is what makes admission sufficient to rule out overlap.
    ///
    /// Returns the number of vehicles actually admitted.
    pub fn spawn(&mut self, rng: &mut SimRng, traffic: f64, profile: &MotionProfile) -> u32 {
        let arrivals = rng.poisson(self.rate * traffic);
        let mut admitted = 0;
        for _ in 0..arrivals {
            if self.admit(profile) {
                admitted += 1;
            }
        }
        admitted
    }

    /// Admit one vehicle at the lane start if the entry gap allows it.
    pub(crate) fn admit(&mut self, profile: &MotionProfile) -> bool {
        let clear = match self.rearmost() {
            None => true,
            Some(tail) => (self.start - tail.pos).abs() > profile.spawn_clearance(),
        };
        if clear {
            self.vehicles.push(Vehicle::new(self.id, self.start));
        }
        clear
    }

    /// Re-sort by travel progress, descending (front-most first).
    pub fn sort(&mut self) {
        self.vehicles
            .sort_by(|a, b| b.progress().total_cmp(&a.progress()));
    }

    /// The vehicle with the least travel progress, i.e. nearest the start.
    pub fn rearmost(&self) -> Option<&Vehicle> {
        self.vehicles
            .iter()
            .min_by(|a, b| a.progress().total_cmp(&b.progress()))
    }

    /// The vehicle with the most travel progress.
    pub fn frontmost(&self) -> Option<&Vehicle> {
        self.vehicles
            .iter()
            .max_by(|a, b| a.progress().total_cmp(&b.progress()))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }
}
