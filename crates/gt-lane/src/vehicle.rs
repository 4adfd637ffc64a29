//! Per-vehicle kinematic and crossing-commitment state.

use gt_core::LaneId;

/// One vehicle on one lane.
///
/// A vehicle is owned exclusively by its lane: it is created by the lane's
/// spawn admission and dropped by the motion pass once it travels past the
/// lane's exit boundary.  `commit_to` is the no-stop contract taken on when
/// a green signal admits the vehicle into a crossing: until `pos` passes
/// that coordinate the vehicle is inside the box and must keep rolling.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vehicle {
    pub lane:      LaneId,
    /// Scalar position along the lane's axis.
    pub pos:       f64,
    /// Scalar speed, always ≥ 0; direction comes from the lane heading.
    pub vel:       f64,
    /// Coordinate the vehicle must clear before it may stop again.
    pub commit_to: Option<f64>,
}

impl Vehicle {
    /// A freshly admitted vehicle: at `pos`, standing still, uncommitted.
    pub fn new(lane: LaneId, pos: f64) -> Self {
        Self {
            lane,
            pos,
            vel: 0.0,
            commit_to: None,
        }
    }

    /// Position projected onto the travel direction; larger is further
    /// along the lane regardless of heading.
    #[inline]
    pub fn progress(&self) -> f64 {
        self.lane.heading.progress(self.pos)
    }

    /// Whether the vehicle currently holds a no-stop commitment.
    #[inline]
    pub fn is_committed(&self) -> bool {
        self.commit_to.is_some()
    }

    /// Whether the vehicle counts as stopped for jam sensing.
    #[inline]
    pub fn is_halted(&self, epsilon: f64) -> bool {
        self.vel.abs() < epsilon
    }
}
