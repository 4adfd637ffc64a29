//! The read-only presentation surface consumed by rendering hosts.

use gt_core::{CellId, Color, LaneId, Tick};
use gt_signal::Phase;

/// One vehicle, ready to draw.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VehicleMarker {
    pub lane:  LaneId,
    /// Position along the lane's axis.
    pub pos:   f64,
    /// The lane's fixed perpendicular coordinate.
    pub cross: f64,
    pub vel:   f64,
}

/// One intersection's signal indication, ready to draw.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SignalMarker {
    pub cell:   CellId,
    pub center: (f64, f64),
    pub phase:  Phase,
    pub ew:     Color,
    pub ns:     Color,
}

/// Everything a renderer needs for one frame.
///
/// Vehicles appear in lane registry order, front-most first within each
/// lane (the order the move phase leaves them in).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    pub tick:     Tick,
    pub vehicles: Vec<VehicleMarker>,
    pub signals:  Vec<SignalMarker>,
}
