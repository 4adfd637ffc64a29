//! The keyed lane registry.

use gt_core::{Axis, CellId, CoreError, CoreResult, Heading, LaneId};
use gt_lane::Lane;
use rustc_hash::FxHashMap;

use crate::GridGeometry;

// ── ArrivalRates ──────────────────────────────────────────────────────────────

/// Base expected arrivals per tick for each compass approach, before the
/// traffic multiplier.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArrivalRates {
    pub eastbound:  f64,
    pub westbound:  f64,
    pub northbound: f64,
    pub southbound: f64,
}

impl Default for ArrivalRates {
    fn default() -> Self {
        Self {
            eastbound:  0.08,
            westbound:  0.07,
            northbound: 0.07,
            southbound: 0.07,
        }
    }
}

impl ArrivalRates {
    /// A uniform zero rate — handy for scenario tests that inject their
    /// own vehicles.
    pub fn silent() -> Self {
        Self {
            eastbound:  0.0,
            westbound:  0.0,
            northbound: 0.0,
            southbound: 0.0,
        }
    }
}

// ── LaneSet ───────────────────────────────────────────────────────────────────

/// All lanes of a world, with a keyed index and each lane's precomputed
/// crossing sequence.
///
/// Lane lookup sits on the per-vehicle, per-tick hot path, so identities
/// resolve through an `FxHashMap` rather than a scan; crossings are
/// computed once at build because the geometry never changes.
#[derive(Clone, Debug)]
pub struct LaneSet {
    lanes:     Vec<Lane>,
    index:     FxHashMap<LaneId, usize>,
    crossings: Vec<Vec<(CellId, f64)>>,
}

impl LaneSet {
    /// Lay out the registry: per row an eastbound and a westbound lane,
    /// per column a northbound and a southbound lane.  The vector order is
    /// also the spawn-sampling order, so it is part of the deterministic
    /// contract.
    pub(crate) fn build(geom: &GridGeometry, rates: &ArrivalRates) -> Self {
        let mut lanes = Vec::with_capacity(2 * (geom.rows() + geom.cols()) as usize);
        for row in 0..geom.rows() {
            let y = geom.row_y(row);
            lanes.push(Lane::new(
                LaneId::new(Axis::Ew, row, Heading::Pos),
                geom.x_min(),
                geom.x_max(),
                y,
                rates.eastbound,
            ));
            lanes.push(Lane::new(
                LaneId::new(Axis::Ew, row, Heading::Neg),
                geom.x_max(),
                geom.x_min(),
                y,
                rates.westbound,
            ));
        }
        for col in 0..geom.cols() {
            let x = geom.col_x(col);
            lanes.push(Lane::new(
                LaneId::new(Axis::Ns, col, Heading::Pos),
                geom.y_min(),
                geom.y_max(),
                x,
                rates.northbound,
            ));
            lanes.push(Lane::new(
                LaneId::new(Axis::Ns, col, Heading::Neg),
                geom.y_max(),
                geom.y_min(),
                x,
                rates.southbound,
            ));
        }

        let index = lanes
            .iter()
            .enumerate()
            .map(|(i, lane)| (lane.id, i))
            .collect();
        let crossings = lanes.iter().map(|lane| geom.crossings_for(lane.id)).collect();

        Self {
            lanes,
            index,
            crossings,
        }
    }

    fn idx(&self, id: LaneId) -> CoreResult<usize> {
        self.index
            .get(&id)
            .copied()
            .ok_or(CoreError::LaneNotFound(id))
    }

    pub fn get(&self, id: LaneId) -> CoreResult<&Lane> {
        Ok(&self.lanes[self.idx(id)?])
    }

    pub fn get_mut(&mut self, id: LaneId) -> CoreResult<&mut Lane> {
        let i = self.idx(id)?;
        Ok(&mut self.lanes[i])
    }

    /// The crossing sequence of `id`, in travel order.
    pub fn crossings(&self, id: LaneId) -> CoreResult<&[(CellId, f64)]> {
        Ok(&self.crossings[self.idx(id)?])
    }

    /// The two lanes of `axis` passing through `cell`.
    pub fn pair(&self, cell: CellId, axis: Axis) -> [LaneId; 2] {
        match axis {
            Axis::Ew => [
                LaneId::new(Axis::Ew, cell.row, Heading::Pos),
                LaneId::new(Axis::Ew, cell.row, Heading::Neg),
            ],
            Axis::Ns => [
                LaneId::new(Axis::Ns, cell.col, Heading::Pos),
                LaneId::new(Axis::Ns, cell.col, Heading::Neg),
            ],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Lane> {
        self.lanes.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Lane> {
        self.lanes.iter_mut()
    }

    #[cfg(feature = "parallel")]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [Lane] {
        &mut self.lanes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.lanes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lanes.is_empty()
    }

    pub fn total_vehicles(&self) -> usize {
        self.lanes.iter().map(Lane::len).sum()
    }
}
