//! Immutable grid geometry: intersection coordinates, map bounds, stop
//! lines, and the crossing sequence each lane encounters.

use gt_core::{Axis, CellId, CoreError, CoreResult, Heading, LaneId};

/// The fixed geometry of a cols × rows intersection grid.
///
/// Intersections sit at integer multiples of `spacing`; lanes run from one
/// map edge (`margin` beyond the outermost intersections) to the other.
/// Stop lines sit `stop_setback` short of each intersection center, on the
/// approach side for the lane's heading.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridGeometry {
    cols:         u16,
    rows:         u16,
    spacing:      f64,
    margin:       f64,
    stop_setback: f64,
}

impl GridGeometry {
    pub(crate) fn new(cols: u16, rows: u16, spacing: f64, margin: f64, stop_setback: f64) -> Self {
        Self {
            cols,
            rows,
            spacing,
            margin,
            stop_setback,
        }
    }

    #[inline]
    pub fn cols(&self) -> u16 {
        self.cols
    }

    #[inline]
    pub fn rows(&self) -> u16 {
        self.rows
    }

    #[inline]
    pub fn col_x(&self, col: u16) -> f64 {
        col as f64 * self.spacing
    }

    #[inline]
    pub fn row_y(&self, row: u16) -> f64 {
        row as f64 * self.spacing
    }

    #[inline]
    pub fn x_min(&self) -> f64 {
        -self.margin
    }

    #[inline]
    pub fn x_max(&self) -> f64 {
        self.col_x(self.cols - 1) + self.margin
    }

    #[inline]
    pub fn y_min(&self) -> f64 {
        -self.margin
    }

    #[inline]
    pub fn y_max(&self) -> f64 {
        self.row_y(self.rows - 1) + self.margin
    }

    pub fn cell_center(&self, cell: CellId) -> (f64, f64) {
        (self.col_x(cell.col), self.row_y(cell.row))
    }

    #[inline]
    pub fn contains(&self, cell: CellId) -> bool {
        cell.col < self.cols && cell.row < self.rows
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cols as usize * self.rows as usize
    }

    /// Dense index of `cell`, col-major — the order controllers are
    /// evaluated in.
    pub fn cell_index(&self, cell: CellId) -> CoreResult<usize> {
        if !self.contains(cell) {
            return Err(CoreError::CellOutOfBounds {
                cell,
                cols: self.cols,
                rows: self.rows,
            });
        }
        Ok(cell.col as usize * self.rows as usize + cell.row as usize)
    }

    /// All cells in evaluation (col-major) order.
    pub fn cells(&self) -> impl Iterator<Item = CellId> + '_ {
        (0..self.cols).flat_map(move |col| (0..self.rows).map(move |row| CellId::new(col, row)))
    }

    /// Stop-line coordinate for a lane of `axis`/`heading` at `cell`:
    /// the intersection center pulled back toward the approach.
    pub fn stop_line(&self, axis: Axis, heading: Heading, cell: CellId) -> f64 {
        let center = match axis {
            Axis::Ew => self.col_x(cell.col),
            Axis::Ns => self.row_y(cell.row),
        };
        center - heading.sign() * self.stop_setback
    }

    /// The (cell, stop line) pairs `lane` meets, in travel order.
    pub fn crossings_for(&self, lane: LaneId) -> Vec<(CellId, f64)> {
        let cells: Vec<CellId> = match lane.axis {
            Axis::Ew => (0..self.cols)
                .map(|col| CellId::new(col, lane.index))
                .collect(),
            Axis::Ns => (0..self.rows)
                .map(|row| CellId::new(lane.index, row))
                .collect(),
        };
        let ordered: Box<dyn Iterator<Item = CellId>> = match lane.heading {
            Heading::Pos => Box::new(cells.into_iter()),
            Heading::Neg => Box::new(cells.into_iter().rev()),
        };
        ordered
            .map(|cell| (cell, self.stop_line(lane.axis, lane.heading, cell)))
            .collect()
    }
}
