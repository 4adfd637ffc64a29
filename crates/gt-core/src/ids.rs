//! Vocabulary types for the traffic grid.
//!
//! Everything here is `Copy + Ord + Hash` so identities can be used as map
//! keys and sorted collection elements without ceremony.  Signed-progress
//! arithmetic goes through [`Heading::distance`] in exactly one place —
//! every gap, window, and stop-line comparison in the workspace is built on
//! it, which keeps the tolerance comparisons consistent across crates.

use std::fmt;

// ── Axis ──────────────────────────────────────────────────────────────────────

/// A traffic direction group at an intersection: east–west or north–south.
///
/// Horizontal lanes face the EW signal head, vertical lanes the NS head, so
/// the same type identifies both a lane's orientation and the signal axis
/// that controls it.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    Ew,
    Ns,
}

impl Axis {
    /// The crossing axis.
    #[inline]
    pub fn opposite(self) -> Axis {
        match self {
            Axis::Ew => Axis::Ns,
            Axis::Ns => Axis::Ew,
        }
    }

    /// Stable index for per-axis arrays (`[T; 2]`).
    #[inline(always)]
    pub fn index(self) -> usize {
        match self {
            Axis::Ew => 0,
            Axis::Ns => 1,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::Ew => "EW",
            Axis::Ns => "NS",
        })
    }
}

// ── Heading ───────────────────────────────────────────────────────────────────

/// Direction of travel along a lane's axis: coordinate-increasing (east /
/// north) or coordinate-decreasing (west / south).
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heading {
    Pos,
    Neg,
}

impl Heading {
    /// ±1.0 multiplier for position updates.
    #[inline(always)]
    pub fn sign(self) -> f64 {
        match self {
            Heading::Pos => 1.0,
            Heading::Neg => -1.0,
        }
    }

    /// Signed distance from `from` to `to` in the direction of travel.
    ///
    /// Positive when `to` lies ahead of `from`, negative when behind.
    #[inline(always)]
    pub fn distance(self, from: f64, to: f64) -> f64 {
        (to - from) * self.sign()
    }

    /// A coordinate's progress along the travel direction; larger means
    /// further along the lane.
    #[inline(always)]
    pub fn progress(self, pos: f64) -> f64 {
        pos * self.sign()
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Heading::Pos => "+",
            Heading::Neg => "-",
        })
    }
}

// ── LaneId ────────────────────────────────────────────────────────────────────

/// Identity of one lane: its axis, its row (EW) or column (NS) index, and
/// its heading.  The registry holding the lanes is fixed at world
/// construction; every `LaneId` handed out by the world resolves.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LaneId {
    pub axis:    Axis,
    pub index:   u16,
    pub heading: Heading,
}

impl LaneId {
    pub fn new(axis: Axis, index: u16, heading: Heading) -> Self {
        Self { axis, index, heading }
    }
}

impl fmt::Display for LaneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let axis = match self.axis {
            Axis::Ew => 'H',
            Axis::Ns => 'V',
        };
        write!(f, "{}{}{}", axis, self.index, self.heading)
    }
}

// ── CellId ────────────────────────────────────────────────────────────────────

/// Grid coordinates of one intersection.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellId {
    pub col: u16,
    pub row: u16,
}

impl CellId {
    pub fn new(col: u16, row: u16) -> Self {
        Self { col, row }
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.col, self.row)
    }
}

// ── Color ─────────────────────────────────────────────────────────────────────

/// The indication one signal head shows to one axis, derived from the
/// controller's phase.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    Green,
    Yellow,
    Red,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Color::Green => "G",
            Color::Yellow => "Y",
            Color::Red => "R",
        })
    }
}
