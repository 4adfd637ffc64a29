//! The five signal phases and their per-axis color derivation.

use std::fmt;

use gt_core::{Axis, Color};

/// Signal phase at one intersection.
///
/// A fresh intersection starts in `EwGreen`.  Transitions happen only
/// through the controller's rule list; nothing else assigns a phase.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    #[default]
    EwGreen,
    NsGreen,
    EwYellow,
    NsYellow,
    AllRed,
}

impl Phase {
    /// The green phase for `axis`.
    #[inline]
    pub fn green(axis: Axis) -> Phase {
        match axis {
            Axis::Ew => Phase::EwGreen,
            Axis::Ns => Phase::NsGreen,
        }
    }

    /// The yellow phase for `axis`.
    #[inline]
    pub fn yellow(axis: Axis) -> Phase {
        match axis {
            Axis::Ew => Phase::EwYellow,
            Axis::Ns => Phase::NsYellow,
        }
    }

    /// The axis currently holding green, if any.
    #[inline]
    pub fn green_axis(self) -> Option<Axis> {
        match self {
            Phase::EwGreen => Some(Axis::Ew),
            Phase::NsGreen => Some(Axis::Ns),
            _ => None,
        }
    }

    /// The axis currently clearing through yellow, if any.
    #[inline]
    pub fn yellow_axis(self) -> Option<Axis> {
        match self {
            Phase::EwYellow => Some(Axis::Ew),
            Phase::NsYellow => Some(Axis::Ns),
            _ => None,
        }
    }

    #[inline]
    pub fn is_all_red(self) -> bool {
        self == Phase::AllRed
    }

    /// The color this phase shows to `axis`.
    pub fn color_for(self, axis: Axis) -> Color {
        match (self, axis) {
            (Phase::EwGreen, Axis::Ew) | (Phase::NsGreen, Axis::Ns) => Color::Green,
            (Phase::EwYellow, Axis::Ew) | (Phase::NsYellow, Axis::Ns) => Color::Yellow,
            _ => Color::Red,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Phase::EwGreen => "EW_GREEN",
            Phase::NsGreen => "NS_GREEN",
            Phase::EwYellow => "EW_YELLOW",
            Phase::NsYellow => "NS_YELLOW",
            Phase::AllRed => "ALL_RED",
        })
    }
}
