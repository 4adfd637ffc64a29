//! Base error type.
//!
//! Both variants are contract violations: the lane registry and grid
//! geometry are fixed at construction, so a failed lookup means a caller
//! fabricated an identity rather than using one the world handed out.
//! Sub-crates wrap `CoreError` via `From` where they add their own variants.

use thiserror::Error;

use crate::{CellId, LaneId};

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("lane {0} not registered")]
    LaneNotFound(LaneId),

    #[error("cell {cell} outside the {cols}x{rows} grid")]
    CellOutOfBounds { cell: CellId, cols: u16, rows: u16 },
}

/// Shorthand result type for registry and geometry lookups.
pub type CoreResult<T> = Result<T, CoreError>;
