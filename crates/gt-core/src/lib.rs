//! `gt-core` — foundational types for the grid-traffic simulation.
//!
//! This crate is a dependency of every other `gt-*` crate.  It intentionally
//! has no `gt-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`ids`]      | `Axis`, `Heading`, `LaneId`, `CellId`, `Color`           |
//! | [`tick`]     | `Tick` — the simulation clock unit                       |
//! | [`rng`]      | `SimRng` — deterministic stream + Poisson sampler        |
//! | [`params`]   | `MotionProfile`, `SenseWindows` — named tolerances       |
//! | [`controls`] | `Controls` — clamped exogenous multipliers               |
//! | [`error`]    | `CoreError`, `CoreResult`                                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                      |
//! |---------|-------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.         |

pub mod controls;
pub mod error;
pub mod ids;
pub mod params;
pub mod rng;
pub mod tick;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use controls::Controls;
pub use error::{CoreError, CoreResult};
pub use ids::{Axis, CellId, Color, Heading, LaneId};
pub use params::{MotionProfile, SenseWindows};
pub use rng::SimRng;
pub use tick::Tick;
