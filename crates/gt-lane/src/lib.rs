//! `gt-lane` — vehicles, lanes, and the motion model.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                      |
//! |-------------|---------------------------------------------------------------|
//! | [`vehicle`] | `Vehicle` — kinematic + crossing-commitment state             |
//! | [`lane`]    | `Lane` — ordered vehicle queue, Poisson spawn admission       |
//! | [`motion`]  | `advance` — the per-tick move pass behind [`CrossingView`]    |
//!
//! # Motion model
//!
//! Each tick, per lane, front-to-back:
//!
//! 1. Clear an exhausted crossing commitment.
//! 2. Measure the gap to the leader's updated position.
//! 3. Uncommitted vehicles close to their nearest stop line either halt
//!    (red/yellow, or a jammed green box) or take on a no-stop commitment
//!    through the crossing.
//! 4. Blocked or tailgating vehicles stop — unless committed with room, in
//!    which case they crawl so the box always drains.
//! 5. Vehicles past the lane exit are dropped.

pub mod lane;
pub mod motion;
pub mod vehicle;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use lane::Lane;
pub use motion::{CrossingView, MoveOutcome, advance};
pub use vehicle::Vehicle;
