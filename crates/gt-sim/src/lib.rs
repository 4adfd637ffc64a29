//! `gt-sim` — the world and its tick pipeline.
//!
//! # Three-phase tick
//!
//! ```text
//! for each step():
//!   ① Spawn    — Poisson arrivals per lane, in registry order, against
//!                the tick's frozen traffic multiplier.
//!   ② Move     — every lane advances independently (parallel with the
//!                `parallel` feature) against a frozen copy of the
//!                post-spawn state and the previous tick's signal phases.
//!   ③ Control  — every controller evaluates in col-major grid order
//!                against post-move positions; forced releases rotate the
//!                shared fairness bit in that order.
//! ```
//!
//! A full barrier separates the phases: control never sees partial
//! movement, movement never sees this tick's control decisions.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the move phase on Rayon's thread pool.            |
//! | `serde`    | Serde derives on frames, snapshots, and parameters.    |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use gt_sim::{NoopObserver, WorldBuilder};
//!
//! let mut world = WorldBuilder::new(3, 3).seed(5).build()?;
//! world.set_traffic(0.8);
//! world.run_ticks(1_800, &mut NoopObserver)?;
//! let frame = world.frame();
//! ```

pub mod builder;
pub mod error;
pub mod frame;
pub mod grid;
pub mod lanes;
pub mod observer;
pub mod queries;
pub mod world;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use builder::WorldBuilder;
pub use error::{SimError, SimResult};
pub use frame::{Frame, SignalMarker, VehicleMarker};
pub use grid::GridGeometry;
pub use lanes::{ArrivalRates, LaneSet};
pub use observer::{NoopObserver, SimObserver};
pub use queries::TrafficQueries;
pub use world::{TickSummary, World};
