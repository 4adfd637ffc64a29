//! The `World`: owns everything and drives the tick pipeline.

use gt_core::{
    Axis, CellId, Color, Controls, CoreResult, LaneId, MotionProfile, SenseWindows, SimRng, Tick,
};
use gt_lane::motion::{self, CrossingView};
use gt_lane::Lane;
use gt_signal::{Controller, Phase, SignalSnapshot, SignalTiming};

use crate::observer::SimObserver;
use crate::queries::TrafficQueries;
use crate::{Frame, GridGeometry, LaneSet, SignalMarker, SimResult, VehicleMarker};

// ── TickSummary ───────────────────────────────────────────────────────────────

/// What one `step()` did, for observers and telemetry.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TickSummary {
    /// The tick that was just executed.
    pub tick:            Tick,
    /// Vehicles admitted by spawn this tick.
    pub spawned:         u32,
    /// Vehicles removed past lane exits this tick.
    pub departed:        u32,
    /// Vehicles present after the tick.
    pub vehicles:        usize,
    /// Forced ALL_RED releases that fired this tick.
    pub forced_releases: u32,
}

// ── World ─────────────────────────────────────────────────────────────────────

/// One independent, reproducible simulation.
///
/// Everything mutable lives here — the RNG stream, the fairness bit, the
/// control knobs — so two worlds never interfere.  Create via
/// [`WorldBuilder`][crate::WorldBuilder].
pub struct World {
    pub(crate) geom:           GridGeometry,
    pub(crate) lanes:          LaneSet,
    pub(crate) signals:        Vec<Controller>,
    pub(crate) windows:        SenseWindows,
    pub(crate) profile:        MotionProfile,
    pub(crate) timing:         SignalTiming,
    pub(crate) controls:       Controls,
    pub(crate) rng:            SimRng,
    pub(crate) fairness:       bool,
    pub(crate) frame_interval: u64,
    pub(crate) now:            Tick,
}

impl World {
    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn now(&self) -> Tick {
        self.now
    }

    #[inline]
    pub fn geometry(&self) -> &GridGeometry {
        &self.geom
    }

    pub fn lane(&self, id: LaneId) -> SimResult<&Lane> {
        Ok(self.lanes.get(id)?)
    }

    /// Mutable lane access, for hosts and tests that stage scenarios.
    pub fn lane_mut(&mut self, id: LaneId) -> SimResult<&mut Lane> {
        Ok(self.lanes.get_mut(id)?)
    }

    pub fn lanes(&self) -> impl Iterator<Item = &Lane> {
        self.lanes.iter()
    }

    pub fn signal(&self, cell: CellId) -> SimResult<&Controller> {
        let idx = self.geom.cell_index(cell)?;
        Ok(&self.signals[idx])
    }

    /// Replace a controller's state from a snapshot — the persistence
    /// path; live transitions only ever happen inside the state machine.
    pub fn restore_signal(&mut self, cell: CellId, snapshot: SignalSnapshot) -> SimResult<()> {
        let idx = self.geom.cell_index(cell)?;
        self.signals[idx] = Controller::restore(snapshot);
        Ok(())
    }

    pub fn vehicle_count(&self) -> usize {
        self.lanes.total_vehicles()
    }

    // ── Exogenous controls ────────────────────────────────────────────────

    #[inline]
    pub fn controls(&self) -> &Controls {
        &self.controls
    }

    /// Set the traffic multiplier (clamped).  Takes effect atomically at
    /// the start of the next tick.
    pub fn set_traffic(&mut self, value: f64) {
        self.controls.set_traffic(value);
    }

    /// Set the speed multiplier (clamped).  Takes effect atomically at the
    /// start of the next tick.
    pub fn set_speed(&mut self, value: f64) {
        self.controls.set_speed(value);
    }

    // ── Tick pipeline ─────────────────────────────────────────────────────

    /// Advance the simulation by exactly one tick.
    ///
    /// Phase order is load-bearing: movement observes the previous tick's
    /// signal colors, and signal evaluation observes post-move positions.
    pub fn step(&mut self) -> SimResult<TickSummary> {
        let tick = self.now;
        // Both knobs are read once; a host write mid-tick waits for the
        // next one.
        let traffic = self.controls.traffic();
        let speed = self.controls.speed();

        // ── Phase 1: spawn ────────────────────────────────────────────────
        let mut spawned = 0;
        for lane in self.lanes.iter_mut() {
            spawned += lane.spawn(&mut self.rng, traffic, &self.profile);
        }

        // ── Phase 2: move ─────────────────────────────────────────────────
        //
        // Lanes advance against a frozen copy of the post-spawn state and
        // the previous evaluation's phases, so admission checks on one
        // lane never observe another lane's partial movement.
        let frozen = self.lanes.clone();
        let phases: Vec<Phase> = self.signals.iter().map(Controller::phase).collect();
        let view = MoveView {
            geom:     &self.geom,
            frozen:   &frozen,
            phases:   &phases,
            windows:  &self.windows,
            halt_eps: self.profile.halt_epsilon,
        };

        #[cfg(not(feature = "parallel"))]
        let departed: u32 = {
            let mut total = 0;
            for lane in self.lanes.iter_mut() {
                total += motion::advance(lane, &view, &self.profile, speed)?.departed;
            }
            total
        };

        #[cfg(feature = "parallel")]
        let departed: u32 = {
            use rayon::prelude::*;
            let profile = &self.profile;
            let outcomes: Vec<CoreResult<motion::MoveOutcome>> = self
                .lanes
                .as_mut_slice()
                .par_iter_mut()
                .map(|lane| motion::advance(lane, &view, profile, speed))
                .collect();
            let mut total = 0;
            for outcome in outcomes {
                total += outcome?.departed;
            }
            total
        };

        // ── Phase 3: control ──────────────────────────────────────────────
        //
        // Sequential, col-major: forced releases consume the shared
        // fairness bit in this order.
        let mut forced_releases = 0;
        let queries = TrafficQueries::new(&self.geom, &self.lanes);
        for cell in self.geom.cells() {
            let sensed = queries.sense(cell, &self.windows, self.profile.halt_epsilon)?;
            let parity = (cell.col + cell.row + self.fairness as u16) % 2;
            let fallback = if parity == 0 { Axis::Ew } else { Axis::Ns };
            let idx = self.geom.cell_index(cell)?;
            let outcome = self.signals[idx].tick(&sensed, fallback, &self.timing);
            if outcome.forced_release {
                self.fairness = !self.fairness;
                forced_releases += 1;
            }
        }

        self.now = self.now.offset(1);
        Ok(TickSummary {
            tick,
            spawned,
            departed,
            vehicles: self.lanes.total_vehicles(),
            forced_releases,
        })
    }

    /// Run exactly `n` ticks, invoking observer hooks around each.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            let now = self.now;
            observer.on_tick_start(now);
            let summary = self.step()?;
            observer.on_tick_end(now, &summary);
            if self.frame_interval > 0 && now.0.is_multiple_of(self.frame_interval) {
                let mut frame = self.frame();
                // Label the frame with the tick that produced this state.
                frame.tick = now;
                observer.on_frame(now, &frame);
            }
        }
        observer.on_sim_end(self.now);
        Ok(())
    }

    // ── Presentation surface ──────────────────────────────────────────────

    /// Snapshot everything a renderer needs: per-lane ordered vehicle
    /// markers and per-intersection signal indications.
    pub fn frame(&self) -> Frame {
        let vehicles = self
            .lanes
            .iter()
            .flat_map(|lane| {
                lane.vehicles.iter().map(|car| VehicleMarker {
                    lane:  car.lane,
                    pos:   car.pos,
                    cross: lane.cross,
                    vel:   car.vel,
                })
            })
            .collect();

        let signals = self
            .geom
            .cells()
            .map(|cell| {
                // Cells come straight from the geometry; the index cannot
                // miss.
                let idx = cell.col as usize * self.geom.rows() as usize + cell.row as usize;
                let controller = &self.signals[idx];
                SignalMarker {
                    cell,
                    center: self.geom.cell_center(cell),
                    phase:  controller.phase(),
                    ew:     controller.color_for(Axis::Ew),
                    ns:     controller.color_for(Axis::Ns),
                }
            })
            .collect();

        Frame {
            tick: self.now,
            vehicles,
            signals,
        }
    }
}

// ── MoveView ──────────────────────────────────────────────────────────────────

/// The frozen start-of-tick view the move phase reads through.
struct MoveView<'a> {
    geom:     &'a GridGeometry,
    frozen:   &'a LaneSet,
    phases:   &'a [Phase],
    windows:  &'a SenseWindows,
    halt_eps: f64,
}

impl CrossingView for MoveView<'_> {
    fn crossings(&self, lane: LaneId) -> CoreResult<&[(CellId, f64)]> {
        self.frozen.crossings(lane)
    }

    fn color(&self, cell: CellId, axis: Axis) -> CoreResult<Color> {
        let idx = self.geom.cell_index(cell)?;
        Ok(self.phases[idx].color_for(axis))
    }

    fn halted_past_line(&self, cell: CellId, axis: Axis) -> CoreResult<u32> {
        TrafficQueries::new(self.geom, self.frozen).past_line(
            cell,
            axis,
            self.windows.downstream,
            true,
            self.halt_eps,
        )
    }

    fn clear_gap_past_line(&self, cell: CellId, axis: Axis, min_gap: f64) -> CoreResult<bool> {
        TrafficQueries::new(self.geom, self.frozen).clear_gap_past_line(
            cell,
            axis,
            self.windows.downstream,
            min_gap,
        )
    }
}
