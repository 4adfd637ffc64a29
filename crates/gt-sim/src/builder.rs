//! Fluent builder for constructing a [`World`].

use gt_core::{Controls, MotionProfile, SenseWindows, SimRng, Tick};
use gt_signal::{Controller, SignalTiming};

use crate::{ArrivalRates, GridGeometry, LaneSet, SimError, SimResult, World};

/// Fluent builder for [`World`].
///
/// # Required inputs
///
/// - Grid dimensions, via [`new`][WorldBuilder::new].
///
/// # Optional inputs (have defaults)
///
/// | Method             | Default                                   |
/// |--------------------|-------------------------------------------|
/// | `.spacing(f)`      | 1.6 units between intersections           |
/// | `.margin(f)`       | 0.9 units beyond the outer intersections  |
/// | `.stop_setback(f)` | 0.10 units short of each center           |
/// | `.seed(u)`         | 5                                         |
/// | `.rates(r)`        | `ArrivalRates::default()`                 |
/// | `.windows(w)`      | `SenseWindows::default()`                 |
/// | `.profile(p)`      | `MotionProfile::default()`                |
/// | `.timing(t)`       | `SignalTiming::default()`                 |
/// | `.controls(c)`     | `Controls::default()`                     |
/// | `.frame_interval(n)` | 1 (every tick; 0 disables frames)       |
///
/// # Example
///
/// ```rust,ignore
/// let mut world = WorldBuilder::new(3, 3).seed(42).build()?;
/// world.run_ticks(600, &mut NoopObserver)?;
/// ```
pub struct WorldBuilder {
    cols:           u16,
    rows:           u16,
    spacing:        f64,
    margin:         f64,
    stop_setback:   f64,
    seed:           u64,
    rates:          ArrivalRates,
    windows:        SenseWindows,
    profile:        MotionProfile,
    timing:         SignalTiming,
    controls:       Controls,
    frame_interval: u64,
}

impl WorldBuilder {
    /// Start a builder for a `cols` × `rows` grid.
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            cols,
            rows,
            spacing:        1.6,
            margin:         0.9,
            stop_setback:   0.10,
            seed:           5,
            rates:          ArrivalRates::default(),
            windows:        SenseWindows::default(),
            profile:        MotionProfile::default(),
            timing:         SignalTiming::default(),
            controls:       Controls::default(),
            frame_interval: 1,
        }
    }

    pub fn spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    pub fn stop_setback(mut self, setback: f64) -> Self {
        self.stop_setback = setback;
        self
    }

    /// Seed for the arrival sampler; the same seed reproduces the run.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn rates(mut self, rates: ArrivalRates) -> Self {
        self.rates = rates;
        self
    }

    pub fn windows(mut self, windows: SenseWindows) -> Self {
        self.windows = windows;
        self
    }

    pub fn profile(mut self, profile: MotionProfile) -> Self {
        self.profile = profile;
        self
    }

    pub fn timing(mut self, timing: SignalTiming) -> Self {
        self.timing = timing;
        self
    }

    pub fn controls(mut self, controls: Controls) -> Self {
        self.controls = controls;
        self
    }

    /// Emit a frame to observers every `n` ticks; 0 disables frames.
    pub fn frame_interval(mut self, n: u64) -> Self {
        self.frame_interval = n;
        self
    }

    /// Validate the configuration and build a ready-to-step [`World`].
    pub fn build(self) -> SimResult<World> {
        if self.cols == 0 || self.rows == 0 {
            return Err(SimError::Config(format!(
                "grid must have at least one column and one row, got {}x{}",
                self.cols, self.rows
            )));
        }
        if self.spacing <= 0.0 {
            return Err(SimError::Config(format!(
                "intersection spacing must be positive, got {}",
                self.spacing
            )));
        }
        if self.margin < 0.0 {
            return Err(SimError::Config(format!(
                "map margin must be non-negative, got {}",
                self.margin
            )));
        }
        if self.stop_setback < 0.0 || self.stop_setback >= self.spacing / 2.0 {
            return Err(SimError::Config(format!(
                "stop-line setback {} must sit within half the spacing {}",
                self.stop_setback, self.spacing
            )));
        }

        let geom = GridGeometry::new(
            self.cols,
            self.rows,
            self.spacing,
            self.margin,
            self.stop_setback,
        );
        let lanes = LaneSet::build(&geom, &self.rates);
        let signals = vec![Controller::new(); geom.cell_count()];

        Ok(World {
            geom,
            lanes,
            signals,
            windows:        self.windows,
            profile:        self.profile,
            timing:         self.timing,
            controls:       self.controls,
            rng:            SimRng::new(self.seed),
            fairness:       false,
            frame_interval: self.frame_interval,
            now:            Tick::ZERO,
        })
    }
}
