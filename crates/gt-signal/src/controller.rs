//! The per-intersection signal controller.

use gt_core::{Axis, Color};

use crate::rules::{Decision, RULES};
use crate::{Phase, Sensed, SignalTiming};

// ── Controller ────────────────────────────────────────────────────────────────

/// One intersection's adaptive signal-control state machine.
///
/// The controller is a pure function of its recorded fields and the sensed
/// counts fed to [`tick`][Controller::tick]: two controllers given the same
/// snapshot and the same input sequence produce the same phase trace.
/// Fields change only through `tick` and [`restore`][Controller::restore].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Controller {
    phase:          Phase,
    /// Ticks elapsed in the current phase (incremented before the rules
    /// run, so the first evaluation in a phase sees 1).
    ticks_in_phase: u32,
    /// Red-phase demand accumulated per axis; zeroed on every green entry.
    demand:         [u32; 2],
    /// Consecutive ticks with both boxes blocked.
    blocked_ticks:  u32,
    /// Ticks spent in the current ALL_RED dwell.
    all_red_ticks:  u32,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}

impl Controller {
    /// A fresh controller: EW green, all counters zero.
    pub fn new() -> Self {
        Self {
            phase:          Phase::EwGreen,
            ticks_in_phase: 0,
            demand:         [0, 0],
            blocked_ticks:  0,
            all_red_ticks:  0,
        }
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn ticks_in_phase(&self) -> u32 {
        self.ticks_in_phase
    }

    /// Accumulated demand for `axis` (meaningful while that axis is red).
    #[inline]
    pub fn demand(&self, axis: Axis) -> u32 {
        self.demand[axis.index()]
    }

    #[inline]
    pub fn blocked_ticks(&self) -> u32 {
        self.blocked_ticks
    }

    #[inline]
    pub fn all_red_ticks(&self) -> u32 {
        self.all_red_ticks
    }

    /// The color currently shown to `axis`.
    #[inline]
    pub fn color_for(&self, axis: Axis) -> Color {
        self.phase.color_for(axis)
    }

    /// Advance the state machine by one tick.
    ///
    /// `fallback` is the axis a forced release grants, chosen by the world
    /// from grid parity and its fairness bit; the outcome reports back
    /// whether that release fired so the world can flip the bit.
    pub fn tick(&mut self, sensed: &Sensed, fallback: Axis, timing: &SignalTiming) -> TickOutcome {
        self.ticks_in_phase += 1;

        // Sensor integration precedes arbitration.
        self.blocked_ticks = if sensed.both_blocked() {
            self.blocked_ticks + 1
        } else {
            0
        };
        if self.phase.is_all_red() {
            self.all_red_ticks += 1;
        }
        if let Some(green) = self.phase.green_axis() {
            let red = green.opposite();
            self.demand[red.index()] += sensed.axis(red).approaching;
        }

        for rule in RULES {
            if let Some(decision) = rule(self, sensed, fallback, timing) {
                return self.apply(decision);
            }
        }
        TickOutcome::default()
    }

    fn apply(&mut self, decision: Decision) -> TickOutcome {
        if decision.next.green_axis().is_some() {
            self.demand = [0, 0];
        }
        if decision.next.is_all_red() {
            self.all_red_ticks = 0;
        }
        self.ticks_in_phase = 0;
        self.phase = decision.next;
        TickOutcome {
            changed:        true,
            forced_release: decision.forced,
        }
    }

    // ── Persistence ───────────────────────────────────────────────────────

    /// Capture the controller's complete recorded state.
    pub fn snapshot(&self) -> SignalSnapshot {
        SignalSnapshot {
            phase:          self.phase,
            ticks_in_phase: self.ticks_in_phase,
            demand:         self.demand,
            blocked_ticks:  self.blocked_ticks,
            all_red_ticks:  self.all_red_ticks,
        }
    }

    /// Rebuild a controller from a snapshot.  Resuming from a snapshot
    /// with the same subsequent sensed inputs reproduces the same
    /// subsequent phases.
    pub fn restore(snapshot: SignalSnapshot) -> Self {
        Self {
            phase:          snapshot.phase,
            ticks_in_phase: snapshot.ticks_in_phase,
            demand:         snapshot.demand,
            blocked_ticks:  snapshot.blocked_ticks,
            all_red_ticks:  snapshot.all_red_ticks,
        }
    }
}

// ── TickOutcome ───────────────────────────────────────────────────────────────

/// What one controller evaluation did.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// A phase transition occurred this tick.
    pub changed:        bool,
    /// The transition was an ALL_RED forced release; the caller must flip
    /// its fairness bit.
    pub forced_release: bool,
}

// ── SignalSnapshot ────────────────────────────────────────────────────────────

/// A controller's recorded fields, suitable for persistence.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SignalSnapshot {
    pub phase:          Phase,
    pub ticks_in_phase: u32,
    pub demand:         [u32; 2],
    pub blocked_ticks:  u32,
    pub all_red_ticks:  u32,
}
