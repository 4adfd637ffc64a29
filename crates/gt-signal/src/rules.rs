//! The six arbitration rules as a priority-ordered list of pure functions.
//!
//! Each rule maps `(controller, sensed, fallback axis, timing)` to an
//! optional [`Decision`]; the controller applies the first match and stops.
//! The list is total over the five phases: whatever combination of phase
//! and sensed counts arrives, either exactly one rule decides or the phase
//! simply continues — there is no default branch to fall through to.

use gt_core::Axis;

use crate::{Controller, Phase, Sensed, SignalTiming};

/// A transition chosen by a rule.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Decision {
    pub next: Phase,
    /// True only for the ALL_RED forced release, which consumes the
    /// world's fairness bit.
    pub forced: bool,
}

impl Decision {
    fn to(next: Phase) -> Option<Decision> {
        Some(Decision { next, forced: false })
    }
}

pub(crate) type Rule = fn(&Controller, &Sensed, Axis, &SignalTiming) -> Option<Decision>;

/// Priority order is load-bearing: deadlock preemption outranks everything
/// (it may cut a yellow short), recovery outranks the timers, and the
/// three green cutoffs fire in jam → gap-out → demand order.
pub(crate) const RULES: &[Rule] = &[
    deadlock_preempt,
    all_red_recovery,
    yellow_expiry,
    green_downstream_jam,
    green_gap_out,
    green_demand_cutoff,
];

// ── Rule a: deadlock preemption ───────────────────────────────────────────────

/// Both boxes blocked for the sustained threshold → ALL_RED, from any
/// phase, mid-yellow included.
fn deadlock_preempt(
    c: &Controller,
    _s: &Sensed,
    _fallback: Axis,
    t: &SignalTiming,
) -> Option<Decision> {
    if c.blocked_ticks() >= t.sustained_block && !c.phase().is_all_red() {
        Decision::to(Phase::AllRed)
    } else {
        None
    }
}

// ── Rule b: ALL_RED recovery ──────────────────────────────────────────────────

/// Leave ALL_RED as soon as the sensors justify it: a single clear axis
/// gets the green (feeding the jammed one cannot drain the box), both
/// clear goes to the busier approach with ties to NS, and a long dwell
/// forces a parity-based release.
fn all_red_recovery(
    c: &Controller,
    s: &Sensed,
    fallback: Axis,
    t: &SignalTiming,
) -> Option<Decision> {
    if !c.phase().is_all_red() {
        return None;
    }
    let ew_jam = s.ew.halted_past;
    let ns_jam = s.ns.halted_past;
    if ew_jam == 0 && ns_jam > 0 {
        return Decision::to(Phase::green(Axis::Ew));
    }
    if ns_jam == 0 && ew_jam > 0 {
        return Decision::to(Phase::green(Axis::Ns));
    }
    if ew_jam == 0 && ns_jam == 0 {
        let axis = if s.ns.approaching >= s.ew.approaching {
            Axis::Ns
        } else {
            Axis::Ew
        };
        return Decision::to(Phase::green(axis));
    }
    if c.all_red_ticks() >= t.forced_release {
        return Some(Decision {
            next: Phase::green(fallback),
            forced: true,
        });
    }
    None
}

// ── Rule c: yellow expiry ─────────────────────────────────────────────────────

fn yellow_expiry(
    c: &Controller,
    _s: &Sensed,
    _fallback: Axis,
    t: &SignalTiming,
) -> Option<Decision> {
    let axis = c.phase().yellow_axis()?;
    if c.ticks_in_phase() >= t.yellow {
        Decision::to(Phase::green(axis.opposite()))
    } else {
        None
    }
}

// ── Rules d(i)–d(iii): green cutoffs ──────────────────────────────────────────

/// d(i): the green axis's own box is jammed — stop feeding it.
fn green_downstream_jam(
    c: &Controller,
    s: &Sensed,
    _fallback: Axis,
    t: &SignalTiming,
) -> Option<Decision> {
    let green = c.phase().green_axis()?;
    if c.ticks_in_phase() < t.min_green {
        return None;
    }
    if s.axis(green).halted_past > 0 {
        Decision::to(Phase::yellow(green))
    } else {
        None
    }
}

/// d(ii): nobody approaches the green while the red axis waits.
fn green_gap_out(
    c: &Controller,
    s: &Sensed,
    _fallback: Axis,
    t: &SignalTiming,
) -> Option<Decision> {
    let green = c.phase().green_axis()?;
    if c.ticks_in_phase() < t.min_green {
        return None;
    }
    if s.axis(green).approaching == 0 && s.axis(green.opposite()).approaching > 0 {
        Decision::to(Phase::yellow(green))
    } else {
        None
    }
}

/// d(iii): accumulated red-axis demand reached the threshold — cut the
/// green unless a few vehicles sit right at the line, in which case hold
/// one more evaluation and let them through.
fn green_demand_cutoff(
    c: &Controller,
    s: &Sensed,
    _fallback: Axis,
    t: &SignalTiming,
) -> Option<Decision> {
    let green = c.phase().green_axis()?;
    if c.ticks_in_phase() < t.min_green {
        return None;
    }
    if c.demand(green.opposite()) < t.demand_threshold {
        return None;
    }
    let near = s.axis(green).near_line;
    if near > 0 && near <= t.few_crossing {
        return None;
    }
    Decision::to(Phase::yellow(green))
}
