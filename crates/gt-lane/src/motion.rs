//! The per-lane motion and crossing-admission pass.
//!
//! Vehicles are processed front-to-back each tick, so a follower's gap is
//! measured against its leader's already-updated position.  Everything the
//! pass needs to know about the world — crossing geometry, signal colors,
//! downstream jams — comes through the read-only [`CrossingView`] seam, so
//! lanes can be advanced independently (and in parallel) against a
//! consistent start-of-tick view.

use gt_core::{Axis, CellId, Color, CoreResult, LaneId, MotionProfile};

use crate::Lane;

// ── CrossingView ──────────────────────────────────────────────────────────────

/// Read-only world queries the motion pass needs.
///
/// The world implements this over a frozen copy of the tick's starting
/// state: signal colors are the previous control evaluation's, vehicle
/// counts are pre-move.  All lookups are contract-checked — a lane or cell
/// the view does not know is a construction bug, not a runtime condition.
pub trait CrossingView {
    /// The cells this lane crosses, paired with their stop-line
    /// coordinates, in travel order.
    fn crossings(&self, lane: LaneId) -> CoreResult<&[(CellId, f64)]>;

    /// The color shown to `axis` at `cell`.
    fn color(&self, cell: CellId, axis: Axis) -> CoreResult<Color>;

    /// Vehicles halted inside the downstream window past the stop line on
    /// `axis` at `cell`.
    fn halted_past_line(&self, cell: CellId, axis: Axis) -> CoreResult<u32>;

    /// Whether the nearest vehicle past the stop line leaves at least
    /// `min_gap` of room (vacuously true when none is in the window).
    fn clear_gap_past_line(&self, cell: CellId, axis: Axis, min_gap: f64) -> CoreResult<bool>;
}

// ── Advance ───────────────────────────────────────────────────────────────────

/// What one lane's move pass produced.
#[derive(Debug, Default, Clone, Copy)]
pub struct MoveOutcome {
    /// Vehicles removed past the lane exit this tick.
    pub departed: u32,
}

/// Advance every vehicle on `lane` by one tick.
///
/// `speed` is the global speed multiplier already snapshotted for this
/// tick.  The lane is re-sorted on entry; order is preserved by the pass
/// itself (a follower can never out-run its leader through the gap rule).
pub fn advance(
    lane:    &mut Lane,
    view:    &impl CrossingView,
    profile: &MotionProfile,
    speed:   f64,
) -> CoreResult<MoveOutcome> {
    lane.sort();

    let heading = lane.id.heading;
    let axis = lane.id.axis;
    let sign = heading.sign();
    let desired = profile.base_speed * speed;
    let crossings = view.crossings(lane.id)?;

    for k in 0..lane.vehicles.len() {
        let leader_pos = (k > 0).then(|| lane.vehicles[k - 1].pos);
        let car = &mut lane.vehicles[k];

        // A commitment ends once the vehicle is past its coordinate.
        if let Some(commit) = car.commit_to {
            if heading.distance(commit, car.pos) >= 0.0 {
                car.commit_to = None;
            }
        }

        let gap_front = match leader_pos {
            None => f64::INFINITY,
            Some(lp) => heading.distance(car.pos, lp),
        };

        let mut blocked = false;
        if car.commit_to.is_none() {
            for &(cell, stop) in crossings {
                let d = heading.distance(car.pos, stop);
                if d <= 0.0 {
                    // Stop line already behind; look to the next crossing.
                    continue;
                }
                if d <= profile.line_reach() {
                    match view.color(cell, axis)? {
                        Color::Red | Color::Yellow => blocked = true,
                        Color::Green => {
                            // Tuned admission heuristic, not a safety law:
                            // two stopped vehicles downstream always block;
                            // one blocks only a non-head vehicle with no
                            // clear slot past the line.
                            let jammed = view.halted_past_line(cell, axis)?;
                            if jammed >= 2 {
                                blocked = true;
                            } else if jammed == 1
                                && k != 0
                                && !view.clear_gap_past_line(
                                    cell,
                                    axis,
                                    profile.entry_clearance(),
                                )?
                            {
                                blocked = true;
                            }
                            if !blocked {
                                car.commit_to = Some(stop + sign * profile.commit_depth);
                            }
                        }
                    }
                }
                // Only the nearest crossing ahead matters this tick.
                break;
            }
        }

        if blocked || gap_front < profile.follow_gap() {
            if car.commit_to.is_some() && gap_front > profile.crawl_room() {
                // Inside the box with room ahead: keep rolling, never park.
                car.vel = (profile.crawl_fraction * desired).max(profile.crawl_floor);
                car.pos += car.vel * sign;
            } else {
                car.vel = 0.0;
            }
        } else {
            car.vel = desired;
            car.pos += car.vel * sign;
        }
    }

    let before = lane.vehicles.len();
    let end = lane.end;
    let overshoot = profile.exit_overshoot;
    lane.vehicles
        .retain(|c| heading.distance(end, c.pos) <= overshoot);

    Ok(MoveOutcome {
        departed: (before - lane.vehicles.len()) as u32,
    })
}
