//! Unit tests for lanes, vehicles, and the motion pass.

use gt_core::{Axis, CellId, Color, CoreResult, Heading, LaneId, MotionProfile, SimRng};

use crate::motion::CrossingView;
use crate::{Lane, Vehicle, advance};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn eastbound() -> Lane {
    Lane::new(LaneId::new(Axis::Ew, 0, Heading::Pos), -0.9, 4.0, 0.0, 0.0)
}

fn southbound() -> Lane {
    Lane::new(LaneId::new(Axis::Ns, 0, Heading::Neg), 4.0, -0.9, 1.0, 0.0)
}

/// A canned world view: one crossing, one color, fixed jam readings.
struct StubView {
    crossings: Vec<(CellId, f64)>,
    color:     Color,
    jammed:    u32,
    clear_gap: bool,
}

impl StubView {
    fn new(color: Color) -> Self {
        Self {
            crossings: vec![(CellId::new(0, 0), 1.0)],
            color,
            jammed: 0,
            clear_gap: true,
        }
    }

    fn open_road() -> Self {
        let mut v = Self::new(Color::Green);
        v.crossings.clear();
        v
    }
}

impl CrossingView for StubView {
    fn crossings(&self, _lane: LaneId) -> CoreResult<&[(CellId, f64)]> {
        Ok(&self.crossings)
    }
    fn color(&self, _cell: CellId, _axis: Axis) -> CoreResult<Color> {
        Ok(self.color)
    }
    fn halted_past_line(&self, _cell: CellId, _axis: Axis) -> CoreResult<u32> {
        Ok(self.jammed)
    }
    fn clear_gap_past_line(&self, _cell: CellId, _axis: Axis, _min_gap: f64) -> CoreResult<bool> {
        Ok(self.clear_gap)
    }
}

fn profile() -> MotionProfile {
    MotionProfile::default()
}

// ── Spawn admission ───────────────────────────────────────────────────────────

#[cfg(test)]
mod spawn_tests {
    use super::*;

    #[test]
    fn empty_lane_admits_at_start() {
        let mut lane = eastbound();
        assert!(lane.admit(&profile()));
        assert_eq!(lane.len(), 1);
        let car = &lane.vehicles[0];
        assert_eq!(car.pos, lane.start);
        assert_eq!(car.vel, 0.0);
        assert!(car.commit_to.is_none());
    }

    #[test]
    fn occupied_entry_drops_arrival() {
        let mut lane = eastbound();
        // 0.30 from the start: under the 4-length clearance of 0.32.
        lane.vehicles.push(Vehicle::new(lane.id, lane.start + 0.30));
        assert!(!lane.admit(&profile()));
        assert_eq!(lane.len(), 1);
    }

    #[test]
    fn cleared_entry_admits_behind_tail() {
        let mut lane = eastbound();
        lane.vehicles.push(Vehicle::new(lane.id, lane.start + 0.33));
        assert!(lane.admit(&profile()));
        assert_eq!(lane.len(), 2);
    }

    #[test]
    fn admission_checks_nearest_start_not_frontmost() {
        let mut lane = eastbound();
        // Front-most vehicle is far downlane, but a second one still sits
        // in the entry zone — the arrival must be dropped.
        lane.vehicles.push(Vehicle::new(lane.id, 2.0));
        lane.vehicles.push(Vehicle::new(lane.id, lane.start + 0.1));
        assert!(!lane.admit(&profile()));
        assert_eq!(lane.len(), 2);
    }

    #[test]
    fn zero_rate_spawns_nothing() {
        let mut lane = eastbound();
        let mut rng = SimRng::new(5);
        assert_eq!(lane.spawn(&mut rng, 1.0, &profile()), 0);
        assert!(lane.is_empty());
    }

    #[test]
    fn back_to_back_arrivals_within_one_tick_collapse_to_one() {
        let mut lane = eastbound();
        assert!(lane.admit(&profile()));
        // The vehicle just admitted sits on the start coordinate.
        assert!(!lane.admit(&profile()));
        assert_eq!(lane.len(), 1);
    }
}

// ── Ordering ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod order_tests {
    use super::*;

    #[test]
    fn sort_puts_frontmost_first_on_reverse_lanes() {
        let mut lane = southbound();
        for pos in [1.0, 3.0, 2.0] {
            lane.vehicles.push(Vehicle::new(lane.id, pos));
        }
        lane.sort();
        let order: Vec<f64> = lane.vehicles.iter().map(|c| c.pos).collect();
        // Travel decreases the coordinate, so the smallest pos leads.
        assert_eq!(order, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn rearmost_and_frontmost() {
        let mut lane = eastbound();
        for pos in [0.5, -0.2, 1.7] {
            lane.vehicles.push(Vehicle::new(lane.id, pos));
        }
        assert_eq!(lane.rearmost().map(|c| c.pos), Some(-0.2));
        assert_eq!(lane.frontmost().map(|c| c.pos), Some(1.7));
    }
}

// ── Signal interaction ────────────────────────────────────────────────────────

#[cfg(test)]
mod signal_tests {
    use super::*;

    #[test]
    fn free_vehicle_cruises() {
        let mut lane = eastbound();
        lane.vehicles.push(Vehicle::new(lane.id, 0.0));
        advance(&mut lane, &StubView::open_road(), &profile(), 1.0).unwrap();
        let car = &lane.vehicles[0];
        assert!((car.vel - 0.020).abs() < 1e-12);
        assert!((car.pos - 0.020).abs() < 1e-12);
    }

    #[test]
    fn speed_multiplier_scales_cruise() {
        let mut lane = eastbound();
        lane.vehicles.push(Vehicle::new(lane.id, 0.0));
        advance(&mut lane, &StubView::open_road(), &profile(), 0.5).unwrap();
        assert!((lane.vehicles[0].vel - 0.010).abs() < 1e-12);
    }

    #[test]
    fn red_halts_at_the_line() {
        let mut lane = eastbound();
        lane.vehicles.push(Vehicle::new(lane.id, 0.93)); // 0.07 short of the line
        advance(&mut lane, &StubView::new(Color::Red), &profile(), 1.0).unwrap();
        let car = &lane.vehicles[0];
        assert_eq!(car.vel, 0.0);
        assert_eq!(car.pos, 0.93);
        assert!(car.commit_to.is_none());
    }

    #[test]
    fn yellow_halts_like_red() {
        let mut lane = eastbound();
        lane.vehicles.push(Vehicle::new(lane.id, 0.93));
        advance(&mut lane, &StubView::new(Color::Yellow), &profile(), 1.0).unwrap();
        assert_eq!(lane.vehicles[0].vel, 0.0);
    }

    #[test]
    fn red_beyond_reach_is_ignored() {
        let mut lane = eastbound();
        lane.vehicles.push(Vehicle::new(lane.id, 0.5));
        advance(&mut lane, &StubView::new(Color::Red), &profile(), 1.0).unwrap();
        assert!((lane.vehicles[0].pos - 0.52).abs() < 1e-12);
    }

    #[test]
    fn red_halts_reverse_heading_at_its_line() {
        let mut lane = southbound();
        let mut view = StubView::new(Color::Red);
        view.crossings = vec![(CellId::new(0, 0), 1.1)];
        lane.vehicles.push(Vehicle::new(lane.id, 1.17)); // 0.07 short, travelling down
        advance(&mut lane, &view, &profile(), 1.0).unwrap();
        assert_eq!(lane.vehicles[0].vel, 0.0);
        assert_eq!(lane.vehicles[0].pos, 1.17);
    }
}

// ── Crossing admission ────────────────────────────────────────────────────────

#[cfg(test)]
mod admission_tests {
    use super::*;

    #[test]
    fn clear_green_admits_and_commits() {
        let mut lane = eastbound();
        lane.vehicles.push(Vehicle::new(lane.id, 0.93));
        advance(&mut lane, &StubView::new(Color::Green), &profile(), 1.0).unwrap();
        let car = &lane.vehicles[0];
        let commit = car.commit_to.expect("admission should commit");
        assert!((commit - 1.28).abs() < 1e-9); // stop line 1.0 + commit depth
        assert!(car.vel > 0.0);
    }

    #[test]
    fn two_stopped_downstream_block_entry() {
        let mut lane = eastbound();
        lane.vehicles.push(Vehicle::new(lane.id, 0.93));
        let mut view = StubView::new(Color::Green);
        view.jammed = 2;
        advance(&mut lane, &view, &profile(), 1.0).unwrap();
        let car = &lane.vehicles[0];
        assert_eq!(car.vel, 0.0);
        assert!(car.commit_to.is_none());
    }

    #[test]
    fn one_stopped_downstream_still_admits_queue_head() {
        let mut lane = eastbound();
        lane.vehicles.push(Vehicle::new(lane.id, 0.93));
        let mut view = StubView::new(Color::Green);
        view.jammed = 1;
        view.clear_gap = false;
        advance(&mut lane, &view, &profile(), 1.0).unwrap();
        assert!(lane.vehicles[0].commit_to.is_some());
    }

    #[test]
    fn one_stopped_downstream_blocks_follower_without_slot() {
        let mut lane = eastbound();
        lane.vehicles.push(Vehicle::new(lane.id, 2.0)); // leader, already past
        lane.vehicles.push(Vehicle::new(lane.id, 0.93));
        let mut view = StubView::new(Color::Green);
        view.jammed = 1;
        view.clear_gap = false;
        advance(&mut lane, &view, &profile(), 1.0).unwrap();
        let follower = &lane.vehicles[1];
        assert_eq!(follower.vel, 0.0);
        assert!(follower.commit_to.is_none());
    }

    #[test]
    fn one_stopped_downstream_admits_follower_with_slot() {
        let mut lane = eastbound();
        lane.vehicles.push(Vehicle::new(lane.id, 2.0));
        lane.vehicles.push(Vehicle::new(lane.id, 0.93));
        let mut view = StubView::new(Color::Green);
        view.jammed = 1;
        view.clear_gap = true;
        advance(&mut lane, &view, &profile(), 1.0).unwrap();
        let commit = lane.vehicles[1].commit_to.expect("slot admits the follower");
        assert!((commit - 1.28).abs() < 1e-9);
    }
}

// ── Commitment behavior ───────────────────────────────────────────────────────

#[cfg(test)]
mod commit_tests {
    use super::*;

    #[test]
    fn committed_vehicle_crawls_when_blocked_with_room() {
        let mut lane = eastbound();
        let mut view = StubView::new(Color::Red);
        view.crossings = vec![(CellId::new(0, 0), 1.15)];
        // Leader parks at the red line; follower is mid-box, 0.093 behind —
        // under the follow gap but over the crawl room.
        lane.vehicles.push(Vehicle::new(lane.id, 1.093));
        let mut committed = Vehicle::new(lane.id, 1.0);
        committed.commit_to = Some(1.28);
        lane.vehicles.push(committed);

        advance(&mut lane, &view, &profile(), 1.0).unwrap();
        assert_eq!(lane.vehicles[0].vel, 0.0);
        let follower = &lane.vehicles[1];
        assert!((follower.vel - 0.012).abs() < 1e-12); // 0.6 × desired
        assert!((follower.pos - 1.012).abs() < 1e-12);
        assert!(follower.commit_to.is_some());
    }

    #[test]
    fn crawl_floor_applies_at_low_speed_multiplier() {
        let mut lane = eastbound();
        let mut view = StubView::new(Color::Red);
        view.crossings = vec![(CellId::new(0, 0), 1.15)];
        lane.vehicles.push(Vehicle::new(lane.id, 1.093));
        let mut committed = Vehicle::new(lane.id, 1.0);
        committed.commit_to = Some(1.28);
        lane.vehicles.push(committed);

        // 0.6 × desired would be 0.0012; the floor wins.
        advance(&mut lane, &view, &profile(), 0.1).unwrap();
        assert!((lane.vehicles[1].vel - 0.006).abs() < 1e-12);
    }

    #[test]
    fn committed_vehicle_holds_when_no_room() {
        let mut lane = eastbound();
        let mut view = StubView::new(Color::Red);
        view.crossings = vec![(CellId::new(0, 0), 1.15)];
        lane.vehicles.push(Vehicle::new(lane.id, 1.07)); // 0.07 ahead: under crawl room
        let mut committed = Vehicle::new(lane.id, 1.0);
        committed.commit_to = Some(1.28);
        lane.vehicles.push(committed);

        advance(&mut lane, &view, &profile(), 1.0).unwrap();
        assert_eq!(lane.vehicles[1].vel, 0.0);
    }

    #[test]
    fn commitment_clears_past_its_coordinate() {
        let mut lane = eastbound();
        let mut car = Vehicle::new(lane.id, 1.29);
        car.commit_to = Some(1.28);
        lane.vehicles.push(car);
        advance(&mut lane, &StubView::new(Color::Red), &profile(), 1.0).unwrap();
        let car = &lane.vehicles[0];
        assert!(car.commit_to.is_none());
        assert!(car.vel > 0.0); // past the box, open road ahead
    }

    #[test]
    fn committed_vehicle_ignores_the_signal() {
        let mut lane = eastbound();
        let mut car = Vehicle::new(lane.id, 0.95); // inside line reach
        car.commit_to = Some(1.28);
        lane.vehicles.push(car);
        // Red at the very line the vehicle already committed through.
        advance(&mut lane, &StubView::new(Color::Red), &profile(), 1.0).unwrap();
        assert!(lane.vehicles[0].vel > 0.0);
    }
}

// ── Car following & exit ──────────────────────────────────────────────────────

#[cfg(test)]
mod follow_tests {
    use super::*;

    #[test]
    fn queue_forms_without_overlap_behind_a_red() {
        let mut lane = eastbound();
        for pos in [0.5, 0.2, 0.0] {
            lane.vehicles.push(Vehicle::new(lane.id, pos));
        }
        let view = StubView::new(Color::Red);
        for _ in 0..100 {
            advance(&mut lane, &view, &profile(), 1.0).unwrap();
            for pair in lane.vehicles.windows(2) {
                assert!(
                    pair[0].progress() >= pair[1].progress(),
                    "follower passed leader"
                );
            }
        }
        // Settled: head parked at the line, gaps above the crawl room.
        assert_eq!(lane.len(), 3);
        assert!((lane.vehicles[0].pos - 0.92).abs() < 1e-9);
        for pair in lane.vehicles.windows(2) {
            let gap = pair[1].lane.heading.distance(pair[1].pos, pair[0].pos);
            assert!(gap > 0.07, "gap {gap}");
        }
        assert!(lane.vehicles.iter().all(|c| c.vel == 0.0));
    }

    #[test]
    fn follower_measures_gap_against_updated_leader() {
        let mut lane = eastbound();
        // Start gap 0.08 — under the follow gap against the leader's old
        // position, over it against the leader's moved position.
        lane.vehicles.push(Vehicle::new(lane.id, 0.58));
        lane.vehicles.push(Vehicle::new(lane.id, 0.5));
        advance(&mut lane, &StubView::open_road(), &profile(), 1.0).unwrap();
        // Leader moved to 0.60 first, so the follower saw 0.10 of room.
        assert!((lane.vehicles[1].pos - 0.52).abs() < 1e-12);
    }

    #[test]
    fn vehicle_leaves_past_the_exit_margin() {
        let mut lane = eastbound();
        lane.vehicles.push(Vehicle::new(lane.id, 4.09));
        lane.vehicles.push(Vehicle::new(lane.id, 3.0));
        let outcome = advance(&mut lane, &StubView::open_road(), &profile(), 1.0).unwrap();
        assert_eq!(outcome.departed, 1);
        assert_eq!(lane.len(), 1);
        assert!((lane.vehicles[0].pos - 3.02).abs() < 1e-12);
    }

    #[test]
    fn vehicle_within_margin_is_kept() {
        let mut lane = eastbound();
        lane.vehicles.push(Vehicle::new(lane.id, 4.05));
        let outcome = advance(&mut lane, &StubView::open_road(), &profile(), 1.0).unwrap();
        assert_eq!(outcome.departed, 0);
        assert_eq!(lane.len(), 1);
    }
}
