//! Unit tests for gt-core primitives.

#[cfg(test)]
mod ids {
    use crate::{Axis, CellId, Heading, LaneId};

    #[test]
    fn axis_opposite_and_index() {
        assert_eq!(Axis::Ew.opposite(), Axis::Ns);
        assert_eq!(Axis::Ns.opposite(), Axis::Ew);
        assert_eq!(Axis::Ew.index(), 0);
        assert_eq!(Axis::Ns.index(), 1);
    }

    #[test]
    fn heading_signed_distance() {
        // Pos heading: ahead is larger coordinates.
        assert_eq!(Heading::Pos.distance(1.0, 3.0), 2.0);
        assert_eq!(Heading::Pos.distance(3.0, 1.0), -2.0);
        // Neg heading: ahead is smaller coordinates.
        assert_eq!(Heading::Neg.distance(3.0, 1.0), 2.0);
        assert_eq!(Heading::Neg.distance(1.0, 3.0), -2.0);
    }

    #[test]
    fn heading_progress_orders_travel() {
        // A westbound vehicle at x = -1 is further along than one at x = 2.
        assert!(Heading::Neg.progress(-1.0) > Heading::Neg.progress(2.0));
        assert!(Heading::Pos.progress(2.0) > Heading::Pos.progress(-1.0));
    }

    #[test]
    fn display_forms() {
        let lane = LaneId::new(Axis::Ew, 2, Heading::Neg);
        assert_eq!(lane.to_string(), "H2-");
        assert_eq!(LaneId::new(Axis::Ns, 0, Heading::Pos).to_string(), "V0+");
        assert_eq!(CellId::new(1, 2).to_string(), "(1,2)");
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn nonpositive_rate_yields_zero() {
        let mut rng = SimRng::new(1);
        assert_eq!(rng.poisson(0.0), 0);
        assert_eq!(rng.poisson(-3.0), 0);
    }

    #[test]
    fn zero_rate_consumes_no_draws() {
        let mut a = SimRng::new(9);
        let mut b = SimRng::new(9);
        a.poisson(0.0);
        // Both streams must still agree on the next uniform.
        assert_eq!(a.uniform(), b.uniform());
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SimRng::new(5);
        let mut b = SimRng::new(5);
        for _ in 0..100 {
            assert_eq!(a.poisson(0.12), b.poisson(0.12));
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = SimRng::new(5);
        let mut b = SimRng::new(6);
        let seq_a: Vec<f64> = (0..16).map(|_| a.uniform()).collect();
        let seq_b: Vec<f64> = (0..16).map(|_| b.uniform()).collect();
        assert_ne!(seq_a, seq_b);
    }

    #[test]
    fn sample_mean_tracks_rate() {
        let mut rng = SimRng::new(42);
        let n = 20_000;
        let total: u64 = (0..n).map(|_| rng.poisson(0.5) as u64).sum();
        let mean = total as f64 / n as f64;
        // std error ≈ 0.005 at this sample size; 0.05 is a wide margin.
        assert!((mean - 0.5).abs() < 0.05, "mean {mean}");
    }
}

#[cfg(test)]
mod controls {
    use crate::Controls;
    use crate::controls::{SPEED_MAX, SPEED_MIN, TRAFFIC_MAX, TRAFFIC_MIN};

    #[test]
    fn defaults_within_bounds() {
        let c = Controls::default();
        assert!((TRAFFIC_MIN..=TRAFFIC_MAX).contains(&c.traffic()));
        assert!((SPEED_MIN..=SPEED_MAX).contains(&c.speed()));
    }

    #[test]
    fn writes_clamp() {
        let mut c = Controls::default();
        c.set_traffic(99.0);
        assert_eq!(c.traffic(), TRAFFIC_MAX);
        c.set_traffic(0.0);
        assert_eq!(c.traffic(), TRAFFIC_MIN);
        c.set_speed(-1.0);
        assert_eq!(c.speed(), SPEED_MIN);
        c.set_speed(7.5);
        assert_eq!(c.speed(), SPEED_MAX);
    }

    #[test]
    fn in_range_writes_pass_through() {
        let mut c = Controls::default();
        c.set_traffic(0.9);
        c.set_speed(1.0);
        assert_eq!(c.traffic(), 0.9);
        assert_eq!(c.speed(), 1.0);
    }
}

#[cfg(test)]
mod params {
    use crate::{MotionProfile, SenseWindows};

    #[test]
    fn gap_accessors_scale_by_vehicle_length() {
        let p = MotionProfile::default();
        assert!((p.spawn_clearance() - 0.32).abs() < 1e-12);
        assert!((p.follow_gap() - 0.096).abs() < 1e-12);
        assert!((p.line_reach() - 0.084).abs() < 1e-12);
        assert!((p.crawl_room() - 0.072).abs() < 1e-12);
        assert!((p.entry_clearance() - 0.08).abs() < 1e-12);
    }

    #[test]
    fn windows_nest_as_expected() {
        let w = SenseWindows::default();
        // Near-line sits inside the approach window; downstream is shortest.
        assert!(w.near_line < w.approach);
        assert!(w.downstream < w.near_line);
        assert!(w.downstream > 0.0);
    }
}
