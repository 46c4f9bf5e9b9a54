//! Unit tests for pb-core primitives.

#[cfg(test)]
mod geo {
    use crate::Vec2;

    #[test]
    fn distance_is_euclidean() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(3.0, 4.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.distance(a), 5.0);
    }

    #[test]
    fn normalized_zero_is_none() {
        assert_eq!(Vec2::ZERO.normalized(), None);
        assert_eq!(Vec2::new(f64::NAN, 1.0).normalized(), None);
        let n = Vec2::new(0.0, -2.0).normalized().unwrap();
        assert_eq!(n, Vec2::new(0.0, -1.0));
    }

    #[test]
    fn cross_sign() {
        let x = Vec2::new(1.0, 0.0);
        let y = Vec2::new(0.0, 1.0);
        assert!(x.cross(y) > 0.0);
        assert!(y.cross(x) < 0.0);
        assert_eq!(x.cross(x * 3.0), 0.0);
    }

    #[test]
    fn perpendiculars_are_orthogonal() {
        let v = Vec2::new(3.0, 4.0);
        for p in [v.perp_cw(), v.perp_ccw()] {
            assert_eq!(v.x * p.x + v.y * p.y, 0.0);
            assert_eq!(p.length(), v.length());
        }
        assert_eq!(v.perp_cw(), -v.perp_ccw());
    }

    #[test]
    fn step_towards_coincident_is_noop() {
        let p = Vec2::new(10.0, 10.0);
        assert_eq!(p.step_towards(p, 2.5), p);
    }

    #[test]
    fn step_towards_moves_exactly_step() {
        let p = Vec2::new(0.0, 0.0);
        let q = p.step_towards(Vec2::new(100.0, 0.0), 2.5);
        assert_eq!(q, Vec2::new(2.5, 0.0));
    }

    #[test]
    fn display() {
        assert_eq!(Vec2::new(1.0, 2.5).to_string(), "(1.00, 2.50)");
    }
}

#[cfg(test)]
mod time {
    use std::time::Duration;

    use crate::{BatteryClock, SteppedClock, Tick, WallClock};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(t.next(), Tick(11));
        assert_eq!(Tick(15) - Tick(10), 5u64);
        assert_eq!(Tick(7).to_string(), "T7");
    }

    #[test]
    fn stepped_clock_sums_deltas() {
        let mut clock = SteppedClock::new();
        assert_eq!(clock.now(), Duration::ZERO);
        clock.advance(Duration::from_millis(16));
        clock.advance(Duration::from_millis(17));
        assert_eq!(clock.now(), Duration::from_millis(33));
        clock.skip(Duration::from_secs(1));
        assert_eq!(clock.now(), Duration::from_millis(1033));
    }

    #[test]
    fn wall_clock_ignores_advance_and_is_monotonic() {
        let mut clock = WallClock::new();
        let before = clock.now();
        clock.advance(Duration::from_secs(3600));
        let after = clock.now();
        assert!(after >= before);
        assert!(after < Duration::from_secs(3600));
    }

    #[test]
    fn boxed_clock_forwards() {
        let mut clock: Box<dyn BatteryClock> = Box::new(SteppedClock::new());
        clock.advance(Duration::from_millis(800));
        assert_eq!(clock.now(), Duration::from_millis(800));
    }
}

#[cfg(test)]
mod config {
    use std::time::Duration;

    use crate::PatrolConfig;

    #[test]
    fn defaults_match_reference_arena() {
        let c = PatrolConfig::default();
        assert_eq!(c.speed, 2.5);
        assert_eq!(c.arrival_radius, 8.0);
        assert_eq!(c.danger_radius, 70.0);
        assert_eq!(c.avoid_lock_ticks, 25);
        assert_eq!(c.drain_interval(), Duration::from_millis(800));
        assert_eq!(c.low_battery_threshold, 20.0);
        assert_eq!(c.recovered_threshold, 90.0);
        assert_eq!(c.max_patrol_cycles_before_idle, 3);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn rejects_empty_hysteresis_band() {
        let c = PatrolConfig {
            low_battery_threshold: 90.0,
            recovered_threshold:   90.0,
            ..PatrolConfig::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn rejects_non_positive_speed() {
        for speed in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let c = PatrolConfig { speed, ..PatrolConfig::default() };
            assert!(c.validate().is_err(), "speed {speed} accepted");
        }
    }

    #[test]
    fn rejects_zero_trail_and_zero_interval() {
        let c = PatrolConfig { trail_capacity: 0, ..PatrolConfig::default() };
        assert!(c.validate().is_err());
        let c = PatrolConfig { drain_interval_ms: 0, ..PatrolConfig::default() };
        assert!(c.validate().is_err());
    }

    #[test]
    fn rejects_out_of_scale_battery_values() {
        let c = PatrolConfig { charge_rate: 150.0, ..PatrolConfig::default() };
        assert!(c.validate().is_err());
    }
}

#[cfg(test)]
mod rng {
    use crate::{SimRng, Vec2};

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SimRng::new(7);
        let mut b = SimRng::new(7);
        for _ in 0..16 {
            let pa = a.point_in(Vec2::ZERO, Vec2::new(700.0, 700.0));
            let pb = b.point_in(Vec2::ZERO, Vec2::new(700.0, 700.0));
            assert_eq!(pa, pb);
        }
    }

    #[test]
    fn point_in_stays_inside_box() {
        let mut rng = SimRng::new(1);
        let (min, max) = (Vec2::new(10.0, 20.0), Vec2::new(30.0, 40.0));
        for _ in 0..200 {
            let p = rng.point_in(min, max);
            assert!(p.x >= min.x && p.x < max.x);
            assert!(p.y >= min.y && p.y < max.y);
        }
    }

    #[test]
    fn degenerate_box_collapses() {
        let mut rng = SimRng::new(1);
        let p = rng.point_in(Vec2::new(5.0, 5.0), Vec2::new(5.0, 5.0));
        assert_eq!(p, Vec2::new(5.0, 5.0));
    }

    #[test]
    fn child_streams_differ() {
        let mut root = SimRng::new(42);
        let mut c1 = root.child(1);
        let mut c2 = root.child(2);
        let a: u64 = c1.gen_range(0..u64::MAX);
        let b: u64 = c2.gen_range(0..u64::MAX);
        assert_ne!(a, b);
    }
}
