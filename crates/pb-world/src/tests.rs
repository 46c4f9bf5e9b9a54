//! Unit tests for pb-world.

use pb_core::Vec2;

use crate::{Environment, EnvironmentBuilder, EnvironmentLayout, Obstacle, WorldError};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn two_point_route() -> EnvironmentBuilder {
    EnvironmentBuilder::new()
        .waypoint(Vec2::new(0.0, 0.0))
        .waypoint(Vec2::new(100.0, 0.0))
}

// ── Obstacle ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod obstacle_tests {
    use super::*;

    #[test]
    fn rect_center_is_midpoint() {
        let o = Obstacle::rect(300.0, 300.0, 80.0, 80.0);
        assert_eq!(o.center(), Vec2::new(340.0, 340.0));
    }

    #[test]
    fn circle_center_is_center() {
        let o = Obstacle::circle(Vec2::new(5.0, 6.0), 3.0);
        assert_eq!(o.center(), Vec2::new(5.0, 6.0));
    }
}

// ── EnvironmentBuilder ────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn rejects_single_waypoint() {
        let result = EnvironmentBuilder::new().waypoint(Vec2::ZERO).build();
        assert!(matches!(result, Err(WorldError::TooFewWaypoints(1))));
    }

    #[test]
    fn rejects_non_finite_waypoint() {
        let result = two_point_route().waypoint(Vec2::new(f64::NAN, 0.0)).build();
        assert!(matches!(result, Err(WorldError::Core(_))));
    }

    #[test]
    fn rejects_degenerate_obstacle() {
        let result = two_point_route()
            .obstacle(Obstacle::circle(Vec2::ZERO, 4.0))
            .obstacle(Obstacle::rect(0.0, 0.0, 0.0, 10.0))
            .build();
        assert!(matches!(result, Err(WorldError::DegenerateObstacle { index: 1 })));
    }

    #[test]
    fn rejects_inverted_bounds() {
        let result = two_point_route()
            .bounds(Vec2::new(10.0, 10.0), Vec2::ZERO)
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn charger_defaults_to_first_waypoint() {
        let env = two_point_route().build().unwrap();
        assert_eq!(env.charging_station(), Vec2::new(0.0, 0.0));
    }

    #[test]
    fn bounds_default_to_contents() {
        let env = two_point_route()
            .obstacle(Obstacle::circle(Vec2::new(50.0, -40.0), 5.0))
            .charging_station(Vec2::new(-10.0, 20.0))
            .build()
            .unwrap();
        assert_eq!(env.bounds(), (Vec2::new(-10.0, -40.0), Vec2::new(100.0, 20.0)));
        assert!(env.contains(Vec2::new(0.0, 0.0)));
        assert!(!env.contains(Vec2::new(101.0, 0.0)));
    }
}

// ── Environment queries ───────────────────────────────────────────────────────

#[cfg(test)]
mod query_tests {
    use super::*;

    #[test]
    fn waypoint_index_wraps() {
        let env = two_point_route().build().unwrap();
        assert_eq!(env.waypoint(0), Vec2::new(0.0, 0.0));
        assert_eq!(env.waypoint(1), Vec2::new(100.0, 0.0));
        assert_eq!(env.waypoint(2), Vec2::new(0.0, 0.0));
        assert_eq!(env.waypoint(7), Vec2::new(100.0, 0.0));
    }

    #[test]
    fn nearest_obstacle_none_when_empty() {
        let env = two_point_route().build().unwrap();
        assert!(env.nearest_obstacle(Vec2::ZERO).is_none());
        assert!(!env.obstacle_within(Vec2::ZERO, 1e9));
    }

    #[test]
    fn nearest_obstacle_picks_closest_center() {
        let env = two_point_route()
            .obstacle(Obstacle::circle(Vec2::new(100.0, 100.0), 5.0))
            .obstacle(Obstacle::circle(Vec2::new(10.0, 10.0), 5.0))
            .obstacle(Obstacle::circle(Vec2::new(-50.0, 0.0), 5.0))
            .build()
            .unwrap();
        let nearest = env.nearest_obstacle(Vec2::new(12.0, 10.0)).unwrap();
        assert_eq!(nearest.index, 1);
        assert_eq!(nearest.center, Vec2::new(10.0, 10.0));
        assert_eq!(nearest.distance, 2.0);
    }

    #[test]
    fn obstacle_within_is_boundary_inclusive() {
        let env = two_point_route()
            .obstacle(Obstacle::circle(Vec2::new(70.0, 0.0), 5.0))
            .build()
            .unwrap();
        assert!(env.obstacle_within(Vec2::ZERO, 70.0));
        assert!(!env.obstacle_within(Vec2::new(-0.5, 0.0), 70.0));
    }
}

// ── Reference arena ───────────────────────────────────────────────────────────

#[cfg(test)]
mod arena_tests {
    use super::*;

    #[test]
    fn arena_matches_reference_layout() {
        let env = Environment::arena().unwrap();
        assert_eq!(env.waypoints(), &[
            Vec2::new(150.0, 150.0),
            Vec2::new(650.0, 150.0),
            Vec2::new(400.0, 550.0),
        ]);
        let centers: Vec<Vec2> = env.obstacles().iter().map(Obstacle::center).collect();
        assert_eq!(centers, vec![
            Vec2::new(340.0, 340.0),
            Vec2::new(540.0, 440.0),
            Vec2::new(240.0, 490.0),
        ]);
        assert_eq!(env.charging_station(), Vec2::new(75.0, 75.0));
        assert_eq!(env.start(), Vec2::new(150.0, 150.0));
    }

    #[test]
    fn layout_default_is_arena() {
        assert_eq!(EnvironmentLayout::default(), EnvironmentLayout::arena());
    }
}
