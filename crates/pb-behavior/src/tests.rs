//! Unit tests for pb-behavior.

use std::time::Duration;

use pb_agent::{Agent, Behavior};
use pb_core::{PatrolConfig, Vec2};
use pb_world::Environment;

use crate::{Arbiter, ArbitrationContext, FixedArbiter, PriorityArbiter, current_goal_point, select_behavior};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn arena() -> Environment {
    Environment::arena().unwrap()
}

fn agent_at(pos: Vec2) -> Agent {
    let mut a = Agent::new(Vec2::new(150.0, 150.0), 2.5, 80, Duration::ZERO);
    a.position = pos;
    a
}

/// Far from every arena obstacle.
const CLEAR: Vec2 = Vec2::new(150.0, 150.0);

fn make_low(agent: &mut Agent, level: f64) {
    agent.battery.set_level(level);
    agent.battery.update_flag(20.0, 90.0);
}

fn complete_cycles(agent: &mut Agent, n: u32) {
    for _ in 0..n * 3 {
        agent.advance_waypoint(3);
    }
}

fn select(agent: &Agent, env: &Environment) -> Behavior {
    let config = PatrolConfig::default();
    select_behavior(&ArbitrationContext::new(agent, env, &config))
}

// ── Priority order ────────────────────────────────────────────────────────────

#[cfg(test)]
mod priority_tests {
    use super::*;

    #[test]
    fn default_is_patrol() {
        let env = arena();
        assert_eq!(select(&agent_at(CLEAR), &env), Behavior::Patrol);
    }

    #[test]
    fn obstacle_overrides_everything() {
        let env = arena();
        let mut a = agent_at(Vec2::new(340.0, 290.0)); // 50 from (340,340)
        a.set_intruder(Vec2::new(600.0, 600.0));
        make_low(&mut a, 10.0);
        complete_cycles(&mut a, 5);
        assert_eq!(select(&a, &env), Behavior::AvoidObstacle);
    }

    #[test]
    fn danger_radius_is_inclusive() {
        let env = arena();
        assert_eq!(select(&agent_at(Vec2::new(340.0, 270.0)), &env), Behavior::AvoidObstacle);
        assert_eq!(select(&agent_at(Vec2::new(340.0, 269.9)), &env), Behavior::Patrol);
    }

    #[test]
    fn intruder_beats_battery_and_idle() {
        let env = arena();
        let mut a = agent_at(CLEAR);
        a.set_intruder(Vec2::new(600.0, 600.0));
        make_low(&mut a, 10.0);
        assert_eq!(select(&a, &env), Behavior::ChaseIntruder);

        let mut b = agent_at(CLEAR);
        complete_cycles(&mut b, 3);
        b.set_intruder(Vec2::new(600.0, 600.0));
        assert_eq!(select(&b, &env), Behavior::ChaseIntruder);
    }

    #[test]
    fn low_battery_goes_to_charge() {
        let env = arena();
        let mut a = agent_at(CLEAR);
        make_low(&mut a, 20.0);
        complete_cycles(&mut a, 3);
        assert_eq!(select(&a, &env), Behavior::GoCharge);
    }

    #[test]
    fn idle_needs_cycles_and_healthy_battery() {
        let env = arena();
        let mut a = agent_at(CLEAR);
        complete_cycles(&mut a, 2);
        assert_eq!(select(&a, &env), Behavior::Patrol);

        complete_cycles(&mut a, 1);
        assert_eq!(select(&a, &env), Behavior::Idle);

        a.battery.set_level(50.0); // floor is exclusive
        assert_eq!(select(&a, &env), Behavior::Patrol);

        a.battery.set_level(50.5);
        assert_eq!(select(&a, &env), Behavior::Idle);
    }

    #[test]
    fn selection_ignores_previous_behavior() {
        let env = arena();
        let mut a = agent_at(CLEAR);
        for b in Behavior::ALL {
            a.set_behavior(b);
            assert_eq!(select(&a, &env), Behavior::Patrol);
        }
    }
}

// ── Goal point ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod goal_tests {
    use super::*;

    #[test]
    fn goal_follows_priorities() {
        let env = arena();
        let mut a = agent_at(CLEAR);
        assert_eq!(current_goal_point(&a, &env), Vec2::new(650.0, 150.0));

        make_low(&mut a, 15.0);
        assert_eq!(current_goal_point(&a, &env), Vec2::new(75.0, 75.0));

        a.set_intruder(Vec2::new(10.0, 600.0));
        assert_eq!(current_goal_point(&a, &env), Vec2::new(10.0, 600.0));
    }

    #[test]
    fn goal_tracks_target_waypoint() {
        let env = arena();
        let mut a = agent_at(CLEAR);
        a.advance_waypoint(3);
        assert_eq!(current_goal_point(&a, &env), Vec2::new(400.0, 550.0));
        a.advance_waypoint(3);
        assert_eq!(current_goal_point(&a, &env), Vec2::new(150.0, 150.0));
    }
}

// ── Arbiter implementations ───────────────────────────────────────────────────

#[cfg(test)]
mod arbiter_tests {
    use super::*;

    #[test]
    fn priority_arbiter_delegates() {
        let env = arena();
        let config = PatrolConfig::default();
        let mut a = agent_at(CLEAR);
        a.set_intruder(Vec2::new(1.0, 1.0));
        let ctx = ArbitrationContext::new(&a, &env, &config);
        assert_eq!(PriorityArbiter.select(&ctx), Behavior::ChaseIntruder);
    }

    #[test]
    fn fixed_arbiter_is_constant() {
        let env = arena();
        let config = PatrolConfig::default();
        let a = agent_at(Vec2::new(340.0, 300.0));
        let ctx = ArbitrationContext::new(&a, &env, &config);
        assert_eq!(FixedArbiter(Behavior::Idle).select(&ctx), Behavior::Idle);
    }

    #[test]
    fn arbiter_is_object_safe_via_box() {
        let arbiter: Box<dyn Arbiter> = Box::new(PriorityArbiter);
        let env = arena();
        let config = PatrolConfig::default();
        let a = agent_at(CLEAR);
        assert_eq!(arbiter.select(&ArbitrationContext::new(&a, &env, &config)), Behavior::Patrol);
    }
}
