//! The five motion functions.
//!
//! Each takes the agent mutably and the environment and configuration
//! read-only, and returns the events it produced (usually none).

use pb_agent::Agent;
use pb_behavior::current_goal_point;
use pb_core::{PatrolConfig, Vec2};
use pb_world::Environment;

use crate::MotionEvent;

// ── Patrol ────────────────────────────────────────────────────────────────────

/// Head for the current waypoint; on arrival advance the target (counting a
/// cycle on wrap) and head for the new one in the same step.
pub fn patrol(agent: &mut Agent, env: &Environment, config: &PatrolConfig) -> Vec<MotionEvent> {
    let mut events = Vec::new();
    let count = env.waypoint_count();

    let reached = agent.target_waypoint();
    if agent.position.distance(env.waypoint(reached)) <= config.arrival_radius {
        let wrapped = agent.advance_waypoint(count);
        events.push(MotionEvent::WaypointReached { reached, next: agent.target_waypoint() });
        if wrapped {
            events.push(MotionEvent::PatrolCycleCompleted { count: agent.patrol_cycle_count() });
        }
    }

    let target = env.waypoint(agent.target_waypoint());
    agent.position = agent.position.step_towards(target, agent.speed);
    events
}

// ── Obstacle avoidance ────────────────────────────────────────────────────────

/// Steer around the nearest obstacle.
///
/// Two terms are applied each call:
///
/// 1. a lateral step of `speed × avoid_speed_factor` along the latched
///    direction, perpendicular to the agent→obstacle vector on the side
///    chosen by the sign of `cross(to_goal, to_obstacle)`;
/// 2. a radial push away from the obstacle center of `speed × strength`,
///    `strength = clamp((danger_radius - d) / avoid_falloff, 0, 1)`.
///
/// The direction is recomputed when no latch is active (absent or timer
/// run out) or when `entering` is set, i.e. the previous tick was not an
/// avoidance tick and whatever is latched belongs to an older episode.
pub fn avoid_obstacle(
    agent:    &mut Agent,
    env:      &Environment,
    config:   &PatrolConfig,
    entering: bool,
) -> Vec<MotionEvent> {
    let Some(nearest) = env.nearest_obstacle(agent.position) else {
        return Vec::new();
    };
    let mut events = Vec::new();

    let direction = match agent.avoidance.active() {
        Some(dir) if !entering => dir,
        _ => {
            let dir = avoidance_direction(agent.position, current_goal_point(agent, env), nearest.center);
            agent.avoidance.latch(dir, config.avoid_lock_ticks);
            log::debug!("avoidance latched {dir} around obstacle {} at {}", nearest.index, nearest.center);
            events.push(MotionEvent::AvoidanceLatched { direction: dir, obstacle: nearest.index });
            dir
        }
    };

    agent.position += direction * (agent.speed * config.avoid_speed_factor);

    let away = agent.position - nearest.center;
    if let Some(away_dir) = away.normalized() {
        let strength = ((config.danger_radius - away.length()) / config.avoid_falloff).clamp(0.0, 1.0);
        agent.position += away_dir * (agent.speed * strength);
    }
    events
}

/// Unit vector perpendicular to `obstacle - pos`, on the side selected by
/// the goal/obstacle cross product.  Falls back to +x when the agent sits
/// on the obstacle center.
pub fn avoidance_direction(pos: Vec2, goal: Vec2, obstacle: Vec2) -> Vec2 {
    let to_goal = goal - pos;
    let to_obs = obstacle - pos;
    let candidate = if to_goal.cross(to_obs) > 0.0 {
        to_obs.perp_cw()
    } else {
        to_obs.perp_ccw()
    };
    candidate.normalized().unwrap_or(Vec2::UNIT_X)
}

// ── Intruder pursuit ──────────────────────────────────────────────────────────

/// Close on the pending intruder; clear the sighting once within the
/// arrival radius, either before or after this tick's step.
pub fn chase_intruder(agent: &mut Agent, config: &PatrolConfig) -> Vec<MotionEvent> {
    let Some(target) = agent.intruder() else {
        return Vec::new();
    };

    if agent.position.distance(target) > config.arrival_radius {
        agent.position = agent.position.step_towards(target, agent.speed);
    }
    if agent.position.distance(target) <= config.arrival_radius {
        agent.clear_intruder();
        return vec![MotionEvent::IntruderCaptured { at: target }];
    }
    Vec::new()
}

// ── Charging ──────────────────────────────────────────────────────────────────

/// Drive to the charger and hold there.  Once docked with the battery at
/// the recovered threshold, restart the patrol from waypoint 1.
pub fn go_charge(agent: &mut Agent, env: &Environment, config: &PatrolConfig) -> Vec<MotionEvent> {
    if !agent.battery.is_low() {
        return vec![MotionEvent::ChargeWithoutLowBattery];
    }

    let station = env.charging_station();
    if agent.position.distance(station) > config.arrival_radius {
        agent.position = agent.position.step_towards(station, agent.speed);
        return Vec::new();
    }

    if agent.battery.level() >= config.recovered_threshold {
        agent.restart_patrol(env.waypoint_count());
        return vec![MotionEvent::ChargeCompleted];
    }
    Vec::new()
}

// ── Idle ──────────────────────────────────────────────────────────────────────

/// Rest in place.
#[inline]
pub fn idle(_agent: &mut Agent) -> Vec<MotionEvent> {
    Vec::new()
}
