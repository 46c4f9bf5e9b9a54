//! The point the agent is ultimately heading for.

use pb_agent::Agent;
use pb_core::Vec2;
use pb_world::Environment;

/// Where the agent would be going if it were not avoiding an obstacle:
/// the intruder if one is pending, else the charger when the battery is
/// low, else the current patrol waypoint.
///
/// Mirrors arbitration priorities 2–5 so that avoidance steers around the
/// obstacle on the side that keeps the real goal reachable.  IDLE has no
/// goal of its own and falls through to the patrol waypoint.
pub fn current_goal_point(agent: &Agent, env: &Environment) -> Vec2 {
    if let Some(intruder) = agent.intruder() {
        intruder
    } else if agent.battery.is_low() {
        env.charging_station()
    } else {
        env.waypoint(agent.target_waypoint())
    }
}
