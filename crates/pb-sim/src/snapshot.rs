//! Read-only view of the agent handed to display layers.

use pb_agent::{Agent, Behavior};
use pb_core::{Tick, Vec2};

/// Everything a display needs to draw one frame.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AgentSnapshot {
    /// Number of completed (unpaused) updates so far.
    pub tick:               Tick,
    pub position:           Vec2,
    pub behavior:           Behavior,
    pub battery_level:      f64,
    pub low_battery:        bool,
    pub patrol_cycle_count: u32,
    pub target_waypoint:    usize,
    pub intruder:           Option<Vec2>,
    pub paused:             bool,
    /// Recent positions, oldest first.
    pub trail:              Vec<Vec2>,
}

impl AgentSnapshot {
    pub fn capture(tick: Tick, agent: &Agent) -> Self {
        Self {
            tick,
            position:           agent.position,
            behavior:           agent.behavior(),
            battery_level:      agent.battery.level(),
            low_battery:        agent.battery.is_low(),
            patrol_cycle_count: agent.patrol_cycle_count(),
            target_waypoint:    agent.target_waypoint(),
            intruder:           agent.intruder(),
            paused:             agent.is_paused(),
            trail:              agent.trail.iter().collect(),
        }
    }
}
