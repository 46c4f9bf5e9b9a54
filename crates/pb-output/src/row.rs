//! Plain data row types written by output backends.

use pb_agent::Behavior;
use pb_mobility::MotionEvent;
use pb_sim::{AgentSnapshot, Command};

/// The agent's state at the end of one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailRow {
    pub tick:            u64,
    pub x:               f64,
    pub y:               f64,
    pub behavior:        Behavior,
    pub battery:         f64,
    pub low_battery:     bool,
    pub patrol_cycles:   u32,
    pub target_waypoint: usize,
    /// Pending sighting, if any.
    pub intruder:        Option<(f64, f64)>,
}

impl From<&AgentSnapshot> for TrailRow {
    fn from(snap: &AgentSnapshot) -> Self {
        Self {
            tick:            snap.tick.0,
            x:               snap.position.x,
            y:               snap.position.y,
            behavior:        snap.behavior,
            battery:         snap.battery_level,
            low_battery:     snap.low_battery,
            patrol_cycles:   snap.patrol_cycle_count,
            target_waypoint: snap.target_waypoint,
            intruder:        snap.intruder.map(|p| (p.x, p.y)),
        }
    }
}

/// One line of the event log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRow {
    pub tick:   u64,
    /// Short machine-readable tag, e.g. `behavior_change`.
    pub kind:   &'static str,
    pub detail: String,
}

impl EventRow {
    pub fn behavior_change(tick: u64, from: Behavior, to: Behavior) -> Self {
        Self { tick, kind: "behavior_change", detail: format!("{from} -> {to}") }
    }

    pub fn command(tick: u64, command: &Command) -> Self {
        let detail = match command {
            Command::SetIntruder(pos) => format!("set_intruder {pos}"),
            Command::ClearIntruder    => "clear_intruder".into(),
            Command::Pause            => "pause".into(),
            Command::Resume           => "resume".into(),
            Command::TogglePause      => "toggle_pause".into(),
            Command::Reset            => "reset".into(),
        };
        Self { tick, kind: "command", detail }
    }

    pub fn motion(tick: u64, event: &MotionEvent) -> Self {
        let (kind, detail) = match *event {
            MotionEvent::WaypointReached { reached, next } => {
                ("waypoint_reached", format!("{reached} -> {next}"))
            }
            MotionEvent::PatrolCycleCompleted { count } => ("patrol_cycle", count.to_string()),
            MotionEvent::AvoidanceLatched { direction, obstacle } => {
                ("avoidance_latched", format!("obstacle {obstacle} dir {direction}"))
            }
            MotionEvent::IntruderCaptured { at } => ("intruder_captured", at.to_string()),
            MotionEvent::ChargeCompleted         => ("charge_completed", String::new()),
            MotionEvent::ChargeWithoutLowBattery => ("charge_not_needed", String::new()),
        };
        Self { tick, kind, detail }
    }
}
