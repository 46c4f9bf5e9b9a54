//! Notable state changes reported by motion functions.

use pb_core::Vec2;

/// Something a motion function changed beyond the agent's position.
///
/// pb-sim turns these into log lines and observer callbacks.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MotionEvent {
    /// Patrol target advanced to `next`.
    WaypointReached { reached: usize, next: usize },

    /// The patrol target wrapped to waypoint 0; `count` loops completed.
    PatrolCycleCompleted { count: u32 },

    /// A new avoidance direction was latched against obstacle `obstacle`.
    AvoidanceLatched { direction: Vec2, obstacle: usize },

    /// The agent closed on the intruder at `at`; the sighting is cleared.
    IntruderCaptured { at: Vec2 },

    /// Docked with enough charge: patrol progress was reset.
    ChargeCompleted,

    /// GO_CHARGE ran without the low-battery flag.  No motion happened;
    /// arbitration picks a valid behavior next tick.
    ChargeWithoutLowBattery,
}
