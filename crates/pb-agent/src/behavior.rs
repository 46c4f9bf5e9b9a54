//! The behavior tag.

use std::fmt;

/// The active goal-directed motion mode.
///
/// Exactly one is active per tick.  Variants are listed in arbitration
/// priority order, highest first, with the fallback last.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum Behavior {
    AvoidObstacle,
    ChaseIntruder,
    GoCharge,
    Idle,
    #[default]
    Patrol,
}

impl Behavior {
    /// All behaviors in priority order.
    pub const ALL: [Behavior; 5] = [
        Behavior::AvoidObstacle,
        Behavior::ChaseIntruder,
        Behavior::GoCharge,
        Behavior::Idle,
        Behavior::Patrol,
    ];

    /// Stable upper-case label used in logs and output files.
    pub const fn as_str(self) -> &'static str {
        match self {
            Behavior::Patrol        => "PATROL",
            Behavior::ChaseIntruder => "CHASE_INTRUDER",
            Behavior::AvoidObstacle => "AVOID_OBSTACLE",
            Behavior::GoCharge      => "GO_CHARGE",
            Behavior::Idle          => "IDLE",
        }
    }

    /// Battery drains in every behavior except IDLE.
    #[inline]
    pub const fn drains_battery(self) -> bool {
        !matches!(self, Behavior::Idle)
    }
}

impl fmt::Display for Behavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
