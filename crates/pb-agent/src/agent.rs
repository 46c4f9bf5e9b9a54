//! The controlled agent.

use std::time::Duration;

use pb_core::Vec2;

use crate::{AvoidanceLatch, BatteryState, Behavior, Trail};

/// Full mutable state of the patrol agent.
///
/// Fields that carry invariants are private and exposed through accessors
/// and narrow mutators; plain kinematic fields are public.
#[derive(Clone, Debug)]
pub struct Agent {
    /// Current position.  Mutated only by motion functions.
    pub position: Vec2,

    /// Scalar step size per tick.
    pub speed: f64,

    behavior: Behavior,

    pub battery: BatteryState,

    patrol_cycle_count: u32,

    target_waypoint: usize,

    intruder: Option<Vec2>,

    pub avoidance: AvoidanceLatch,

    paused: bool,

    pub trail: Trail,
}

impl Agent {
    /// A fresh agent at `start`, heading for waypoint 1 with a full battery.
    pub fn new(start: Vec2, speed: f64, trail_capacity: usize, now: Duration) -> Self {
        let mut trail = Trail::with_capacity(trail_capacity);
        trail.reseed(start);
        Self {
            position:           start,
            speed,
            behavior:           Behavior::Patrol,
            battery:            BatteryState::full(now),
            patrol_cycle_count: 0,
            target_waypoint:    1,
            intruder:           None,
            avoidance:          AvoidanceLatch::default(),
            paused:             false,
            trail,
        }
    }

    /// Restore the canonical initial state at `start`, keeping `speed` and
    /// the trail capacity.
    pub fn reset(&mut self, start: Vec2, now: Duration) {
        *self = Agent::new(start, self.speed, self.trail.capacity(), now);
    }

    // ── Behavior ──────────────────────────────────────────────────────────

    #[inline]
    pub fn behavior(&self) -> Behavior {
        self.behavior
    }

    /// Record the arbitration result for this tick.  Returns the previous
    /// behavior.
    #[inline]
    pub fn set_behavior(&mut self, behavior: Behavior) -> Behavior {
        std::mem::replace(&mut self.behavior, behavior)
    }

    // ── Patrol progress ───────────────────────────────────────────────────

    #[inline]
    pub fn patrol_cycle_count(&self) -> u32 {
        self.patrol_cycle_count
    }

    #[inline]
    pub fn target_waypoint(&self) -> usize {
        self.target_waypoint
    }

    /// Point the patrol at `index`, wrapped into a route of `count`
    /// waypoints.
    pub fn set_target_waypoint(&mut self, index: usize, count: usize) {
        self.target_waypoint = if count == 0 { 0 } else { index % count };
    }

    /// Move on to the next waypoint of a `count`-long route.  Returns `true`
    /// if the index wrapped to 0, in which case one more patrol cycle has
    /// been completed.
    pub fn advance_waypoint(&mut self, count: usize) -> bool {
        self.set_target_waypoint(self.target_waypoint + 1, count);
        let wrapped = self.target_waypoint == 0;
        if wrapped {
            self.patrol_cycle_count += 1;
        }
        wrapped
    }

    /// Start a fresh patrol after a completed charge: zero cycles, resume
    /// from the second waypoint, drop any avoidance latch.
    pub fn restart_patrol(&mut self, count: usize) {
        self.patrol_cycle_count = 0;
        self.set_target_waypoint(1, count);
        self.avoidance.clear();
    }

    // ── Intruder ──────────────────────────────────────────────────────────

    #[inline]
    pub fn intruder(&self) -> Option<Vec2> {
        self.intruder
    }

    #[inline]
    pub fn set_intruder(&mut self, pos: Vec2) {
        self.intruder = Some(pos);
    }

    /// Forget the current sighting.  Returns the cleared position.
    #[inline]
    pub fn clear_intruder(&mut self) -> Option<Vec2> {
        self.intruder.take()
    }

    // ── Pause ─────────────────────────────────────────────────────────────

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[inline]
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }
}
