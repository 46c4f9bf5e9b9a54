//! Behavior → motion dispatch.

use pb_agent::{Agent, Behavior};
use pb_core::PatrolConfig;
use pb_world::Environment;

use crate::{MotionEvent, motion};

/// Runs the motion function for a behavior.
///
/// Stateless: all persistent motion state (avoidance latch, waypoint index)
/// lives on the [`Agent`].
#[derive(Copy, Clone, Debug, Default)]
pub struct MotionEngine;

impl MotionEngine {
    /// Execute one tick of motion for `behavior`.
    ///
    /// `previous` is the behavior that ran on the previous tick; it decides
    /// whether an avoidance episode is just starting.
    pub fn execute(
        &self,
        behavior: Behavior,
        previous: Behavior,
        agent:    &mut Agent,
        env:      &Environment,
        config:   &PatrolConfig,
    ) -> Vec<MotionEvent> {
        match behavior {
            Behavior::Patrol        => motion::patrol(agent, env, config),
            Behavior::ChaseIntruder => motion::chase_intruder(agent, config),
            Behavior::AvoidObstacle => {
                let entering = previous != Behavior::AvoidObstacle;
                motion::avoid_obstacle(agent, env, config, entering)
            }
            Behavior::GoCharge      => motion::go_charge(agent, env, config),
            Behavior::Idle          => motion::idle(agent),
        }
    }
}
