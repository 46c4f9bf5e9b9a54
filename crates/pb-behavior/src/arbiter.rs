//! The `Arbiter` trait and its implementations.

use pb_agent::Behavior;

use crate::ArbitrationContext;

/// Pluggable behavior selection.
///
/// The simulation calls [`select`][Self::select] exactly once per unpaused
/// tick and stores the result as the agent's behavior.  Implementations
/// must be total: every state maps to exactly one behavior.
pub trait Arbiter: Send + Sync + 'static {
    fn select(&self, ctx: &ArbitrationContext<'_>) -> Behavior;
}

/// The fixed priority selector.  See the crate docs for the order.
#[derive(Copy, Clone, Debug, Default)]
pub struct PriorityArbiter;

impl Arbiter for PriorityArbiter {
    #[inline]
    fn select(&self, ctx: &ArbitrationContext<'_>) -> Behavior {
        select_behavior(ctx)
    }
}

/// Evaluate the priority order against `ctx`.
pub fn select_behavior(ctx: &ArbitrationContext<'_>) -> Behavior {
    if ctx.obstacle_in_range() {
        Behavior::AvoidObstacle
    } else if ctx.agent.intruder().is_some() {
        Behavior::ChaseIntruder
    } else if ctx.agent.battery.is_low() {
        Behavior::GoCharge
    } else if ctx.may_rest() {
        Behavior::Idle
    } else {
        Behavior::Patrol
    }
}

/// An [`Arbiter`] that always returns the same behavior.
///
/// Useful for driving a single motion mode in isolation (tests, scripted
/// demonstrations), including modes the priority order would not pick.
#[derive(Copy, Clone, Debug)]
pub struct FixedArbiter(pub Behavior);

impl Arbiter for FixedArbiter {
    #[inline]
    fn select(&self, _ctx: &ArbitrationContext<'_>) -> Behavior {
        self.0
    }
}
