//! Read-only state passed to every arbitration call.

use pb_agent::Agent;
use pb_core::PatrolConfig;
use pb_world::Environment;

/// A read-only snapshot of everything arbitration may look at.
///
/// Built by pb-sim once per tick, after battery bookkeeping and before
/// motion.  Nothing behind these borrows changes while the context is live.
#[derive(Copy, Clone)]
pub struct ArbitrationContext<'a> {
    pub agent:  &'a Agent,
    pub env:    &'a Environment,
    pub config: &'a PatrolConfig,
}

impl<'a> ArbitrationContext<'a> {
    #[inline]
    pub fn new(agent: &'a Agent, env: &'a Environment, config: &'a PatrolConfig) -> Self {
        Self { agent, env, config }
    }

    /// Obstacle check: any center within the danger radius, boundary
    /// inclusive.
    #[inline]
    pub fn obstacle_in_range(&self) -> bool {
        self.env.obstacle_within(self.agent.position, self.config.danger_radius)
    }

    /// Rest condition: enough completed loops and a healthy battery.
    #[inline]
    pub fn may_rest(&self) -> bool {
        self.agent.patrol_cycle_count() >= self.config.max_patrol_cycles_before_idle
            && self.agent.battery.level() > self.config.idle_battery_floor
    }
}
