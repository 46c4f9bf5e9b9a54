//! Fluent builder for constructing a [`Sim`].

use pb_behavior::{Arbiter, PriorityArbiter};
use pb_core::{BatteryClock, PatrolConfig, SteppedClock};
use pb_world::Environment;

use crate::{Sim, SimResult};

/// Fluent builder for [`Sim<A, C>`].
///
/// # Optional inputs (have defaults)
///
/// | Method         | Default                       |
/// |----------------|-------------------------------|
/// | `.config(c)`   | `PatrolConfig::default()`     |
/// | `.arbiter(a)`  | `PriorityArbiter`             |
/// | `.clock(c)`    | `SteppedClock` (driven by dt) |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(Environment::arena()?)
///     .config(config)
///     .clock(WallClock::new())
///     .build()?;
/// ```
pub struct SimBuilder<A: Arbiter = PriorityArbiter, C: BatteryClock = SteppedClock> {
    env:     Environment,
    config:  PatrolConfig,
    arbiter: A,
    clock:   C,
}

impl SimBuilder {
    /// Start from an environment with every other input defaulted.
    pub fn new(env: Environment) -> Self {
        Self {
            env,
            config:  PatrolConfig::default(),
            arbiter: PriorityArbiter,
            clock:   SteppedClock::new(),
        }
    }
}

impl<A: Arbiter, C: BatteryClock> SimBuilder<A, C> {
    pub fn config(mut self, config: PatrolConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the behavior selection strategy.
    pub fn arbiter<A2: Arbiter>(self, arbiter: A2) -> SimBuilder<A2, C> {
        SimBuilder { env: self.env, config: self.config, arbiter, clock: self.clock }
    }

    /// Replace the battery clock.
    pub fn clock<C2: BatteryClock>(self, clock: C2) -> SimBuilder<A, C2> {
        SimBuilder { env: self.env, config: self.config, arbiter: self.arbiter, clock }
    }

    /// Validate the configuration and place the agent at the first waypoint.
    pub fn build(self) -> SimResult<Sim<A, C>> {
        self.config.validate()?;
        Ok(Sim::from_parts(self.config, self.env, self.arbiter, self.clock))
    }
}
