//! `pb-sim` — the per-tick update loop for the patrol_bt agent controller.
//!
//! # Tick order
//!
//! ```text
//! update(dt):
//!   0. commands   apply queued external commands (intruder, pause, reset)
//!      if paused: stop here
//!   1. battery    drain by wall-clock interval unless idle, then
//!                 re-evaluate the low-battery hysteresis flag
//!   2. charge     add charge_rate if last tick was GO_CHARGE and the
//!                 agent is docked
//!   3. arbitrate  Arbiter::select -> Agent::behavior
//!   4. motion     MotionEngine::execute for the selected behavior
//!   5. trail      record the new position
//!   6. latch      count the avoidance timer down
//! ```
//!
//! # Quick-start
//!
//! ```rust
//! use std::time::Duration;
//!
//! use pb_sim::{NoopObserver, SimBuilder};
//! use pb_world::Environment;
//!
//! let mut sim = SimBuilder::new(Environment::arena().unwrap()).build().unwrap();
//! sim.run_ticks(60, Duration::from_millis(16), &mut NoopObserver);
//! assert_eq!(sim.tick.0, 60);
//! ```

pub mod builder;
pub mod command;
pub mod error;
pub mod observer;
pub mod sim;
pub mod snapshot;


pub use builder::SimBuilder;
pub use command::Command;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
pub use snapshot::AgentSnapshot;
