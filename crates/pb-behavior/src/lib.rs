//! `pb-behavior` — which behavior runs this tick, and towards what.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                          |
//! |--------------|-------------------------------------------------------------------|
//! | [`context`]  | `ArbitrationContext<'a>` — read-only view of agent + environment  |
//! | [`arbiter`]  | `Arbiter` trait, `PriorityArbiter`, `FixedArbiter`                |
//! | [`goal`]     | `current_goal_point` — shared by arbitration and avoidance        |
//!
//! # Priority order
//!
//! ```text
//! 1. AVOID_OBSTACLE  any obstacle center within danger_radius
//! 2. CHASE_INTRUDER  an intruder sighting is pending
//! 3. GO_CHARGE       low-battery flag is set
//! 4. IDLE            patrol_cycles >= max AND battery > idle floor
//! 5. PATROL          otherwise
//! ```
//!
//! Selection is a pure function of the current state; no previous decision
//! is consulted.

pub mod arbiter;
pub mod context;
pub mod goal;

#[cfg(test)]
mod tests;

pub use arbiter::{Arbiter, FixedArbiter, PriorityArbiter, select_behavior};
pub use context::ArbitrationContext;
pub use goal::current_goal_point;
