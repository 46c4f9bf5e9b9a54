//! `pb-agent` — state of the single controlled agent.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`behavior`]  | `Behavior` — closed set of five mutually exclusive modes   |
//! | [`battery`]   | `BatteryState` — level, hysteresis flag, drain bookkeeping |
//! | [`avoidance`] | `AvoidanceLatch` — latched steering direction + countdown  |
//! | [`trail`]     | `Trail` — bounded ring buffer of recent positions          |
//! | [`agent`]     | `Agent` — everything above plus position and patrol state  |
//!
//! # Ownership rules
//!
//! - `Agent::behavior` is written only by the arbitration step in pb-sim.
//! - `Agent::position` is written only by motion functions in pb-mobility.
//! - Everything else is bookkeeping with its own narrow mutators, so that
//!   out-of-range values (negative battery, stale waypoint index) are
//!   clamped or wrapped where they are written.

pub mod agent;
pub mod avoidance;
pub mod battery;
pub mod behavior;
pub mod trail;


pub use agent::Agent;
pub use avoidance::AvoidanceLatch;
pub use battery::{BatteryState, FlagChange};
pub use behavior::Behavior;
pub use trail::Trail;
