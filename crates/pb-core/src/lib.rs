//! `pb-core` — foundational types for the `patrol_bt` agent controller.
//!
//! This crate is a dependency of every other `pb-*` crate.  It intentionally
//! has no `pb-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`geo`]         | `Vec2`, planar distance, normalisation, cross product |
//! | [`time`]        | `Tick`, `BatteryClock`, `WallClock`, `SteppedClock`   |
//! | [`config`]      | `PatrolConfig` — every tunable threshold and rate     |
//! | [`rng`]         | `SimRng` (seeded, for scripted sightings)             |
//! | [`error`]       | `PbError`, `PbResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize`; needed for JSON configs.   |

pub mod config;
pub mod error;
pub mod geo;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::PatrolConfig;
pub use error::{PbError, PbResult};
pub use geo::Vec2;
pub use rng::SimRng;
pub use time::{BatteryClock, SteppedClock, Tick, WallClock};
