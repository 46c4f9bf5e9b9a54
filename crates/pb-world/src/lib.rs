//! `pb-world` — the static arena the agent moves through.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`obstacle`]    | `Obstacle`, `ObstacleShape` (circle / rectangle)          |
//! | [`environment`] | `Environment` (waypoints + R-tree + charger), builder     |
//! | [`layout`]      | `EnvironmentLayout` — plain description, reference arena  |
//! | [`error`]       | `WorldError`, `WorldResult<T>`                            |
//!
//! The environment is read-only from the controller's point of view: it is
//! built once, validated, and only replaced between simulation runs.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on layouts and obstacles.  |

pub mod environment;
pub mod error;
pub mod layout;
pub mod obstacle;

#[cfg(test)]
mod tests;

pub use environment::{Environment, EnvironmentBuilder, NearestObstacle};
pub use error::{WorldError, WorldResult};
pub use layout::EnvironmentLayout;
pub use obstacle::{Obstacle, ObstacleShape};
