//! Plain-data environment description.
//!
//! `EnvironmentLayout` is what configuration files carry; it has no index
//! and no invariants until [`build`](EnvironmentLayout::build) turns it into
//! an [`Environment`].

use pb_core::Vec2;

use crate::{Environment, EnvironmentBuilder, Obstacle, WorldResult};

/// Serializable description of an arena.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnvironmentLayout {
    pub waypoints:        Vec<Vec2>,
    pub obstacles:        Vec<Obstacle>,
    pub charging_station: Vec2,
    /// `(min, max)` corners.  `None` derives them from the contents.
    #[cfg_attr(feature = "serde", serde(default))]
    pub bounds:           Option<(Vec2, Vec2)>,
}

impl EnvironmentLayout {
    /// Reference arena: 700×700 field, route A(150,150) → B(650,150) →
    /// C(400,550), three 80×80 blocks, charger at (75,75).
    pub fn arena() -> Self {
        Self {
            waypoints: vec![
                Vec2::new(150.0, 150.0),
                Vec2::new(650.0, 150.0),
                Vec2::new(400.0, 550.0),
            ],
            obstacles: vec![
                Obstacle::rect(300.0, 300.0, 80.0, 80.0),
                Obstacle::rect(500.0, 400.0, 80.0, 80.0),
                Obstacle::rect(200.0, 450.0, 80.0, 80.0),
            ],
            charging_station: Vec2::new(75.0, 75.0),
            bounds: Some((Vec2::ZERO, Vec2::new(700.0, 700.0))),
        }
    }

    pub fn build(self) -> WorldResult<Environment> {
        let mut builder = EnvironmentBuilder::new()
            .waypoints(self.waypoints)
            .obstacles(self.obstacles)
            .charging_station(self.charging_station);
        if let Some((min, max)) = self.bounds {
            builder = builder.bounds(min, max);
        }
        builder.build()
    }
}

impl Default for EnvironmentLayout {
    fn default() -> Self {
        Self::arena()
    }
}
