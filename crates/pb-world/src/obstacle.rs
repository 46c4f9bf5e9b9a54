//! Static obstacles.
//!
//! Avoidance only ever looks at an obstacle's center; the shape is kept so
//! that presentation layers can draw it and so that layouts round-trip.

use pb_core::Vec2;

/// Geometric footprint of an obstacle.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum ObstacleShape {
    Circle { center: Vec2, radius: f64 },
    /// Axis-aligned rectangle with its top-left corner at `origin`
    /// (screen coordinates, y grows downwards).
    Rect { origin: Vec2, width: f64, height: f64 },
}

/// A static obstacle in the arena.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Obstacle {
    pub shape: ObstacleShape,
}

impl Obstacle {
    #[inline]
    pub fn circle(center: Vec2, radius: f64) -> Self {
        Self { shape: ObstacleShape::Circle { center, radius } }
    }

    /// Rectangle from `x, y, width, height` (top-left corner first).
    #[inline]
    pub fn rect(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { shape: ObstacleShape::Rect { origin: Vec2::new(x, y), width, height } }
    }

    /// The reference point used by detection and avoidance.
    pub fn center(&self) -> Vec2 {
        match self.shape {
            ObstacleShape::Circle { center, .. } => center,
            ObstacleShape::Rect { origin, width, height } => {
                Vec2::new(origin.x + width * 0.5, origin.y + height * 0.5)
            }
        }
    }

    pub(crate) fn is_well_formed(&self) -> bool {
        match self.shape {
            ObstacleShape::Circle { center, radius } => {
                center.is_finite() && radius.is_finite() && radius > 0.0
            }
            ObstacleShape::Rect { origin, width, height } => {
                origin.is_finite()
                    && width.is_finite()
                    && height.is_finite()
                    && width > 0.0
                    && height > 0.0
            }
        }
    }
}
