//! Arena environment and builder.
//!
//! # Spatial index
//!
//! Obstacle centers are stored in an R-tree (via `rstar`).  The controller
//! asks two questions every tick, "is any center within the danger radius?"
//! and "which center is closest?", and both reduce to a single nearest-
//! neighbour query.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use pb_core::{PbError, Vec2};

use crate::{Obstacle, WorldError, WorldResult};

// ── R-tree obstacle entry ─────────────────────────────────────────────────────

/// Entry stored in the R-tree: an obstacle center and its index into
/// `Environment::obstacles`.
#[derive(Clone)]
struct ObstacleEntry {
    point: [f64; 2],
    index: usize,
}

impl RTreeObject for ObstacleEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for ObstacleEntry {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── NearestObstacle ───────────────────────────────────────────────────────────

/// Result of a nearest-obstacle query.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NearestObstacle {
    /// Index into [`Environment::obstacles`].
    pub index:    usize,
    pub center:   Vec2,
    /// Distance from the query point to `center`.
    pub distance: f64,
}

// ── Environment ───────────────────────────────────────────────────────────────

/// Waypoints, obstacles and the charging station.
///
/// Do not construct directly; use [`EnvironmentBuilder`] or
/// [`Environment::arena`].
pub struct Environment {
    /// Patrol route, visited in order and wrapped.  Always ≥ 2 entries.
    waypoints: Vec<Vec2>,

    /// All static obstacles.
    obstacles: Vec<Obstacle>,

    charging_station: Vec2,

    /// Axis-aligned arena extent `(min, max)`; used by input layers to
    /// validate sightings and by headless runs to sample them.
    bounds: (Vec2, Vec2),

    spatial_idx: RTree<ObstacleEntry>,
}

impl Environment {
    /// The reference arena: a triangle route A-B-C, three 80×80 blocks and a
    /// charger in the top-left corner of a 700×700 field.
    pub fn arena() -> WorldResult<Self> {
        crate::EnvironmentLayout::arena().build()
    }

    #[inline]
    pub fn waypoints(&self) -> &[Vec2] {
        &self.waypoints
    }

    /// Waypoint at `index`, wrapped modulo the route length so that a stale
    /// or out-of-range index can never panic.
    #[inline]
    pub fn waypoint(&self, index: usize) -> Vec2 {
        self.waypoints[index % self.waypoints.len()]
    }

    #[inline]
    pub fn waypoint_count(&self) -> usize {
        self.waypoints.len()
    }

    /// First waypoint; the agent's start and reset position.
    #[inline]
    pub fn start(&self) -> Vec2 {
        self.waypoints[0]
    }

    #[inline]
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    #[inline]
    pub fn charging_station(&self) -> Vec2 {
        self.charging_station
    }

    #[inline]
    pub fn bounds(&self) -> (Vec2, Vec2) {
        self.bounds
    }

    /// Whether `pos` lies inside the arena bounds (inclusive).
    pub fn contains(&self, pos: Vec2) -> bool {
        let (min, max) = self.bounds;
        pos.x >= min.x && pos.x <= max.x && pos.y >= min.y && pos.y <= max.y
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// The obstacle whose center is closest to `pos`.
    ///
    /// Returns `None` only if the environment has no obstacles.
    pub fn nearest_obstacle(&self, pos: Vec2) -> Option<NearestObstacle> {
        self.spatial_idx
            .nearest_neighbor(&[pos.x, pos.y])
            .map(|entry| {
                let center = self.obstacles[entry.index].center();
                NearestObstacle {
                    index:    entry.index,
                    center,
                    distance: pos.distance(center),
                }
            })
    }

    /// `true` if any obstacle center lies within `radius` of `pos`
    /// (boundary inclusive).
    pub fn obstacle_within(&self, pos: Vec2, radius: f64) -> bool {
        self.nearest_obstacle(pos)
            .is_some_and(|nearest| nearest.distance <= radius)
    }
}

// ── EnvironmentBuilder ────────────────────────────────────────────────────────

/// Incrementally constructs and validates an [`Environment`].
///
/// ```rust
/// use pb_core::Vec2;
/// use pb_world::{EnvironmentBuilder, Obstacle};
///
/// let env = EnvironmentBuilder::new()
///     .waypoint(Vec2::new(0.0, 0.0))
///     .waypoint(Vec2::new(100.0, 0.0))
///     .obstacle(Obstacle::circle(Vec2::new(50.0, 200.0), 10.0))
///     .charging_station(Vec2::new(0.0, 50.0))
///     .build()
///     .unwrap();
/// assert_eq!(env.waypoint_count(), 2);
/// ```
#[derive(Default)]
pub struct EnvironmentBuilder {
    waypoints:        Vec<Vec2>,
    obstacles:        Vec<Obstacle>,
    charging_station: Option<Vec2>,
    bounds:           Option<(Vec2, Vec2)>,
}

impl EnvironmentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a waypoint to the patrol route.
    pub fn waypoint(mut self, pos: Vec2) -> Self {
        self.waypoints.push(pos);
        self
    }

    pub fn waypoints(mut self, route: impl IntoIterator<Item = Vec2>) -> Self {
        self.waypoints.extend(route);
        self
    }

    pub fn obstacle(mut self, obstacle: Obstacle) -> Self {
        self.obstacles.push(obstacle);
        self
    }

    pub fn obstacles(mut self, obstacles: impl IntoIterator<Item = Obstacle>) -> Self {
        self.obstacles.extend(obstacles);
        self
    }

    /// Defaults to the first waypoint if never called.
    pub fn charging_station(mut self, pos: Vec2) -> Self {
        self.charging_station = Some(pos);
        self
    }

    /// Defaults to the bounding box of every waypoint, obstacle center and
    /// the charger.
    pub fn bounds(mut self, min: Vec2, max: Vec2) -> Self {
        self.bounds = Some((min, max));
        self
    }

    /// Validate the inputs and build the spatial index.
    pub fn build(self) -> WorldResult<Environment> {
        if self.waypoints.len() < 2 {
            return Err(WorldError::TooFewWaypoints(self.waypoints.len()));
        }
        if self.waypoints.iter().any(|w| !w.is_finite()) {
            return Err(PbError::NonFinite("waypoint").into());
        }
        if let Some(index) = self.obstacles.iter().position(|o| !o.is_well_formed()) {
            return Err(WorldError::DegenerateObstacle { index });
        }

        let charging_station = self.charging_station.unwrap_or(self.waypoints[0]);
        if !charging_station.is_finite() {
            return Err(PbError::NonFinite("charging station").into());
        }

        let bounds = match self.bounds {
            Some((min, max)) => {
                if !(min.is_finite() && max.is_finite()) || min.x > max.x || min.y > max.y {
                    return Err(PbError::Config(format!("invalid arena bounds {min}..{max}")).into());
                }
                (min, max)
            }
            None => {
                let points = self.waypoints.iter().copied()
                    .chain(self.obstacles.iter().map(Obstacle::center))
                    .chain(std::iter::once(charging_station));
                bounding_box(points)
            }
        };

        let entries: Vec<ObstacleEntry> = self.obstacles
            .iter()
            .enumerate()
            .map(|(index, o)| {
                let c = o.center();
                ObstacleEntry { point: [c.x, c.y], index }
            })
            .collect();

        log::debug!(
            "environment built: {} waypoints, {} obstacles, charger at {}",
            self.waypoints.len(),
            self.obstacles.len(),
            charging_station,
        );

        Ok(Environment {
            waypoints: self.waypoints,
            obstacles: self.obstacles,
            charging_station,
            bounds,
            spatial_idx: RTree::bulk_load(entries),
        })
    }
}

fn bounding_box(points: impl Iterator<Item = Vec2>) -> (Vec2, Vec2) {
    let mut min = Vec2::new(f64::INFINITY, f64::INFINITY);
    let mut max = Vec2::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
    for p in points {
        min = Vec2::new(min.x.min(p.x), min.y.min(p.y));
        max = Vec2::new(max.x.max(p.x), max.y.max(p.y));
    }
    (min, max)
}
