//! Deterministic simulation-level RNG wrapper.
//!
//! The controller itself is fully deterministic; randomness only enters
//! through the *environment*: scripted intruder sightings in headless runs.
//! Seeding from a single `u64` means the same seed always reproduces the
//! same sequence of sightings.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::Vec2;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Simulation-level RNG for exogenous events.
///
/// Used only in single-threaded contexts.  Derive a [`child`](Self::child)
/// if an independent stream is needed.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Uniform point inside the axis-aligned box `[min, max)`.
    ///
    /// Degenerate extents collapse to the corresponding `min` coordinate.
    pub fn point_in(&mut self, min: Vec2, max: Vec2) -> Vec2 {
        let x = if max.x > min.x { self.0.gen_range(min.x..max.x) } else { min.x };
        let y = if max.y > min.y { self.0.gen_range(min.y..max.y) } else { min.y };
        Vec2::new(x, y)
    }
}
