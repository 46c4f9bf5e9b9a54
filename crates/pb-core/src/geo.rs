//! Planar vector type and the handful of operations the motion code needs.
//!
//! Arena coordinates are plain Cartesian units (screen pixels in the
//! reference arena).  `f64` keeps threshold comparisons such as "distance
//! first drops to 70" exact enough for the arbitration tests.

use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// A point or displacement in the 2-D arena.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    /// Unit vector along +x.  Fallback steering direction when a
    /// perpendicular degenerates to zero length.
    pub const UNIT_X: Vec2 = Vec2 { x: 1.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Euclidean distance between two points.
    #[inline]
    pub fn distance(self, other: Vec2) -> f64 {
        (other - self).length()
    }

    /// Unit vector in the same direction, or `None` for a zero-length (or
    /// non-finite) vector.  Every caller that divides by a length goes
    /// through here.
    #[inline]
    pub fn normalized(self) -> Option<Vec2> {
        let len = self.length();
        if len > 0.0 && len.is_finite() {
            Some(Vec2::new(self.x / len, self.y / len))
        } else {
            None
        }
    }

    /// 2-D cross product (z component of the 3-D cross product).
    ///
    /// Positive when `other` lies counter-clockwise of `self` in a
    /// y-up frame (clockwise on a y-down screen).
    #[inline]
    pub fn cross(self, other: Vec2) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// `(y, -x)`: `self` rotated a quarter turn clockwise (y-up frame).
    #[inline]
    pub fn perp_cw(self) -> Vec2 {
        Vec2::new(self.y, -self.x)
    }

    /// `(-y, x)`: `self` rotated a quarter turn counter-clockwise (y-up frame).
    #[inline]
    pub fn perp_ccw(self) -> Vec2 {
        Vec2::new(-self.y, self.x)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Step from `self` towards `target` by `step` units.
    ///
    /// Returns `self` unchanged when the two points coincide.
    #[inline]
    pub fn step_towards(self, target: Vec2, step: f64) -> Vec2 {
        match (target - self).normalized() {
            Some(dir) => self + dir * step,
            None      => self,
        }
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl From<(f64, f64)> for Vec2 {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Vec2::new(x, y)
    }
}

impl std::fmt::Display for Vec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}
