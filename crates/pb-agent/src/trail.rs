//! Bounded position history for display.

use std::collections::VecDeque;

use pb_core::Vec2;

/// Ring buffer of the most recent positions, oldest first.
#[derive(Clone, Debug, PartialEq)]
pub struct Trail {
    points:   VecDeque<Vec2>,
    capacity: usize,
}

impl Trail {
    /// An empty trail holding at most `capacity` points (minimum 1).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self { points: VecDeque::with_capacity(capacity), capacity }
    }

    /// Append `pos`, evicting the oldest point when full.
    pub fn push(&mut self, pos: Vec2) {
        if self.points.len() == self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(pos);
    }

    /// Drop everything and start again from `seed`.
    pub fn reseed(&mut self, seed: Vec2) {
        self.points.clear();
        self.points.push_back(seed);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn latest(&self) -> Option<Vec2> {
        self.points.back().copied()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Vec2> + '_ {
        self.points.iter().copied()
    }

    /// The last `n` points, oldest first.
    pub fn recent(&self, n: usize) -> Vec<Vec2> {
        let skip = self.points.len().saturating_sub(n);
        self.points.iter().skip(skip).copied().collect()
    }
}
