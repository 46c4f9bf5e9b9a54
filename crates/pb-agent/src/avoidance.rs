//! Latched avoidance steering.

use pb_core::Vec2;

/// Steering direction held across ticks during an avoidance episode.
///
/// `direction` is recomputed only when absent or when `timer` has run down
/// to zero.  The timer counts down once per tick regardless of behavior.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AvoidanceLatch {
    direction: Option<Vec2>,
    timer:     u32,
}

impl AvoidanceLatch {
    #[inline]
    pub fn direction(&self) -> Option<Vec2> {
        self.direction
    }

    #[inline]
    pub fn timer(&self) -> u32 {
        self.timer
    }

    /// The latched direction, if it is still valid.
    #[inline]
    pub fn active(&self) -> Option<Vec2> {
        if self.timer > 0 { self.direction } else { None }
    }

    /// Hold `direction` for the next `ticks` ticks.
    pub fn latch(&mut self, direction: Vec2, ticks: u32) {
        self.direction = Some(direction);
        self.timer = ticks;
    }

    /// One tick of countdown.
    #[inline]
    pub fn tick_down(&mut self) {
        self.timer = self.timer.saturating_sub(1);
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
