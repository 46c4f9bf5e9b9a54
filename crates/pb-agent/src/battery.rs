//! Battery level, low-battery hysteresis, and time-based drain.

use std::time::Duration;

use pb_core::config::BATTERY_MAX;

/// Outcome of re-evaluating the low-battery flag.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlagChange {
    Unchanged,
    /// Level fell to or below the low threshold.
    BecameLow,
    /// Level climbed to or above the recovered threshold.
    Recovered,
}

/// Battery bookkeeping.
///
/// `level` is kept in `[0, 100]` by every mutator.  `low` is a hysteresis
/// flag: it sets at `level <= low_threshold` and clears only at
/// `level >= recovered_threshold`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BatteryState {
    level:      f64,
    low:        bool,
    /// Clock reading at which the current drain window started.
    last_drain: Duration,
}

impl BatteryState {
    /// A full battery whose first drain window starts at `now`.
    pub fn full(now: Duration) -> Self {
        Self { level: BATTERY_MAX, low: false, last_drain: now }
    }

    #[inline]
    pub fn level(&self) -> f64 {
        self.level
    }

    #[inline]
    pub fn is_low(&self) -> bool {
        self.low
    }

    /// Overwrite the level, clamped to `[0, 100]`.  NaN reads as empty.
    ///
    /// The hysteresis flag is left alone; it follows on the next
    /// [`update_flag`](Self::update_flag).
    pub fn set_level(&mut self, level: f64) {
        self.level = clamp_level(level);
    }

    /// Apply time-based drain.
    ///
    /// If at least `interval` has passed since the window started, remove
    /// `amount` and start a new window.  While `draining` is false (the
    /// agent is idle) the window is restarted without draining, so resting
    /// time never counts towards the next decrement.  Returns `true` if the
    /// level changed.
    pub fn drain(&mut self, now: Duration, interval: Duration, amount: f64, draining: bool) -> bool {
        let elapsed = now.saturating_sub(self.last_drain);
        if !draining {
            self.last_drain = now;
            return false;
        }
        if elapsed < interval {
            return false;
        }
        self.last_drain = now;
        let before = self.level;
        self.level = clamp_level(self.level - amount);
        self.level != before
    }

    /// Re-evaluate the hysteresis flag against the current level.
    pub fn update_flag(&mut self, low_threshold: f64, recovered_threshold: f64) -> FlagChange {
        if !self.low && self.level <= low_threshold {
            self.low = true;
            FlagChange::BecameLow
        } else if self.low && self.level >= recovered_threshold {
            self.low = false;
            FlagChange::Recovered
        } else {
            FlagChange::Unchanged
        }
    }

    /// Add `amount`, saturating at 100.
    pub fn charge(&mut self, amount: f64) {
        self.level = clamp_level(self.level + amount);
    }
}

#[inline]
fn clamp_level(level: f64) -> f64 {
    if level.is_nan() {
        0.0
    } else {
        level.clamp(0.0, BATTERY_MAX)
    }
}
