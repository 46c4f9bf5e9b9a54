//! Controller configuration.
//!
//! Every threshold and rate that shapes arbitration and motion lives in
//! [`PatrolConfig`].  The defaults reproduce the reference arena exactly;
//! applications typically load overrides from a JSON file (with the `serde`
//! feature) and call [`PatrolConfig::validate`] before building a sim.

use std::time::Duration;

use crate::{PbError, PbResult};

/// Tunable parameters for arbitration, motion and battery management.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PatrolConfig {
    /// Distance travelled per tick in every non-avoidance behavior.
    pub speed: f64,

    /// A target closer than this is considered reached (waypoints,
    /// intruder capture, charging station).
    pub arrival_radius: f64,

    /// An obstacle center closer than this triggers AVOID_OBSTACLE.
    pub danger_radius: f64,

    /// Depth over which the radial repulsion ramps from 0 to full strength:
    /// `strength = clamp((danger_radius - d) / avoid_falloff, 0, 1)`.
    pub avoid_falloff: f64,

    /// Lateral avoidance step as a multiple of `speed`.
    pub avoid_speed_factor: f64,

    /// Ticks a latched avoidance direction stays valid.
    pub avoid_lock_ticks: u32,

    /// Wall-clock interval between battery decrements, in milliseconds.
    pub drain_interval_ms: u64,

    /// Battery percentage removed per drain interval.
    pub drain_amount: f64,

    /// `low_battery` latches on at or below this level.
    pub low_battery_threshold: f64,

    /// `low_battery` releases at or above this level; also the level at
    /// which a charge cycle counts as complete.
    pub recovered_threshold: f64,

    /// IDLE requires the battery to be strictly above this level.
    pub idle_battery_floor: f64,

    /// Completed patrol loops before the agent may rest.
    pub max_patrol_cycles_before_idle: u32,

    /// Battery percentage added per tick while docked.
    pub charge_rate: f64,

    /// Number of recent positions kept for display.
    pub trail_capacity: usize,
}

impl Default for PatrolConfig {
    fn default() -> Self {
        Self {
            speed:                         2.5,
            arrival_radius:                8.0,
            danger_radius:                 70.0,
            avoid_falloff:                 30.0,
            avoid_speed_factor:            1.5,
            avoid_lock_ticks:              25,
            drain_interval_ms:             800,
            drain_amount:                  5.0,
            low_battery_threshold:         20.0,
            recovered_threshold:           90.0,
            idle_battery_floor:            50.0,
            max_patrol_cycles_before_idle: 3,
            charge_rate:                   3.0,
            trail_capacity:                80,
        }
    }
}

/// Upper bound of the battery scale.
pub const BATTERY_MAX: f64 = 100.0;

impl PatrolConfig {
    /// Battery drain interval as a [`Duration`].
    #[inline]
    pub fn drain_interval(&self) -> Duration {
        Duration::from_millis(self.drain_interval_ms)
    }

    /// Reject values that would make the controller misbehave.
    pub fn validate(&self) -> PbResult<()> {
        let positive = [
            ("speed", self.speed),
            ("arrival_radius", self.arrival_radius),
            ("danger_radius", self.danger_radius),
            ("avoid_falloff", self.avoid_falloff),
            ("avoid_speed_factor", self.avoid_speed_factor),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(PbError::Config(format!("{name} must be a positive finite number, got {value}")));
            }
        }

        let in_range = [
            ("drain_amount", self.drain_amount),
            ("charge_rate", self.charge_rate),
            ("low_battery_threshold", self.low_battery_threshold),
            ("recovered_threshold", self.recovered_threshold),
            ("idle_battery_floor", self.idle_battery_floor),
        ];
        for (name, value) in in_range {
            if !(0.0..=BATTERY_MAX).contains(&value) {
                return Err(PbError::Config(format!("{name} must be within 0..=100, got {value}")));
            }
        }

        if self.low_battery_threshold >= self.recovered_threshold {
            return Err(PbError::Config(format!(
                "hysteresis band is empty: low_battery_threshold {} >= recovered_threshold {}",
                self.low_battery_threshold, self.recovered_threshold
            )));
        }
        if self.drain_interval_ms == 0 {
            return Err(PbError::Config("drain_interval_ms must be non-zero".into()));
        }
        if self.trail_capacity == 0 {
            return Err(PbError::Config("trail_capacity must be non-zero".into()));
        }
        Ok(())
    }
}
