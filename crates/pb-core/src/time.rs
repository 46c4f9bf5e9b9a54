//! Simulation time model.
//!
//! # Design
//!
//! Two notions of time coexist:
//!
//! - A monotonically increasing `Tick` counter, advanced once per
//!   `Sim::update`.  All motion (patrol, pursuit, avoidance, charging) and
//!   the avoidance latch are measured in ticks.
//! - A monotonic clock behind the [`BatteryClock`] trait.  Battery decay is
//!   measured against it so that drain is frame-rate independent.
//!
//! [`WallClock`] reads `std::time::Instant` and is what an interactive
//! front-end uses.  [`SteppedClock`] sums the `dt` handed to each update,
//! which makes headless runs and tests deterministic while preserving the
//! same "elapsed time since last drain" semantics.

use std::fmt;
use std::time::{Duration, Instant};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// The following tick.
    #[inline]
    pub fn next(self) -> Tick {
        Tick(self.0 + 1)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── BatteryClock ──────────────────────────────────────────────────────────────

/// Monotonic time source used for battery drain.
///
/// `now` is measured from an arbitrary origin fixed when the clock is
/// created; only differences between readings are meaningful.
pub trait BatteryClock: Send + 'static {
    /// Time elapsed since the clock's origin.  Never decreases.
    fn now(&self) -> Duration;

    /// Called once per update with the frame delta.  Real-time clocks ignore
    /// it.
    fn advance(&mut self, _dt: Duration) {}
}

/// Real monotonic clock backed by [`Instant`].
#[derive(Clone, Debug)]
pub struct WallClock {
    origin: Instant,
}

impl WallClock {
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Default for WallClock {
    fn default() -> Self {
        Self::new()
    }
}

impl BatteryClock for WallClock {
    #[inline]
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Deterministic clock that advances only by the deltas it is given.
#[derive(Clone, Debug, Default)]
pub struct SteppedClock {
    elapsed: Duration,
}

impl SteppedClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Jump forward by `dt` outside of an update (e.g. to simulate a stall).
    #[inline]
    pub fn skip(&mut self, dt: Duration) {
        self.elapsed += dt;
    }
}

impl BatteryClock for SteppedClock {
    #[inline]
    fn now(&self) -> Duration {
        self.elapsed
    }

    #[inline]
    fn advance(&mut self, dt: Duration) {
        self.elapsed += dt;
    }
}

/// Box forwarding so `Sim` can hold either clock behind one type.
impl BatteryClock for Box<dyn BatteryClock> {
    #[inline]
    fn now(&self) -> Duration {
        (**self).now()
    }

    #[inline]
    fn advance(&mut self, dt: Duration) {
        (**self).advance(dt)
    }
}
