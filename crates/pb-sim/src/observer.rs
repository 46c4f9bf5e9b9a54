//! Simulation observer trait for progress reporting and data collection.

use pb_agent::Behavior;
use pb_core::Tick;
use pb_mobility::MotionEvent;

use crate::{AgentSnapshot, Command};

/// Callbacks invoked by [`Sim`][crate::Sim] at key points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — transition printer
///
/// ```rust,ignore
/// struct TransitionPrinter;
///
/// impl SimObserver for TransitionPrinter {
///     fn on_behavior_change(&mut self, tick: Tick, from: Behavior, to: Behavior) {
///         println!("{tick}: {from} -> {to}");
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called before a queued command is applied.
    fn on_command(&mut self, _tick: Tick, _command: &Command) {}

    /// Called when arbitration picks a different behavior than last tick.
    fn on_behavior_change(&mut self, _tick: Tick, _from: Behavior, _to: Behavior) {}

    /// Called for every event a motion function reports.
    fn on_motion_event(&mut self, _tick: Tick, _event: &MotionEvent) {}

    /// Called after each unpaused update with the resulting state.
    fn on_tick_end(&mut self, _snapshot: &AgentSnapshot) {}

    /// Called once by [`Sim::run`][crate::Sim::run] after the final tick.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
