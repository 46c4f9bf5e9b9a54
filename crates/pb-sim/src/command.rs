//! Commands delivered by the input layer.

use pb_core::Vec2;

/// An external control request.
///
/// Queued with [`Sim::queue`][crate::Sim::queue] and applied at the start
/// of the next update, or applied immediately with
/// [`Sim::apply`][crate::Sim::apply].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    /// An intruder was sighted at this position.
    SetIntruder(Vec2),
    /// Withdraw the current sighting without a capture.
    ClearIntruder,
    Pause,
    Resume,
    TogglePause,
    /// Return the agent to its canonical initial state.
    Reset,
}
