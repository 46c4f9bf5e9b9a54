//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use pb_agent::Behavior;
use pb_core::Tick;
use pb_mobility::MotionEvent;
use pb_sim::{AgentSnapshot, Command, SimObserver};

use crate::row::{EventRow, TrailRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that records every event and a sampled trail to any
/// [`OutputWriter`].
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:         W,
    /// Write a trail row every this many ticks (at least 1).
    trail_interval: u64,
    trail_rows:     u64,
    event_rows:     u64,
    last_error:     Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W, trail_interval: u64) -> Self {
        Self {
            writer,
            trail_interval: trail_interval.max(1),
            trail_rows:     0,
            event_rows:     0,
            last_error:     None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// `(trail rows, event rows)` successfully written so far.
    pub fn rows_written(&self) -> (u64, u64) {
        (self.trail_rows, self.event_rows)
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn event(&mut self, row: EventRow) {
        let result = self.writer.write_event(&row);
        if result.is_ok() {
            self.event_rows += 1;
        }
        self.store_err(result);
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_command(&mut self, tick: Tick, command: &Command) {
        self.event(EventRow::command(tick.0, command));
    }

    fn on_behavior_change(&mut self, tick: Tick, from: Behavior, to: Behavior) {
        self.event(EventRow::behavior_change(tick.0, from, to));
    }

    fn on_motion_event(&mut self, tick: Tick, event: &MotionEvent) {
        self.event(EventRow::motion(tick.0, event));
    }

    fn on_tick_end(&mut self, snapshot: &AgentSnapshot) {
        if snapshot.tick.0 % self.trail_interval != 0 {
            return;
        }
        let result = self.writer.write_trail(&TrailRow::from(snapshot));
        if result.is_ok() {
            self.trail_rows += 1;
        }
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
