//! `pb-output` — run recording for the patrol_bt agent controller.
//!
//! | File              | Contents                                               |
//! |-------------------|--------------------------------------------------------|
//! | `agent_trail.csv` | one row per sampled tick: position, behavior, battery  |
//! | `events.csv`      | behavior changes, motion events, applied commands      |
//!
//! Writers implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `pb_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use pb_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer, 1);
//! sim.run(ticks, dt, &mut obs);
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{EventRow, TrailRow};
pub use writer::OutputWriter;
