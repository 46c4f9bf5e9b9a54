//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `agent_trail.csv`
//! - `events.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::{EventRow, OutputResult, TrailRow};
use crate::writer::OutputWriter;

pub const TRAIL_HEADER: [&str; 10] = [
    "tick", "x", "y", "behavior", "battery", "low_battery",
    "patrol_cycles", "target_waypoint", "intruder_x", "intruder_y",
];

pub const EVENTS_HEADER: [&str; 3] = ["tick", "kind", "detail"];

/// Writes a run to two CSV files.
pub struct CsvWriter {
    trail:    Writer<File>,
    events:   Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Create the output directory if needed, open both files and write the
    /// header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut trail = Writer::from_path(dir.join("agent_trail.csv"))?;
        trail.write_record(TRAIL_HEADER)?;

        let mut events = Writer::from_path(dir.join("events.csv"))?;
        events.write_record(EVENTS_HEADER)?;

        Ok(Self { trail, events, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_trail(&mut self, row: &TrailRow) -> OutputResult<()> {
        let (ix, iy) = match row.intruder {
            Some((x, y)) => (format!("{x:.3}"), format!("{y:.3}")),
            None         => (String::new(), String::new()),
        };
        self.trail.write_record(&[
            row.tick.to_string(),
            format!("{:.3}", row.x),
            format!("{:.3}", row.y),
            row.behavior.as_str().to_owned(),
            format!("{:.1}", row.battery),
            (row.low_battery as u8).to_string(),
            row.patrol_cycles.to_string(),
            row.target_waypoint.to_string(),
            ix,
            iy,
        ])?;
        Ok(())
    }

    fn write_event(&mut self, row: &EventRow) -> OutputResult<()> {
        self.events.write_record([row.tick.to_string().as_str(), row.kind, row.detail.as_str()])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.trail.flush()?;
        self.events.flush()?;
        Ok(())
    }
}
