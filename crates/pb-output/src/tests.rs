//! Integration tests for pb-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use pb_agent::Behavior;

    use crate::csv::CsvWriter;
    use crate::row::{EventRow, TrailRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn trail_row(tick: u64) -> TrailRow {
        TrailRow {
            tick,
            x:               150.0 + tick as f64,
            y:               150.0,
            behavior:        Behavior::Patrol,
            battery:         95.0,
            low_battery:     false,
            patrol_cycles:   0,
            target_waypoint: 1,
            intruder:        None,
        }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("agent_trail.csv").exists());
        assert!(dir.path().join("events.csv").exists());
    }

    #[test]
    fn csv_creates_missing_directory() {
        let dir = tmp();
        let nested = dir.path().join("runs").join("a");
        let _w = CsvWriter::new(&nested).unwrap();
        assert!(nested.join("agent_trail.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("agent_trail.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, crate::csv::TRAIL_HEADER);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("events.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["tick", "kind", "detail"]);
    }

    #[test]
    fn csv_trail_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_trail(&trail_row(3)).unwrap();
        w.write_trail(&TrailRow {
            behavior: Behavior::ChaseIntruder,
            intruder: Some((400.0, 120.5)),
            ..trail_row(4)
        }).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("agent_trail.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "3");
        assert_eq!(&rows[0][1], "153.000");
        assert_eq!(&rows[0][3], "PATROL");
        assert_eq!(&rows[0][4], "95.0");
        assert_eq!(&rows[0][5], "0");
        assert_eq!(&rows[0][8], "");          // no intruder
        assert_eq!(&rows[1][3], "CHASE_INTRUDER");
        assert_eq!(&rows[1][9], "120.500");
    }

    #[test]
    fn csv_event_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_event(&EventRow::behavior_change(7, Behavior::Patrol, Behavior::GoCharge)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("events.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "7");
        assert_eq!(&rows[0][1], "behavior_change");
        assert_eq!(&rows[0][2], "PATROL -> GO_CHARGE");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap(); // second call should not panic
    }
}

#[cfg(test)]
mod observer_tests {
    use std::io;
    use std::time::Duration;

    use pb_core::Vec2;
    use pb_sim::{Command, SimBuilder};
    use pb_world::Environment;

    use crate::{CsvWriter, EventRow, OutputError, OutputResult, OutputWriter, SimOutputObserver, TrailRow};

    struct FailingWriter {
        calls: usize,
    }

    impl OutputWriter for FailingWriter {
        fn write_trail(&mut self, _row: &TrailRow) -> OutputResult<()> {
            self.calls += 1;
            Err(OutputError::Io(io::Error::other(format!("write {}", self.calls))))
        }
        fn write_event(&mut self, _row: &EventRow) -> OutputResult<()> {
            Ok(())
        }
        fn finish(&mut self) -> OutputResult<()> {
            Ok(())
        }
    }

    #[test]
    fn integration_csv() {
        let mut sim = SimBuilder::new(Environment::arena().unwrap()).build().unwrap();
        sim.queue(Command::SetIntruder(Vec2::new(400.0, 150.0)));

        let dir = tempfile::tempdir().unwrap();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer, 2);
        sim.run(10, Duration::from_millis(16), &mut obs);
        assert!(obs.take_error().is_none(), "no write errors expected");

        // Ticks 1..=10 sampled every 2 → 2, 4, 6, 8, 10.
        assert_eq!(obs.rows_written(), (5, 2));
        let mut rdr = csv::Reader::from_path(dir.path().join("agent_trail.csv")).unwrap();
        let ticks: Vec<String> = rdr.records().map(|r| r.unwrap()[0].to_owned()).collect();
        assert_eq!(ticks, ["2", "4", "6", "8", "10"]);

        let mut rdr = csv::Reader::from_path(dir.path().join("events.csv")).unwrap();
        let kinds: Vec<String> = rdr.records().map(|r| r.unwrap()[1].to_owned()).collect();
        assert_eq!(kinds, ["command", "behavior_change"]);
    }

    #[test]
    fn first_error_is_kept() {
        let mut sim = SimBuilder::new(Environment::arena().unwrap()).build().unwrap();
        let mut obs = SimOutputObserver::new(FailingWriter { calls: 0 }, 1);
        sim.run(3, Duration::ZERO, &mut obs);

        let err = obs.take_error().expect("error stored");
        assert_eq!(err.to_string(), "I/O error: write 1");
        assert!(obs.take_error().is_none());
        assert_eq!(obs.into_writer().calls, 3);
    }
}
