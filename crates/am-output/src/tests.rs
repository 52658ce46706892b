//! Unit tests for am-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::trace::{CsvTraceWriter, TRACE_FILE};
    use crate::writer::TraceWriter;
    use crate::TraceRow;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn row(tick: u64, alert: bool) -> TraceRow {
        TraceRow {
            tick,
            elapsed_secs:      tick as f64,
            lat:               35.667,
            lon:               138.569,
            hazard_distance_m: 201.579,
            alert,
        }
    }

    #[test]
    fn csv_header_correct() {
        let dir = tmp();
        let mut w = CsvTraceWriter::new(dir.path()).unwrap();
        w.flush().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(TRACE_FILE)).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["tick", "elapsed_secs", "lat", "lon", "hazard_distance_m", "alert"]);
    }

    #[test]
    fn csv_rows_formatted() {
        let dir = tmp();
        let mut w = CsvTraceWriter::new(dir.path()).unwrap();
        w.write_row(&row(1, false)).unwrap();
        w.write_row(&row(2, true)).unwrap();
        w.flush().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(TRACE_FILE)).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "1");
        assert_eq!(&rows[0][1], "1.000");
        assert_eq!(&rows[0][2], "35.66700000");
        assert_eq!(&rows[0][4], "201.58");
        assert_eq!(&rows[0][5], "0");
        assert_eq!(&rows[1][5], "1");
    }
}

#[cfg(test)]
mod observer_tests {
    use am_core::{Coordinate, Tick};
    use am_sim::{HazardZone, SimObserver, Step};

    use crate::{OutputError, OutputResult, TraceObserver, TraceRow, TraceWriter};

    #[derive(Default)]
    struct MemWriter {
        rows:    Vec<TraceRow>,
        flushes: usize,
    }

    impl TraceWriter for MemWriter {
        fn write_row(&mut self, row: &TraceRow) -> OutputResult<()> {
            self.rows.push(row.clone());
            Ok(())
        }

        fn flush(&mut self) -> OutputResult<()> {
            self.flushes += 1;
            Ok(())
        }
    }

    struct BrokenWriter;

    impl TraceWriter for BrokenWriter {
        fn write_row(&mut self, _row: &TraceRow) -> OutputResult<()> {
            Err(OutputError::Io(std::io::Error::other("disk full")))
        }

        fn flush(&mut self) -> OutputResult<()> {
            Ok(())
        }
    }

    fn step(index: usize, position: Coordinate) -> Step {
        let zone = HazardZone::new(Coordinate::new(35.668170044075985, 138.57070443965304), 50.0);
        Step { index, position, proximity: zone.check(position) }
    }

    #[test]
    fn steps_become_rows() {
        let mut obs = TraceObserver::new(MemWriter::default());
        obs.on_step(Tick(1), 1.0, &step(0, Coordinate::new(35.667, 138.569)));
        obs.on_step(Tick(2), 2.0, &step(1, Coordinate::new(35.6683, 138.5703)));
        obs.on_finished(Tick(2));
        assert_eq!(obs.rows(), 2);
        assert!(obs.take_error().is_none());

        let w = obs.into_writer();
        assert_eq!(w.flushes, 1);
        assert_eq!(w.rows[0].tick, 1);
        assert!(!w.rows[0].alert);
        assert!(w.rows[1].alert);
        assert!(w.rows[1].hazard_distance_m < 50.0);
    }

    #[test]
    fn first_error_is_kept() {
        let mut obs = TraceObserver::new(BrokenWriter);
        obs.on_step(Tick(1), 1.0, &step(0, Coordinate::new(35.667, 138.569)));
        obs.on_step(Tick(2), 2.0, &step(1, Coordinate::new(35.667, 138.569)));
        assert_eq!(obs.rows(), 0);
        assert!(matches!(obs.take_error(), Some(OutputError::Io(_))));
        assert!(obs.take_error().is_none());
    }
}

#[cfg(test)]
mod bell_tests {
    use std::io::{self, Write};
    use std::path::Path;
    use std::time::Duration;

    use am_sim::{AlertError, SoundEngine};

    use crate::BellEngine;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn rings_and_stays_busy_for_clip() {
        let mut bell = BellEngine::new(Vec::new(), Duration::from_secs(60));
        assert!(!bell.is_playing());
        bell.play(Path::new("bird.mp3")).unwrap();
        assert!(bell.is_playing());
        assert_eq!(bell.into_inner(), b"\x07");
    }

    #[test]
    fn zero_length_clip_is_never_busy() {
        let mut bell = BellEngine::new(Vec::new(), Duration::ZERO);
        bell.play(Path::new("bird.mp3")).unwrap();
        assert!(!bell.is_playing());
    }

    #[test]
    fn write_failure_is_playback_failure() {
        let mut bell = BellEngine::new(ClosedPipe, Duration::from_secs(1));
        let err = bell.play(Path::new("bird.mp3")).unwrap_err();
        assert!(matches!(err, AlertError::PlaybackFailure(msg) if msg.contains("bird.mp3")));
        assert!(!bell.is_playing());
    }
}

#[cfg(test)]
mod display_tests {
    use am_core::Coordinate;
    use am_sim::DisplaySink;

    use crate::LogDisplay;

    #[test]
    fn remembers_last_position() {
        let mut d = LogDisplay::new();
        assert_eq!(d.last_position(), None);
        d.report_position(Coordinate::new(35.667, 138.569));
        d.report_position(Coordinate::new(35.6682, 138.5699));
        assert_eq!(d.last_position(), Some(Coordinate::new(35.6682, 138.5699)));
    }
}
