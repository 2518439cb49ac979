//! Tests for sweep-output.

use std::path::Path;

use sweep_core::{Cell, DoorId, OccupantId, SweepConfig, Tick};
use sweep_sim::{Engine, Event, EventDetail, NoopObserver};

use crate::{
    AgentRef, ClearedRow, CsvWriter, DoorRow, EventRow, OutputError, OutputResult, OutputWriter,
    SweepOutputObserver, TrackRow, VisitHeatmap, render_frame, status_line,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn tmp() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

fn engine(config: SweepConfig) -> Engine {
    Engine::new(config).unwrap()
}

/// Responder only, so nothing random is drawn on top of it.
fn solo_config() -> SweepConfig {
    SweepConfig { occupant_count: 0, ..SweepConfig::default() }
}

fn read_records(path: &Path) -> Vec<Vec<String>> {
    let mut rdr = csv::Reader::from_path(path).unwrap();
    rdr.records()
        .map(|r| r.unwrap().iter().map(str::to_owned).collect())
        .collect()
}

fn headers(path: &Path) -> Vec<String> {
    let mut rdr = csv::Reader::from_path(path).unwrap();
    rdr.headers().unwrap().iter().map(str::to_owned).collect()
}

fn clear_event(tick: u64, door: u32) -> Event {
    Event {
        tick:   Tick(tick),
        detail: EventDetail::Clear { door: DoorId(door), room_cell: Cell::new(5, 9) },
    }
}

// ── Rows ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod rows {
    use super::*;

    #[test]
    fn agent_labels() {
        assert_eq!(AgentRef::Responder.label(), "responder");
        assert_eq!(AgentRef::Occupant(OccupantId(2)).label(), "occupant_2");
    }

    #[test]
    fn clear_event_detail_is_json_object() {
        let row = EventRow::from_event(&clear_event(9, 0)).unwrap();
        assert_eq!(row.tick, 9);
        assert_eq!(row.kind, "CLEAR");
        assert_eq!(row.detail, r#"{"door_idx":0,"room_cell":[5,9]}"#);
    }
}

// ── Series ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod series {
    use super::*;

    #[test]
    fn heatmap_weights_responder_double() {
        let mut e = engine(solo_config());
        e.run_ticks(9, &mut NoopObserver);
        let map = VisitHeatmap::from_snapshot(&e.snapshot());

        let visited: Vec<(Cell, u32)> = map.visited().collect();
        assert_eq!(visited.len(), 9);
        assert!(visited.iter().all(|&(_, w)| w == 2));
        assert!(visited.contains(&(Cell::new(7, 2), 2)));
        assert!(visited.contains(&(Cell::new(6, 9), 2)));
        assert!(!visited.iter().any(|&(c, _)| c == Cell::new(7, 1)));
        assert_eq!(map.rows().nth(7).map(|row| row[2]), Some(2));
    }

    #[test]
    fn heatmap_counts_every_occupant_step() {
        let mut e = engine(SweepConfig::default());
        e.run_ticks(10, &mut NoopObserver);
        let map = VisitHeatmap::from_snapshot(&e.snapshot());
        let total: u32 = map.rows().flatten().sum();
        assert_eq!(total, 10 * 2 + 3 * 10);
        assert_eq!(map.rows().count(), 15);
        assert!(map.rows().all(|row| row.len() == 45));
    }
}

// ── Render ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod render {
    use super::*;

    fn lines(frame: &str) -> Vec<&str> {
        frame.lines().collect()
    }

    #[test]
    fn initial_frame_shape_and_glyphs() {
        let e = engine(SweepConfig::default());
        let frame = render_frame(&e.snapshot());
        let rows = lines(&frame);

        assert_eq!(rows.len(), 15);
        assert!(rows.iter().all(|r| r.chars().count() == 45));
        assert!(frame.ends_with('\n'));
        assert_eq!(rows[0], "#".repeat(45));

        let corridor = format!(".R{}E.", ".".repeat(41));
        assert_eq!(rows[7], corridor);

        let upper: Vec<char> = rows[6].chars().collect();
        assert_eq!(upper[9], 'D');
        assert_eq!(upper[8], ' ');
        assert_eq!(upper[6], '#');

        assert_eq!(rows[5].chars().nth(9), Some('o'));
        assert_eq!(rows[5].chars().nth(33), Some('o'));
        assert_eq!(rows[9].chars().nth(21), Some('o'));
    }

    #[test]
    fn cleared_door_drawn_lowercase() {
        let mut e = engine(solo_config());
        e.run_ticks(17, &mut NoopObserver);
        assert_eq!(e.responder_position(), Cell::new(6, 10));

        let frame = render_frame(&e.snapshot());
        let upper: Vec<char> = lines(&frame)[6].chars().collect();
        assert_eq!(upper[9], 'd');
        assert_eq!(upper[10], 'R');
        assert_eq!(upper[21], 'D');
    }

    #[test]
    fn status_line_format() {
        let mut e = engine(solo_config());
        assert_eq!(status_line(&e.snapshot()), "t=0 cleared=0/6");
        e.run_ticks(9, &mut NoopObserver);
        assert_eq!(status_line(&e.snapshot()), "t=9 cleared=1/6");
    }
}

// ── CSV ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use super::*;

    #[test]
    fn files_created_with_headers() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path(), 2).unwrap();
        w.finish().unwrap();

        for name in ["responder_track.csv", "occupant_0_track.csv", "occupant_1_track.csv"] {
            assert_eq!(headers(&dir.path().join(name)), ["t", "y", "x"], "{name}");
        }
        assert!(!dir.path().join("occupant_2_track.csv").exists());
        assert_eq!(headers(&dir.path().join("events.csv")), ["t", "type", "detail"]);
        assert_eq!(headers(&dir.path().join("cleared_over_time.csv")), ["t", "cleared"]);
        assert!(!dir.path().join("doors.csv").exists());
    }

    #[test]
    fn track_rows_routed_per_agent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path(), 1).unwrap();
        w.write_tracks(&[
            TrackRow { agent: AgentRef::Responder, tick: 1, y: 7, x: 2 },
            TrackRow { agent: AgentRef::Occupant(OccupantId(0)), tick: 1, y: 5, x: 8 },
        ])
        .unwrap();
        w.finish().unwrap();

        assert_eq!(read_records(&dir.path().join("responder_track.csv")), [["1", "7", "2"]]);
        assert_eq!(read_records(&dir.path().join("occupant_0_track.csv")), [["1", "5", "8"]]);
    }

    #[test]
    fn unknown_occupant_rejected() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path(), 1).unwrap();
        let row = TrackRow { agent: AgentRef::Occupant(OccupantId(2)), tick: 1, y: 0, x: 0 };
        assert!(matches!(w.write_tracks(&[row]), Err(OutputError::UnknownOccupant(2))));
    }

    #[test]
    fn doors_written_with_numeric_flag() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path(), 0).unwrap();
        w.write_doors(&[
            DoorRow { door_idx: 0, door_y: 6, door_x: 9, cleared: true },
            DoorRow { door_idx: 1, door_y: 6, door_x: 21, cleared: false },
        ])
        .unwrap();
        w.finish().unwrap();

        let path = dir.path().join("doors.csv");
        assert_eq!(headers(&path), ["door_idx", "door_y", "door_x", "cleared"]);
        assert_eq!(read_records(&path), [["0", "6", "9", "1"], ["1", "6", "21", "0"]]);
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path(), 0).unwrap();
        w.write_cleared(&ClearedRow { tick: 1, cleared: 0 }).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
        assert_eq!(read_records(&dir.path().join("cleared_over_time.csv")), [["1", "0"]]);
    }

    #[test]
    fn full_run_through_observer() {
        let dir = tmp();
        let config = SweepConfig { max_steps: 20, ..SweepConfig::default() };
        let mut e = engine(config);
        let mut obs = SweepOutputObserver::new(CsvWriter::new(dir.path(), 3).unwrap());
        e.run(&mut obs);
        assert!(obs.take_error().is_none());

        let responder = read_records(&dir.path().join("responder_track.csv"));
        assert_eq!(responder.len(), 20);
        assert_eq!(responder[0], ["1", "7", "2"]);
        assert_eq!(responder[8], ["9", "6", "9"]);

        for i in 0..3 {
            let track = read_records(&dir.path().join(format!("occupant_{i}_track.csv")));
            assert_eq!(track.len(), 20, "occupant {i}");
        }

        let events = read_records(&dir.path().join("events.csv"));
        assert_eq!(events, [["9", "CLEAR", r#"{"door_idx":0,"room_cell":[5,9]}"#]]);

        let cleared = read_records(&dir.path().join("cleared_over_time.csv"));
        assert_eq!(cleared.len(), 20);
        assert_eq!(cleared[7], ["8", "0"]);
        assert_eq!(cleared[8], ["9", "1"]);

        let doors = read_records(&dir.path().join("doors.csv"));
        assert_eq!(doors.len(), 6);
        assert_eq!(doors[0], ["0", "6", "9", "1"]);
        assert_eq!(doors[3], ["3", "8", "9", "0"]);

        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_path(dir.path().join("visit_heatmap.csv"))
            .unwrap();
        let grid: Vec<Vec<u32>> = rdr
            .records()
            .map(|r| r.unwrap().iter().map(|w| w.parse().unwrap()).collect())
            .collect();
        assert_eq!(grid.len(), 15);
        assert!(grid.iter().all(|row| row.len() == 45));
        assert_eq!(grid.iter().flatten().sum::<u32>(), 20 * 2 + 3 * 20);
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer {
    use super::*;

    /// Fails every cleared-count write; counts everything else.
    #[derive(Default)]
    struct FlakyWriter {
        tracks:   usize,
        events:   usize,
        finished: usize,
    }

    impl OutputWriter for FlakyWriter {
        fn write_tracks(&mut self, rows: &[TrackRow]) -> OutputResult<()> {
            self.tracks += rows.len();
            Ok(())
        }

        fn write_event(&mut self, _row: &EventRow) -> OutputResult<()> {
            self.events += 1;
            Ok(())
        }

        fn write_cleared(&mut self, row: &ClearedRow) -> OutputResult<()> {
            Err(OutputError::UnknownOccupant(row.tick as u32))
        }

        fn write_doors(&mut self, _rows: &[DoorRow]) -> OutputResult<()> {
            Ok(())
        }

        fn write_heatmap(&mut self, _heatmap: &VisitHeatmap) -> OutputResult<()> {
            Ok(())
        }

        fn finish(&mut self) -> OutputResult<()> {
            self.finished += 1;
            Ok(())
        }
    }

    #[test]
    fn keeps_first_error_and_continues() {
        let config = SweepConfig { max_steps: 12, ..SweepConfig::default() };
        let mut e = engine(config);
        let mut obs = SweepOutputObserver::new(FlakyWriter::default());
        e.run(&mut obs);

        assert!(matches!(obs.take_error(), Some(OutputError::UnknownOccupant(1))));
        assert!(obs.take_error().is_none());

        let w = obs.into_writer();
        assert_eq!(w.tracks, 12 * 4);
        assert_eq!(w.events, 1);
        assert_eq!(w.finished, 1);
    }
}

// ── SQLite ────────────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use rusqlite::Connection;

    use super::*;
    use crate::SqliteWriter;

    fn count(conn: &Connection, table: &str) -> i64 {
        conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |r| r.get(0)).unwrap()
    }

    #[test]
    fn full_run_populates_tables() {
        let dir = tmp();
        let config = SweepConfig { max_steps: 20, ..SweepConfig::default() };
        let mut e = engine(config);
        let mut obs = SweepOutputObserver::new(SqliteWriter::new(dir.path()).unwrap());
        e.run(&mut obs);
        assert!(obs.take_error().is_none());
        drop(obs);

        let conn = Connection::open(dir.path().join("output.db")).unwrap();
        assert_eq!(count(&conn, "tracks"), 20 * 4);
        assert_eq!(count(&conn, "events"), 1);
        assert_eq!(count(&conn, "cleared"), 20);
        assert_eq!(count(&conn, "doors"), 6);

        let detail: String = conn
            .query_row("SELECT detail FROM events WHERE tick = 9", [], |r| r.get(0))
            .unwrap();
        assert_eq!(detail, r#"{"door_idx":0,"room_cell":[5,9]}"#);

        let weight: i64 = conn
            .query_row("SELECT SUM(weight) FROM heatmap", [], |r| r.get(0))
            .unwrap();
        assert_eq!(weight, 20 * 2 + 3 * 20);

        let responder_first: (i64, i64) = conn
            .query_row(
                "SELECT y, x FROM tracks WHERE agent = 'responder' AND tick = 1",
                [],
                |r| Ok((r.get(0)?, r.get(1)?)),
            )
            .unwrap();
        assert_eq!(responder_first, (7, 2));
    }
}

#[cfg(all(test, feature = "sqlite"))]
mod paired_backends {
    use rusqlite::Connection;

    use super::*;
    use crate::SqliteWriter;

    #[test]
    fn csv_and_sqlite_written_from_one_run() {
        let dir = tmp();
        let config = SweepConfig { max_steps: 15, ..SweepConfig::default() };
        let mut e = engine(config);
        let mut pair = (
            SweepOutputObserver::new(CsvWriter::new(dir.path(), 3).unwrap()),
            SweepOutputObserver::new(SqliteWriter::new(dir.path()).unwrap()),
        );
        e.run(&mut pair);
        assert!(pair.0.take_error().is_none());
        assert!(pair.1.take_error().is_none());
        drop(pair);

        assert_eq!(read_records(&dir.path().join("responder_track.csv")).len(), 15);
        assert_eq!(read_records(&dir.path().join("doors.csv")).len(), 6);

        let conn = Connection::open(dir.path().join("output.db")).unwrap();
        let tracks: i64 = conn.query_row("SELECT COUNT(*) FROM tracks", [], |r| r.get(0)).unwrap();
        assert_eq!(tracks, 15 * 4);
    }
}
