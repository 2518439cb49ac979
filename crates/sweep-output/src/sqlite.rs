//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the output directory with the
//! tables `tracks`, `events`, `cleared`, `doors` and `heatmap`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{ClearedRow, DoorRow, EventRow, OutputResult, TrackRow, VisitHeatmap};

/// Writes simulation output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS tracks (
                 agent TEXT    NOT NULL,
                 tick  INTEGER NOT NULL,
                 y     INTEGER NOT NULL,
                 x     INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS events (
                 tick   INTEGER NOT NULL,
                 type   TEXT    NOT NULL,
                 detail TEXT    NOT NULL
             );
             CREATE TABLE IF NOT EXISTS cleared (
                 tick    INTEGER PRIMARY KEY,
                 cleared INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS doors (
                 door_idx INTEGER PRIMARY KEY,
                 door_y   INTEGER NOT NULL,
                 door_x   INTEGER NOT NULL,
                 cleared  INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS heatmap (
                 y      INTEGER NOT NULL,
                 x      INTEGER NOT NULL,
                 weight INTEGER NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_tracks(&mut self, rows: &[TrackRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO tracks (agent, tick, y, x) VALUES (?1, ?2, ?3, ?4)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![row.agent.label(), row.tick, row.y, row.x])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_event(&mut self, row: &EventRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO events (tick, type, detail) VALUES (?1, ?2, ?3)",
            rusqlite::params![row.tick, row.kind, row.detail],
        )?;
        Ok(())
    }

    fn write_cleared(&mut self, row: &ClearedRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO cleared (tick, cleared) VALUES (?1, ?2)",
            rusqlite::params![row.tick, row.cleared],
        )?;
        Ok(())
    }

    fn write_doors(&mut self, rows: &[DoorRow]) -> OutputResult<()> {
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT OR REPLACE INTO doors (door_idx, door_y, door_x, cleared) \
                 VALUES (?1, ?2, ?3, ?4)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.door_idx,
                    row.door_y,
                    row.door_x,
                    row.cleared as i64,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_heatmap(&mut self, heatmap: &VisitHeatmap) -> OutputResult<()> {
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt =
                tx.prepare_cached("INSERT INTO heatmap (y, x, weight) VALUES (?1, ?2, ?3)")?;
            for (cell, weight) in heatmap.visited() {
                stmt.execute(rusqlite::params![cell.row, cell.col, weight])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
