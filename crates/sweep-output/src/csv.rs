//! CSV output backend.
//!
//! Creates the following files in the configured output directory:
//! - `responder_track.csv` and `occupant_<i>_track.csv` (`t,y,x`)
//! - `events.csv` (`t,type,detail`)
//! - `cleared_over_time.csv` (`t,cleared`)
//! - `doors.csv` (`door_idx,door_y,door_x,cleared`), at finish
//! - `visit_heatmap.csv` (one line per grid row, no header), at finish

use std::fs::File;
use std::path::{Path, PathBuf};

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{AgentRef, ClearedRow, DoorRow, EventRow, OutputError, OutputResult, TrackRow, VisitHeatmap};

const TRACK_HEADER: [&str; 3] = ["t", "y", "x"];

/// Writes simulation output to a directory of CSV files.
pub struct CsvWriter {
    dir:       PathBuf,
    responder: Writer<File>,
    occupants: Vec<Writer<File>>,
    events:    Writer<File>,
    cleared:   Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create the per-step CSV files in `dir` (which must exist) and write
    /// their header rows.  One track file is opened per occupant.
    pub fn new(dir: &Path, occupant_count: usize) -> OutputResult<Self> {
        let mut responder = Writer::from_path(dir.join("responder_track.csv"))?;
        responder.write_record(TRACK_HEADER)?;

        let occupants = (0..occupant_count)
            .map(|i| -> OutputResult<Writer<File>> {
                let mut w = Writer::from_path(dir.join(format!("occupant_{i}_track.csv")))?;
                w.write_record(TRACK_HEADER)?;
                Ok(w)
            })
            .collect::<OutputResult<Vec<_>>>()?;

        let mut events = Writer::from_path(dir.join("events.csv"))?;
        events.write_record(["t", "type", "detail"])?;

        let mut cleared = Writer::from_path(dir.join("cleared_over_time.csv"))?;
        cleared.write_record(["t", "cleared"])?;

        Ok(Self {
            dir: dir.to_path_buf(),
            responder,
            occupants,
            events,
            cleared,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_tracks(&mut self, rows: &[TrackRow]) -> OutputResult<()> {
        for row in rows {
            let writer = match row.agent {
                AgentRef::Responder => &mut self.responder,
                AgentRef::Occupant(id) => self
                    .occupants
                    .get_mut(id.index())
                    .ok_or(OutputError::UnknownOccupant(id.0))?,
            };
            writer.write_record(&[row.tick.to_string(), row.y.to_string(), row.x.to_string()])?;
        }
        Ok(())
    }

    fn write_event(&mut self, row: &EventRow) -> OutputResult<()> {
        self.events.write_record([row.tick.to_string().as_str(), row.kind, row.detail.as_str()])?;
        Ok(())
    }

    fn write_cleared(&mut self, row: &ClearedRow) -> OutputResult<()> {
        self.cleared.write_record(&[row.tick.to_string(), row.cleared.to_string()])?;
        Ok(())
    }

    fn write_doors(&mut self, rows: &[DoorRow]) -> OutputResult<()> {
        let mut doors = Writer::from_path(self.dir.join("doors.csv"))?;
        doors.write_record(["door_idx", "door_y", "door_x", "cleared"])?;
        for row in rows {
            doors.write_record(&[
                row.door_idx.to_string(),
                row.door_y.to_string(),
                row.door_x.to_string(),
                (row.cleared as u8).to_string(),
            ])?;
        }
        doors.flush()?;
        Ok(())
    }

    fn write_heatmap(&mut self, heatmap: &VisitHeatmap) -> OutputResult<()> {
        let mut out = Writer::from_path(self.dir.join("visit_heatmap.csv"))?;
        for row in heatmap.rows() {
            out.write_record(row.iter().map(u32::to_string))?;
        }
        out.flush()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.responder.flush()?;
        for w in &mut self.occupants {
            w.flush()?;
        }
        self.events.flush()?;
        self.cleared.flush()?;
        Ok(())
    }
}
