//! `SweepOutputObserver<W>` bridges `SimObserver` to an `OutputWriter`.

use sweep_core::OccupantId;
use sweep_sim::{Event, SimObserver, Snapshot};

use crate::row::{AgentRef, ClearedRow, DoorRow, EventRow, TrackRow};
use crate::series::VisitHeatmap;
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that streams trajectories, events and the cleared
/// count to any [`OutputWriter`] backend, then writes door states and the
/// visit heatmap when the run ends.
///
/// Errors from the writer are stored internally because `SimObserver`
/// methods have no return value.  After `engine.run()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct SweepOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SweepOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the first write error (if any).
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
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

fn track_rows(snapshot: &Snapshot<'_>) -> Vec<TrackRow> {
    let tick = snapshot.tick.0;
    let responder = TrackRow {
        agent: AgentRef::Responder,
        tick,
        y: snapshot.responder.row,
        x: snapshot.responder.col,
    };
    let occupants = snapshot.occupants.iter().enumerate().map(|(i, cell)| TrackRow {
        agent: AgentRef::Occupant(OccupantId(i as u32)),
        tick,
        y: cell.row,
        x: cell.col,
    });
    std::iter::once(responder).chain(occupants).collect()
}

fn door_rows(snapshot: &Snapshot<'_>) -> Vec<DoorRow> {
    snapshot
        .plan
        .doors()
        .iter()
        .enumerate()
        .map(|(i, door)| DoorRow {
            door_idx: i as u32,
            door_y:   door.row,
            door_x:   door.col,
            cleared:  snapshot.cleared.get(i).copied().unwrap_or(false),
        })
        .collect()
}

impl<W: OutputWriter> SimObserver for SweepOutputObserver<W> {
    fn on_event(&mut self, event: &Event) {
        let result = EventRow::from_event(event).and_then(|row| self.writer.write_event(&row));
        self.store_err(result);
    }

    fn on_step(&mut self, snapshot: &Snapshot<'_>) {
        let result = self.writer.write_tracks(&track_rows(snapshot));
        self.store_err(result);

        let row = ClearedRow {
            tick:    snapshot.tick.0,
            cleared: snapshot.cleared_count() as u32,
        };
        let result = self.writer.write_cleared(&row);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, snapshot: &Snapshot<'_>) {
        let result = self.writer.write_doors(&door_rows(snapshot));
        self.store_err(result);

        let result = self.writer.write_heatmap(&VisitHeatmap::from_snapshot(snapshot));
        self.store_err(result);

        let result = self.writer.finish();
        self.store_err(result);
    }
}
