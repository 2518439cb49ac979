//! Visit heatmap derived from the recorded trajectories.

use sweep_core::Cell;
use sweep_sim::Snapshot;

/// Weight of one responder visit in the heatmap.
pub const RESPONDER_WEIGHT: u32 = 2;

/// Weight of one occupant visit in the heatmap.
pub const OCCUPANT_WEIGHT: u32 = 1;

/// Per-cell visit weights over all recorded trajectories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitHeatmap {
    height:  usize,
    width:   usize,
    weights: Vec<u32>,
}

impl VisitHeatmap {
    /// Accumulate every trajectory in `snapshot`.  Responder visits weigh
    /// [`RESPONDER_WEIGHT`], occupant visits [`OCCUPANT_WEIGHT`].
    pub fn from_snapshot(snapshot: &Snapshot<'_>) -> Self {
        let layout = snapshot.layout();
        let mut map = Self {
            height:  layout.height(),
            width:   layout.width(),
            weights: vec![0; layout.height() * layout.width()],
        };
        for &cell in snapshot.responder_track {
            map.add(cell, RESPONDER_WEIGHT);
        }
        for track in snapshot.occupant_tracks {
            for &cell in track {
                map.add(cell, OCCUPANT_WEIGHT);
            }
        }
        map
    }

    fn add(&mut self, cell: Cell, weight: u32) {
        if let Some(i) = self.offset(cell) {
            self.weights[i] += weight;
        }
    }

    fn offset(&self, cell: Cell) -> Option<usize> {
        let (row, col) = (usize::try_from(cell.row).ok()?, usize::try_from(cell.col).ok()?);
        (row < self.height && col < self.width).then_some(row * self.width + col)
    }

    /// Rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> + '_ {
        self.weights.chunks(self.width.max(1))
    }

    /// Non-zero cells in row-major order.
    pub fn visited(&self) -> impl Iterator<Item = (Cell, u32)> + '_ {
        self.weights.iter().enumerate().filter(|&(_, &w)| w > 0).map(|(i, &w)| {
            let cell = Cell::new((i / self.width) as i32, (i % self.width) as i32);
            (cell, w)
        })
    }
}
