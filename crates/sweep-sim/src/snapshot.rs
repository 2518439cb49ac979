//! Borrowed read-only view of engine state.

use sweep_core::{Cell, Tick};
use sweep_layout::{FloorPlan, Layout};

use crate::Event;

/// Everything an external collaborator (renderer, exporter) may read,
/// borrowed from a settled engine between steps.
#[derive(Copy, Clone, Debug)]
pub struct Snapshot<'a> {
    pub tick:            Tick,
    pub plan:            &'a FloorPlan,
    pub responder:       Cell,
    pub occupants:       &'a [Cell],
    /// Cleared flags in declaration (`doors`) order.
    pub cleared:         &'a [bool],
    pub events:          &'a [Event],
    pub responder_track: &'a [Cell],
    pub occupant_tracks: &'a [Vec<Cell>],
}

impl<'a> Snapshot<'a> {
    pub fn layout(&self) -> &'a Layout {
        self.plan.layout()
    }

    pub fn cleared_count(&self) -> usize {
        self.cleared.iter().filter(|&&c| c).count()
    }
}
