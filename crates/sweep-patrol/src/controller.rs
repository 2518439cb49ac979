//! The patrol transition function.

use sweep_behavior::greedy_step;
use sweep_core::{Cell, DoorId, Tick};
use sweep_layout::FloorPlan;
use tracing::debug;

use crate::Responder;

/// A door marked cleared during a transition.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ClearEvent {
    pub tick:      Tick,
    /// Declaration-order door index.
    pub door:      DoorId,
    pub door_cell: Cell,
    /// Room-side cell behind the door.
    pub room_cell: Cell,
}

/// What happened during one transition.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PatrolOutcome {
    /// The patrol stop that was targeted this tick.
    pub target:   Cell,
    /// `true` if the responder ended the tick on `target`.
    pub arrived:  bool,
    pub cleared:  Option<ClearEvent>,
    /// `true` if the dwell threshold was reached and the next stop selected.
    pub advanced: bool,
}

/// Drives a [`Responder`] around the patrol of a [`FloorPlan`].
#[derive(Copy, Clone, Debug)]
pub struct PatrolController {
    dwell_threshold: u32,
}

impl PatrolController {
    pub fn new(dwell_threshold: u32) -> Self {
        Self { dwell_threshold }
    }

    /// The patrol cell the responder is currently heading for, or `None`
    /// if the plan has no doors.
    pub fn target(&self, responder: &Responder, plan: &FloorPlan) -> Option<Cell> {
        let patrol = plan.patrol();
        (!patrol.is_empty()).then(|| patrol[responder.stop % patrol.len()])
    }

    /// Run one transition at `tick`: move, then dwell/clear/advance
    /// bookkeeping.  Returns `None` only for a plan without doors, in which
    /// case the responder is left untouched.
    pub fn advance(
        &self,
        responder: &mut Responder,
        plan:      &FloorPlan,
        tick:      Tick,
    ) -> Option<PatrolOutcome> {
        let target = self.target(responder, plan)?;
        responder.position = greedy_step(plan.layout(), responder.position, target);

        let mut outcome = PatrolOutcome {
            target,
            arrived:  false,
            cleared:  None,
            advanced: false,
        };
        if responder.position != target {
            return Some(outcome);
        }

        outcome.arrived = true;
        responder.dwell += 1;

        if responder.dwell == 1 {
            let door = plan.door_for_patrol_stop(responder.stop);
            if responder.mark_cleared(door) {
                let room_cell = plan.room_cell(door).unwrap_or(target);
                debug!(%tick, %door, cell = %target, "door cleared");
                outcome.cleared = Some(ClearEvent {
                    tick,
                    door,
                    door_cell: target,
                    room_cell,
                });
            }
        }

        if responder.dwell >= self.dwell_threshold {
            responder.stop += 1;
            responder.dwell = 0;
            outcome.advanced = true;
            debug!(%tick, stop = responder.stop, "patrol advanced");
        }

        Some(outcome)
    }
}
