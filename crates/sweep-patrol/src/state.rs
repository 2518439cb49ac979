//! Responder state.

use sweep_core::{Cell, DoorId};

/// The single responder agent.
///
/// `stop` grows without bound; the current target is
/// `patrol[stop % patrol.len()]`.  `cleared` is aligned with the
/// declaration-order `doors` list, not with the patrol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Responder {
    pub position: Cell,

    /// Running patrol index (not reduced modulo the patrol length).
    pub stop: usize,

    /// Consecutive ticks spent exactly on the current target.
    pub dwell: u32,

    cleared: Vec<bool>,
}

impl Responder {
    /// A responder at `start` heading for the first patrol stop, with all
    /// `door_count` doors uncleared.
    pub fn new(start: Cell, door_count: usize) -> Self {
        Self {
            position: start,
            stop:     0,
            dwell:    0,
            cleared:  vec![false; door_count],
        }
    }

    /// Cleared flags in declaration order.
    pub fn cleared(&self) -> &[bool] {
        &self.cleared
    }

    pub fn is_cleared(&self, door: DoorId) -> bool {
        self.cleared.get(door.index()).copied().unwrap_or(false)
    }

    pub fn cleared_count(&self) -> usize {
        self.cleared.iter().filter(|&&c| c).count()
    }

    pub fn all_cleared(&self) -> bool {
        self.cleared.iter().all(|&c| c)
    }

    /// Set the flag for `door`.  Returns `true` if it was previously unset.
    /// Flags are never unset again.
    pub(crate) fn mark_cleared(&mut self, door: DoorId) -> bool {
        match self.cleared.get_mut(door.index()) {
            Some(flag) if !*flag => {
                *flag = true;
                true
            }
            _ => false,
        }
    }
}
