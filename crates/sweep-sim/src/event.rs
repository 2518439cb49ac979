//! Event log entries.

use std::fmt;

use sweep_core::{Cell, DoorId, Tick};

/// Discriminant of an [`Event`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Clear,
}

impl EventKind {
    /// Label used in exported logs.
    pub fn label(self) -> &'static str {
        match self {
            EventKind::Clear => "CLEAR",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Kind-specific payload.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EventDetail {
    /// A door was cleared; `door` is its declaration-order index and
    /// `room_cell` the room-side cell behind it.
    Clear { door: DoorId, room_cell: Cell },
}

/// An immutable `(tick, kind, detail)` record.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Event {
    pub tick:   Tick,
    pub detail: EventDetail,
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self.detail {
            EventDetail::Clear { .. } => EventKind::Clear,
        }
    }

    /// The door a clearing event refers to.
    pub fn door(&self) -> Option<DoorId> {
        match self.detail {
            EventDetail::Clear { door, .. } => Some(door),
        }
    }
}
