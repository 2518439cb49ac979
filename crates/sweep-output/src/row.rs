//! Plain data row types written by output backends.

use sweep_core::OccupantId;
use sweep_sim::{Event, EventDetail};

use crate::OutputResult;

/// Which agent a track row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentRef {
    Responder,
    Occupant(OccupantId),
}

impl AgentRef {
    /// Stable text label: `responder` or `occupant_<i>`.
    pub fn label(self) -> String {
        match self {
            AgentRef::Responder => "responder".to_owned(),
            AgentRef::Occupant(id) => format!("occupant_{}", id.0),
        }
    }
}

/// One agent position after one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackRow {
    pub agent: AgentRef,
    pub tick:  u64,
    pub y:     i32,
    pub x:     i32,
}

/// One event, with its detail encoded as a JSON object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRow {
    pub tick:   u64,
    pub kind:   &'static str,
    pub detail: String,
}

impl EventRow {
    /// Clearing events encode as `{"door_idx":i,"room_cell":[y,x]}`.
    pub fn from_event(event: &Event) -> OutputResult<Self> {
        let detail = match event.detail {
            EventDetail::Clear { door, room_cell } => serde_json::to_string(&serde_json::json!({
                "door_idx":  door.0,
                "room_cell": [room_cell.row, room_cell.col],
            }))?,
        };
        Ok(Self {
            tick: event.tick.0,
            kind: event.kind().label(),
            detail,
        })
    }
}

/// Final state of one door, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoorRow {
    pub door_idx: u32,
    pub door_y:   i32,
    pub door_x:   i32,
    pub cleared:  bool,
}

/// Number of cleared doors after one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearedRow {
    pub tick:    u64,
    pub cleared: u32,
}
