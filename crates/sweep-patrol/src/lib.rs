//! `sweep-patrol` — the responder's patrol/clearing state machine.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                 |
//! |----------------|----------------------------------------------------------|
//! | [`state`]      | `Responder`: position, patrol index, dwell, cleared flags |
//! | [`controller`] | `PatrolController`: one transition per tick             |
//!
//! # Transition (per tick)
//!
//! ```text
//! target = patrol[stop mod len]
//! move one greedy step toward target
//! if position == target:
//!     dwell += 1
//!     dwell == 1 and door(target) not cleared → clear it, emit ClearEvent
//!     dwell == threshold                      → stop += 1, dwell = 0
//! ```
//!
//! There is no terminal state: the patrol wraps forever and the driver
//! decides how many ticks to run.
//!
//! Two index spaces meet here.  `stop` counts patrol (traversal) order;
//! cleared flags use declaration order.  The translation is
//! [`FloorPlan::door_for_patrol_stop`][sweep_layout::FloorPlan::door_for_patrol_stop].

pub mod controller;
pub mod state;


pub use controller::{ClearEvent, PatrolController, PatrolOutcome};
pub use state::Responder;
