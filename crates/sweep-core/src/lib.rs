//! `sweep-core` — foundational types for the one-floor sweep simulator.
//!
//! This crate is a dependency of every other `sweep-*` crate.  It has no
//! `sweep-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                               |
//! |------------|--------------------------------------------------------|
//! | [`cell`]   | `Cell` grid coordinate, Manhattan distance             |
//! | [`ids`]    | `DoorId`, `OccupantId`                                 |
//! | [`time`]   | `Tick`                                                 |
//! | [`config`] | `SweepConfig` and its validation                       |
//! | [`rng`]    | `RandomSource` trait, `SimRng` (seeded stream)         |
//! | [`error`]  | `CoreError`, `CoreResult`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod cell;
pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::Cell;
pub use config::{MAX_OCCUPANTS, SweepConfig};
pub use error::{CoreError, CoreResult};
pub use ids::{DoorId, OccupantId};
pub use rng::{RandomSource, SimRng};
pub use time::Tick;
