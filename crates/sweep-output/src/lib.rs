//! `sweep-output` — export and display collaborators for the sweep engine.
//!
//! Nothing here mutates the engine: every function reads a
//! [`Snapshot`][sweep_sim::Snapshot] or an event.
//!
//! | Feature   | Backend | Files created                                               |
//! |-----------|---------|-------------------------------------------------------------|
//! | *(none)*  | CSV     | `responder_track.csv`, `occupant_<i>_track.csv`, `events.csv`, `cleared_over_time.csv`, `doors.csv`, `visit_heatmap.csv` |
//! | `sqlite`  | SQLite  | `output.db`                                                 |
//!
//! Both backends implement [`OutputWriter`] and are driven by
//! [`SweepOutputObserver`], which implements `sweep_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use sweep_output::{CsvWriter, SweepOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./sweep_output"), config.occupant_count)?;
//! let mut obs = SweepOutputObserver::new(writer);
//! engine.run(&mut obs);
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod render;
pub mod row;
pub mod series;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SweepOutputObserver;
pub use render::{render_frame, status_line};
pub use row::{AgentRef, ClearedRow, DoorRow, EventRow, TrackRow};
pub use series::VisitHeatmap;
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
