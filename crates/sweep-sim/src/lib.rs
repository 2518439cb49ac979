//! `sweep-sim` — the step engine for the one-floor sweep simulator.
//!
//! # One step
//!
//! ```text
//! step():
//!   ① tick += 1
//!   ② Patrol:    responder takes one greedy step toward its patrol stop;
//!                dwell / clear / advance bookkeeping (may emit an Event).
//!   ③ Occupants: occupant 0, 1, 2, … each take one step toward the
//!                nearer exit, drawing from the shared random stream in
//!                that order.
//!   ④ Log:       every agent's new position is appended to its trajectory.
//! ```
//!
//! The engine is single-threaded and owns all mutable state.  Drivers read
//! it between steps through accessors or a borrowed [`Snapshot`]; they never
//! mutate it.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use sweep_core::SweepConfig;
//! use sweep_sim::{Engine, NoopObserver};
//!
//! let mut engine = Engine::new(SweepConfig::default())?;
//! engine.run(&mut NoopObserver);
//! println!("cleared {}/{}", engine.cleared_count(), engine.cleared().len());
//! ```

pub mod builder;
pub mod engine;
pub mod error;
pub mod event;
pub mod observer;
pub mod snapshot;


pub use builder::EngineBuilder;
pub use engine::Engine;
pub use error::{SimError, SimResult};
pub use event::{Event, EventDetail, EventKind};
pub use observer::{NoopObserver, SimObserver};
pub use snapshot::Snapshot;
