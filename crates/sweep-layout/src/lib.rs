//! `sweep-layout` — static floor-plan generation.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`grid`]    | `CellKind`, `Layout` (row-major H×W classification)       |
//! | [`builder`] | `LayoutBuilder`, `FloorPlan` (layout + doors + patrol)    |
//!
//! A floor plan is generated once from a [`SweepConfig`][sweep_core::SweepConfig]
//! and never mutated afterwards.  Geometry that falls outside the grid is
//! clipped silently: a room whose band overhangs the border is simply
//! narrower or shallower, never an error.

pub mod builder;
pub mod grid;


pub use builder::{FloorPlan, LayoutBuilder};
pub use grid::{CellKind, Layout};
