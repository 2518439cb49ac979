//! `sweep-behavior` — movement policies.
//!
//! Both policies are pure functions of the read-only [`Layout`], the
//! agent's position, and (for occupants) the shared random stream.  They
//! never fail: a move that would leave the grid or enter a wall is replaced
//! by staying in place.
//!
//! | Function              | Agent     | Rule                                            |
//! |-----------------------|-----------|-------------------------------------------------|
//! | [`greedy_step`]       | responder | row first, then column, toward a target         |
//! | [`occupant_step`]     | occupant  | best gain toward nearer exit, or a random step  |
//! | [`nearest_exit`]      | occupant  | Manhattan-nearest of two exits, ties to first   |
//! | [`walkable_neighbors`]| both      | 4-neighbours in the fixed order up/down/left/right |
//!
//! [`Layout`]: sweep_layout::Layout

pub mod movement;

#[cfg(test)]
mod tests;

pub use movement::{
    NEIGHBOR_OFFSETS, OccupantMove, greedy_step, nearest_exit, occupant_step, walkable_neighbors,
};
