//! Movement policy functions.

use sweep_core::{Cell, RandomSource};
use sweep_layout::Layout;

/// 4-neighbour offsets `(dr, dc)` in enumeration order: up, down, left,
/// right.  This order decides argmax ties and which candidate a random
/// index selects, so it is part of the determinism contract.
pub const NEIGHBOR_OFFSETS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// One step from `pos` toward `target`.
///
/// Candidates, in priority order:
///
/// 1. one row toward `target` (if the rows differ),
/// 2. one column toward `target` (if the columns differ).
///
/// The first candidate that is in bounds and walkable wins; otherwise the
/// agent stays.  Distance to `target` never increases.
pub fn greedy_step(layout: &Layout, pos: Cell, target: Cell) -> Cell {
    let row_move = (target.row != pos.row).then(|| pos.offset((target.row - pos.row).signum(), 0));
    let col_move = (target.col != pos.col).then(|| pos.offset(0, (target.col - pos.col).signum()));

    [row_move, col_move]
        .into_iter()
        .flatten()
        .find(|&c| layout.is_walkable(c))
        .unwrap_or(pos)
}

/// In-bounds walkable 4-neighbours of `pos`, in [`NEIGHBOR_OFFSETS`] order.
pub fn walkable_neighbors(layout: &Layout, pos: Cell) -> Vec<Cell> {
    NEIGHBOR_OFFSETS
        .iter()
        .map(|&(dr, dc)| pos.offset(dr, dc))
        .filter(|&c| layout.is_walkable(c))
        .collect()
}

/// The Manhattan-nearer of the two exits.  Ties go to `exits[0]`.
#[inline]
pub fn nearest_exit(pos: Cell, exits: [Cell; 2]) -> Cell {
    if pos.manhattan(exits[0]) <= pos.manhattan(exits[1]) {
        exits[0]
    } else {
        exits[1]
    }
}

/// How an occupant chose its step.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OccupantMove {
    /// No walkable neighbour; the occupant stayed and consumed no draws.
    Stuck,
    /// Took the candidate with the largest distance gain.
    Greedy(Cell),
    /// Hesitated and took a uniformly random candidate.
    Random(Cell),
}

impl OccupantMove {
    /// Position after the move, given the position before it.
    #[inline]
    pub fn destination(self, from: Cell) -> Cell {
        match self {
            OccupantMove::Stuck => from,
            OccupantMove::Greedy(c) | OccupantMove::Random(c) => c,
        }
    }
}

/// One occupant step toward the nearer exit.
///
/// The nearer exit is recomputed from `pos` on every call.  Exactly one
/// `next_unit` draw is consumed when at least one candidate exists; if it
/// falls below `1 - hesitation` the max-gain candidate is taken (first in
/// enumeration order on ties), otherwise one `next_index` draw picks any
/// candidate, the best one included.
pub fn occupant_step<R: RandomSource>(
    layout:     &Layout,
    pos:        Cell,
    exits:      [Cell; 2],
    hesitation: f64,
    rng:        &mut R,
) -> OccupantMove {
    let candidates = walkable_neighbors(layout, pos);
    if candidates.is_empty() {
        return OccupantMove::Stuck;
    }

    let exit = nearest_exit(pos, exits);
    let d0 = pos.manhattan(exit) as i64;
    let gain = |c: Cell| d0 - c.manhattan(exit) as i64;

    if rng.next_unit() < 1.0 - hesitation {
        // `max_by_key` keeps the LAST maximum; scan manually to keep the first.
        let mut best = candidates[0];
        let mut best_gain = gain(best);
        for &c in &candidates[1..] {
            let g = gain(c);
            if g > best_gain {
                best = c;
                best_gain = g;
            }
        }
        OccupantMove::Greedy(best)
    } else {
        OccupantMove::Random(candidates[rng.next_index(candidates.len())])
    }
}
