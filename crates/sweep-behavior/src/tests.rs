//! Unit tests for sweep-behavior.

use std::collections::VecDeque;

use sweep_core::{Cell, RandomSource, SimRng, SweepConfig};
use sweep_layout::{FloorPlan, Layout};

use crate::{OccupantMove, greedy_step, nearest_exit, occupant_step, walkable_neighbors};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn default_plan() -> FloorPlan {
    FloorPlan::build(&SweepConfig::default())
}

fn layout(plan: &FloorPlan) -> &Layout {
    plan.layout()
}

/// Replays fixed draws; panics if the policy consumes more than scripted.
struct Scripted {
    units:   VecDeque<f64>,
    indices: VecDeque<usize>,
}

impl Scripted {
    fn new(units: &[f64], indices: &[usize]) -> Self {
        Self {
            units:   units.iter().copied().collect(),
            indices: indices.iter().copied().collect(),
        }
    }
}

impl RandomSource for Scripted {
    fn next_unit(&mut self) -> f64 {
        self.units.pop_front().expect("unexpected unit draw")
    }

    fn next_index(&mut self, len: usize) -> usize {
        let i = self.indices.pop_front().expect("unexpected index draw");
        assert!(i < len);
        i
    }
}

// ── greedy_step ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod greedy {
    use super::*;

    #[test]
    fn wall_row_move_falls_back_to_column() {
        let plan = default_plan();
        // (6,1) is a wall, so the column step along the corridor is taken.
        let next = greedy_step(layout(&plan), Cell::new(7, 1), Cell::new(6, 9));
        assert_eq!(next, Cell::new(7, 2));
    }

    #[test]
    fn row_first_when_walkable() {
        let plan = default_plan();
        let next = greedy_step(layout(&plan), Cell::new(7, 9), Cell::new(5, 10));
        assert_eq!(next, Cell::new(6, 9));
    }

    #[test]
    fn column_when_rows_match() {
        let plan = default_plan();
        let next = greedy_step(layout(&plan), Cell::new(7, 30), Cell::new(7, 20));
        assert_eq!(next, Cell::new(7, 29));
    }

    #[test]
    fn at_target_stays() {
        let plan = default_plan();
        let here = Cell::new(6, 9);
        assert_eq!(greedy_step(layout(&plan), here, here), here);
    }

    #[test]
    fn blocked_both_ways_stays() {
        let plan = default_plan();
        // Inside the room at its top-left corner, target up-left through walls.
        let here = Cell::new(4, 7);
        assert_eq!(greedy_step(layout(&plan), here, Cell::new(0, 0)), here);
    }

    #[test]
    fn walks_corridor_to_first_door() {
        let plan = default_plan();
        let target = Cell::new(6, 9);
        let mut pos = Cell::new(7, 1);
        let mut steps = 0;
        while pos != target {
            let next = greedy_step(layout(&plan), pos, target);
            assert!(next.manhattan(target) < pos.manhattan(target));
            pos = next;
            steps += 1;
        }
        assert_eq!(steps, 9);
    }
}

// ── neighbours and exits ──────────────────────────────────────────────────────

#[cfg(test)]
mod neighbours {
    use super::*;

    #[test]
    fn order_is_up_down_left_right() {
        let plan = default_plan();
        let n = walkable_neighbors(layout(&plan), Cell::new(7, 9));
        assert_eq!(n, [Cell::new(6, 9), Cell::new(8, 9), Cell::new(7, 8), Cell::new(7, 10)]);
    }

    #[test]
    fn walls_and_borders_excluded() {
        let plan = default_plan();
        // Corridor cell at the left border, walls above and below.
        let n = walkable_neighbors(layout(&plan), Cell::new(7, 0));
        assert_eq!(n, [Cell::new(7, 1)]);
    }

    #[test]
    fn nearest_exit_ties_to_first() {
        let exits = [Cell::new(7, 1), Cell::new(7, 43)];
        assert_eq!(nearest_exit(Cell::new(5, 9), exits), exits[0]);
        assert_eq!(nearest_exit(Cell::new(5, 33), exits), exits[1]);
        assert_eq!(nearest_exit(Cell::new(7, 22), exits), exits[0]);
    }
}

// ── occupant_step ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod occupant {
    use super::*;

    const EXITS: [Cell; 2] = [Cell::new(7, 1), Cell::new(7, 43)];

    #[test]
    fn greedy_draw_takes_best_gain() {
        let plan = default_plan();
        let mut rng = Scripted::new(&[0.1], &[]);
        let mv = occupant_step(layout(&plan), Cell::new(5, 9), EXITS, 0.25, &mut rng);
        // Up (4,9) loses, down (6,9) gains, left (5,8) gains: first maximum wins.
        assert_eq!(mv, OccupantMove::Greedy(Cell::new(6, 9)));
    }

    #[test]
    fn hesitation_draw_picks_indexed_candidate() {
        let plan = default_plan();
        let mut rng = Scripted::new(&[0.9], &[0]);
        let mv = occupant_step(layout(&plan), Cell::new(5, 9), EXITS, 0.25, &mut rng);
        assert_eq!(mv, OccupantMove::Random(Cell::new(4, 9)));
    }

    #[test]
    fn threshold_boundary_is_hesitation() {
        let plan = default_plan();
        let mut rng = Scripted::new(&[0.75], &[3]);
        let mv = occupant_step(layout(&plan), Cell::new(5, 9), EXITS, 0.25, &mut rng);
        assert_eq!(mv, OccupantMove::Random(Cell::new(5, 10)));
    }

    #[test]
    fn stuck_consumes_no_draws() {
        let cfg = SweepConfig {
            height: 5, width: 5, corridor_row: 2, door_cols: vec![2],
            room_depth: 1, room_width: 1, exit_cols: [0, 4], occupant_count: 0,
            ..SweepConfig::default()
        };
        let plan = FloorPlan::build(&cfg);
        // (0,0) is walled in: (1,0) and (0,1) are walls, the rest is off-grid.
        let mut rng = Scripted::new(&[], &[]);
        let mv = occupant_step(plan.layout(), Cell::new(0, 0), plan.exits(), 0.25, &mut rng);
        assert_eq!(mv, OccupantMove::Stuck);
        assert_eq!(mv.destination(Cell::new(0, 0)), Cell::new(0, 0));
    }

    #[test]
    fn zero_hesitation_always_greedy() {
        let plan = default_plan();
        let mut rng = SimRng::new(3);
        for _ in 0..200 {
            let mv = occupant_step(layout(&plan), Cell::new(7, 20), EXITS, 0.0, &mut rng);
            assert_eq!(mv, OccupantMove::Greedy(Cell::new(7, 19)));
        }
    }

    #[test]
    fn greedy_fraction_converges_to_three_quarters() {
        let plan = default_plan();
        let mut rng = SimRng::new(2024);
        let pos = Cell::new(7, 10);
        let exit = nearest_exit(pos, EXITS);
        let trials = 20_000;

        let (mut greedy, mut improved) = (0u32, 0u32);
        for _ in 0..trials {
            let mv = occupant_step(layout(&plan), pos, EXITS, 0.25, &mut rng);
            if matches!(mv, OccupantMove::Greedy(_)) {
                greedy += 1;
            }
            if mv.destination(pos).manhattan(exit) < pos.manhattan(exit) {
                improved += 1;
            }
        }

        let greedy_frac = greedy as f64 / trials as f64;
        assert!((greedy_frac - 0.75).abs() < 0.02, "greedy fraction {greedy_frac}");

        // One of four candidates improves, so random picks add 0.25 * 0.25.
        let improved_frac = improved as f64 / trials as f64;
        assert!((improved_frac - 0.8125).abs() < 0.02, "improved fraction {improved_frac}");
    }
}
