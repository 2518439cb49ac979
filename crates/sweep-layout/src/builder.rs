//! Floor-plan builder.
//!
//! # Generation order
//!
//! ```text
//! 1. every cell on the corridor row        → Corridor
//! 2. the two exit columns on that row      → Exit
//! 3. for each door column, for d in 1..=room_depth,
//!    rows corridor-d and corridor+d,
//!    columns door-half ..= door+half       → Room   (clipped to the grid)
//! ```
//!
//! Door cells are the room cells directly above and below the corridor at
//! each door column.  Two orderings are kept:
//!
//! - `doors`:  declaration order: upper doors left-to-right, then lower
//!   doors left-to-right.  Cleared flags are indexed by this order.
//! - `patrol`: traversal order: upper doors left-to-right, then lower
//!   doors right-to-left, so the sweep closes in from both ends.

use sweep_core::{Cell, DoorId, MAX_OCCUPANTS, SweepConfig};

use crate::{CellKind, Layout};

/// Stateless builder turning a [`SweepConfig`] into a [`FloorPlan`].
///
/// Never fails: anything that would land outside the grid is skipped.
/// Structural validation is [`SweepConfig::validate`]'s job.
pub struct LayoutBuilder<'a> {
    config: &'a SweepConfig,
}

impl<'a> LayoutBuilder<'a> {
    pub fn new(config: &'a SweepConfig) -> Self {
        Self { config }
    }

    pub fn build(self) -> FloorPlan {
        let cfg = self.config;
        let corridor = cfg.corridor_row as i32;
        let mut layout = Layout::walled(cfg.height, cfg.width);

        for col in 0..cfg.width as i32 {
            layout.set(Cell::new(corridor, col), CellKind::Corridor);
        }
        for &col in &cfg.exit_cols {
            layout.set(Cell::new(corridor, col as i32), CellKind::Exit);
        }

        let half = cfg.half_width() as i32;
        for &door in &cfg.door_cols {
            let door = door as i32;
            for depth in 1..=cfg.room_depth as i32 {
                for row in [corridor - depth, corridor + depth] {
                    for col in door - half..=door + half {
                        layout.set(Cell::new(row, col), CellKind::Room);
                    }
                }
            }
        }

        let upper = cfg.door_cols.iter().map(|&c| Cell::new(corridor - 1, c as i32));
        let lower = cfg.door_cols.iter().map(|&c| Cell::new(corridor + 1, c as i32));

        let doors: Vec<Cell> = upper.clone().chain(lower.clone()).collect();
        let patrol: Vec<Cell> = upper.chain(lower.rev()).collect();

        // First declaration index whose cell equals the stop.  Duplicate
        // door columns therefore share one cleared flag.
        let patrol_doors: Vec<DoorId> = patrol
            .iter()
            .map(|stop| {
                doors
                    .iter()
                    .position(|d| d == stop)
                    .and_then(|i| DoorId::try_from(i).ok())
                    .unwrap_or(DoorId::INVALID)
            })
            .collect();

        let exits = cfg.exit_cols.map(|c| Cell::new(corridor, c as i32));

        let starts = [
            cfg.door_cols.first().map(|&c| Cell::new(corridor - 2, c as i32)),
            cfg.door_cols.last().map(|&c| Cell::new(corridor - 2, c as i32)),
            cfg.door_cols.get(1).map(|&c| Cell::new(corridor + 2, c as i32)),
        ];
        let occupant_starts: Vec<Cell> = starts
            .into_iter()
            .take(cfg.occupant_count.min(MAX_OCCUPANTS))
            .flatten()
            .collect();

        FloorPlan {
            layout,
            corridor_row: corridor,
            doors,
            patrol,
            patrol_doors,
            exits,
            occupant_starts,
        }
    }
}

/// The generated floor: layout plus derived door and patrol lists.
#[derive(Clone, Debug)]
pub struct FloorPlan {
    layout:          Layout,
    corridor_row:    i32,
    doors:           Vec<Cell>,
    patrol:          Vec<Cell>,
    patrol_doors:    Vec<DoorId>,
    exits:           [Cell; 2],
    occupant_starts: Vec<Cell>,
}

impl FloorPlan {
    /// Shorthand for `LayoutBuilder::new(config).build()`.
    pub fn build(config: &SweepConfig) -> Self {
        LayoutBuilder::new(config).build()
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn corridor_row(&self) -> i32 {
        self.corridor_row
    }

    /// Door cells in declaration order.
    pub fn doors(&self) -> &[Cell] {
        &self.doors
    }

    /// Door cells in patrol (traversal) order.
    pub fn patrol(&self) -> &[Cell] {
        &self.patrol
    }

    pub fn door_count(&self) -> usize {
        self.doors.len()
    }

    /// Door cell for a declaration-order id.
    pub fn door(&self, door: DoorId) -> Option<Cell> {
        self.doors.get(door.index()).copied()
    }

    /// Declaration-order door matching patrol stop `stop`.
    ///
    /// `stop` is taken modulo the patrol length, so a running patrol index
    /// can be passed directly.
    pub fn door_for_patrol_stop(&self, stop: usize) -> DoorId {
        if self.patrol_doors.is_empty() {
            return DoorId::INVALID;
        }
        self.patrol_doors[stop % self.patrol_doors.len()]
    }

    /// The room cell one step further from the corridor than `door`.
    pub fn room_cell(&self, door: DoorId) -> Option<Cell> {
        let cell = self.door(door)?;
        let dr = if cell.row < self.corridor_row { -1 } else { 1 };
        Some(cell.offset(dr, 0))
    }

    /// The two exit cells, in configuration order.
    pub fn exits(&self) -> [Cell; 2] {
        self.exits
    }

    /// Starting cells for the configured occupants.
    pub fn occupant_starts(&self) -> &[Cell] {
        &self.occupant_starts
    }
}
