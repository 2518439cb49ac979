//! Simulation configuration.

use crate::{CoreError, CoreResult};

/// Number of predefined occupant starting cells.
pub const MAX_OCCUPANTS: usize = 3;

/// Immutable simulation parameters.
///
/// Typically built from `SweepConfig::default()` plus command-line
/// overrides, or loaded from JSON by the driver (feature `serde`).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SweepConfig {
    /// Grid height (rows).
    pub height: usize,

    /// Grid width (columns).
    pub width: usize,

    /// Row index of the central corridor.
    pub corridor_row: usize,

    /// Door column of each room pair, in declaration order.  Each column
    /// gets one room above and one below the corridor.
    pub door_cols: Vec<usize>,

    /// How many rows each room extends away from the corridor.
    pub room_depth: usize,

    /// Horizontal room extent.  The band actually drawn is
    /// `2 * (room_width / 2) + 1` cells wide, centred on the door column.
    pub room_width: usize,

    /// The two exit columns on the corridor row.  The responder enters at
    /// `exit_cols[0]`.
    pub exit_cols: [usize; 2],

    /// Step budget used by `Engine::run`.
    pub max_steps: u64,

    /// Consecutive ticks the responder stays on a door before moving on.
    pub dwell_threshold: u32,

    /// Number of occupants (at most [`MAX_OCCUPANTS`]).
    pub occupant_count: usize,

    /// Seed of the shared random stream.
    pub seed: u64,

    /// Probability that an occupant takes a uniformly random walkable step
    /// instead of the best step toward its nearer exit.
    pub hesitation: f64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            height:          15,
            width:           45,
            corridor_row:    7,
            door_cols:       vec![9, 21, 33],
            room_depth:      3,
            room_width:      5,
            exit_cols:       [1, 43],
            max_steps:       300,
            dwell_threshold: 8,
            occupant_count:  3,
            seed:            7,
            hesitation:      0.25,
        }
    }
}

impl SweepConfig {
    /// Half of the drawn room band (floor division).
    #[inline]
    pub fn half_width(&self) -> usize {
        self.room_width / 2
    }

    /// Check every structural constraint.  A config that passes can be
    /// turned into a floor plan without any further failure.
    pub fn validate(&self) -> CoreResult<()> {
        if self.height == 0 || self.width == 0 {
            return Err(CoreError::EmptyGrid { height: self.height, width: self.width });
        }
        if self.corridor_row >= self.height {
            return Err(CoreError::RowOutOfBounds {
                what:   "corridor",
                row:    self.corridor_row as i64,
                height: self.height,
            });
        }
        if self.door_cols.is_empty() {
            return Err(CoreError::NoDoors);
        }
        for &col in &self.door_cols {
            if col >= self.width {
                return Err(CoreError::ColumnOutOfBounds { what: "door", col, width: self.width });
            }
        }
        for &col in &self.exit_cols {
            if col >= self.width {
                return Err(CoreError::ColumnOutOfBounds { what: "exit", col, width: self.width });
            }
        }
        // Door cells sit directly above and below the corridor.
        for row in [self.corridor_row as i64 - 1, self.corridor_row as i64 + 1] {
            if row < 0 || row >= self.height as i64 {
                return Err(CoreError::RowOutOfBounds { what: "door", row, height: self.height });
            }
        }
        if self.room_depth == 0 {
            return Err(CoreError::NonPositive("room_depth"));
        }
        if self.room_width == 0 {
            return Err(CoreError::NonPositive("room_width"));
        }
        if self.dwell_threshold == 0 {
            return Err(CoreError::NonPositive("dwell_threshold"));
        }
        if self.occupant_count > MAX_OCCUPANTS {
            return Err(CoreError::TooManyOccupants {
                requested: self.occupant_count,
                max:       MAX_OCCUPANTS,
            });
        }
        if self.occupant_count == MAX_OCCUPANTS && self.door_cols.len() < 2 {
            return Err(CoreError::Config(format!(
                "occupant {} starts below the second door column, but only {} door column is configured",
                MAX_OCCUPANTS - 1,
                self.door_cols.len(),
            )));
        }
        if !(0.0..=1.0).contains(&self.hesitation) {
            return Err(CoreError::InvalidProbability(self.hesitation));
        }
        Ok(())
    }
}
