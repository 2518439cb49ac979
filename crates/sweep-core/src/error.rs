//! Configuration error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// Structural problems with a [`SweepConfig`][crate::SweepConfig].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error("grid must be at least 1x1 (got {height}x{width})")]
    EmptyGrid { height: usize, width: usize },

    #[error("{what} column {col} lies outside [0, {width})")]
    ColumnOutOfBounds {
        what:  &'static str,
        col:   usize,
        width: usize,
    },

    #[error("{what} row {row} lies outside [0, {height})")]
    RowOutOfBounds {
        what:   &'static str,
        row:    i64,
        height: usize,
    },

    #[error("{0} must be positive")]
    NonPositive(&'static str),

    #[error("at least one door column is required")]
    NoDoors,

    #[error("{requested} occupants requested; at most {max} starting cells are defined")]
    TooManyOccupants { requested: usize, max: usize },

    #[error("hesitation probability {0} is outside [0, 1]")]
    InvalidProbability(f64),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for configuration checks.
pub type CoreResult<T> = Result<T, CoreError>;
