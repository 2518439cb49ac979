use sweep_core::{Cell, CoreError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] CoreError),

    #[error("{what} start {cell} is outside the grid or not walkable")]
    UnreachableStart {
        what: &'static str,
        cell: Cell,
    },
}

pub type SimResult<T> = Result<T, SimError>;
