use thiserror::Error;

use crate::CellCount;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Too many mines, requested {requested} but only {capacity} cells fit")]
    TooManyMines {
        requested: CellCount,
        capacity: CellCount,
    },
    #[error("Board size must be at least 1")]
    InvalidSize,
    #[error("Mine ratio must be a number between 0 and 1")]
    InvalidMineRatio,
    #[error("Mines were already placed on this grid")]
    MinesAlreadyPlaced,
    #[error("Mine layout has {actual} mines but {expected} were requested")]
    LayoutMismatch {
        expected: CellCount,
        actual: CellCount,
    },
}

pub type Result<T> = core::result::Result<T, GameError>;
