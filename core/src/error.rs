use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board must have at least one row and one column")]
    InvalidDimensions,
    #[error("Mine count must be below the number of cells")]
    InvalidMineCount,
    #[error("Mine density must be a finite, non-negative fraction")]
    InvalidDensity,
    #[error("Coordinates outside the board")]
    OutOfBounds,
    #[error("Game already ended, no new moves are accepted")]
    SessionOver,
    #[error("Cell cannot make this transition")]
    InvalidTransition,
    #[error("Unknown grid preset")]
    UnknownPreset,
}

pub type Result<T> = core::result::Result<T, GameError>;
