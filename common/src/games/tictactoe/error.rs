use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid board: {0}")]
    InvalidBoard(String),

    #[error("No valid moves available")]
    NoMovesAvailable,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundError {
    #[error("Round is already over")]
    RoundOver,

    #[error("Not your turn")]
    NotYourTurn,

    #[error("Cell {0} is already marked")]
    CellOccupied(usize),

    #[error("Cell {0} is outside the board")]
    OutOfRange(usize),
}
