use common::games::tictactoe::{Board, EngineError, next_move_for_board};

/// Source of the computer's move for a validated board.
pub trait MoveProvider: Send + Sync {
    fn next_move(&self, board: &Board) -> Result<usize, EngineError>;
}

pub struct MinimaxMoveProvider;

impl MoveProvider for MinimaxMoveProvider {
    fn next_move(&self, board: &Board) -> Result<usize, EngineError> {
        next_move_for_board(board)
    }
}
