use super::error::EngineError;
use super::minimax::minimax;
use super::types::{Board, Mark};

/// Picks the AI's move for `cells`. The AI plays `X` and is assumed to be
/// on move. The caller's cells are copied, never modified.
pub fn get_next_move(cells: &[Mark]) -> Result<usize, EngineError> {
    let board = Board::try_from(cells).map_err(|len| {
        EngineError::InvalidBoard(format!("board must have 9 cells, got {}", len))
    })?;
    next_move_for_board(&board)
}

pub fn next_move_for_board(board: &Board) -> Result<usize, EngineError> {
    let mut scratch = *board;
    let result = minimax(&mut scratch, 0, true);
    result.index.ok_or(EngineError::NoMovesAvailable)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Mark::{Empty as E, O, X};

    #[test]
    fn test_takes_immediate_win() {
        assert_eq!(get_next_move(&[X, X, E, O, O, E, E, E, E]), Ok(2));
    }

    #[test]
    fn test_blocks_opponent() {
        assert_eq!(get_next_move(&[X, E, E, O, O, E, X, E, E]), Ok(5));
    }

    #[test]
    fn test_empty_board_picks_first_corner() {
        assert_eq!(get_next_move(&[E; 9]), Ok(0));
    }

    #[test]
    fn test_takes_last_cell() {
        assert_eq!(get_next_move(&[X, O, X, X, O, O, O, X, E]), Ok(8));
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert!(matches!(
            get_next_move(&[X, O, E]),
            Err(EngineError::InvalidBoard(_))
        ));
        assert!(matches!(
            get_next_move(&[E; 10]),
            Err(EngineError::InvalidBoard(_))
        ));
    }

    #[test]
    fn test_full_board_has_no_moves() {
        assert_eq!(
            get_next_move(&[X, O, X, X, O, O, O, X, X]),
            Err(EngineError::NoMovesAvailable)
        );
    }

    #[test]
    fn test_already_won_board_has_no_moves() {
        assert_eq!(
            get_next_move(&[X, X, X, O, O, E, E, E, E]),
            Err(EngineError::NoMovesAvailable)
        );
    }

    #[test]
    fn test_caller_cells_are_untouched() {
        let cells = [X, E, O, E, E, E, E, E, E];
        let snapshot = cells;
        get_next_move(&cells).unwrap();
        assert_eq!(cells, snapshot);
    }
}
