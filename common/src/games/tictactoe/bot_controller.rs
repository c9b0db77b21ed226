use std::fmt::Display;

use rand::Rng;

use crate::log;
use super::types::Board;

/// Picks the computer's move from an engine suggestion.
///
/// The suggestion is used only when it points at an empty cell. Any failure,
/// out-of-range index or occupied cell falls back to a uniformly random empty
/// cell. Returns `None` when the board has no empty cell left.
pub fn resolve_ai_move<E, R>(board: &Board, suggestion: Result<usize, E>, rng: &mut R) -> Option<usize>
where
    E: Display,
    R: Rng,
{
    match suggestion {
        Ok(index) if board.is_cell_empty(index) => return Some(index),
        Ok(index) => log!("Invalid AI move {}, falling back to random", index),
        Err(e) => log!("AI error, using random move: {}", e),
    }

    calculate_random_move(board, rng)
}

pub fn calculate_random_move<R: Rng>(board: &Board, rng: &mut R) -> Option<usize> {
    let available = board.empty_indices();
    if available.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..available.len());
    Some(available[idx])
}
