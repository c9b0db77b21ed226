use super::types::{AI_MARK, Board, Mark, OPPONENT_MARK, Outcome, SearchResult};
use super::win_detector::evaluate;

const WIN_SCORE: i32 = 10;

/// Mark placed on a borrowed board for the lifetime of the guard.
/// The cell is cleared again on drop.
struct PlacedMark<'a> {
    board: &'a mut Board,
    index: usize,
}

impl<'a> PlacedMark<'a> {
    fn new(board: &'a mut Board, index: usize, mark: Mark) -> Self {
        board.set(index, mark);
        Self { board, index }
    }

    fn board(&mut self) -> &mut Board {
        &mut *self.board
    }
}

impl Drop for PlacedMark<'_> {
    fn drop(&mut self) {
        self.board.set(self.index, Mark::Empty);
    }
}

fn terminal_score(outcome: Outcome, depth: i32) -> i32 {
    match outcome {
        Outcome::Winner(mark) if mark == AI_MARK => WIN_SCORE - depth,
        Outcome::Winner(_) => depth - WIN_SCORE,
        Outcome::Draw => 0,
    }
}

/// Exhaustive minimax over every empty cell in ascending order.
///
/// The AI (`X`) is always the maximizing side. Ties keep the first move seen,
/// so the lowest index wins among equal scores. The board is mutated while
/// searching and restored before returning.
pub fn minimax(board: &mut Board, depth: i32, is_maximizing: bool) -> SearchResult {
    if let Some(outcome) = evaluate(board) {
        return SearchResult::terminal(terminal_score(outcome, depth));
    }

    let mark = if is_maximizing { AI_MARK } else { OPPONENT_MARK };
    let mut best = SearchResult {
        score: if is_maximizing { i32::MIN } else { i32::MAX },
        index: None,
    };

    for index in board.empty_indices() {
        let result = {
            let mut placed = PlacedMark::new(board, index, mark);
            minimax(placed.board(), depth + 1, !is_maximizing)
        };

        let improves = if is_maximizing {
            result.score > best.score
        } else {
            result.score < best.score
        };

        if improves {
            best = SearchResult {
                score: result.score,
                index: Some(index),
            };
        }
    }

    best
}

/// Runs the search from depth 0 on a private copy of `board`.
pub fn search(board: &Board, is_maximizing: bool) -> SearchResult {
    let mut scratch = *board;
    minimax(&mut scratch, 0, is_maximizing)
}
