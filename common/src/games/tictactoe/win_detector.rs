use super::types::{Board, Mark, Outcome};

pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the winner if any line is complete, `Draw` on a full board and
/// `None` while the game is still open.
pub fn evaluate(board: &Board) -> Option<Outcome> {
    if let Some(line) = winning_line(board) {
        let cells = board.cells();
        return Some(Outcome::Winner(cells[line[0]]));
    }

    if board.is_full() {
        return Some(Outcome::Draw);
    }

    None
}

/// First completed line in table order.
pub fn winning_line(board: &Board) -> Option<[usize; 3]> {
    let cells = board.cells();
    LINES.into_iter().find(|&[a, b, c]| {
        cells[a] != Mark::Empty && cells[a] == cells[b] && cells[a] == cells[c]
    })
}
