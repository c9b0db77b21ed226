use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

pub const AI_MARK: Mark = Mark::X;
pub const OPPONENT_MARK: Mark = Mark::O;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Mark::Empty
    }

    pub fn symbol(&self) -> char {
        match self {
            Mark::Empty => '.',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

// Wire format is "X", "O" or null.
impl Serialize for Mark {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Mark::Empty => serializer.serialize_none(),
            Mark::X => serializer.serialize_str("X"),
            Mark::O => serializer.serialize_str("O"),
        }
    }
}

struct MarkVisitor;

impl<'de> Visitor<'de> for MarkVisitor {
    type Value = Mark;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\"X\", \"O\" or null")
    }

    fn visit_none<E: de::Error>(self) -> Result<Mark, E> {
        Ok(Mark::Empty)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Mark, E> {
        Ok(Mark::Empty)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Mark, D::Error> {
        deserializer.deserialize_any(MarkVisitor)
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Mark, E> {
        match value {
            "X" => Ok(Mark::X),
            "O" => Ok(Mark::O),
            other => Err(E::invalid_value(de::Unexpected::Str(other), &self)),
        }
    }
}

impl<'de> Deserialize<'de> for Mark {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Mark, D::Error> {
        deserializer.deserialize_option(MarkVisitor)
    }
}

/// 3x3 board stored row-major: `row = index / 3`, `col = index % 3`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    /// Panics if `index` is outside the board.
    pub fn set(&mut self, index: usize, mark: Mark) {
        self.cells[index] = mark;
    }

    pub fn is_cell_empty(&self, index: usize) -> bool {
        self.get(index) == Some(Mark::Empty)
    }

    pub fn empty_indices(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }
}

impl TryFrom<&[Mark]> for Board {
    type Error = usize;

    /// Fails with the offending length when the slice is not exactly 9 cells.
    fn try_from(cells: &[Mark]) -> Result<Self, Self::Error> {
        let cells: [Mark; CELL_COUNT] = cells.try_into().map_err(|_| cells.len())?;
        Ok(Self { cells })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.cells.chunks(BOARD_SIZE).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for (col, cell) in chunk.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", cell)?;
            }
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Winner(Mark),
    Draw,
}

/// Score is from the AI's point of view; `index` is `None` on terminal nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub score: i32,
    pub index: Option<usize>,
}

impl SearchResult {
    pub fn terminal(score: i32) -> Self {
        Self { score, index: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_json_values() {
        let cells: Vec<Mark> = serde_json::from_str(r#"["X", "O", null]"#).unwrap();
        assert_eq!(cells, vec![Mark::X, Mark::O, Mark::Empty]);
        assert_eq!(serde_json::to_string(&cells).unwrap(), r#"["X","O",null]"#);
    }

    #[test]
    fn test_mark_rejects_unknown_symbol() {
        assert!(serde_json::from_str::<Mark>(r#""Z""#).is_err());
        assert!(serde_json::from_str::<Mark>("1").is_err());
        assert!(serde_json::from_str::<Mark>(r#""x""#).is_err());
    }

    #[test]
    fn test_opponent_flips_marks() {
        assert_eq!(Mark::X.opponent(), Some(Mark::O));
        assert_eq!(Mark::O.opponent(), Some(Mark::X));
        assert_eq!(Mark::Empty.opponent(), None);
    }

    #[test]
    fn test_board_from_slice_requires_nine_cells() {
        assert_eq!(Board::try_from([Mark::X, Mark::O].as_slice()), Err(2));
        assert_eq!(
            Board::try_from([Mark::Empty; 9].as_slice()),
            Ok(Board::empty())
        );
    }

    #[test]
    fn test_empty_indices_are_ascending() {
        let mut board = Board::empty();
        board.set(4, Mark::X);
        board.set(0, Mark::O);
        assert_eq!(board.empty_indices(), vec![1, 2, 3, 5, 6, 7, 8]);
        assert!(!board.is_full());
    }

    #[test]
    fn test_display_renders_grid() {
        let mut board = Board::empty();
        board.set(0, Mark::X);
        board.set(8, Mark::O);
        assert_eq!(board.to_string(), "X . .\n. . .\n. . O");
    }
}
