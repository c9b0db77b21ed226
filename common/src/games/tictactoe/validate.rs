use serde_json::Value;

use super::error::EngineError;
use super::types::{Board, CELL_COUNT, Mark};

/// Parses a raw JSON board: exactly 9 items, each `"X"`, `"O"` or `null`.
pub fn parse_board(value: &Value) -> Result<Board, EngineError> {
    let items = value
        .as_array()
        .ok_or_else(|| EngineError::InvalidBoard("board must be an array".to_string()))?;

    if items.len() != CELL_COUNT {
        return Err(EngineError::InvalidBoard(format!(
            "board must have {} cells, got {}",
            CELL_COUNT,
            items.len()
        )));
    }

    let mut cells = [Mark::Empty; CELL_COUNT];
    for (index, item) in items.iter().enumerate() {
        cells[index] = parse_cell(item).ok_or_else(|| {
            EngineError::InvalidBoard(format!("cell {} has unrecognized value {}", index, item))
        })?;
    }

    Ok(Board::from_cells(cells))
}

fn parse_cell(value: &Value) -> Option<Mark> {
    match value {
        Value::Null => Some(Mark::Empty),
        Value::String(s) if s == "X" => Some(Mark::X),
        Value::String(s) if s == "O" => Some(Mark::O),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parses_valid_board() {
        let board = parse_board(&json!(["X", null, "O", null, "X", null, "O", null, null])).unwrap();
        assert_eq!(board.get(0), Some(Mark::X));
        assert_eq!(board.get(2), Some(Mark::O));
        assert_eq!(board.empty_indices(), vec![1, 3, 5, 7, 8]);
    }

    #[test]
    fn test_rejects_short_board() {
        let result = parse_board(&json!(["X", "O", null]));
        assert!(matches!(result, Err(EngineError::InvalidBoard(_))));
    }

    #[test]
    fn test_rejects_long_board() {
        let result = parse_board(&json!([null, null, null, null, null, null, null, null, null, null]));
        assert!(matches!(result, Err(EngineError::InvalidBoard(_))));
    }

    #[test]
    fn test_rejects_non_array() {
        assert!(parse_board(&json!({"cells": []})).is_err());
        assert!(parse_board(&Value::Null).is_err());
        assert!(parse_board(&json!("XXXOOO...")).is_err());
    }

    #[test]
    fn test_rejects_unrecognized_cell() {
        let result = parse_board(&json!(["X", "O", "Z", null, null, null, null, null, null]));
        match result {
            Err(EngineError::InvalidBoard(reason)) => assert!(reason.contains("cell 2")),
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(parse_board(&json!([1, null, null, null, null, null, null, null, null])).is_err());
        assert!(parse_board(&json!(["", null, null, null, null, null, null, null, null])).is_err());
    }
}
