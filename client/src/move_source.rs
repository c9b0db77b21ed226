use std::time::Duration;

use common::games::tictactoe::{Board, EngineError, next_move_for_board};
use serde_json::{Value, json};
use thiserror::Error;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Error, Debug)]
pub enum MoveSourceError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Server answered with status {0}")]
    Status(u16),

    #[error("Unexpected response: {0}")]
    InvalidResponse(String),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Where the computer's suggested move comes from.
pub trait MoveSource {
    fn next_move(&self, board: &Board) -> Result<usize, MoveSourceError>;
}

/// Runs the engine in-process.
pub struct OfflineMoveSource;

impl MoveSource for OfflineMoveSource {
    fn next_move(&self, board: &Board) -> Result<usize, MoveSourceError> {
        Ok(next_move_for_board(board)?)
    }
}

/// Asks a running server via `POST /api/next-move`.
pub struct HttpMoveSource {
    client: reqwest::blocking::Client,
    url: String,
}

impl HttpMoveSource {
    /// `server` is the base address, e.g. `http://localhost:3000`.
    pub fn new(server: &str) -> Result<Self, MoveSourceError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            url: format!("{}/api/next-move", server.trim_end_matches('/')),
        })
    }
}

impl MoveSource for HttpMoveSource {
    fn next_move(&self, board: &Board) -> Result<usize, MoveSourceError> {
        let response = self
            .client
            .post(&self.url)
            .json(&json!({ "board": board.cells() }))
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(MoveSourceError::Status(status.as_u16()));
        }

        parse_move_response(&response.text()?)
    }
}

/// Accepts a bare integer, or an object carrying it as `index`, `move` or `position`.
pub fn parse_move_response(body: &str) -> Result<usize, MoveSourceError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| MoveSourceError::InvalidResponse(e.to_string()))?;

    let index = match &value {
        Value::Object(fields) => ["index", "move", "position"]
            .iter()
            .find_map(|key| fields.get(*key).filter(|v| v.is_number())),
        other => Some(other),
    };

    index
        .and_then(Value::as_u64)
        .and_then(|index| usize::try_from(index).ok())
        .ok_or_else(|| MoveSourceError::InvalidResponse(body.to_string()))
}
