use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::games::tictactoe::{Board, EngineError, parse_board};
use common::{log, log_error};
use serde::Serialize;
use serde_json::Value;

use crate::web_server::WebServerState;

pub const INVALID_BOARD_MESSAGE: &str =
    "Invalid board data. Provide an array of 9 elements containing \"X\", \"O\", or null.";
pub const INTERNAL_ERROR_MESSAGE: &str = "Unable to determine next move";

#[derive(Serialize)]
struct ErrorResponse {
    error: &'static str,
}

fn error_response(status: StatusCode, error: &'static str) -> Response {
    (status, Json(ErrorResponse { error })).into_response()
}

/// Reads `{ "board": [...] }`. An empty or non-JSON body counts as a missing board.
fn parse_request(body: &[u8]) -> Result<Board, EngineError> {
    let request: Value = serde_json::from_slice(body).unwrap_or(Value::Null);
    let board = request
        .get("board")
        .ok_or_else(|| EngineError::InvalidBoard("missing board".to_string()))?;
    parse_board(board)
}

/// `GET|POST /api/next-move`. Answers with the bare cell index.
pub async fn next_move_handler(State(state): State<WebServerState>, body: Bytes) -> Response {
    let board = match parse_request(&body) {
        Ok(board) => board,
        Err(e) => {
            log!("Rejected next-move request: {}", e);
            return error_response(StatusCode::BAD_REQUEST, INVALID_BOARD_MESSAGE);
        }
    };

    match state.move_provider.next_move(&board) {
        Ok(index) => (StatusCode::OK, Json(index)).into_response(),
        Err(e) => {
            log_error!("Error determining next move: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
        }
    }
}
