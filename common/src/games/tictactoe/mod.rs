mod bot_controller;
mod error;
mod game_state;
mod minimax;
mod move_selector;
mod scores;
mod types;
mod validate;
mod win_detector;

pub use bot_controller::{calculate_random_move, resolve_ai_move};
pub use error::{EngineError, RoundError};
pub use game_state::{GameRound, RoundStatus};
pub use minimax::{minimax, search};
pub use move_selector::{get_next_move, next_move_for_board};
pub use scores::Scoreboard;
pub use types::{
    AI_MARK, BOARD_SIZE, Board, CELL_COUNT, Mark, OPPONENT_MARK, Outcome, SearchResult,
};
pub use validate::parse_board;
pub use win_detector::{LINES, evaluate, winning_line};
