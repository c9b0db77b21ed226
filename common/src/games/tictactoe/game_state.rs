use super::error::RoundError;
use super::types::{AI_MARK, Board, Mark, OPPONENT_MARK, Outcome};
use super::win_detector::{evaluate, winning_line};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundStatus {
    ComputerTurn,
    PlayerTurn,
    ComputerWon,
    PlayerWon,
    Draw,
}

impl RoundStatus {
    pub fn is_over(&self) -> bool {
        matches!(
            self,
            RoundStatus::ComputerWon | RoundStatus::PlayerWon | RoundStatus::Draw
        )
    }

    pub fn message(&self) -> &'static str {
        match self {
            RoundStatus::ComputerTurn => "Computer's turn",
            RoundStatus::PlayerTurn => "Your turn",
            RoundStatus::ComputerWon => "Computer wins!",
            RoundStatus::PlayerWon => "You win!",
            RoundStatus::Draw => "It's a draw!",
        }
    }

    fn turn_mark(&self) -> Option<Mark> {
        match self {
            RoundStatus::ComputerTurn => Some(AI_MARK),
            RoundStatus::PlayerTurn => Some(OPPONENT_MARK),
            _ => None,
        }
    }
}

/// One round between the computer (`X`, always first) and the player (`O`).
#[derive(Debug, Clone)]
pub struct GameRound {
    board: Board,
    status: RoundStatus,
    last_move: Option<usize>,
}

impl Default for GameRound {
    fn default() -> Self {
        Self::new()
    }
}

impl GameRound {
    pub fn new() -> Self {
        Self {
            board: Board::empty(),
            status: RoundStatus::ComputerTurn,
            last_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> RoundStatus {
        self.status
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn winning_line(&self) -> Option<[usize; 3]> {
        winning_line(&self.board)
    }

    pub fn place_mark(&mut self, index: usize, mark: Mark) -> Result<RoundStatus, RoundError> {
        if self.status.is_over() {
            return Err(RoundError::RoundOver);
        }

        if self.status.turn_mark() != Some(mark) {
            return Err(RoundError::NotYourTurn);
        }

        match self.board.get(index) {
            None => return Err(RoundError::OutOfRange(index)),
            Some(Mark::Empty) => {}
            Some(_) => return Err(RoundError::CellOccupied(index)),
        }

        self.board.set(index, mark);
        self.last_move = Some(index);
        self.status = self.next_status(mark);

        Ok(self.status)
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn next_status(&self, just_played: Mark) -> RoundStatus {
        match evaluate(&self.board) {
            Some(Outcome::Winner(mark)) if mark == AI_MARK => RoundStatus::ComputerWon,
            Some(Outcome::Winner(_)) => RoundStatus::PlayerWon,
            Some(Outcome::Draw) => RoundStatus::Draw,
            None if just_played.opponent() == Some(AI_MARK) => RoundStatus::ComputerTurn,
            None => RoundStatus::PlayerTurn,
        }
    }
}
