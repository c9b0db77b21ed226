use serde::{Deserialize, Serialize};

use crate::config::Validate;
use super::game_state::RoundStatus;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    #[serde(default)]
    pub computer: u32,
    #[serde(default)]
    pub player: u32,
}

impl Scoreboard {
    /// Counts a finished round. Draws and unfinished rounds leave the score unchanged.
    pub fn record(&mut self, status: RoundStatus) -> bool {
        match status {
            RoundStatus::ComputerWon => self.computer = self.computer.saturating_add(1),
            RoundStatus::PlayerWon => self.player = self.player.saturating_add(1),
            _ => return false,
        }
        true
    }
}

impl Validate for Scoreboard {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}
