use crate::config::Validate;
use super::types::{FirstPlayerMode, Mark};

pub const COMPUTER_NAME: &str = "AI";

const MAX_PLAYER_NAME_LENGTH: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicTacToeSessionSettings {
    pub player_name: String,
    pub human_mark: Mark,
    pub first_player_mode: FirstPlayerMode,
}

impl Default for TicTacToeSessionSettings {
    fn default() -> Self {
        Self {
            player_name: "Player".to_string(),
            human_mark: Mark::X,
            first_player_mode: FirstPlayerMode::Human,
        }
    }
}

impl Validate for TicTacToeSessionSettings {
    fn validate(&self) -> Result<(), String> {
        let name = self.player_name.trim();
        if name.is_empty() {
            return Err("Player name must not be empty".to_string());
        }
        if name.chars().count() > MAX_PLAYER_NAME_LENGTH {
            return Err(format!(
                "Player name must be at most {} characters",
                MAX_PLAYER_NAME_LENGTH
            ));
        }
        if name == COMPUTER_NAME {
            return Err(format!("Player name '{}' is reserved for the computer", COMPUTER_NAME));
        }
        if self.human_mark == Mark::Empty {
            return Err("Human mark must be X or O".to_string());
        }
        Ok(())
    }
}
