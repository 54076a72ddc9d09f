use common::config::Validate;
use common::games::tictactoe::{FirstPlayerMode, Mark, TicTacToeSessionSettings};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct PlayerConfig {
    pub name: String,
    pub mark: Mark,
    #[serde(default)]
    pub first_player: FirstPlayerMode,
}

impl PlayerConfig {
    pub fn session_settings(&self) -> TicTacToeSessionSettings {
        TicTacToeSessionSettings {
            player_name: self.name.clone(),
            human_mark: self.mark,
            first_player_mode: self.first_player,
        }
    }
}

impl Validate for PlayerConfig {
    fn validate(&self) -> Result<(), String> {
        self.session_settings().validate()
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        let settings = TicTacToeSessionSettings::default();
        Self {
            name: settings.player_name,
            mark: settings.human_mark,
            first_player: settings.first_player_mode,
        }
    }
}
