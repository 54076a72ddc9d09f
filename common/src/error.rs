use thiserror::Error;

/// Rejections raised by a game session when a move request breaks the rules.
///
/// The board itself never validates writes; these come from the session layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("game is already over")]
    GameOver,

    #[error("not your turn")]
    NotYourTurn,

    #[error("position {index} is out of bounds (must be 0-8)")]
    OutOfBounds { index: usize },

    #[error("cell {index} is already marked")]
    CellOccupied { index: usize },

    #[error("no moves available")]
    NoMovesAvailable,

    #[error("invalid session settings: {0}")]
    InvalidSettings(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(#[source] std::io::Error),

    #[error("failed to write config file: {0}")]
    Write(#[source] std::io::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[source] serde_yaml_ng::Error),

    #[error("failed to deserialize config: {0}")]
    Deserialize(#[source] serde_yaml_ng::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
