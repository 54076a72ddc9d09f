mod config;
mod logging_config;
mod player_config;

pub use config::{Config, get_config_manager};
pub use logging_config::LoggingConfig;
pub use player_config::PlayerConfig;
