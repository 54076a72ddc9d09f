use serde::{Deserialize, Serialize};

#[derive(Debug, Default, PartialEq, Serialize, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default)]
    pub use_prefix: bool,
    #[serde(default)]
    pub verbose: bool,
}

impl LoggingConfig {
    pub fn prefix(&self) -> Option<String> {
        self.use_prefix.then(|| "Client".to_string())
    }
}
