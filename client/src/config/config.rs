use std::path::Path;

use serde::{Deserialize, Serialize};
use tictactoe_engine::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use tictactoe_engine::games::tictactoe::GameMode;

pub const DEFAULT_CONFIG_FILE: &str = "tictactoe.yaml";
pub const MAX_BOT_DELAY_MS: u64 = 5_000;

pub fn get_config_manager(
    path: &Path,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub mode: GameMode,
    /// Pause before the computer answers, so its move does not appear instantly.
    pub bot_delay_ms: u64,
    pub seed: Option<u64>,
    pub log_prefix: Option<String>,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if self.bot_delay_ms > MAX_BOT_DELAY_MS {
            return Err(format!(
                "bot_delay_ms must not exceed {}, got {}",
                MAX_BOT_DELAY_MS, self.bot_delay_ms
            ));
        }
        if let Some(prefix) = &self.log_prefix
            && prefix.trim().is_empty()
        {
            return Err("log_prefix must not be blank".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: GameMode::default(),
            bot_delay_ms: 300,
            seed: None,
            log_prefix: None,
        }
    }
}
