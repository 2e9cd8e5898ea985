mod config;

pub use config::{Config, DEFAULT_CONFIG_FILE, MAX_BOT_DELAY_MS, get_config_manager};
