use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Mutex;

use super::{
    ConfigContentProvider, ConfigError, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

/// Loads, validates and persists one config document, caching it after the first read.
pub struct ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer = YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    config_serializer: TConfigSerializer,
    config_content_provider: TConfigContentProvider,
    config: Mutex<Option<TConfig>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: impl Into<PathBuf>) -> Self {
        Self::new(
            FileContentConfigProvider::new(file_path),
            YamlConfigSerializer,
        )
    }
}

impl<TConfigContentProvider, TConfig, TConfigSerializer>
    ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(
        config_content_provider: TConfigContentProvider,
        config_serializer: TConfigSerializer,
    ) -> Self {
        Self {
            config: Mutex::new(None),
            config_content_provider,
            config_serializer,
        }
    }

    /// Stored config, or the default when nothing has been stored.
    pub fn get_config(&self) -> Result<TConfig, ConfigError> {
        let mut current = self.config.lock().unwrap_or_else(|e| e.into_inner());

        if let Some(config) = current.as_ref() {
            return Ok(config.clone());
        }

        let Some(config_data) = self.config_content_provider.get_config_content()? else {
            return Ok(TConfig::default());
        };

        let config: TConfig = self.config_serializer.deserialize(&config_data)?;
        config.validate().map_err(ConfigError::Validation)?;

        *current = Some(config.clone());
        Ok(config)
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), ConfigError> {
        config.validate().map_err(ConfigError::Validation)?;

        let serialized_config = self.config_serializer.serialize(config)?;
        self.config_content_provider
            .set_config_content(&serialized_config)?;

        let mut current = self.config.lock().unwrap_or_else(|e| e.into_inner());
        *current = Some(config.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    struct TestConfig {
        name: String,
        delay_ms: u64,
    }

    impl Default for TestConfig {
        fn default() -> Self {
            Self {
                name: "default".to_string(),
                delay_ms: 300,
            }
        }
    }

    impl Validate for TestConfig {
        fn validate(&self) -> Result<(), String> {
            if self.delay_ms > 1000 {
                return Err(format!("delay_ms {} is above 1000", self.delay_ms));
            }
            Ok(())
        }
    }

    #[derive(Default)]
    struct MemoryProvider {
        content: RefCell<Option<String>>,
    }

    impl MemoryProvider {
        fn with(content: &str) -> Self {
            Self {
                content: RefCell::new(Some(content.to_string())),
            }
        }
    }

    impl ConfigContentProvider for MemoryProvider {
        fn get_config_content(&self) -> Result<Option<String>, ConfigError> {
            Ok(self.content.borrow().clone())
        }

        fn set_config_content(&self, content: &str) -> Result<(), ConfigError> {
            *self.content.borrow_mut() = Some(content.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_missing_content_gives_default() {
        let manager: ConfigManager<_, TestConfig> =
            ConfigManager::new(MemoryProvider::default(), YamlConfigSerializer);
        assert_eq!(manager.get_config().unwrap(), TestConfig::default());
    }

    #[test]
    fn test_reads_yaml_with_defaults_for_missing_fields() {
        let manager: ConfigManager<_, TestConfig> =
            ConfigManager::new(MemoryProvider::with("name: table\n"), YamlConfigSerializer);
        let config = manager.get_config().unwrap();
        assert_eq!(config.name, "table");
        assert_eq!(config.delay_ms, 300);
    }

    #[test]
    fn test_invalid_content_is_rejected() {
        let manager: ConfigManager<_, TestConfig> =
            ConfigManager::new(MemoryProvider::with("delay_ms: 5000\n"), YamlConfigSerializer);
        assert!(matches!(
            manager.get_config(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_malformed_yaml_is_a_parse_error() {
        let manager: ConfigManager<_, TestConfig> =
            ConfigManager::new(MemoryProvider::with("delay_ms: [1, 2"), YamlConfigSerializer);
        assert!(matches!(manager.get_config(), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_set_then_get() {
        let manager: ConfigManager<_, TestConfig> =
            ConfigManager::new(MemoryProvider::default(), YamlConfigSerializer);
        let config = TestConfig {
            name: "saved".to_string(),
            delay_ms: 10,
        };
        manager.set_config(&config).unwrap();
        assert_eq!(manager.get_config().unwrap(), config);
        assert!(
            manager
                .config_content_provider
                .content
                .borrow()
                .as_deref()
                .unwrap()
                .contains("saved")
        );
    }

    #[test]
    fn test_set_rejects_invalid_config() {
        let manager: ConfigManager<_, TestConfig> =
            ConfigManager::new(MemoryProvider::default(), YamlConfigSerializer);
        let config = TestConfig {
            name: "x".to_string(),
            delay_ms: 2000,
        };
        assert!(manager.set_config(&config).is_err());
        assert!(manager.config_content_provider.content.borrow().is_none());
    }

    #[test]
    fn test_file_provider_missing_file_is_none() {
        let provider = FileContentConfigProvider::new(
            std::env::temp_dir().join("tictactoe-engine-missing-config-file.yaml"),
        );
        assert!(provider.get_config_content().unwrap().is_none());
    }
}
