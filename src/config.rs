use crate::error::{KavaError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "config.toml";
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct KavaConfig {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub default_distribution: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Overrides the foojay endpoint, e.g. for a mirror.
    #[serde(default)]
    pub base_url: Option<String>,

    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
        }
    }
}

fn default_fetch_timeout_secs() -> u64 {
    DEFAULT_FETCH_TIMEOUT_SECS
}

impl KavaConfig {
    pub fn load(kava_home: &Path) -> Result<Self> {
        let config_path = kava_home.join(CONFIG_FILE_NAME);

        if !config_path.exists() {
            log::debug!("Config file not found at {config_path:?}, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&config_path)?;
        let config: KavaConfig = toml::from_str(&contents)
            .map_err(|e| KavaError::ConfigFile(format!("Failed to parse config.toml: {e}")))?;

        log::debug!("Loaded config from {config_path:?}");
        Ok(config)
    }

    pub fn save(&self, kava_home: &Path) -> Result<()> {
        let config_path = kava_home.join(CONFIG_FILE_NAME);

        // Ensure parent directory exists
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| KavaError::ConfigFile(format!("Failed to serialize config: {e}")))?;

        fs::write(&config_path, contents)?;
        log::debug!("Saved config to {config_path:?}");
        Ok(())
    }
}

/// The directory the config file lives in: `$KAVA_HOME`, or `~/.kava`.
pub fn kava_home() -> Result<PathBuf> {
    if let Ok(home) = std::env::var("KAVA_HOME") {
        if !home.is_empty() {
            return Ok(PathBuf::from(home));
        }
    }

    dirs::home_dir()
        .map(|home| home.join(".kava"))
        .ok_or_else(|| KavaError::InvalidConfig("Could not determine home directory".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = KavaConfig::default();
        assert_eq!(config.api.fetch_timeout_secs, DEFAULT_FETCH_TIMEOUT_SECS);
        assert_eq!(config.api.base_url, None);
        assert_eq!(config.default_distribution, None);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config = KavaConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config.api.fetch_timeout_secs, DEFAULT_FETCH_TIMEOUT_SECS);
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();

        let mut config = KavaConfig::default();
        config.api.fetch_timeout_secs = 5;
        config.default_distribution = Some("temurin".to_string());

        config.save(temp_dir.path()).unwrap();

        let loaded = KavaConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.api.fetch_timeout_secs, 5);
        assert_eq!(loaded.default_distribution, Some("temurin".to_string()));
    }

    #[test]
    fn test_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);

        // Write partial config with only default_distribution
        fs::write(&config_path, r#"default_distribution = "liberica""#).unwrap();

        let loaded = KavaConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.api.fetch_timeout_secs, DEFAULT_FETCH_TIMEOUT_SECS);
        assert_eq!(loaded.default_distribution, Some("liberica".to_string()));
    }

    #[test]
    fn test_config_with_api_section() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);

        fs::write(
            &config_path,
            r#"
default_distribution = "zulu"

[api]
base_url = "https://disco.example.com/disco"
fetch_timeout_secs = 10
"#,
        )
        .unwrap();

        let loaded = KavaConfig::load(temp_dir.path()).unwrap();
        assert_eq!(
            loaded.api.base_url,
            Some("https://disco.example.com/disco".to_string())
        );
        assert_eq!(loaded.api.fetch_timeout_secs, 10);
        assert_eq!(loaded.default_distribution, Some("zulu".to_string()));
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&config_path, "default_distribution = [not toml").unwrap();

        assert!(KavaConfig::load(temp_dir.path()).is_err());
    }
}
