//! Application configuration management.
//!
//! The API base URL resolves in order: the `JOBDECK_API_URL` environment
//! variable, then the config file at `~/.config/jobdeck/config.json`, then
//! the compiled-in default. Session entries live under the platform data
//! directory.

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Application name used for config/data directory paths
const APP_NAME: &str = "jobdeck";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Default backend base URL, matching the platform's local dev setup.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api/v1";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub api_base_url: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            Ok(serde_json::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// Resolved backend base URL.
    pub fn api_base_url(&self) -> String {
        if let Ok(url) = std::env::var("JOBDECK_API_URL") {
            if !url.is_empty() {
                return url;
            }
        }
        self.api_base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
    }

    /// Directory holding the file-backed session entries.
    pub fn data_dir(&self) -> Result<PathBuf> {
        let data_dir =
            dirs::data_dir().ok_or_else(|| anyhow::anyhow!("Could not find data directory"))?;
        Ok(data_dir.join(APP_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_base_url_prefers_explicit_config() {
        let config = Config {
            api_base_url: Some("https://api.example.com/api/v1".to_string()),
        };
        // Env override is absent in tests unless set by the harness
        if std::env::var("JOBDECK_API_URL").is_err() {
            assert_eq!(config.api_base_url(), "https://api.example.com/api/v1");
        }
    }

    #[test]
    fn test_api_base_url_defaults_when_unconfigured() {
        let config = Config::default();
        if std::env::var("JOBDECK_API_URL").is_err() {
            assert_eq!(config.api_base_url(), DEFAULT_API_BASE_URL);
        }
    }
}
