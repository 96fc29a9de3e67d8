//! XDG config store adapter

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use crate::application::ports::ConfigStore;
use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

/// XDG-compliant config store
pub struct XdgConfigStore {
    path: PathBuf,
}

impl XdgConfigStore {
    /// Create a new XDG config store with default path
    pub fn new() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("grabtune");

        Self {
            path: config_dir.join("config.toml"),
        }
    }

    /// Create with custom path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Parse TOML content into AppConfig
    fn parse_toml(content: &str) -> Result<AppConfig, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}

impl Default for XdgConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConfigStore for XdgConfigStore {
    async fn load(&self) -> Result<AppConfig, ConfigError> {
        if !self.exists() {
            // Return empty config if file doesn't exist
            return Ok(AppConfig::empty());
        }

        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| ConfigError::ReadError(e.to_string()))?;

        Self::parse_toml(&content)
    }

    fn path(&self) -> PathBuf {
        self.path.clone()
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_is_xdg() {
        let store = XdgConfigStore::new();
        let path = store.path();
        assert!(path.to_string_lossy().contains("grabtune"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }

    #[test]
    fn custom_path() {
        let store = XdgConfigStore::with_path("/custom/path/config.toml");
        assert_eq!(store.path(), PathBuf::from("/custom/path/config.toml"));
    }

    #[test]
    fn parse_toml_flat_format() {
        let content = r#"
tool = "/usr/local/bin/yt-dlp"
audio_format = "mp3"
poll_interval_secs = 2
"#;

        let config = XdgConfigStore::parse_toml(content).unwrap();
        assert_eq!(config.tool.as_deref(), Some("/usr/local/bin/yt-dlp"));
        assert_eq!(config.audio_format.as_deref(), Some("mp3"));
        assert_eq!(config.poll_interval_secs, Some(2));
    }

    #[test]
    fn parse_toml_allows_partial_config() {
        let config = XdgConfigStore::parse_toml("audio_format = \"opus\"\n").unwrap();
        assert!(config.tool.is_none());
        assert_eq!(config.audio_format.as_deref(), Some("opus"));
    }

    #[tokio::test]
    async fn missing_file_loads_empty_config() {
        let store = XdgConfigStore::with_path("/no/such/config.toml");
        let config = store.load().await.unwrap();
        assert!(config.tool.is_none());
        assert!(config.audio_format.is_none());
    }
}
