//! Configuration for the chat view.
//!
//! All fields are optional in the JSON file; missing fields take the
//! compiled-in defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::responder::DEFAULT_REPLY_DELAY;

/// Default config file location, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = ".colloquy/config.json";

/// Main configuration for colloquy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Title shown in the header bar.
    #[serde(default = "default_title")]
    pub title: String,

    /// Placeholder shown in the empty input box.
    #[serde(default = "default_placeholder")]
    pub placeholder: String,

    /// Static disclaimer under the input box.
    #[serde(default = "default_disclaimer")]
    pub disclaimer: String,

    /// Delay before the simulated reply, in milliseconds.
    #[serde(default = "default_reply_delay_ms")]
    pub reply_delay_ms: u64,

    /// Color palette.
    #[serde(default)]
    pub theme: ThemeName,
}

fn default_title() -> String {
    "ChatGPT".into()
}

fn default_placeholder() -> String {
    "Ask anything".into()
}

fn default_disclaimer() -> String {
    "ChatGPT can make mistakes. Check important info.".into()
}

#[allow(clippy::cast_possible_truncation)]
fn default_reply_delay_ms() -> u64 {
    DEFAULT_REPLY_DELAY.as_millis() as u64
}

/// Named color palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ThemeName {
    /// Catppuccin Mocha (dark).
    #[default]
    Mocha,
    /// Catppuccin Latte (light).
    Latte,
    /// High contrast.
    HighContrast,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        serde_json::from_str(&content).map_err(ConfigError::Parse)
    }

    /// Load configuration, falling back to defaults when the file is absent.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigError::Io)?;
        }
        std::fs::write(path, content).map_err(ConfigError::Io)
    }

    /// Delay before the simulated reply.
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: default_title(),
            placeholder: default_placeholder(),
            disclaimer: default_disclaimer(),
            reply_delay_ms: default_reply_delay_ms(),
            theme: ThemeName::default(),
        }
    }
}

/// Errors that can occur when working with configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error reading or writing config.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing config JSON.
    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// Error serializing config to JSON.
    #[error("Serialize error: {0}")]
    Serialize(#[source] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.title, "ChatGPT");
        assert_eq!(config.placeholder, "Ask anything");
        assert_eq!(config.reply_delay(), Duration::from_millis(800));
        assert_eq!(config.theme, ThemeName::Mocha);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"reply_delay_ms": 50}"#).unwrap();
        assert_eq!(config.reply_delay_ms, 50);
        assert_eq!(config.title, "ChatGPT");
    }

    #[test]
    fn test_theme_names() {
        let config: Config = serde_json::from_str(r#"{"theme": "high_contrast"}"#).unwrap();
        assert_eq!(config.theme, ThemeName::HighContrast);
        assert!(serde_json::from_str::<Config>(r#"{"theme": "neon"}"#).is_err());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = Config {
            title: "Assistant".into(),
            theme: ThemeName::Latte,
            ..Config::default()
        };
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_or_default(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(Config::load(&path), Err(ConfigError::Parse(_))));
    }
}
