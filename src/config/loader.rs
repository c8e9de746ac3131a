use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;
use crate::share::NAME_PLACEHOLDER;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/greenhouse/config.toml` on Unix/macOS, or the
    /// equivalent via `dirs::config_dir()`. Falls back to the current
    /// directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("greenhouse").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - Otherwise parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Frame interval is non-zero and not longer than the animation
    /// - Share template contains the `{name}` placeholder
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pager.frame_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "pager.frame_ms must be greater than zero".to_string(),
            });
        }

        if self.pager.frame_ms > self.pager.animation_ms {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "pager.frame_ms ({}) exceeds pager.animation_ms ({})",
                    self.pager.frame_ms, self.pager.animation_ms
                ),
            });
        }

        if !self.share.template.contains(NAME_PLACEHOLDER) {
            return Err(ConfigError::ValidationError {
                message: format!("share.template must contain '{}'", NAME_PLACEHOLDER),
            });
        }

        Ok(())
    }
}
