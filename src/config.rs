//! Configuration management for todoterm
//!
//! This module handles loading, parsing, and validation of configuration files,
//! plus the environment overrides for the API location and user id.

use crate::constants::{
    CONFIG_GENERATED, DEFAULT_API_BASE_URL, DEFAULT_ERROR_DISMISS_SECS, DEFAULT_TIMEOUT_SECS, ENV_API_URL,
    ENV_USER_ID, ERROR_DISMISS_MAX_SECS, TIMEOUT_MAX_SECS,
};
use crate::entities::UserId;
use crate::icons::IconTheme;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

/// Remote API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the API; todos live under `{base_url}/todos`
    pub base_url: String,
    /// Owner of the todos (0 = not configured)
    pub user_id: UserId,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Seconds an error banner stays visible before clearing itself
    pub error_dismiss_secs: u64,
    /// Glyph set used for checkboxes and loading markers
    pub icon_theme: IconTheme,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Write a log file
    pub enabled: bool,
    /// Minimum level written to the log file
    /// Options: "error", "warn", "info", "debug", "trace"
    pub level: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            user_id: 0,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            error_dismiss_secs: DEFAULT_ERROR_DISMISS_SECS,
            icon_theme: IconTheme::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl UiConfig {
    pub fn error_dismiss_delay(&self) -> Duration {
        Duration::from_secs(self.error_dismiss_secs)
    }
}

impl LoggingConfig {
    /// Parsed log level. Falls back to `Info` for values `validate` would reject.
    pub fn level_filter(&self) -> log::LevelFilter {
        log::LevelFilter::from_str(&self.level).unwrap_or(log::LevelFilter::Info)
    }
}

impl Config {
    /// Load configuration from file (or defaults), then apply environment overrides
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        let mut config = if let Some(path) = config_path {
            Self::load_from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_overrides(std::env::var(ENV_API_URL).ok(), std::env::var(ENV_USER_ID).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Apply values that came from the environment on top of the file values
    pub fn apply_overrides(&mut self, api_url: Option<String>, user_id: Option<String>) -> Result<()> {
        if let Some(url) = api_url.filter(|url| !url.trim().is_empty()) {
            self.api.base_url = url.trim().to_string();
        }

        if let Some(raw) = user_id.filter(|id| !id.trim().is_empty()) {
            self.api.user_id = raw
                .trim()
                .parse()
                .with_context(|| format!("{} must be a positive integer, got '{}'", ENV_USER_ID, raw))?;
        }

        Ok(())
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("todoterm.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("todoterm").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if let Err(e) = reqwest::Url::parse(&self.api.base_url) {
            anyhow::bail!("Invalid api.base_url '{}': {}", self.api.base_url, e);
        }

        if self.api.timeout_secs == 0 || self.api.timeout_secs > TIMEOUT_MAX_SECS {
            anyhow::bail!(
                "api.timeout_secs must be between 1 and {}, got {}",
                TIMEOUT_MAX_SECS,
                self.api.timeout_secs
            );
        }

        if self.ui.error_dismiss_secs == 0 || self.ui.error_dismiss_secs > ERROR_DISMISS_MAX_SECS {
            anyhow::bail!(
                "ui.error_dismiss_secs must be between 1 and {}, got {}",
                ERROR_DISMISS_MAX_SECS,
                self.ui.error_dismiss_secs
            );
        }

        if log::LevelFilter::from_str(&self.logging.level).is_err() {
            anyhow::bail!(
                "Invalid logging.level '{}'. Expected one of: off, error, warn, info, debug, trace",
                self.logging.level
            );
        }

        Ok(())
    }

    /// Whether a user id has been configured. Without one the API cannot be scoped.
    pub fn has_user_id(&self) -> bool {
        self.api.user_id != 0
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# todoterm Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("todoterm"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
