//! Configuration management for Mailcaster
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{PICKER_DEFAULT_WIDTH, PICKER_MAX_WIDTH, PICKER_MIN_WIDTH};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding the configured server URL
pub const SERVER_URL_ENV: &str = "MAILCASTER_SERVER_URL";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

/// Backend server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Base URL of the mass-mailer backend
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Campaign picker sidebar width in columns
    pub picker_width: u16,
    /// Fetch the campaign list on startup
    pub fetch_campaigns_on_startup: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable file logging
    pub enabled: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout_seconds: 30,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            picker_width: PICKER_DEFAULT_WIDTH,
            fetch_campaigns_on_startup: true,
        }
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
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

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("mailcaster.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("mailcaster").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.ui.picker_width < PICKER_MIN_WIDTH || self.ui.picker_width > PICKER_MAX_WIDTH {
            anyhow::bail!(
                "picker_width must be between {} and {} columns, got {}",
                PICKER_MIN_WIDTH,
                PICKER_MAX_WIDTH,
                self.ui.picker_width
            );
        }

        if self.server.base_url.trim().is_empty() {
            anyhow::bail!("server.base_url cannot be empty");
        }
        if !self.server.base_url.starts_with("http://") && !self.server.base_url.starts_with("https://") {
            anyhow::bail!("server.base_url must start with http:// or https://, got '{}'", self.server.base_url);
        }

        if self.server.timeout_seconds == 0 || self.server.timeout_seconds > 600 {
            anyhow::bail!("server.timeout_seconds must be between 1 and 600");
        }

        Ok(())
    }

    /// Resolved server URL: the environment variable wins over the file.
    pub fn server_url(&self) -> String {
        std::env::var(SERVER_URL_ENV).unwrap_or_else(|_| self.server.base_url.clone())
    }
}
