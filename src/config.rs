//! Configuration management for Chatdesk
//!
//! This module handles loading, parsing, validating, and managing
//! configuration from files, environment variables, and CLI overrides.

use crate::chat::DEFAULT_TITLE_MAX_CHARS;
use crate::error::{ChatdeskError, Result};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default location of the configuration file
pub const DEFAULT_CONFIG_PATH: &str = "config/config.yaml";

/// Main configuration structure for Chatdesk
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Chat backend connection settings
    #[serde(default)]
    pub backend: BackendConfig,
    /// Chat behavior settings
    #[serde(default)]
    pub chat: ChatConfig,
}

/// Chat backend connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the backend; `/chat` is appended for chat requests
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Optional request timeout in seconds
    ///
    /// Unset by default: a request waits until the backend answers or the
    /// connection fails.
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: None,
        }
    }
}

/// Chat behavior configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Characters of the first message kept in a session title
    #[serde(default = "default_title_max_chars")]
    pub title_max_chars: usize,
}

fn default_title_max_chars() -> usize {
    DEFAULT_TITLE_MAX_CHARS
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            title_max_chars: default_title_max_chars(),
        }
    }
}

impl Config {
    /// Load configuration from file with environment and CLI overrides
    ///
    /// # Arguments
    ///
    /// * `path` - Path to configuration file
    /// * `cli` - CLI arguments for overrides
    ///
    /// # Errors
    ///
    /// Returns error if the file exists but cannot be read or parsed
    pub fn load(path: &str, cli: &crate::cli::Cli) -> Result<Self> {
        let mut config = if Path::new(path).exists() {
            Self::from_file(path)?
        } else {
            tracing::warn!("Config file not found at {}, using defaults", path);
            Self::default()
        };

        config.apply_env_vars();
        config.apply_cli_overrides(cli);

        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(ChatdeskError::Io)
            .with_context(|| format!("Failed to read config file {}", path))?;
        let config = serde_yaml::from_str(&contents)
            .map_err(ChatdeskError::Yaml)
            .with_context(|| format!("Failed to parse config file {}", path))?;
        Ok(config)
    }

    fn apply_env_vars(&mut self) {
        if let Ok(base_url) = std::env::var("CHATDESK_BASE_URL") {
            tracing::debug!(base_url = %base_url, "Env override: CHATDESK_BASE_URL");
            self.backend.base_url = base_url;
        }

        if let Ok(timeout) = std::env::var("CHATDESK_TIMEOUT_SECONDS") {
            if let Ok(value) = timeout.parse() {
                self.backend.timeout_seconds = Some(value);
            } else {
                tracing::warn!("Invalid CHATDESK_TIMEOUT_SECONDS: {}", timeout);
            }
        }
    }

    fn apply_cli_overrides(&mut self, cli: &crate::cli::Cli) {
        if let Some(base_url) = &cli.base_url {
            tracing::debug!(base_url = %base_url, "CLI override: --base-url");
            self.backend.base_url = base_url.clone();
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns error if the backend URL is not an http(s) URL, the timeout
    /// is zero, or the title length is zero
    pub fn validate(&self) -> Result<()> {
        if self.backend.base_url.is_empty() {
            return Err(
                ChatdeskError::Config("backend.base_url cannot be empty".to_string()).into(),
            );
        }

        let url = url::Url::parse(&self.backend.base_url).map_err(|e| {
            ChatdeskError::Config(format!(
                "backend.base_url is not a valid URL ({}): {}",
                self.backend.base_url, e
            ))
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ChatdeskError::Config(format!(
                "backend.base_url must use http or https, got: {}",
                url.scheme()
            ))
            .into());
        }

        if self.backend.timeout_seconds == Some(0) {
            return Err(ChatdeskError::Config(
                "backend.timeout_seconds must be greater than 0".to_string(),
            )
            .into());
        }

        if self.chat.title_max_chars == 0 {
            return Err(ChatdeskError::Config(
                "chat.title_max_chars must be greater than 0".to_string(),
            )
            .into());
        }

        Ok(())
    }
}
