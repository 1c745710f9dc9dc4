// Rust guideline compliant 2026-02-06

//! Configuration management for Dohas.

use crate::{Error, Language, Result, SortOrder};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Connection settings for the remote content API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Project identifier; forms the API host name.
    #[serde(default)]
    pub project_id: String,

    /// Dataset name queried on the project.
    #[serde(default)]
    pub dataset: String,

    /// API version, e.g. `2025-07-28`.
    #[serde(default)]
    pub api_version: String,

    /// Bearer token.
    #[serde(default)]
    pub token: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Default request timeout in seconds.
fn default_timeout_secs() -> u64 {
    30
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            project_id: String::new(),
            dataset: String::new(),
            api_version: String::new(),
            token: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl RemoteConfig {
    /// Checks that every field needed for a request is present.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` naming the first missing field.
    pub fn require_complete(&self) -> Result<()> {
        let fields = [
            ("project_id", &self.project_id),
            ("dataset", &self.dataset),
            ("api_version", &self.api_version),
            ("token", &self.token),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(Error::Config(format!("remote.{name} is not set")));
            }
        }
        Ok(())
    }

    /// Returns a copy with the token masked, for display.
    #[must_use]
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        if !copy.token.is_empty() {
            copy.token = "********".to_string();
        }
        copy
    }
}

/// Configuration for Dohas behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Language loaded at start-up.
    #[serde(default)]
    pub language: Language,

    /// Initial sort order.
    #[serde(default)]
    pub sort_order: SortOrder,

    /// Directory for durable content storage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// Remote content API settings.
    #[serde(default)]
    pub remote: RemoteConfig,
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `<config_dir>/config.toml`
    /// 3. Environment variables with `DOHAS_` prefix
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(config_dir: &Path) -> Result<Self> {
        Self::load_with(config_dir, |key| std::env::var(key).ok())
    }

    /// Like [`Config::load`], with environment lookups served by `lookup`.
    ///
    /// # Errors
    ///
    /// See [`Config::load`].
    pub fn load_with<F>(config_dir: &Path, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        let config_path = config_dir.join("config.toml");
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            config = toml::from_str(&content)
                .map_err(|e| Error::Config(format!("Invalid config file: {}", e)))?;
        }

        config.apply_overrides(lookup)?;
        config.validate()?;

        Ok(config)
    }

    /// Applies overrides from environment-style variables.
    ///
    /// Supported variables:
    /// - `DOHAS_LANGUAGE` - hindi/english
    /// - `DOHAS_SORT_ORDER` - asc/desc
    /// - `DOHAS_DATA_DIR` - storage directory
    /// - `DOHAS_PROJECT_ID`, `DOHAS_DATASET`, `DOHAS_API_VERSION`, `DOHAS_API_TOKEN`
    /// - `DOHAS_TIMEOUT_SECS` - request timeout
    ///
    /// # Errors
    ///
    /// Returns an error if a variable holds an unparsable value.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("DOHAS_LANGUAGE") {
            self.language = val.parse()?;
        }

        if let Some(val) = lookup("DOHAS_SORT_ORDER") {
            self.sort_order = val.parse()?;
        }

        if let Some(val) = lookup("DOHAS_DATA_DIR") {
            self.data_dir = Some(PathBuf::from(val));
        }

        if let Some(val) = lookup("DOHAS_PROJECT_ID") {
            self.remote.project_id = val;
        }
        if let Some(val) = lookup("DOHAS_DATASET") {
            self.remote.dataset = val;
        }
        if let Some(val) = lookup("DOHAS_API_VERSION") {
            self.remote.api_version = val;
        }
        if let Some(val) = lookup("DOHAS_API_TOKEN") {
            self.remote.token = val;
        }

        if let Some(val) = lookup("DOHAS_TIMEOUT_SECS") {
            self.remote.timeout_secs = val.parse().map_err(|_| {
                Error::Config("DOHAS_TIMEOUT_SECS must be a positive number".to_string())
            })?;
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - timeout_secs is zero
    /// - api_version contains anything but digits and dashes
    fn validate(&self) -> Result<()> {
        if self.remote.timeout_secs == 0 {
            return Err(Error::Config(
                "timeout_secs must be greater than 0".to_string(),
            ));
        }

        let version = &self.remote.api_version;
        if !version.chars().all(|c| c.is_ascii_digit() || c == '-') {
            return Err(Error::Config(format!(
                "api_version must look like YYYY-MM-DD, got {}",
                version
            )));
        }

        Ok(())
    }

    /// Saves the configuration to `<config_dir>/config.toml`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, config_dir: &Path) -> Result<()> {
        let config_path = config_dir.join("config.toml");
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}
