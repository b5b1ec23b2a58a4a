//! Configuration system for TeamForge.
//!
//! Load registry configuration from TOML or YAML files to control when
//! matching runs, where state is stored, and how the console looks.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use teamforge_config::TeamForgeConfig;
//!
//! let config = TeamForgeConfig::from_toml_str(r#"
//!     [matching]
//!     auto_match_on_register = false
//!
//!     [store]
//!     path = "state/teams.json"
//! "#).unwrap();
//!
//! assert!(!config.matching.auto_match_on_register);
//! assert!(config.matching.auto_match_on_requirement);
//! assert_eq!(config.store_path().unwrap().to_str(), Some("state/teams.json"));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use teamforge_config::TeamForgeConfig;
//!
//! let config = TeamForgeConfig::load("teamforge.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default tracing filter directive.
pub const DEFAULT_LOG_FILTER: &str = "teamforge=info";

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main TeamForge configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TeamForgeConfig {
    /// When the registry runs a bulk matching pass.
    #[serde(default)]
    pub matching: MatchingConfig,

    /// Where roster state is persisted. No store when absent.
    #[serde(default)]
    pub store: Option<StoreConfig>,

    /// Terminal output.
    #[serde(default)]
    pub console: ConsoleConfig,
}

impl TeamForgeConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file, picking the format by extension.
    ///
    /// `.yaml` and `.yml` are read as YAML, anything else as TOML.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, fails to parse, or is invalid.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml" | "yml") => Self::from_yaml_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values serde cannot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(store) = &self.store {
            if store.path.as_os_str().is_empty() {
                return Err(ConfigError::Invalid("store.path must not be empty".into()));
            }
        }
        Ok(())
    }

    /// Sets the store file path.
    pub fn with_store_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.store = Some(StoreConfig {
            path: path.into(),
            ..self.store.unwrap_or_default()
        });
        self
    }

    /// Disables both automatic matching triggers.
    pub fn without_auto_match(mut self) -> Self {
        self.matching.auto_match_on_register = false;
        self.matching.auto_match_on_requirement = false;
        self
    }

    /// Sets the tracing filter directive.
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.console.filter = Some(filter.into());
        self
    }

    /// Returns the store path, if a store is configured.
    pub fn store_path(&self) -> Option<&Path> {
        self.store.as_ref().map(|s| s.path.as_path())
    }

    /// Returns the tracing filter directive to use.
    pub fn log_filter(&self) -> &str {
        self.console.filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}

/// Matching trigger configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct MatchingConfig {
    /// Run a bulk pass after each participant registration.
    #[serde(default = "default_true")]
    pub auto_match_on_register: bool,

    /// Run a bulk pass after each requirement submission.
    #[serde(default = "default_true")]
    pub auto_match_on_requirement: bool,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            auto_match_on_register: true,
            auto_match_on_requirement: true,
        }
    }
}

/// Persistence configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct StoreConfig {
    /// Snapshot file.
    pub path: PathBuf,

    /// Pretty-print the snapshot.
    #[serde(default = "default_true")]
    pub pretty: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("teamforge-state.json"),
            pretty: true,
        }
    }
}

/// Console configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ConsoleConfig {
    /// Print the banner on startup.
    #[serde(default = "default_true")]
    pub banner: bool,

    /// Tracing filter directive, e.g. `"teamforge=debug"`.
    #[serde(default)]
    pub filter: Option<String>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            banner: true,
            filter: None,
        }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests;
