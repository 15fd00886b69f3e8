//! Configuration loading and typed config structures for the engine.
//!
//! The canonical configuration is a YAML file (`patchwork.yaml` by
//! convention). This module defines strongly-typed structs mirroring the
//! YAML structure and a loader that reads the file. Every field has a
//! default, so an absent file or an empty document yields a fully usable
//! configuration.

use std::path::Path;

use serde::Deserialize;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EngineConfig {
    /// Step pacing settings.
    #[serde(default)]
    pub pacing: PacingConfig,

    /// Run boundary settings.
    #[serde(default)]
    pub bounds: BoundsConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl EngineConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_yml::from_str(&contents)?)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yml::from_str(yaml)?)
    }
}

/// Pacing for timed execution.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PacingConfig {
    /// Milliseconds of elapsed run time budgeted per step (default 100).
    #[serde(default = "default_step_interval_ms")]
    pub step_interval_ms: u64,

    /// Sleep between frames of the paced runner, in milliseconds
    /// (default 16, roughly one animation frame). Zero means "do not
    /// pace": the runner steps as fast as possible instead of ticking.
    #[serde(default = "default_frame_interval_ms")]
    pub frame_interval_ms: u64,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            step_interval_ms: default_step_interval_ms(),
            frame_interval_ms: default_frame_interval_ms(),
        }
    }
}

/// Run boundaries for the headless runners.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BoundsConfig {
    /// Stop a run after this many steps, if set. Unset means "run until
    /// no rule matches" -- which never terminates for a rule set that
    /// always matches, exactly as in the interactive game.
    #[serde(default)]
    pub max_steps: Option<u64>,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Default `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

const fn default_step_interval_ms() -> u64 {
    100
}

const fn default_frame_interval_ms() -> u64 {
    16
}

fn default_log_filter() -> String {
    "info".to_owned()
}
