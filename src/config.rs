//! Simulation settings.
//!
//! All fields have defaults, so an empty file (or no file at all) is a valid
//! configuration.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Environment variable the demo reads a config path from.
pub const CONFIG_PATH_ENV: &str = "PROCESS_LIFECYCLE_CONFIG";

const DEFAULT_IO_DELAY_MS: u64 = 1000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

/// Settings for a simulated process.
///
/// ```rust
/// use process_lifecycle::config::LifecycleConfig;
/// use std::time::Duration;
///
/// let config: LifecycleConfig = toml::from_str("io_delay_ms = 5").unwrap();
/// assert_eq!(config.io_delay(), Duration::from_millis(5));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LifecycleConfig {
    /// Pause after entering and after leaving the I/O wait, in milliseconds.
    pub io_delay_ms: u64,
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        Self {
            io_delay_ms: DEFAULT_IO_DELAY_MS,
        }
    }
}

impl LifecycleConfig {
    /// A configuration with no simulated I/O delay.
    pub fn immediate() -> Self {
        Self { io_delay_ms: 0 }
    }

    pub fn io_delay(&self) -> Duration {
        Duration::from_millis(self.io_delay_ms)
    }

    /// Read and parse a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| {
            tracing::warn!(path = %path.display(), error = %source, "Failed to read config");
            ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }
        })?;

        toml::from_str(&content).map_err(|source| {
            tracing::warn!(path = %path.display(), error = %source, "Failed to parse config");
            ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            }
        })
    }

    /// Load from the path in [`CONFIG_PATH_ENV`], or fall back to defaults
    /// when the variable is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) => Self::load(PathBuf::from(path)),
            None => Ok(Self::default()),
        }
    }
}
