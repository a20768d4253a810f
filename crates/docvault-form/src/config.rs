//! # Form Configuration
//!
//! Tunables of the form controller, loadable from YAML. Every field has a
//! default, so an empty document is a valid configuration.
//!
//! ```yaml
//! max_file_mib: 10
//! key_collisions: last_write_wins   # or: reject
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use docvault_core::BYTES_PER_MIB;

/// Default attachment size cap, in MiB.
pub const DEFAULT_MAX_FILE_MIB: u64 = 10;

/// What to do when two custom fields normalize to the same payload key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyCollisionPolicy {
    /// Later fields overwrite earlier ones during payload assembly.
    #[default]
    LastWriteWins,
    /// Validation fails on the first collision.
    Reject,
}

/// Errors loading or checking a [`FormConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("cannot read config {path}: {source}")]
    Read {
        /// Path that failed.
        path: String,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The YAML could not be parsed.
    #[error("invalid config YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A value is out of range.
    #[error("invalid config value for {field}: {reason}")]
    InvalidValue {
        /// Offending field.
        field: &'static str,
        /// Why it was rejected.
        reason: String,
    },
}

/// Form controller configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormConfig {
    /// Attachments larger than this many MiB are rejected.
    pub max_file_mib: u64,
    /// Handling of duplicate normalized keys in custom documents.
    pub key_collisions: KeyCollisionPolicy,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            max_file_mib: DEFAULT_MAX_FILE_MIB,
            key_collisions: KeyCollisionPolicy::default(),
        }
    }
}

impl FormConfig {
    /// Parse and check a YAML configuration.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(yaml)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and check a YAML configuration file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_file_mib == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_file_mib",
                reason: "must be greater than 0".to_string(),
            });
        }
        if self.max_file_mib.checked_mul(BYTES_PER_MIB).is_none() {
            return Err(ConfigError::InvalidValue {
                field: "max_file_mib",
                reason: format!("{} MiB overflows a byte count", self.max_file_mib),
            });
        }
        Ok(())
    }

    /// The attachment cap in bytes.
    pub fn max_file_bytes(&self) -> u64 {
        self.max_file_mib.saturating_mul(BYTES_PER_MIB)
    }
}
