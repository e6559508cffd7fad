//! Backup configuration loading and shape validation
//!
//! Configuration is resolved with the following precedence:
//! 1. An explicit file passed by the caller
//! 2. The user config file (~/.config/homebak/config.yaml)
//! 3. Embedded defaults (built into binary)

use crate::error::{Error, Result};
use camino::{Utf8Path, Utf8PathBuf};
use rust_embed::RustEmbed;
use serde::{Deserialize, Serialize};
use serde_yaml_ng::Value;
use std::fmt;
use std::fs;

/// Embedded configuration files
#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/../../embedded/config/"]
#[prefix = ""]
struct EmbeddedConfigs;

/// Name of the embedded default configuration
const DEFAULT_CONFIG_FILE: &str = "default-backup.yaml";

/// User configuration path, relative to the home directory
pub const USER_CONFIG_PATH: &str = ".config/homebak/config.yaml";

/// Include and exclude lists driving a backup run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupConfig {
    /// Patterns to transfer (home-relative, `~/` or absolute under home)
    pub include: Vec<String>,

    /// Patterns handed verbatim to the transfer tool as excludes
    #[serde(default)]
    pub exclude: Vec<String>,
}

/// Where a loaded configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Built-in defaults
    Embedded,
    /// A YAML file on disk
    File(Utf8PathBuf),
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Embedded => write!(f, "built-in defaults"),
            ConfigSource::File(path) => write!(f, "{}", path),
        }
    }
}

/// A validated configuration together with its origin
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: BackupConfig,
    pub source: ConfigSource,
}

impl BackupConfig {
    /// Resolve and load the configuration for a run.
    pub fn load(path: Option<&Utf8Path>, home: &Utf8Path) -> Result<LoadedConfig> {
        if let Some(p) = path {
            let content = fs::read_to_string(p).map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    Error::config_not_found(p.as_str())
                } else {
                    Error::Io(e)
                }
            })?;
            return Ok(LoadedConfig {
                config: Self::from_yaml_str(&content)?,
                source: ConfigSource::File(p.to_owned()),
            });
        }

        let user_config = home.join(USER_CONFIG_PATH);
        if user_config.is_file() {
            tracing::debug!("Using user configuration {}", user_config);
            let content = fs::read_to_string(&user_config)?;
            return Ok(LoadedConfig {
                config: Self::from_yaml_str(&content)?,
                source: ConfigSource::File(user_config),
            });
        }

        Ok(LoadedConfig {
            config: Self::embedded_default()?,
            source: ConfigSource::Embedded,
        })
    }

    /// Load the configuration built into the binary.
    pub fn embedded_default() -> Result<Self> {
        let embedded_file = EmbeddedConfigs::get(DEFAULT_CONFIG_FILE).ok_or_else(|| {
            Error::config_not_found(format!("Embedded config not found: {}", DEFAULT_CONFIG_FILE))
        })?;

        let content = std::str::from_utf8(&embedded_file.data).map_err(|_| {
            Error::config_shape(format!(
                "Invalid UTF-8 in embedded config: {}",
                DEFAULT_CONFIG_FILE
            ))
        })?;

        Self::from_yaml_str(content)
    }

    /// Parse and shape-check a YAML document.
    ///
    /// `include` must be a non-empty list of strings. `exclude` must be a
    /// list of strings when present.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let value: Value = serde_yaml_ng::from_str(content)?;

        let Value::Mapping(map) = &value else {
            return Err(Error::config_shape(
                "expected a mapping with 'include' and 'exclude' lists",
            ));
        };

        match map.get("include") {
            Some(include) => {
                let count = check_string_list("include", include)?;
                if count == 0 {
                    return Err(Error::config_shape("'include' list is empty"));
                }
                tracing::debug!("List 'include' has {} elements", count);
            }
            None => return Err(Error::config_shape("missing 'include' list")),
        }

        if let Some(exclude) = map.get("exclude") {
            let count = check_string_list("exclude", exclude)?;
            tracing::debug!("List 'exclude' has {} elements", count);
        }

        Ok(serde_yaml_ng::from_value(value)?)
    }
}

/// Verify a value is a sequence of strings, returning its length.
fn check_string_list(key: &str, value: &Value) -> Result<usize> {
    let Value::Sequence(items) = value else {
        return Err(Error::config_shape(format!("'{}' is not a list", key)));
    };

    if let Some(pos) = items.iter().position(|item| !item.is_string()) {
        return Err(Error::config_shape(format!(
            "'{}' entry {} is not a string",
            key,
            pos + 1
        )));
    }

    Ok(items.len())
}
