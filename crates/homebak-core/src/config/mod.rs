//! Backup configuration loading

mod loader;

pub use loader::{BackupConfig, ConfigSource, LoadedConfig, USER_CONFIG_PATH};
