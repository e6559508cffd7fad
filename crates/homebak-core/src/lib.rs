//! # homebak-core
//!
//! Core library for the homebak CLI providing:
//! - Backup configuration loading (embedded defaults and YAML files)
//! - Error types shared by the homebak crates
//! - Home directory helpers

pub mod config;
pub mod error;
pub mod utils;

pub use config::BackupConfig;
pub use error::{Error, Result};
pub use utils::{get_home_dir, home_prefix, username};
