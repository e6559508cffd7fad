//! Shared utility functions for homebak crates

use crate::error::{Error, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::path::PathBuf;

/// Get the user's home directory
///
/// Prefers the HOME environment variable over dirs::home_dir() so that
/// an overridden HOME (containers, test harnesses) is honoured.
pub fn get_home_dir() -> Result<Utf8PathBuf> {
    let home: PathBuf = match std::env::var_os("HOME").filter(|h| !h.is_empty()) {
        Some(home) => home.into(),
        None => dirs::home_dir()
            .ok_or_else(|| Error::home_dir("could not determine home directory"))?,
    };

    Utf8PathBuf::from_path_buf(home)
        .map_err(|p| Error::home_dir(format!("path is not valid UTF-8: {}", p.display())))
}

/// Render the home directory with exactly one trailing separator.
pub fn home_prefix(home: &Utf8Path) -> String {
    let trimmed = home.as_str().trim_end_matches('/');
    format!("{}/", trimmed)
}

/// The account name, taken from the last component of the home directory.
pub fn username(home: &Utf8Path) -> Result<String> {
    home.file_name()
        .map(str::to_string)
        .ok_or_else(|| Error::home_dir(format!("cannot derive a user name from '{}'", home)))
}
