//! Backup destination handling.

use camino::{Utf8Path, Utf8PathBuf};
use homebak_core::{Error, Result};
use std::fs;
use std::io::ErrorKind;
use tracing::debug;

/// Permissions for a newly created per-user destination directory
pub const DESTINATION_MODE: u32 = 0o740;

/// A validated backup destination: `<base>/<username>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    base: Utf8PathBuf,
    target: Utf8PathBuf,
}

impl Destination {
    /// Validate the base directory and derive the per-user target.
    ///
    /// The base must be absolute and must already exist as a directory.
    pub fn resolve(base: &Utf8Path, username: &str) -> Result<Self> {
        if !base.is_absolute() {
            return Err(Error::destination(
                base.as_str(),
                "the provided argument isn't an absolute path",
            ));
        }

        if !base.is_dir() {
            return Err(Error::destination(
                base.as_str(),
                "base directory for backup doesn't exist",
            ));
        }
        debug!("Base directory for backup exists: {}", base);

        let trimmed = base.as_str().trim_end_matches('/');
        let target = Utf8PathBuf::from(format!("{}/{}", trimmed, username));

        Ok(Self {
            base: base.to_owned(),
            target,
        })
    }

    pub fn base(&self) -> &Utf8Path {
        &self.base
    }

    pub fn target(&self) -> &Utf8Path {
        &self.target
    }

    /// Create the target directory if needed.
    ///
    /// Returns `true` when the directory was created by this call.
    pub fn ensure_exists(&self) -> Result<bool> {
        if self.target.is_dir() {
            return Ok(false);
        }
        if self.target.exists() {
            return Err(Error::destination(
                self.target.as_str(),
                "exists but is not a directory",
            ));
        }

        let mut builder = fs::DirBuilder::new();
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(DESTINATION_MODE);
        }

        match builder.create(&self.target) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::PermissionDenied => Err(Error::destination(
                self.target.as_str(),
                "permission denied: you don't seem to have the rights to create it",
            )),
            Err(e) => Err(Error::Io(e)),
        }
    }
}
