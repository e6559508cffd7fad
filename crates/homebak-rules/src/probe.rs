//! Filesystem queries used while generating include rules.

use camino::{Utf8Path, Utf8PathBuf};

/// What a probed path resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
    Missing,
}

/// Read-only view of the tree being backed up
pub trait FilesystemProbe {
    /// Classify a path relative to the probe's root.
    fn kind(&self, relative: &str) -> EntryKind;
}

/// Probes the local filesystem below a root directory
#[derive(Debug, Clone)]
pub struct LocalProbe {
    root: Utf8PathBuf,
}

impl LocalProbe {
    pub fn new(root: impl Into<Utf8PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Utf8Path {
        &self.root
    }
}

impl FilesystemProbe for LocalProbe {
    fn kind(&self, relative: &str) -> EntryKind {
        let path = self.root.join(relative);
        if path.is_dir() {
            EntryKind::Directory
        } else if path.is_file() {
            EntryKind::File
        } else {
            EntryKind::Missing
        }
    }
}
