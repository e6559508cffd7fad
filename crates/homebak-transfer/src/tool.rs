//! Transfer program discovery.

use homebak_core::{Error, Result};
use std::path::PathBuf;
use tracing::debug;

/// Locate `program` on PATH (or validate it when given as a path).
pub fn resolve_tool(program: &str) -> Result<PathBuf> {
    match which::which(program) {
        Ok(path) => {
            debug!("{}: command found at {}", program, path.display());
            Ok(path)
        }
        Err(_) => Err(Error::tool_unavailable(program)),
    }
}
