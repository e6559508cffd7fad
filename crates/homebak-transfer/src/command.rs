//! Transfer command assembly and invocation.

use homebak_core::{Error, Result};
use homebak_rules::RuleSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::destination::Destination;

/// Transfer program used when none is configured
pub const DEFAULT_PROGRAM: &str = "rsync";

/// Fixed transfer options
const BASE_FLAGS: &[&str] = &[
    "-a",                // Archive mode
    "-r",                // Recurse into directories
    "-m",                // Prune empty directory chains
    "-t",                // Preserve modification times
    "--delete",          // Delete extraneous files from the destination
    "--delete-excluded", // Also delete excluded files from the destination
];

/// Options passed ahead of the filter rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferFlags(Vec<String>);

impl TransferFlags {
    /// Fixed flags, preceded by `--stats` and `-v...` when `verbosity > 0`.
    pub fn new(verbosity: u8) -> Self {
        let mut flags = Vec::with_capacity(BASE_FLAGS.len() + 2);
        if verbosity > 0 {
            flags.push("--stats".to_string());
            flags.push(format!("-{}", "v".repeat(verbosity as usize)));
        }
        flags.extend(BASE_FLAGS.iter().map(|f| f.to_string()));
        Self(flags)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

/// A complete transfer invocation
#[derive(Debug, Clone)]
pub struct TransferCommand {
    program: PathBuf,
    flags: TransferFlags,
    rules: Vec<String>,
    source: String,
    destination: String,
}

impl TransferCommand {
    /// `source` is the home directory with a trailing separator, so the
    /// tool copies its contents rather than the directory itself.
    pub fn new(
        program: PathBuf,
        flags: TransferFlags,
        rules: &RuleSet,
        source: impl Into<String>,
        destination: &Destination,
    ) -> Self {
        Self {
            program,
            flags,
            rules: rules.to_args(),
            source: source.into(),
            destination: destination.target().to_string(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Arguments in invocation order: flags, rules, source, destination.
    pub fn args(&self) -> Vec<String> {
        let mut args = Vec::with_capacity(self.flags.as_slice().len() + self.rules.len() + 2);
        args.extend(self.flags.as_slice().iter().cloned());
        args.extend(self.rules.iter().cloned());
        args.push(self.source.clone());
        args.push(self.destination.clone());
        args
    }

    /// Shell-style rendering for display; not used for execution.
    pub fn display(&self) -> String {
        std::iter::once(self.program.display().to_string())
            .chain(self.args())
            .map(|arg| shell_quote(&arg))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Run the transfer to completion with inherited stdio.
    pub fn run(&self) -> Result<()> {
        debug!("Running: {}", self.display());

        let output = duct::cmd(self.program.as_path(), self.args())
            .unchecked()
            .run()?;

        if output.status.success() {
            info!("Transfer completed");
            Ok(())
        } else {
            Err(Error::transfer_process(output.status.code()))
        }
    }
}

/// Single-quote an argument when it contains shell metacharacters.
fn shell_quote(arg: &str) -> String {
    let plain = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./=:+,@%".contains(c));

    if plain {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}
