//! Error types for homebak-core

use thiserror::Error;

/// Result type alias using homebak-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for homebak
#[derive(Error, Debug)]
pub enum Error {
    /// Include/exclude configuration has the wrong shape
    #[error("Invalid backup configuration: {message}")]
    ConfigShape { message: String },

    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Home directory could not be determined
    #[error("Home directory error: {message}")]
    HomeDir { message: String },

    /// Backup destination is unusable
    #[error("Destination '{path}': {message}")]
    Destination { path: String, message: String },

    /// External transfer program could not be found
    #[error("{tool}: command not found")]
    ToolUnavailable { tool: String },

    /// External transfer program exited with a failure status
    #[error("{}", transfer_failure(.code))]
    TransferProcess { code: Option<i32> },
}

fn transfer_failure(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("Transfer process exited with status {}", code),
        None => "Transfer process was terminated by a signal".to_string(),
    }
}

impl Error {
    /// Create a config shape error
    pub fn config_shape(message: impl Into<String>) -> Self {
        Self::ConfigShape {
            message: message.into(),
        }
    }

    /// Create a config not found error
    pub fn config_not_found(path: impl Into<String>) -> Self {
        Self::ConfigNotFound { path: path.into() }
    }

    /// Create a home directory error
    pub fn home_dir(message: impl Into<String>) -> Self {
        Self::HomeDir {
            message: message.into(),
        }
    }

    /// Create a destination error
    pub fn destination(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Destination {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a tool unavailable error
    pub fn tool_unavailable(tool: impl Into<String>) -> Self {
        Self::ToolUnavailable { tool: tool.into() }
    }

    /// Create a transfer process error from an exit code
    pub fn transfer_process(code: Option<i32>) -> Self {
        Self::TransferProcess { code }
    }
}
