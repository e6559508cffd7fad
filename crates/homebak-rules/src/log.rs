//! Logging capability injected into rule generation.
//!
//! Every call names the component or operation it originates from.

use std::cell::RefCell;

/// Leveled log sink used by rule generation
pub trait RuleLog {
    fn debug(&self, scope: &str, message: &str);
    fn info(&self, scope: &str, message: &str);
    fn warn(&self, scope: &str, message: &str);
    fn fatal(&self, scope: &str, message: &str);
}

/// Forwards rule log entries to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLog;

impl RuleLog for TracingLog {
    fn debug(&self, scope: &str, message: &str) {
        tracing::debug!(scope = scope, "{}", message);
    }

    fn info(&self, scope: &str, message: &str) {
        tracing::info!(scope = scope, "{}", message);
    }

    fn warn(&self, scope: &str, message: &str) {
        tracing::warn!(scope = scope, "{}", message);
    }

    fn fatal(&self, scope: &str, message: &str) {
        tracing::error!(scope = scope, "{}", message);
    }
}

/// Severity of a recorded entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Fatal,
}

/// A single recorded log entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub level: LogLevel,
    pub scope: String,
    pub message: String,
}

/// Keeps entries in memory instead of emitting them
#[derive(Debug, Default)]
pub struct MemoryLog {
    entries: RefCell<Vec<LogEntry>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// All entries recorded so far, in order
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.borrow().clone()
    }

    /// Messages recorded at warn level
    pub fn warnings(&self) -> Vec<String> {
        self.entries
            .borrow()
            .iter()
            .filter(|e| e.level == LogLevel::Warn)
            .map(|e| e.message.clone())
            .collect()
    }

    fn record(&self, level: LogLevel, scope: &str, message: &str) {
        self.entries.borrow_mut().push(LogEntry {
            level,
            scope: scope.to_string(),
            message: message.to_string(),
        });
    }
}

impl RuleLog for MemoryLog {
    fn debug(&self, scope: &str, message: &str) {
        self.record(LogLevel::Debug, scope, message);
    }

    fn info(&self, scope: &str, message: &str) {
        self.record(LogLevel::Info, scope, message);
    }

    fn warn(&self, scope: &str, message: &str) {
        self.record(LogLevel::Warn, scope, message);
    }

    fn fatal(&self, scope: &str, message: &str) {
        self.record(LogLevel::Fatal, scope, message);
    }
}
