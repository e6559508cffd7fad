//! Filter rule values and their rsync rendering.

use std::fmt;

/// Pattern matching everything; the final rule of every rule set
pub const CATCH_ALL: &str = "*";

/// Whether a rule admits or rejects matching paths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    Include,
    Exclude,
}

/// A single include or exclude directive
///
/// `pattern` is exactly what the transfer tool matches against.
/// `recursive` marks rules covering a directory and everything below it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rule {
    pub kind: RuleKind,
    pub pattern: String,
    pub recursive: bool,
}

impl Rule {
    /// Include a directory and everything beneath it.
    pub fn include_tree(path: &str) -> Self {
        Self {
            kind: RuleKind::Include,
            pattern: format!("{}/***", path),
            recursive: true,
        }
    }

    /// Include a directory itself so the tool descends into it.
    pub fn include_dir(path: &str) -> Self {
        Self {
            kind: RuleKind::Include,
            pattern: format!("{}/", path),
            recursive: false,
        }
    }

    /// Include a single regular file.
    pub fn include_file(path: &str) -> Self {
        Self {
            kind: RuleKind::Include,
            pattern: path.to_string(),
            recursive: false,
        }
    }

    /// Exclude a pattern, passed through untouched.
    pub fn exclude(pattern: &str) -> Self {
        Self {
            kind: RuleKind::Exclude,
            pattern: pattern.to_string(),
            recursive: false,
        }
    }

    /// Exclude everything not matched by an earlier rule.
    pub fn catch_all() -> Self {
        Self::exclude(CATCH_ALL)
    }

    pub fn is_catch_all(&self) -> bool {
        self.kind == RuleKind::Exclude && self.pattern == CATCH_ALL
    }

    /// Rendered form, also used as the de-duplication key.
    pub fn key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            RuleKind::Include => write!(f, "--include={}", self.pattern),
            RuleKind::Exclude => write!(f, "--exclude={}", self.pattern),
        }
    }
}
