//! homebak rule generation
//!
//! Produces the ordered include/exclude filter rules handed to rsync.
//! rsync applies the first matching rule and does not descend into
//! directories that are excluded, so every ancestor of an included path
//! needs its own include rule, placed before the rules for its children.
//!
//! # Examples
//!
//! ```no_run
//! use camino::Utf8Path;
//! use homebak_core::BackupConfig;
//! use homebak_rules::{LocalProbe, RuleSet, TracingLog};
//!
//! fn main() -> homebak_core::Result<()> {
//!     let home = Utf8Path::new("/home/alice");
//!     let config = BackupConfig::embedded_default()?;
//!     let probe = LocalProbe::new(home);
//!
//!     let rules = RuleSet::assemble(&config, home, &probe, &TracingLog)?;
//!     for arg in rules.to_args() {
//!         println!("{}", arg);
//!     }
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod excludes;
pub mod log;
pub mod normalize;
pub mod probe;
pub mod rule;
pub mod ruleset;
pub mod segment;

pub use builder::RuleBuilder;
pub use excludes::add_exclude_rules;
pub use log::{LogEntry, LogLevel, MemoryLog, RuleLog, TracingLog};
pub use normalize::normalize;
pub use probe::{EntryKind, FilesystemProbe, LocalProbe};
pub use rule::{Rule, RuleKind, CATCH_ALL};
pub use ruleset::{RuleList, RuleSet};
pub use segment::ComponentSequence;
