//! Include rule generation.
//!
//! Each include pattern becomes a chain of rules: one non-recursive rule
//! per ancestor directory so the transfer tool descends into it, then one
//! recursive rule for the leaf. Ancestors shared between patterns get a
//! single rule, placed where the first pattern needed it.

use crate::log::RuleLog;
use crate::normalize::normalize;
use crate::probe::{EntryKind, FilesystemProbe};
use crate::rule::Rule;
use crate::ruleset::RuleList;
use crate::segment::ComponentSequence;

const SCOPE: &str = "rule_builder";

/// Builds include rules for home-relative patterns
pub struct RuleBuilder<'a> {
    home: &'a str,
    probe: &'a dyn FilesystemProbe,
    log: &'a dyn RuleLog,
}

impl<'a> RuleBuilder<'a> {
    /// `home` is the home directory with a trailing separator; `probe`
    /// must resolve paths relative to that same directory.
    pub fn new(home: &'a str, probe: &'a dyn FilesystemProbe, log: &'a dyn RuleLog) -> Self {
        Self { home, probe, log }
    }

    /// Normalize a configured pattern and add its rules.
    ///
    /// Patterns outside the home directory contribute nothing.
    pub fn add_pattern(&self, raw: &str, rules: &mut RuleList) {
        let Some(path) = normalize(raw, self.home) else {
            self.log.debug(
                SCOPE,
                &format!("Pattern '{}' is outside {} and was skipped", raw, self.home),
            );
            return;
        };

        match ComponentSequence::split(&path) {
            Some(components) => self.add_components(&components, rules),
            None => self.log.debug(SCOPE, &format!("Pattern '{}' is empty", raw)),
        }
    }

    /// Add the ancestor and leaf rules for a component sequence.
    pub fn add_components(&self, components: &ComponentSequence, rules: &mut RuleList) {
        let last = components.len() - 1;

        for (index, path) in components.prefixes().enumerate() {
            if index == last {
                if let Some(rule) = self.check_entry(&path, true) {
                    if !rules.push(rule) {
                        self.log
                            .debug(SCOPE, &format!("Rule for '{}' already present", path));
                    }
                }
                continue;
            }

            if rules.contains(&Rule::include_dir(&path)) {
                continue;
            }

            if let Some(rule) = self.check_entry(&path, false) {
                rules.push(rule);
            }
        }
    }

    /// Probe `path` and produce the matching include rule.
    ///
    /// Directories get a recursive or descend-only rule depending on
    /// `recursive`; files get a plain rule; missing paths a warning.
    fn check_entry(&self, path: &str, recursive: bool) -> Option<Rule> {
        match self.probe.kind(path) {
            EntryKind::Directory if recursive => Some(Rule::include_tree(path)),
            EntryKind::Directory => Some(Rule::include_dir(path)),
            EntryKind::File => Some(Rule::include_file(path)),
            EntryKind::Missing => {
                self.log.warn(
                    SCOPE,
                    &format!("Item '{}' doesn't exist and will not be included.", path),
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::MemoryLog;
    use std::collections::HashMap;

    /// In-memory probe keyed by relative path
    struct FakeProbe(HashMap<&'static str, EntryKind>);

    impl FakeProbe {
        fn new(entries: &[(&'static str, EntryKind)]) -> Self {
            Self(entries.iter().copied().collect())
        }
    }

    impl FilesystemProbe for FakeProbe {
        fn kind(&self, relative: &str) -> EntryKind {
            self.0.get(relative).copied().unwrap_or(EntryKind::Missing)
        }
    }

    fn build(patterns: &[&str], probe: &FakeProbe, log: &MemoryLog) -> Vec<String> {
        let builder = RuleBuilder::new("/home/alice/", probe, log);
        let mut rules = RuleList::new();
        for pattern in patterns {
            builder.add_pattern(pattern, &mut rules);
        }
        rules.iter().map(Rule::key).collect()
    }

    #[test]
    fn test_single_directory_is_recursive() {
        let probe = FakeProbe::new(&[("Documents", EntryKind::Directory)]);
        let log = MemoryLog::new();

        assert_eq!(build(&["Documents/"], &probe, &log), vec!["--include=Documents/***"]);
        assert!(log.warnings().is_empty());
    }

    #[test]
    fn test_single_file_is_plain() {
        let probe = FakeProbe::new(&[(".bashrc", EntryKind::File)]);
        let log = MemoryLog::new();

        assert_eq!(build(&[".bashrc"], &probe, &log), vec!["--include=.bashrc"]);
    }

    #[test]
    fn test_missing_single_warns() {
        let probe = FakeProbe::new(&[]);
        let log = MemoryLog::new();

        assert!(build(&["Videos/"], &probe, &log).is_empty());
        assert_eq!(
            log.warnings(),
            vec!["Item 'Videos' doesn't exist and will not be included.".to_string()]
        );
    }

    #[test]
    fn test_chain_order() {
        let probe = FakeProbe::new(&[
            ("a", EntryKind::Directory),
            ("a/b", EntryKind::Directory),
            ("a/b/c", EntryKind::Directory),
        ]);
        let log = MemoryLog::new();

        assert_eq!(
            build(&["a/b/c"], &probe, &log),
            vec!["--include=a/", "--include=a/b/", "--include=a/b/c/***"]
        );
    }

    #[test]
    fn test_shared_ancestor_emitted_once() {
        let probe = FakeProbe::new(&[
            (".config", EntryKind::Directory),
            (".config/gtk-2.0", EntryKind::Directory),
            (".config/gtk-3.0", EntryKind::Directory),
        ]);
        let log = MemoryLog::new();

        assert_eq!(
            build(&[".config/gtk-2.0/", "~/.config/gtk-3.0/"], &probe, &log),
            vec![
                "--include=.config/",
                "--include=.config/gtk-2.0/***",
                "--include=.config/gtk-3.0/***",
            ]
        );
    }

    #[test]
    fn test_missing_leaf_keeps_ancestor() {
        let probe = FakeProbe::new(&[(".config", EntryKind::Directory)]);
        let log = MemoryLog::new();

        assert_eq!(build(&[".config/kde.org/"], &probe, &log), vec!["--include=.config/"]);
        assert_eq!(log.warnings().len(), 1);
        assert!(log.warnings()[0].contains(".config/kde.org"));
    }

    #[test]
    fn test_missing_ancestor_continues() {
        let probe = FakeProbe::new(&[]);
        let log = MemoryLog::new();

        assert!(build(&["x/y/z"], &probe, &log).is_empty());
        assert_eq!(log.warnings().len(), 3);
    }

    #[test]
    fn test_nested_file_leaf() {
        let probe = FakeProbe::new(&[
            (".ssh", EntryKind::Directory),
            (".ssh/config", EntryKind::File),
        ]);
        let log = MemoryLog::new();

        assert_eq!(
            build(&["/home/alice/.ssh/config"], &probe, &log),
            vec!["--include=.ssh/", "--include=.ssh/config"]
        );
    }

    #[test]
    fn test_outside_home_is_silent() {
        let probe = FakeProbe::new(&[("etc", EntryKind::Directory)]);
        let log = MemoryLog::new();

        assert!(build(&["/etc/"], &probe, &log).is_empty());
        assert!(log.warnings().is_empty());
    }

    #[test]
    fn test_repeated_leaf_is_deduplicated() {
        let probe = FakeProbe::new(&[("Music", EntryKind::Directory)]);
        let log = MemoryLog::new();

        assert_eq!(
            build(&["Music/", "~/Music", "/home/alice/Music/"], &probe, &log),
            vec!["--include=Music/***"]
        );
    }

    #[test]
    fn test_ancestor_check_is_exact() {
        // ".config-old/" must not hide the ancestor rule for ".config".
        let probe = FakeProbe::new(&[
            (".config-old", EntryKind::Directory),
            (".config", EntryKind::Directory),
            (".config/a", EntryKind::Directory),
        ]);
        let log = MemoryLog::new();

        assert_eq!(
            build(&[".config-old/", ".config/a/"], &probe, &log),
            vec![
                "--include=.config-old/***",
                "--include=.config/",
                "--include=.config/a/***",
            ]
        );
    }
}
