//! Rule accumulation and final rule set assembly.

use std::collections::HashSet;

use camino::Utf8Path;
use homebak_core::{home_prefix, BackupConfig, Error, Result};

use crate::builder::RuleBuilder;
use crate::excludes::add_exclude_rules;
use crate::log::RuleLog;
use crate::probe::FilesystemProbe;
use crate::rule::{Rule, RuleKind};

const SCOPE: &str = "rule_set";

/// Ordered rules under construction, unique by rendered form
#[derive(Debug, Default, Clone)]
pub struct RuleList {
    rules: Vec<Rule>,
    keys: HashSet<String>,
}

impl RuleList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule unless an identical one is present.
    ///
    /// Returns whether the rule was added.
    pub fn push(&mut self, rule: Rule) -> bool {
        if !self.keys.insert(rule.key()) {
            return false;
        }
        self.rules.push(rule);
        true
    }

    pub fn contains(&self, rule: &Rule) -> bool {
        self.keys.contains(&rule.key())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    /// Close the list with the catch-all exclude.
    ///
    /// A configured `*` exclude is moved to the end so the catch-all is
    /// always the single last rule.
    pub fn into_rule_set(mut self) -> RuleSet {
        self.rules.retain(|rule| !rule.is_catch_all());
        self.rules.push(Rule::catch_all());
        RuleSet { rules: self.rules }
    }
}

/// The finished, immutable sequence handed to the transfer tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Build the rule set for a backup run.
    ///
    /// Excludes come first, then include chains in configuration order,
    /// then the catch-all exclude.
    pub fn assemble(
        config: &BackupConfig,
        home: &Utf8Path,
        probe: &dyn FilesystemProbe,
        log: &dyn RuleLog,
    ) -> Result<Self> {
        if config.include.is_empty() {
            let message = "The include list is empty.";
            log.fatal(SCOPE, message);
            return Err(Error::config_shape(message));
        }

        let home = home_prefix(home);
        let mut rules = RuleList::new();

        add_exclude_rules(&config.exclude, &mut rules, log);
        log.debug(SCOPE, &format!("{} exclude rules", rules.len()));

        let builder = RuleBuilder::new(&home, probe, log);
        for pattern in &config.include {
            builder.add_pattern(pattern, &mut rules);
        }

        let rule_set = rules.into_rule_set();
        log.info(
            SCOPE,
            &format!(
                "{} rules ({} include, {} exclude)",
                rule_set.len(),
                rule_set.count(RuleKind::Include),
                rule_set.count(RuleKind::Exclude)
            ),
        );

        Ok(rule_set)
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Always false; the catch-all is present in every rule set.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Number of rules of the given kind
    pub fn count(&self, kind: RuleKind) -> usize {
        self.rules.iter().filter(|r| r.kind == kind).count()
    }

    /// Rendered rules as command-line arguments
    pub fn to_args(&self) -> Vec<String> {
        self.rules.iter().map(Rule::key).collect()
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
