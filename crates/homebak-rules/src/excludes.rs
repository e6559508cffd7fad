//! Exclude rule generation.

use crate::log::RuleLog;
use crate::rule::Rule;
use crate::ruleset::RuleList;

const SCOPE: &str = "exclude_rules";

/// Add one exclude rule per configured pattern, in configuration order.
///
/// Patterns are not checked against the filesystem; the transfer tool
/// decides their scope from the pattern text.
pub fn add_exclude_rules(patterns: &[String], rules: &mut RuleList, log: &dyn RuleLog) {
    for pattern in patterns {
        if !rules.push(Rule::exclude(pattern)) {
            log.debug(SCOPE, &format!("Duplicate exclude '{}' ignored", pattern));
        }
    }
}
