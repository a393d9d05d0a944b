//! compiler.rs - Turns a decoded rule file into a `RuleStore`.
//!
//! Every pattern is compiled and every color name resolved against the
//! registry. The first failure aborts the whole store; a partial rule set is
//! never returned.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use regex::bytes::RegexBuilder;

use crate::config::{RuleConfig, RuleEntry, MAX_PATTERN_LENGTH};
use crate::errors::CcatError;
use crate::registry::ColorRegistry;
use crate::rules::{Rule, RuleStore};

/// Compiled regex size limit, in bytes.
const REGEX_SIZE_LIMIT: usize = 10 * (1 << 20);

/// Compiles a single entry.
pub fn compile_rule(entry: &RuleEntry, registry: &ColorRegistry) -> Result<Rule, CcatError> {
    if entry.pattern.len() > MAX_PATTERN_LENGTH {
        return Err(CcatError::PatternLengthExceeded(
            entry.pattern.chars().take(32).collect(),
            entry.pattern.len(),
            MAX_PATTERN_LENGTH,
        ));
    }

    let regex = RegexBuilder::new(&entry.pattern)
        .size_limit(REGEX_SIZE_LIMIT)
        .build()
        .map_err(|source| CcatError::InvalidPattern {
            pattern: entry.pattern.clone(),
            source,
        })?;
    let color = registry.resolve(&entry.color)?;

    debug!(
        target: "ccat_core::rules",
        "Rule '{}' -> {} compiled successfully.",
        &entry.pattern, &entry.color
    );

    Ok(Rule {
        regex,
        color,
        pattern: entry.pattern.clone(),
        color_name: entry.color.clone(),
    })
}

/// Compiles all entries of `config`, preserving file order.
pub fn compile_rules(config: &RuleConfig, registry: &ColorRegistry) -> Result<RuleStore, CcatError> {
    debug!("Starting compilation of {} rules.", config.entries.len());

    let rules = config
        .entries
        .iter()
        .map(|entry| compile_rule(entry, registry))
        .collect::<Result<Vec<_>, _>>()?;

    debug!("Finished compiling rules. Total compiled: {}.", rules.len());
    Ok(RuleStore::new(rules))
}
