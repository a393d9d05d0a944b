// ccat-core/src/engines/regex_engine.rs
//! A `CompositionEngine` that paints regex matches from a `RuleStore`.
//! License: MIT OR APACHE 2.0

use std::ops::Range;

use log::debug;

use crate::buffer::ColorBuffer;
use crate::engine::CompositionEngine;
use crate::rules::RuleStore;

/// Paints every rule's matches, lowest precedence first, so the first-parsed
/// rule owns any position it matches.
#[derive(Debug, Clone)]
pub struct RegexEngine {
    rules: RuleStore,
}

impl RegexEngine {
    pub fn new(rules: RuleStore) -> Self {
        Self { rules }
    }
}

impl CompositionEngine for RegexEngine {
    fn apply(&self, buffer: &mut ColorBuffer) {
        buffer.reset();
        if buffer.is_empty() || self.rules.is_empty() {
            return;
        }

        for rule in self.rules.iter_application_order() {
            let matches: Vec<Range<usize>> = rule
                .regex
                .find_iter(buffer.content())
                .map(|m| m.range())
                .collect();

            debug!(
                "Rule '{}' ({}) matched {} time(s).",
                rule.pattern,
                rule.color_name,
                matches.len()
            );

            for range in matches {
                buffer.paint(range, rule.color);
            }
        }
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}
