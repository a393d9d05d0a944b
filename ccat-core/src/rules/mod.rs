//! Rule stores: ordered regex/color pairs.
//!
//! A [`RuleStore`] keeps rules in the order they were parsed. The first rule
//! has the highest precedence, so engines paint rules back to front and the
//! earliest rule is written last.

pub mod compiler;

use regex::bytes::Regex;

use crate::color::Color;

/// A compiled pattern and the color its matches receive.
#[derive(Debug, Clone)]
pub struct Rule {
    /// The compiled pattern, matched against raw file bytes.
    pub regex: Regex,
    /// The resolved color painted over every match.
    pub color: Color,
    /// The pattern source text, kept for diagnostics.
    pub pattern: String,
    /// The color name as written in the configuration.
    pub color_name: String,
}

/// Rules in parse order. Index 0 has the highest precedence.
#[derive(Debug, Clone, Default)]
pub struct RuleStore {
    rules: Vec<Rule>,
}

impl RuleStore {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rules from highest to lowest precedence (parse order).
    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    /// Rules in the order an engine must paint them: lowest precedence first.
    pub fn iter_application_order(&self) -> std::iter::Rev<std::slice::Iter<'_, Rule>> {
        self.rules.iter().rev()
    }
}

impl<'a> IntoIterator for &'a RuleStore {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
