//! Ordered rule container.
//!
//! `order` values are owned by the container: every insert, remove, and move
//! reassigns them as one operation, so callers never hand-maintain indices.

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::rule::Rule;

/// An ordered sequence of rules for one column.
///
/// Invariant: rules are stored sorted by `order`, and order values are the
/// contiguous range `0..len`. [`RuleSet::from_rules`] establishes the
/// invariant from arbitrary input (stable sort, ties keep input sequence);
/// the mutating methods preserve it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a rule set from rules carrying arbitrary `order` values.
    ///
    /// Rules are stably sorted ascending by `order` (ties keep their input
    /// position) and then reindexed to `0..len`.
    pub fn from_rules(mut rules: Vec<Rule>) -> Self {
        rules.sort_by_key(|rule| rule.order);
        for (index, rule) in rules.iter_mut().enumerate() {
            rule.order = index as u32;
        }
        Self { rules }
    }

    /// Append a rule; its `order` is overwritten with the next index.
    pub fn push(&mut self, mut rule: Rule) {
        rule.order = self.rules.len() as u32;
        self.rules.push(rule);
    }

    /// Remove the rule with the given id and reindex the remainder.
    pub fn remove(&mut self, id: &str) -> Result<Rule, ModelError> {
        let index = self
            .rules
            .iter()
            .position(|rule| rule.id == id)
            .ok_or_else(|| ModelError::UnknownRuleId(id.to_string()))?;
        let removed = self.rules.remove(index);
        self.reindex();
        Ok(removed)
    }

    /// Move the rule at `from` to position `to` and reindex.
    pub fn move_rule(&mut self, from: usize, to: usize) -> Result<(), ModelError> {
        let len = self.rules.len();
        for index in [from, to] {
            if index >= len {
                return Err(ModelError::RuleIndexOutOfBounds { index, len });
            }
        }
        let rule = self.rules.remove(from);
        self.rules.insert(to, rule);
        self.reindex();
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.id == id)
    }

    /// Rules in execution order.
    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    pub fn as_slice(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    fn reindex(&mut self) {
        for (index, rule) in self.rules.iter_mut().enumerate() {
            rule.order = index as u32;
        }
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

// Deserialization routes through `from_rules` so arbitrary stored order
// values are normalized on the way in.
impl<'de> Deserialize<'de> for RuleSet {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rules = Vec::<Rule>::deserialize(deserializer)?;
        Ok(Self::from_rules(rules))
    }
}
