//! Campaign and column configuration.

use serde::{Deserialize, Serialize};

use crate::ruleset::RuleSet;

/// Maps one source field to one output field, carrying the field's rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Identifier assigned by the editing surface.
    pub id: String,
    /// Key of the source field in an input row.
    pub source_name: String,
    /// Output field key used by the export projection.
    pub display_name: String,
    /// Informational only; the engine does not enforce presence.
    pub required: bool,
    /// Position within the campaign's column order.
    pub position: u32,
    pub rules: RuleSet,
}

impl Column {
    pub fn new(
        id: impl Into<String>,
        source_name: impl Into<String>,
        display_name: impl Into<String>,
        position: u32,
    ) -> Self {
        Self {
            id: id.into(),
            source_name: source_name.into(),
            display_name: display_name.into(),
            required: false,
            position,
            rules: RuleSet::new(),
        }
    }

    #[must_use]
    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// A named transformation configuration: ordered columns plus an output
/// file-name template.
///
/// Campaigns are created and edited outside the engine and handed over as an
/// immutable snapshot for the duration of one transformation run. Identity
/// and timestamps are assigned by the persistence collaborator and passed
/// through opaquely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    /// May contain placeholder tokens (`__{date}__`, `__{original_name}__`)
    /// resolved by the output boundary.
    pub output_filename_template: String,
    pub columns: Vec<Column>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl Campaign {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Columns sorted ascending by position (stable on ties).
    pub fn columns_ordered(&self) -> Vec<&Column> {
        let mut columns: Vec<&Column> = self.columns.iter().collect();
        columns.sort_by_key(|column| column.position);
        columns
    }

    /// True when at least one column carries at least one rule.
    pub fn has_rules(&self) -> bool {
        self.columns.iter().any(|column| !column.rules.is_empty())
    }

    pub fn rule_count(&self) -> usize {
        self.columns.iter().map(|column| column.rules.len()).sum()
    }

    /// Reassign column positions to the contiguous range `0..len` following
    /// the current `columns_ordered` sequence. Callers use this after
    /// reordering columns.
    pub fn normalize_positions(&mut self) {
        self.columns.sort_by_key(|column| column.position);
        for (index, column) in self.columns.iter_mut().enumerate() {
            column.position = index as u32;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::{Rule, RuleKind};

    #[test]
    fn columns_ordered_by_position() {
        let mut campaign = Campaign::new("test");
        campaign.columns = vec![
            Column::new("c2", "email", "Email", 1),
            Column::new("c1", "name", "Name", 0),
        ];
        let ordered: Vec<&str> = campaign
            .columns_ordered()
            .iter()
            .map(|c| c.source_name.as_str())
            .collect();
        assert_eq!(ordered, ["name", "email"]);
    }

    #[test]
    fn has_rules_reflects_columns() {
        let mut campaign = Campaign::new("test");
        campaign.columns = vec![Column::new("c1", "qty", "Quantity", 0)];
        assert!(!campaign.has_rules());

        let mut rules = RuleSet::new();
        rules.push(Rule::new("r1", RuleKind::Uppercase, 0));
        campaign.columns[0].rules = rules;
        assert!(campaign.has_rules());
        assert_eq!(campaign.rule_count(), 1);
    }

    #[test]
    fn normalize_positions_closes_gaps() {
        let mut campaign = Campaign::new("test");
        campaign.columns = vec![
            Column::new("c1", "a", "A", 4),
            Column::new("c2", "b", "B", 1),
        ];
        campaign.normalize_positions();
        assert_eq!(campaign.columns[0].source_name, "b");
        assert_eq!(campaign.columns[0].position, 0);
        assert_eq!(campaign.columns[1].position, 1);
    }
}
