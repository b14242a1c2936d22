//! Transformation rules and their gating conditions.

use serde::{Deserialize, Serialize};

use crate::value::CellValue;

/// Comparison operator for a rule condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConditionOp {
    GreaterThan,
    LessThan,
    Equals,
    NotEquals,
    Contains,
    NotContains,
}

impl ConditionOp {
    /// Returns a human-readable display name for the operator.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::GreaterThan => "greater than",
            Self::LessThan => "less than",
            Self::Equals => "equals",
            Self::NotEquals => "not equals",
            Self::Contains => "contains",
            Self::NotContains => "does not contain",
        }
    }

    /// True for operators that compare numerically and fail closed when an
    /// operand does not parse as a number.
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::GreaterThan | Self::LessThan)
    }
}

/// Predicate over the current pipeline value that gates a rule.
///
/// A rule without a condition always fires. A condition whose operands
/// cannot be compared numerically fails closed for the numeric operators
/// and falls back to case-insensitive string comparison for the others.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub op: ConditionOp,
    pub value: CellValue,
}

impl Condition {
    pub fn new(op: ConditionOp, value: impl Into<CellValue>) -> Self {
        Self {
            op,
            value: value.into(),
        }
    }

    /// Short description for display, e.g. `contains "b"`.
    pub fn summary(&self) -> String {
        format!("{} \"{}\"", self.op.display_name(), self.value)
    }
}

/// The effect of a transformation rule.
///
/// Each variant carries exactly the payload its rule type needs, so the
/// "which fields are valid for which type" question never arises at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RuleKind {
    /// Upper-case the current text.
    Uppercase,
    /// Lower-case the current text.
    Lowercase,
    /// Concatenate `value` before the current text.
    AddPrefix { value: String },
    /// Concatenate `value` after the current text.
    AddSuffix { value: String },
    /// Multiply the current value by `factor`; passes through unchanged when
    /// either side is not numeric.
    MultiplyBy { factor: CellValue },
    /// Replace every literal occurrence of `search` with `replace`.
    /// No-op when `search` is empty.
    ReplaceText { search: String, replace: String },
    /// Scale the current value by `percent` percent
    /// (`current * (1 + percent / 100)`); no-op when not numeric.
    AdjustPercentage { percent: CellValue },
    /// Cap the current value at `limit`; no-op when not numeric.
    SetMaxValue { limit: CellValue },
    /// Raise the current value to at least `floor`; no-op when not numeric.
    SetMinValue { floor: CellValue },
}

impl RuleKind {
    /// Returns a human-readable display name for the rule kind.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Uppercase => "Uppercase",
            Self::Lowercase => "Lowercase",
            Self::AddPrefix { .. } => "Add prefix",
            Self::AddSuffix { .. } => "Add suffix",
            Self::MultiplyBy { .. } => "Multiply by",
            Self::ReplaceText { .. } => "Replace text",
            Self::AdjustPercentage { .. } => "Adjust percentage",
            Self::SetMaxValue { .. } => "Set max value",
            Self::SetMinValue { .. } => "Set min value",
        }
    }

    /// Short description for display, including the payload.
    pub fn summary(&self) -> String {
        match self {
            Self::Uppercase | Self::Lowercase => self.display_name().to_string(),
            Self::AddPrefix { value } | Self::AddSuffix { value } => {
                format!("{}: \"{value}\"", self.display_name())
            }
            Self::MultiplyBy { factor } => format!("Multiply by: {factor}"),
            Self::ReplaceText { search, replace } => {
                format!("Replace text: \"{search}\" -> \"{replace}\"")
            }
            Self::AdjustPercentage { percent } => format!("Adjust percentage: {percent}%"),
            Self::SetMaxValue { limit } => format!("Set max value: {limit}"),
            Self::SetMinValue { floor } => format!("Set min value: {floor}"),
        }
    }
}

/// A single transformation step in a column's pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    /// Identifier assigned by the editing surface.
    pub id: String,
    /// What the rule does.
    pub kind: RuleKind,
    /// Optional gate; the rule fires unconditionally when absent.
    pub condition: Option<Condition>,
    /// Execution order within the owning column.
    pub order: u32,
}

impl Rule {
    pub fn new(id: impl Into<String>, kind: RuleKind, order: u32) -> Self {
        Self {
            id: id.into(),
            kind,
            condition: None,
            order,
        }
    }

    #[must_use]
    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self
    }

    /// Full description for display, e.g. `Add prefix: "X-" (if contains "b")`.
    pub fn summary(&self) -> String {
        match &self.condition {
            Some(condition) => format!("{} (if {})", self.kind.summary(), condition.summary()),
            None => self.kind.summary(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_summary_includes_condition() {
        let rule = Rule::new(
            "r1",
            RuleKind::AddPrefix {
                value: "X-".to_string(),
            },
            0,
        )
        .with_condition(Condition::new(ConditionOp::Contains, "b"));
        assert_eq!(rule.summary(), "Add prefix: \"X-\" (if contains \"b\")");
    }

    #[test]
    fn replace_summary_shows_both_sides() {
        let kind = RuleKind::ReplaceText {
            search: "0".to_string(),
            replace: "9".to_string(),
        };
        assert_eq!(kind.summary(), "Replace text: \"0\" -> \"9\"");
    }
}
