//! Bidirectional mapping between model rules and their storage form.

use tracing::{debug, warn};

use reorg_model::{CellValue, Condition, ConditionOp, Rule, RuleKind, RuleSet};

use crate::error::{CodecError, Result};
use crate::storage::StorageRule;

/// Separator joining the two replace-text terms in the storage `value`.
///
/// The encoding does not escape the separator; terms containing it are a
/// known ambiguity of the legacy format and round-trip is only guaranteed
/// for separator-free terms.
pub const REPLACE_SEPARATOR: char = '|';

const TO_UPPERCASE: &str = "TO_UPPERCASE";
const TO_LOWERCASE: &str = "TO_LOWERCASE";
const ADD_PREFIX: &str = "ADD_PREFIX";
const ADD_SUFFIX: &str = "ADD_SUFFIX";
const MULTIPLY_BY: &str = "MULTIPLY_BY";
const REPLACE_TEXT: &str = "REPLACE_TEXT";
const ADJUST_PERCENTAGE: &str = "ADJUST_PERCENTAGE";
const SET_MAX_VALUE: &str = "SET_MAX_VALUE";
const SET_MIN_VALUE: &str = "SET_MIN_VALUE";

/// Flatten rules into their storage form.
///
/// Replace-text folds `search` and `replace` into one scalar joined on
/// [`REPLACE_SEPARATOR`]; all other payloads copy through. Absent payloads
/// are omitted rather than written as null.
pub fn rules_to_storage(rules: &RuleSet) -> Vec<StorageRule> {
    rules.iter().map(rule_to_storage).collect()
}

fn rule_to_storage(rule: &Rule) -> StorageRule {
    let (rule_type, value) = match &rule.kind {
        RuleKind::Uppercase => (TO_UPPERCASE, None),
        RuleKind::Lowercase => (TO_LOWERCASE, None),
        RuleKind::AddPrefix { value } => (ADD_PREFIX, Some(CellValue::Text(value.clone()))),
        RuleKind::AddSuffix { value } => (ADD_SUFFIX, Some(CellValue::Text(value.clone()))),
        RuleKind::MultiplyBy { factor } => (MULTIPLY_BY, Some(factor.clone())),
        RuleKind::ReplaceText { search, replace } => {
            if search.contains(REPLACE_SEPARATOR) || replace.contains(REPLACE_SEPARATOR) {
                warn!(
                    rule = %rule.id,
                    "replace-text term contains the `{REPLACE_SEPARATOR}` separator; \
                     the stored value will not round-trip"
                );
            }
            (
                REPLACE_TEXT,
                Some(CellValue::Text(format!(
                    "{search}{REPLACE_SEPARATOR}{replace}"
                ))),
            )
        }
        RuleKind::AdjustPercentage { percent } => (ADJUST_PERCENTAGE, Some(percent.clone())),
        RuleKind::SetMaxValue { limit } => (SET_MAX_VALUE, Some(limit.clone())),
        RuleKind::SetMinValue { floor } => (SET_MIN_VALUE, Some(floor.clone())),
    };

    StorageRule {
        id: rule.id.clone(),
        rule_type: rule_type.to_string(),
        value,
        condition_type: rule
            .condition
            .as_ref()
            .map(|condition| condition_op_tag(condition.op).to_string()),
        condition_value: rule
            .condition
            .as_ref()
            .map(|condition| condition.value.clone()),
        order: Some(rule.order),
    }
}

/// Hydrate rules from their storage form.
///
/// Rules missing an `order` get one from their position in the incoming
/// sequence; the resulting set is normalized to contiguous order values.
///
/// # Errors
///
/// Returns [`CodecError::UnknownRuleType`] for a `type` tag outside the
/// closed set. An unrecognized condition tag, by contrast, decodes to "no
/// condition": that degrades fail-open exactly like an absent condition.
pub fn rules_from_storage(stored: &[StorageRule]) -> Result<RuleSet> {
    let rules = stored
        .iter()
        .enumerate()
        .map(|(index, rule)| rule_from_storage(rule, index))
        .collect::<Result<Vec<Rule>>>()?;
    Ok(RuleSet::from_rules(rules))
}

fn rule_from_storage(stored: &StorageRule, index: usize) -> Result<Rule> {
    let kind = match stored.rule_type.as_str() {
        TO_UPPERCASE => RuleKind::Uppercase,
        TO_LOWERCASE => RuleKind::Lowercase,
        ADD_PREFIX => RuleKind::AddPrefix {
            value: stored_text(stored),
        },
        ADD_SUFFIX => RuleKind::AddSuffix {
            value: stored_text(stored),
        },
        MULTIPLY_BY => RuleKind::MultiplyBy {
            factor: stored_scalar(stored),
        },
        REPLACE_TEXT => split_replace_value(stored),
        ADJUST_PERCENTAGE => RuleKind::AdjustPercentage {
            percent: stored_scalar(stored),
        },
        SET_MAX_VALUE => RuleKind::SetMaxValue {
            limit: stored_scalar(stored),
        },
        SET_MIN_VALUE => RuleKind::SetMinValue {
            floor: stored_scalar(stored),
        },
        other => return Err(CodecError::UnknownRuleType(other.to_string())),
    };

    Ok(Rule {
        id: stored.id.clone(),
        kind,
        condition: decode_condition(stored),
        order: stored.order.unwrap_or(index as u32),
    })
}

fn stored_text(stored: &StorageRule) -> String {
    stored
        .value
        .as_ref()
        .map(CellValue::render)
        .unwrap_or_default()
}

fn stored_scalar(stored: &StorageRule) -> CellValue {
    stored
        .value
        .clone()
        .unwrap_or_else(|| CellValue::Text(String::new()))
}

/// Split a stored replace-text scalar on the first separator occurrence.
/// Missing parts default to empty; a value without separator becomes the
/// search term with an empty replacement.
fn split_replace_value(stored: &StorageRule) -> RuleKind {
    let joined = stored_text(stored);
    let (search, replace) = match joined.split_once(REPLACE_SEPARATOR) {
        Some((search, replace)) => (search.to_string(), replace.to_string()),
        None => (joined, String::new()),
    };
    RuleKind::ReplaceText { search, replace }
}

fn decode_condition(stored: &StorageRule) -> Option<Condition> {
    let tag = stored.condition_type.as_deref()?;
    let Some(value) = stored.condition_value.clone() else {
        debug!(rule = %stored.id, "condition has no value, treating rule as unconditional");
        return None;
    };
    match parse_condition_op(tag) {
        Some(op) => Some(Condition { op, value }),
        None => {
            warn!(
                rule = %stored.id,
                condition_type = tag,
                "unrecognized condition type, treating rule as unconditional"
            );
            None
        }
    }
}

fn condition_op_tag(op: ConditionOp) -> &'static str {
    match op {
        ConditionOp::GreaterThan => "GREATER_THAN",
        ConditionOp::LessThan => "LESS_THAN",
        ConditionOp::Equals => "EQUALS",
        ConditionOp::NotEquals => "NOT_EQUALS",
        ConditionOp::Contains => "CONTAINS",
        ConditionOp::NotContains => "NOT_CONTAINS",
    }
}

fn parse_condition_op(tag: &str) -> Option<ConditionOp> {
    match tag {
        "GREATER_THAN" => Some(ConditionOp::GreaterThan),
        "LESS_THAN" => Some(ConditionOp::LessThan),
        "EQUALS" => Some(ConditionOp::Equals),
        "NOT_EQUALS" => Some(ConditionOp::NotEquals),
        "CONTAINS" => Some(ConditionOp::Contains),
        "NOT_CONTAINS" => Some(ConditionOp::NotContains),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_text_folds_into_one_scalar() {
        let mut rules = RuleSet::new();
        rules.push(Rule::new(
            "r1",
            RuleKind::ReplaceText {
                search: "0".to_string(),
                replace: "9".to_string(),
            },
            0,
        ));
        let stored = rules_to_storage(&rules);
        assert_eq!(stored[0].value, Some(CellValue::Text("0|9".to_string())));

        let back = rules_from_storage(&stored).unwrap();
        assert_eq!(back, rules);
    }

    #[test]
    fn replace_text_splits_on_first_separator_only() {
        let stored = StorageRule {
            id: "r1".to_string(),
            rule_type: REPLACE_TEXT.to_string(),
            value: Some(CellValue::Text("a|b|c".to_string())),
            condition_type: None,
            condition_value: None,
            order: Some(0),
        };
        let rules = rules_from_storage(&[stored]).unwrap();
        assert_eq!(
            rules.as_slice()[0].kind,
            RuleKind::ReplaceText {
                search: "a".to_string(),
                replace: "b|c".to_string(),
            }
        );
    }

    #[test]
    fn replace_text_without_separator_keeps_whole_value_as_search() {
        let stored = StorageRule {
            id: "r1".to_string(),
            rule_type: REPLACE_TEXT.to_string(),
            value: Some(CellValue::Text("abc".to_string())),
            condition_type: None,
            condition_value: None,
            order: None,
        };
        let rules = rules_from_storage(&[stored]).unwrap();
        assert_eq!(
            rules.as_slice()[0].kind,
            RuleKind::ReplaceText {
                search: "abc".to_string(),
                replace: String::new(),
            }
        );
    }

    #[test]
    fn missing_order_falls_back_to_sequence_position() {
        let stored = vec![
            StorageRule {
                id: "a".to_string(),
                rule_type: TO_UPPERCASE.to_string(),
                value: None,
                condition_type: None,
                condition_value: None,
                order: None,
            },
            StorageRule {
                id: "b".to_string(),
                rule_type: TO_LOWERCASE.to_string(),
                value: None,
                condition_type: None,
                condition_value: None,
                order: None,
            },
        ];
        let rules = rules_from_storage(&stored).unwrap();
        let ids: Vec<&str> = rules.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
        assert_eq!(rules.as_slice()[1].order, 1);
    }

    #[test]
    fn unknown_rule_type_is_an_error() {
        let stored = StorageRule {
            id: "r1".to_string(),
            rule_type: "EXPLODE".to_string(),
            value: None,
            condition_type: None,
            condition_value: None,
            order: None,
        };
        let err = rules_from_storage(&[stored]).unwrap_err();
        assert!(matches!(err, CodecError::UnknownRuleType(tag) if tag == "EXPLODE"));
    }

    #[test]
    fn unknown_condition_type_decodes_as_unconditional() {
        let stored = StorageRule {
            id: "r1".to_string(),
            rule_type: TO_UPPERCASE.to_string(),
            value: None,
            condition_type: Some("SOMETIMES".to_string()),
            condition_value: Some(CellValue::Text("x".to_string())),
            order: Some(0),
        };
        let rules = rules_from_storage(&[stored]).unwrap();
        assert_eq!(rules.as_slice()[0].condition, None);
    }

    #[test]
    fn condition_round_trips() {
        let mut rules = RuleSet::new();
        rules.push(
            Rule::new(
                "r1",
                RuleKind::SetMinValue {
                    floor: CellValue::Number(0.0),
                },
                0,
            )
            .with_condition(Condition::new(ConditionOp::LessThan, CellValue::Number(0.0))),
        );
        let back = rules_from_storage(&rules_to_storage(&rules)).unwrap();
        assert_eq!(back, rules);
    }
}
