//! Column pipeline: ordered, condition-gated rule application to one value.

use reorg_model::{CellValue, RuleSet};
use tracing::trace;

use crate::apply::apply_rule;
use crate::condition::evaluate;

/// Run a column's rules over one raw field value.
///
/// The working value starts as the stringified raw value. Rules execute in
/// the set's order ([`RuleSet`] keeps them sorted ascending, ties stable);
/// each rule's condition is checked against the **current** value, not the
/// original one, and a failing condition skips only that rule.
///
/// An empty rule set returns the raw value coerced to text.
pub fn run_column(raw: &CellValue, rules: &RuleSet) -> CellValue {
    let mut current = CellValue::Text(raw.render());

    for rule in rules {
        if !evaluate(&current, rule.condition.as_ref()) {
            trace!(rule = %rule.id, "condition not met, skipping rule");
            continue;
        }
        current = apply_rule(&current, &rule.kind);
    }

    current
}

#[cfg(test)]
mod tests {
    use super::*;
    use reorg_model::{Condition, ConditionOp, Rule, RuleKind};

    #[test]
    fn empty_pipeline_is_identity_modulo_stringification() {
        let rules = RuleSet::new();
        assert_eq!(
            run_column(&CellValue::from("abc"), &rules),
            CellValue::from("abc")
        );
        assert_eq!(
            run_column(&CellValue::Number(15.0), &rules),
            CellValue::from("15")
        );
    }

    #[test]
    fn rules_chain_in_order() {
        // 5 * 3 = 15, capped to 10.
        let rules = RuleSet::from_rules(vec![
            Rule::new(
                "r1",
                RuleKind::MultiplyBy {
                    factor: CellValue::Number(3.0),
                },
                0,
            ),
            Rule::new(
                "r2",
                RuleKind::SetMaxValue {
                    limit: CellValue::Number(10.0),
                },
                1,
            ),
        ]);
        assert_eq!(run_column(&CellValue::from("5"), &rules), CellValue::Number(10.0));
    }

    #[test]
    fn order_field_wins_over_insertion_order() {
        // Suffix is listed first but ordered second.
        let rules = RuleSet::from_rules(vec![
            Rule::new(
                "suffix",
                RuleKind::AddSuffix {
                    value: "!".to_string(),
                },
                5,
            ),
            Rule::new("upper", RuleKind::Uppercase, 1),
        ]);
        assert_eq!(run_column(&CellValue::from("ab"), &rules), CellValue::from("AB!"));
    }

    #[test]
    fn condition_gates_against_the_current_value() {
        // The prefix applies first, so the equals-condition on the second
        // rule sees "X-abc", not "abc".
        let rules = RuleSet::from_rules(vec![
            Rule::new(
                "prefix",
                RuleKind::AddPrefix {
                    value: "X-".to_string(),
                },
                0,
            ),
            Rule::new("upper", RuleKind::Uppercase, 1).with_condition(Condition::new(
                ConditionOp::Equals,
                "x-abc",
            )),
        ]);
        assert_eq!(
            run_column(&CellValue::from("abc"), &rules),
            CellValue::from("X-ABC")
        );
    }

    #[test]
    fn failed_condition_skips_only_that_rule() {
        let rules = RuleSet::from_rules(vec![
            Rule::new(
                "prefix",
                RuleKind::AddPrefix {
                    value: "X-".to_string(),
                },
                0,
            )
            .with_condition(Condition::new(ConditionOp::Contains, "b")),
            Rule::new("upper", RuleKind::Uppercase, 1),
        ]);
        assert_eq!(
            run_column(&CellValue::from("abc"), &rules),
            CellValue::from("X-ABC")
        );
        assert_eq!(
            run_column(&CellValue::from("xyz"), &rules),
            CellValue::from("XYZ")
        );
    }

    #[test]
    fn numeric_value_survives_between_numeric_rules() {
        let rules = RuleSet::from_rules(vec![
            Rule::new(
                "mult",
                RuleKind::MultiplyBy {
                    factor: CellValue::Number(2.0),
                },
                0,
            ),
            Rule::new(
                "pct",
                RuleKind::AdjustPercentage {
                    percent: CellValue::Number(50.0),
                },
                1,
            ),
        ]);
        assert_eq!(run_column(&CellValue::from("10"), &rules), CellValue::Number(30.0));
    }
}
