//! Condition evaluation.
//!
//! Decides whether a rule fires for the current pipeline value. Two distinct
//! default policies apply:
//!
//! - **Fail-open**: a rule with no condition always fires.
//! - **Fail-closed**: a numeric comparison (`GreaterThan`/`LessThan`) whose
//!   operands do not both parse as numbers does not fire.

use reorg_model::{CellValue, Condition, ConditionOp};

/// Evaluate a rule's condition against the current pipeline value.
///
/// `None` means the rule carries no condition and always fires. For
/// `Equals`/`NotEquals`, numeric comparison wins when both sides parse as
/// numbers; otherwise comparison falls back to case-insensitive text.
/// `Contains`/`NotContains` are case-insensitive substring tests.
///
/// Pure function; no side effects.
pub fn evaluate(current: &CellValue, condition: Option<&Condition>) -> bool {
    let Some(condition) = condition else {
        return true;
    };

    match condition.op {
        ConditionOp::GreaterThan | ConditionOp::LessThan => {
            numeric_compare(current, condition)
        }
        ConditionOp::Equals => equality_compare(current, &condition.value),
        ConditionOp::NotEquals => !equality_compare(current, &condition.value),
        ConditionOp::Contains => substring_compare(current, &condition.value),
        ConditionOp::NotContains => !substring_compare(current, &condition.value),
    }
}

fn numeric_compare(current: &CellValue, condition: &Condition) -> bool {
    let (Some(left), Some(right)) = (current.as_number(), condition.value.as_number()) else {
        return false;
    };
    match condition.op {
        ConditionOp::GreaterThan => left > right,
        ConditionOp::LessThan => left < right,
        // numeric_compare is only reached for the two operators above
        _ => false,
    }
}

fn equality_compare(current: &CellValue, expected: &CellValue) -> bool {
    if let (Some(left), Some(right)) = (current.as_number(), expected.as_number()) {
        return left == right;
    }
    // Same fold as the substring operators, so the whole string family
    // compares case-insensitively the same way.
    current.render().to_lowercase() == expected.render().to_lowercase()
}

fn substring_compare(current: &CellValue, needle: &CellValue) -> bool {
    current
        .render()
        .to_lowercase()
        .contains(&needle.render().to_lowercase())
}
