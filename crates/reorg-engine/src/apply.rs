//! Rule application.
//!
//! Applies one rule's effect to the working value, assuming the rule already
//! passed its condition. A rule whose precondition does not hold (numeric
//! rule over non-numeric input, replace with an empty search term) degrades
//! to a pass-through rather than failing: one malformed rule never aborts a
//! dataset transform.

use reorg_model::{CellValue, RuleKind};
use tracing::debug;

/// Apply a single rule to the current value, producing the new value.
///
/// String rules always succeed and yield [`CellValue::Text`]; numeric rules
/// yield [`CellValue::Number`] when both operands parse and pass the input
/// through unchanged otherwise.
pub fn apply_rule(current: &CellValue, kind: &RuleKind) -> CellValue {
    match kind {
        RuleKind::Uppercase => CellValue::Text(current.render().to_uppercase()),
        RuleKind::Lowercase => CellValue::Text(current.render().to_lowercase()),
        RuleKind::AddPrefix { value } => {
            CellValue::Text(format!("{value}{}", current.render()))
        }
        RuleKind::AddSuffix { value } => {
            CellValue::Text(format!("{}{value}", current.render()))
        }
        RuleKind::MultiplyBy { factor } => {
            numeric_rule(current, factor, kind, |input, factor| input * factor)
        }
        RuleKind::ReplaceText { search, replace } => {
            if search.is_empty() {
                debug!("replace-text rule has an empty search term, passing through");
                return current.clone();
            }
            // `str::replace` matches literally, so pattern metacharacters in
            // the search term need no escaping.
            CellValue::Text(current.render().replace(search.as_str(), replace))
        }
        RuleKind::AdjustPercentage { percent } => {
            numeric_rule(current, percent, kind, |input, percent| {
                input * (1.0 + percent / 100.0)
            })
        }
        RuleKind::SetMaxValue { limit } => {
            numeric_rule(current, limit, kind, f64::min)
        }
        RuleKind::SetMinValue { floor } => {
            numeric_rule(current, floor, kind, f64::max)
        }
    }
}

fn numeric_rule(
    current: &CellValue,
    operand: &CellValue,
    kind: &RuleKind,
    op: impl Fn(f64, f64) -> f64,
) -> CellValue {
    match (current.as_number(), operand.as_number()) {
        (Some(input), Some(operand)) => CellValue::Number(op(input, operand)),
        _ => {
            debug!(
                rule = kind.display_name(),
                "non-numeric operand, passing value through"
            );
            current.clone()
        }
    }
}
