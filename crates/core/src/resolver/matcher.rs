// Combination rule matching
// Evaluates match predicate-maps against the effective input

use crate::model::{CombinationRule, Matcher, Value};
use crate::resolver::context::EffectiveInput;

/// Whether a single matcher accepts a value.
///
/// Raw-value strict equality only; no stringification and no coercion.
pub fn matcher_satisfied(matcher: &Matcher, value: &Value) -> bool {
    match matcher {
        Matcher::Equals(candidate) => value == candidate,
        Matcher::AnyOf(candidates) => candidates.iter().any(|candidate| value == candidate),
    }
}

/// First axis in the rule's match map whose entry is not satisfied.
///
/// Absent axes evaluate as `Undefined`. `None` means the rule matches; a rule
/// with an empty match map always matches.
pub fn first_failed_axis<'a>(
    rule: &'a CombinationRule,
    input: &EffectiveInput,
) -> Option<&'a str> {
    rule.match_values
        .iter()
        .find(|(axis, matcher)| !matcher_satisfied(matcher, input.value_for_match(axis)))
        .map(|(axis, _)| axis.as_str())
}

pub fn rule_matches(rule: &CombinationRule, input: &EffectiveInput) -> bool {
    first_failed_axis(rule, input).is_none()
}

/// Stable per-rule reason string for diagnostics.
pub fn format_rule_reason(rule: &CombinationRule, failed_axis: Option<&str>) -> String {
    if rule.match_values.is_empty() {
        return "no match constraints (unconditional match)".to_string();
    }
    match failed_axis {
        None => format!("all {} match entries satisfied", rule.match_values.len()),
        Some(axis) => format!("match entry for axis '{}' not satisfied", axis),
    }
}
