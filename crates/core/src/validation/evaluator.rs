//! Rule evaluator — pure logic, no database access.

use serde_json::{Map, Value};
use validator::{ValidateLength, ValidateRange};

use super::rules::{FieldRule, FieldViolation, JsonType, RuleKind, ValidationResult};

/// Evaluate all rules against a single data record.
///
/// Violations are reported in rule-table order.
pub fn evaluate_rules(rules: &[FieldRule], data: &Map<String, Value>) -> ValidationResult {
    let errors: Vec<FieldViolation> = rules
        .iter()
        .filter(|rule| !passes(rule.kind, data.get(rule.field)))
        .map(violation)
        .collect();

    ValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}

fn violation(rule: &FieldRule) -> FieldViolation {
    FieldViolation {
        field: rule.field.to_string(),
        rule: rule.kind.name().to_string(),
        message: rule.message.to_string(),
    }
}

fn passes(kind: RuleKind, value: Option<&Value>) -> bool {
    // Presence is only enforced by `Required`.
    let value = match (kind, value) {
        (RuleKind::Required, None | Some(Value::Null)) => return false,
        (RuleKind::Required, Some(Value::String(s))) => return !s.is_empty(),
        (RuleKind::Required, Some(_)) => return true,
        (_, None | Some(Value::Null)) => return true,
        (_, Some(v)) => v,
    };

    match kind {
        RuleKind::Required => true,
        RuleKind::Type(JsonType::String) => value.is_string(),
        RuleKind::Type(JsonType::Integer) => value.is_i64() || value.is_u64(),
        RuleKind::MaxLength(max) => match value.as_str() {
            Some(s) => s.validate_length(None, Some(max), None),
            None => true,
        },
        RuleKind::Range { min, max } => match value.as_i64() {
            Some(n) => n.validate_range(Some(min), Some(max), None, None),
            // Fractional or oversized numbers cannot be in an integer range.
            None => !value.is_number(),
        },
    }
}
