//! Validation rule and result types.

use serde::{Deserialize, Serialize};

/// A single declarative constraint on one field of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub field: &'static str,
    pub kind: RuleKind,
    pub message: &'static str,
}

/// The constraint a [`FieldRule`] enforces, with its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// Value must be present, non-null and not an empty string.
    Required,
    /// Value, when present and non-null, must have this JSON type.
    Type(JsonType),
    /// String value must be at most this many characters.
    MaxLength(u64),
    /// Numeric value must fall within `min..=max`.
    Range { min: i64, max: i64 },
}

/// JSON value types a [`RuleKind::Type`] rule can require.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonType {
    String,
    Integer,
}

impl RuleKind {
    /// Short machine-readable name used in violation reports.
    pub fn name(&self) -> &'static str {
        match self {
            RuleKind::Required => "required",
            RuleKind::Type(_) => "type_check",
            RuleKind::MaxLength(_) => "max_length",
            RuleKind::Range { .. } => "range",
        }
    }
}

/// Aggregated result of evaluating all rules against one record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<FieldViolation>,
}

/// A single field-level rule violation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub rule: String,
    pub message: String,
}
