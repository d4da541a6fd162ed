//! Data validation engine.
//!
//! Provides rule types and a pure-logic evaluator, without database
//! dependencies. Rules are plain data so each entity declares its
//! constraints as a table.

pub mod evaluator;
pub mod rules;

pub use evaluator::evaluate_rules;
pub use rules::{FieldRule, FieldViolation, JsonType, RuleKind, ValidationResult};
