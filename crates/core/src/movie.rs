//! Movie field constraints and shape validation.
//!
//! The constraints live in [`MOVIE_RULES`], a plain table evaluated by
//! [`crate::validation::evaluate_rules`]. Create, update and patched shapes
//! all go through [`validate_fields`] or [`validate_known_fields`] before
//! reaching the store.

use serde_json::{Map, Value};

use crate::error::CoreError;
use crate::validation::{evaluate_rules, FieldRule, FieldViolation, JsonType, RuleKind};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Entity name used in not-found errors and log events.
pub const ENTITY: &str = "Movie";

/// Maximum title length in characters.
pub const TITLE_MAX_LEN: u64 = 50;

/// Shortest allowed duration in minutes.
pub const DURATION_MIN: i64 = 1;

/// Longest allowed duration in minutes.
pub const DURATION_MAX: i64 = 360;

/// Every field a writable movie shape may carry.
pub const MOVIE_FIELDS: &[&str] = &["title", "duration", "director", "genre"];

/// Constraints shared by every writable movie shape.
pub const MOVIE_RULES: &[FieldRule] = &[
    FieldRule {
        field: "title",
        kind: RuleKind::Required,
        message: "The movie title is required.",
    },
    FieldRule {
        field: "title",
        kind: RuleKind::Type(JsonType::String),
        message: "The movie title must be a string.",
    },
    FieldRule {
        field: "title",
        kind: RuleKind::MaxLength(TITLE_MAX_LEN),
        message: "The movie title cannot be longer than 50 characters",
    },
    FieldRule {
        field: "duration",
        kind: RuleKind::Required,
        message: "The duration field is required",
    },
    FieldRule {
        field: "duration",
        kind: RuleKind::Type(JsonType::Integer),
        message: "The duration must be a whole number of minutes",
    },
    FieldRule {
        field: "duration",
        kind: RuleKind::Range {
            min: DURATION_MIN,
            max: DURATION_MAX,
        },
        message: "The duration should have at least 1 minute and at most 360 minutes",
    },
    FieldRule {
        field: "director",
        kind: RuleKind::Type(JsonType::String),
        message: "The director must be a string.",
    },
    FieldRule {
        field: "genre",
        kind: RuleKind::Type(JsonType::String),
        message: "The genre must be a string.",
    },
];

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a movie body against [`MOVIE_RULES`].
///
/// Keys outside [`MOVIE_FIELDS`] are ignored, as they are when a create or
/// update body is decoded.
pub fn validate_fields(data: &Map<String, Value>) -> Result<(), CoreError> {
    into_result(evaluate_rules(MOVIE_RULES, data).errors)
}

/// Like [`validate_fields`], but keys outside [`MOVIE_FIELDS`] are reported
/// as `unknown_field` violations after the rule-table violations.
///
/// Used for patched documents, where an added member would otherwise be
/// dropped silently.
pub fn validate_known_fields(data: &Map<String, Value>) -> Result<(), CoreError> {
    let mut errors = evaluate_rules(MOVIE_RULES, data).errors;
    errors.extend(
        data.keys()
            .filter(|key| !MOVIE_FIELDS.contains(&key.as_str()))
            .map(|key| FieldViolation {
                field: key.clone(),
                rule: "unknown_field".to_string(),
                message: format!("'{key}' is not a movie field"),
            }),
    );
    into_result(errors)
}

/// View a movie body as a JSON object.
pub fn as_object(value: &Value) -> Result<&Map<String, Value>, CoreError> {
    value
        .as_object()
        .ok_or_else(|| CoreError::Validation("Movie payload must be a JSON object".into()))
}

fn into_result(errors: Vec<FieldViolation>) -> Result<(), CoreError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(CoreError::InvalidFields(errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    fn check(value: &Value) -> Result<(), CoreError> {
        validate_known_fields(as_object(value)?)
    }

    fn violations(value: Value) -> Vec<(String, String)> {
        match check(&value) {
            Ok(()) => Vec::new(),
            Err(CoreError::InvalidFields(v)) => {
                v.into_iter().map(|v| (v.field, v.rule)).collect()
            }
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn valid_movie_passes() {
        let value = json!({"title": "Inception", "duration": 148, "director": null, "genre": "Sci-Fi"});
        assert!(check(&value).is_ok());
    }

    #[test]
    fn duration_bounds_are_inclusive() {
        for ok in [1, 360] {
            assert!(check(&json!({"title": "T", "duration": ok})).is_ok());
        }
        for bad in [0, 361] {
            assert_eq!(
                violations(json!({"title": "T", "duration": bad})),
                [("duration".to_string(), "range".to_string())]
            );
        }
    }

    #[test]
    fn title_length_boundary() {
        let fifty = "a".repeat(50);
        let fifty_one = "a".repeat(51);
        assert!(check(&json!({"title": fifty, "duration": 90})).is_ok());
        assert_eq!(
            violations(json!({"title": fifty_one, "duration": 90})),
            [("title".to_string(), "max_length".to_string())]
        );
    }

    #[test]
    fn missing_required_fields_are_reported_per_field() {
        let got = violations(json!({}));
        assert_eq!(
            got,
            [
                ("title".to_string(), "required".to_string()),
                ("duration".to_string(), "required".to_string()),
            ]
        );
    }

    #[test]
    fn empty_title_is_required_violation() {
        assert_eq!(
            violations(json!({"title": "", "duration": 90})),
            [("title".to_string(), "required".to_string())]
        );
    }

    #[test]
    fn optional_fields_must_be_strings() {
        assert_eq!(
            violations(json!({"title": "T", "duration": 90, "genre": 7})),
            [("genre".to_string(), "type_check".to_string())]
        );
    }

    #[test]
    fn unknown_fields_are_reported() {
        assert_eq!(
            violations(json!({"title": "T", "duration": 90, "rating": 5})),
            [("rating".to_string(), "unknown_field".to_string())]
        );
    }

    #[test]
    fn mistyped_required_fields_are_type_violations() {
        assert_eq!(
            violations(json!({"title": 12, "duration": 2.5})),
            [
                ("title".to_string(), "type_check".to_string()),
                ("duration".to_string(), "type_check".to_string()),
                ("duration".to_string(), "range".to_string()),
            ]
        );
        assert_eq!(
            violations(json!({"title": "T", "duration": "abc"})),
            [("duration".to_string(), "type_check".to_string())]
        );
    }

    #[test]
    fn oversized_duration_is_out_of_range() {
        assert_eq!(
            violations(json!({"title": "T", "duration": 10_000_000_000_i64})),
            [("duration".to_string(), "range".to_string())]
        );
    }

    #[test]
    fn lenient_validation_ignores_unknown_fields() {
        let body = json!({"title": "T", "duration": 90, "rating": 5});
        assert!(validate_fields(as_object(&body).unwrap()).is_ok());
    }

    #[test]
    fn non_object_shape_is_rejected() {
        assert_matches!(check(&json!([1, 2])), Err(CoreError::Validation(_)));
    }
}
