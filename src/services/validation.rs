//! Scalar checks on inbound JSON fields.
//!
//! Request bodies are deserialized into raw [`serde_json::Value`]s so that
//! type checks stay strict: `50` is an integer and is rejected where a float
//! is required, and `"true"` is a string, not a boolean.

use serde_json::Value;

/// A field failed one of the checks below. Rendered as `"<field> <constraint>"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field} {constraint}")]
pub struct ValidationError {
    pub field: String,
    pub constraint: String,
}

impl ValidationError {
    fn new(field: &str, constraint: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            constraint: constraint.into(),
        }
    }
}

/// Fails when the field was omitted or sent as `null`.
pub fn require_present<'a>(
    value: Option<&'a Value>,
    field: &str,
) -> Result<&'a Value, ValidationError> {
    match value {
        Some(v) if !v.is_null() => Ok(v),
        _ => Err(ValidationError::new(field, "cannot be null")),
    }
}

/// Fails unless the value is an integer literal in `1..=i32::MAX`.
pub fn require_positive_integer(value: &Value, field: &str) -> Result<i32, ValidationError> {
    value
        .as_i64()
        .filter(|n| *n > 0)
        .and_then(|n| i32::try_from(n).ok())
        .ok_or_else(|| ValidationError::new(field, "must be a positive integer"))
}

/// Fails unless the value is a floating-point literal. Integer literals are rejected.
pub fn require_float(value: &Value, field: &str) -> Result<f64, ValidationError> {
    match value {
        Value::Number(n) if n.is_f64() => n
            .as_f64()
            .ok_or_else(|| ValidationError::new(field, "must be a float")),
        _ => Err(ValidationError::new(field, "must be a float")),
    }
}

/// Fails unless the value is an integer literal that fits the column type.
pub fn require_integer(value: &Value, field: &str) -> Result<i32, ValidationError> {
    value
        .as_i64()
        .and_then(|n| i32::try_from(n).ok())
        .ok_or_else(|| ValidationError::new(field, "must be an integer"))
}

/// Fails unless the value is numeric and within `[min, max]`.
pub fn require_range(
    value: &Value,
    min: f64,
    max: f64,
    field: &str,
) -> Result<f64, ValidationError> {
    value
        .as_f64()
        .filter(|n| (min..=max).contains(n))
        .ok_or_else(|| ValidationError::new(field, format!("must be between {min} and {max}")))
}

/// Fails unless the value is a JSON boolean.
pub fn require_boolean(value: &Value, field: &str) -> Result<bool, ValidationError> {
    value
        .as_bool()
        .ok_or_else(|| ValidationError::new(field, "must be a boolean"))
}
