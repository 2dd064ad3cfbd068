//! Schema-described payload validation.
//!
//! A schema is a static list of [`FieldSpec`]s. [`validate`] walks a JSON
//! object against it and collects every failing field instead of stopping
//! at the first one, so clients can highlight all problems at once.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    Text { max_len: usize },
    Integer { min: i64, max: i64 },
    Enum(&'static [&'static str]),
    Timestamp,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Required fields must be present.
    Create,
    /// Every field is optional; present ones are still checked.
    Patch,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Validation error: {}", join(.0))]
pub struct ValidationErrors(pub Vec<FieldError>);

fn join(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

pub const CATEGORY_VALUES: &[&str] = &["cardio", "strength", "flexibility", "hiit", "sports", "other"];
pub const DURATION_UNIT_VALUES: &[&str] = &["min", "hr"];

/// Server-assigned fields a client may never set.
pub const READ_ONLY_FIELDS: &[&str] = &["id", "userId"];

pub const EXERCISE_SCHEMA: &[FieldSpec] = &[
    FieldSpec {
        name: "name",
        kind: FieldKind::Text { max_len: 100 },
        required: true,
    },
    FieldSpec {
        name: "category",
        kind: FieldKind::Enum(CATEGORY_VALUES),
        required: true,
    },
    FieldSpec {
        name: "duration",
        kind: FieldKind::Integer { min: 1, max: 100_000 },
        required: true,
    },
    FieldSpec {
        name: "durationUnit",
        kind: FieldKind::Enum(DURATION_UNIT_VALUES),
        required: true,
    },
    FieldSpec {
        name: "calories",
        kind: FieldKind::Integer { min: 0, max: 100_000 },
        required: false,
    },
    FieldSpec {
        name: "date",
        kind: FieldKind::Timestamp,
        required: true,
    },
    FieldSpec {
        name: "notes",
        kind: FieldKind::Text { max_len: 1000 },
        required: false,
    },
];

/// Checks `body` against `schema`, normalizing timestamps to RFC 3339 in
/// place. Fields not named by the schema are left untouched.
pub fn validate(
    schema: &[FieldSpec],
    mode: Mode,
    body: &mut Map<String, Value>,
) -> Result<(), ValidationErrors> {
    let mut errors = Vec::new();

    for field in READ_ONLY_FIELDS {
        if body.contains_key(*field) {
            errors.push(FieldError::new(field, "is read-only"));
        }
    }

    for spec in schema {
        match body.get_mut(spec.name) {
            None => {
                if spec.required && mode == Mode::Create {
                    errors.push(FieldError::new(spec.name, "is required"));
                }
            }
            Some(Value::Null) => {
                if spec.required {
                    errors.push(FieldError::new(spec.name, "must not be null"));
                }
            }
            Some(value) => {
                if let Err(message) = check(spec, value) {
                    errors.push(FieldError::new(spec.name, message));
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(errors))
    }
}

fn check(spec: &FieldSpec, value: &mut Value) -> Result<(), String> {
    match spec.kind {
        FieldKind::Text { max_len } => {
            let text = value.as_str().ok_or("expected a string")?;
            if text.trim().is_empty() {
                if spec.required {
                    return Err("must not be empty".to_string());
                }
                // Blank optional text is stored as absent.
                *value = Value::Null;
                return Ok(());
            }
            if text.chars().count() > max_len {
                return Err(format!("must be at most {max_len} characters"));
            }
            Ok(())
        }
        FieldKind::Integer { min, max } => {
            let number = value.as_i64().ok_or("expected an integer")?;
            if number < min || number > max {
                return Err(format!("must be between {min} and {max}"));
            }
            Ok(())
        }
        FieldKind::Enum(allowed) => {
            let text = value.as_str().ok_or("expected a string")?;
            if allowed.contains(&text) {
                Ok(())
            } else {
                Err(format!("must be one of: {}", allowed.join(", ")))
            }
        }
        FieldKind::Timestamp => {
            let parsed = value
                .as_str()
                .and_then(parse_timestamp)
                .ok_or("expected an RFC 3339 timestamp or YYYY-MM-DD date")?;
            *value = Value::String(parsed.to_rfc3339());
            Ok(())
        }
    }
}

/// Accepts a full RFC 3339 timestamp or a bare date, read as midnight UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
}
