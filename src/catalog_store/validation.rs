//! Validation of incoming field maps.
//!
//! Turns a decoded request body into the typed content a store write needs.
//! Nothing here touches the store, so a failed validation never leaves a
//! partial write behind.

use super::models::SongContent;
use serde_json::{Map, Value};
use std::fmt;

/// Decoded body: string keys to JSON values. Form-encoded bodies only ever
/// produce string values.
pub type Fields = Map<String, Value>;

/// Validation error types
#[derive(Debug, PartialEq, Eq)]
pub enum ValidationError {
    MissingBody,
    MissingField { field: &'static str },
    EmptyField { field: &'static str },
    WrongKind { field: &'static str, expected: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingBody => write!(f, "Request body is missing"),
            ValidationError::MissingField { field } => {
                write!(f, "Field '{}' is required", field)
            }
            ValidationError::EmptyField { field } => {
                write!(f, "Field '{}' is required but was empty", field)
            }
            ValidationError::WrongKind { field, expected } => {
                write!(f, "Field '{}' must be {}", field, expected)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

fn required<'a>(fields: &'a Fields, field: &'static str) -> ValidationResult<&'a Value> {
    match fields.get(field) {
        None | Some(Value::Null) => Err(ValidationError::MissingField { field }),
        Some(value) => Ok(value),
    }
}

fn required_text(fields: &Fields, field: &'static str) -> ValidationResult<String> {
    match required(fields, field)? {
        Value::String(s) if s.trim().is_empty() => Err(ValidationError::EmptyField { field }),
        Value::String(s) => Ok(s.clone()),
        _ => Err(ValidationError::WrongKind {
            field,
            expected: "a string",
        }),
    }
}

/// Accepts a JSON integer or a string holding one, since form-encoded bodies
/// carry every value as text.
fn required_track_number(fields: &Fields, field: &'static str) -> ValidationResult<u32> {
    let wrong_kind = ValidationError::WrongKind {
        field,
        expected: "a non-negative integer",
    };
    match required(fields, field)? {
        Value::Number(n) => n
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or(wrong_kind),
        Value::String(s) if s.trim().is_empty() => Err(ValidationError::EmptyField { field }),
        Value::String(s) => s.trim().parse::<u32>().map_err(|_| wrong_kind),
        _ => Err(wrong_kind),
    }
}

/// Validate the body of an artist or album create/update: only `name`.
pub fn validate_name(fields: Option<&Fields>) -> ValidationResult<String> {
    let fields = fields.ok_or(ValidationError::MissingBody)?;
    required_text(fields, "name")
}

/// Validate the body of a song create/update.
pub fn validate_song(fields: Option<&Fields>) -> ValidationResult<SongContent> {
    let fields = fields.ok_or(ValidationError::MissingBody)?;
    Ok(SongContent {
        name: required_text(fields, "name")?,
        lyrics: required_text(fields, "lyrics")?,
        track_number: required_track_number(fields, "trackNumber")?,
    })
}
