use email_address::EmailAddress;
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::shared::api::response::FieldMessage;

/// One violated constraint, keyed by payload field name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl From<FieldError> for FieldMessage {
    fn from(e: FieldError) -> Self {
        FieldMessage {
            field: e.field,
            message: e.message,
        }
    }
}

pub fn to_field_messages(errors: Vec<FieldError>) -> Vec<FieldMessage> {
    errors.into_iter().map(FieldMessage::from).collect()
}

// ------------------------
// Field checks
// ------------------------

pub fn require_non_empty(field: &str, value: &str) -> Option<FieldError> {
    if value.trim().is_empty() {
        Some(FieldError::new(field, format!("{field} is required")))
    } else {
        None
    }
}

pub fn require_length(field: &str, value: &str, min: usize, max: usize) -> Option<FieldError> {
    let len = value.trim().chars().count();
    if len < min {
        Some(FieldError::new(
            field,
            format!("{field} must be at least {min} characters"),
        ))
    } else if len > max {
        Some(FieldError::new(
            field,
            format!("{field} cannot exceed {max} characters"),
        ))
    } else {
        None
    }
}

pub fn require_min_length(field: &str, value: &str, min: usize) -> Option<FieldError> {
    if value.chars().count() < min {
        Some(FieldError::new(
            field,
            format!("{field} must be at least {min} characters"),
        ))
    } else {
        None
    }
}

pub fn require_email(field: &str, value: &str) -> Option<FieldError> {
    if EmailAddress::is_valid(value.trim()) {
        None
    } else {
        Some(FieldError::new(field, "Invalid email format"))
    }
}

pub fn require_non_negative(field: &str, value: i32) -> Option<FieldError> {
    if value < 0 {
        Some(FieldError::new(field, format!("{field} must not be negative")))
    } else {
        None
    }
}

/// Collapse a list of optional violations into the usual validation result.
pub fn collect(checks: Vec<Option<FieldError>>) -> Result<(), Vec<FieldError>> {
    let errors: Vec<FieldError> = checks.into_iter().flatten().collect();
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

// ------------------------
// Payload coercion
// ------------------------

/// Skill/CV id lists arrive either as a JSON array or as a JSON-encoded
/// string (multipart forms send the latter). Both decode to the same list.
pub fn deserialize_id_list<'de, D>(deserializer: D) -> Result<Option<Vec<i32>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Array(items)) => {
            let mut ids = Vec::with_capacity(items.len());
            for item in items {
                let id = item
                    .as_i64()
                    .ok_or_else(|| D::Error::custom("id list entries must be integers"))?;
                ids.push(id as i32);
            }
            Ok(Some(ids))
        }
        Some(Value::String(raw)) => serde_json::from_str::<Vec<i32>>(&raw)
            .map(Some)
            .map_err(|_| D::Error::custom("id list string must decode to an integer array")),
        Some(_) => Err(D::Error::custom("id list must be an array of integers")),
    }
}

/// Integer that may arrive string-coerced ("7" instead of 7).
pub fn deserialize_lenient_i32<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_i64()
            .map(|v| Some(v as i32))
            .ok_or_else(|| D::Error::custom("expected an integer")),
        Some(Value::String(raw)) => raw
            .trim()
            .parse::<i32>()
            .map(Some)
            .map_err(|_| D::Error::custom("expected an integer")),
        Some(_) => Err(D::Error::custom("expected an integer")),
    }
}

/// Sparse patch entry: distinguishes "field absent" (outer None, leave it
/// alone) from "field explicitly null" (inner None, clear it).
pub fn deserialize_patch_owner<'de, D>(deserializer: D) -> Result<Option<Option<i32>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Null => Ok(Some(None)),
        Value::Number(n) => n
            .as_i64()
            .map(|v| Some(Some(v as i32)))
            .ok_or_else(|| D::Error::custom("userId must be an integer")),
        Value::String(raw) => raw
            .trim()
            .parse::<i32>()
            .map(|v| Some(Some(v)))
            .map_err(|_| D::Error::custom("userId must be an integer")),
        _ => Err(D::Error::custom("userId must be an integer or null")),
    }
}
