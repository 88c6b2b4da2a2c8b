//! Payload validation toolkit. Pure logic, no database or HTTP access.
//!
//! Wire payloads arrive as untyped JSON. Each entity's schema module pulls
//! its fields out of the payload with the extractors below, collecting every
//! constraint violation into a [`FieldErrors`] map. The map serializes
//! directly as the body of a 400 response, e.g.
//! `{"last_name": ["This field is required."]}`.
//!
//! Error message strings match the original service's wire behavior, so
//! existing clients keep working against the same contract.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::types::DbId;

/// Shorthand for a JSON object body.
pub type JsonMap = serde_json::Map<String, Value>;

/// Message for a required field missing from the payload.
pub const REQUIRED: &str = "This field is required.";

/// Message for an explicit JSON `null` on a non-nullable field.
pub const NOT_NULL: &str = "This field may not be null.";

/// Message for an empty (or whitespace-only) string on a non-blank field.
pub const NOT_BLANK: &str = "This field may not be blank.";

/// Message for a non-string value where a string is expected.
pub const INVALID_STRING: &str = "Not a valid string.";

/// Message for a value that cannot be read as an integer.
pub const INVALID_INTEGER: &str = "A valid integer is required.";

/// Key used for errors that concern the payload as a whole.
pub const NON_FIELD_ERRORS: &str = "non_field_errors";

pub fn max_length_message(max: usize) -> String {
    format!("Ensure this field has no more than {max} characters.")
}

pub fn min_value_message(min: i64) -> String {
    format!("Ensure this value is greater than or equal to {min}.")
}

pub fn max_value_message(max: i64) -> String {
    format!("Ensure this value is less than or equal to {max}.")
}

pub fn not_a_list_message(value: &Value) -> String {
    format!(
        "Expected a list of items but got type \"{}\".",
        json_type_name(value)
    )
}

pub fn incorrect_pk_type_message(value: &Value) -> String {
    format!(
        "Incorrect type. Expected pk value, received {}.",
        json_type_name(value)
    )
}

/// Message for a relation id that does not resolve to a stored record.
pub fn unknown_pk_message(id: DbId) -> String {
    format!("Invalid pk \"{id}\" - object does not exist.")
}

fn not_a_dict_message(value: &Value) -> String {
    format!(
        "Invalid data. Expected a dictionary, but got {}.",
        json_type_name(value)
    )
}

/// Wire-facing name for a JSON value's type.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "NoneType",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "int",
        Value::String(_) => "str",
        Value::Array(_) => "list",
        Value::Object(_) => "dict",
    }
}

/// Ordered `field name -> [messages]` map collected during validation.
///
/// Serializes transparently as the map itself, preserving the order in
/// which fields were checked.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(IndexMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one violation against a field. Multiple violations against
    /// the same field accumulate in order.
    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.0.iter()
    }

    /// Build a map holding a single violation.
    pub fn single(field: &str, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.push(field, message);
        errors
    }

    /// Finish a validation pass: `Ok(value)` if nothing was recorded,
    /// otherwise `Err(self)`.
    pub fn into_result<T>(self, value: T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            first = false;
            write!(f, "{field}: {}", messages.join(" "))?;
        }
        Ok(())
    }
}

/// Check that the payload root is a JSON object.
///
/// Anything else (a bare number, a string, a list) is rejected with a
/// `non_field_errors` entry naming the offending type.
pub fn require_object(payload: &Value) -> Result<&JsonMap, FieldErrors> {
    payload
        .as_object()
        .ok_or_else(|| FieldErrors::single(NON_FIELD_ERRORS, not_a_dict_message(payload)))
}

// ---------------------------------------------------------------------------
// String fields
// ---------------------------------------------------------------------------

/// Extract a required, non-blank string field of at most `max_len` characters.
///
/// Values are whitespace-trimmed before the blank and length checks, and the
/// trimmed value is what gets stored.
pub fn required_string(
    payload: &JsonMap,
    field: &str,
    max_len: usize,
    errors: &mut FieldErrors,
) -> Option<String> {
    match payload.get(field) {
        None => {
            errors.push(field, REQUIRED);
            None
        }
        Some(value) => check_string(value, field, max_len, errors),
    }
}

/// Extract a string field that may be absent. Absent yields `None` without
/// recording anything; present values are validated as for
/// [`required_string`].
pub fn optional_string(
    payload: &JsonMap,
    field: &str,
    max_len: usize,
    errors: &mut FieldErrors,
) -> Option<String> {
    let value = payload.get(field)?;
    check_string(value, field, max_len, errors)
}

fn check_string(
    value: &Value,
    field: &str,
    max_len: usize,
    errors: &mut FieldErrors,
) -> Option<String> {
    let s = match value {
        Value::Null => {
            errors.push(field, NOT_NULL);
            return None;
        }
        Value::String(s) => s.trim(),
        _ => {
            errors.push(field, INVALID_STRING);
            return None;
        }
    };

    if s.is_empty() {
        errors.push(field, NOT_BLANK);
        return None;
    }
    if max_len > 0 && s.chars().count() > max_len {
        errors.push(field, max_length_message(max_len));
        return None;
    }
    Some(s.to_string())
}

// ---------------------------------------------------------------------------
// Integer fields
// ---------------------------------------------------------------------------

/// Largest value an integer field accepts. All integer columns in the
/// catalog schema are 32-bit, so the bound is part of the field contract.
pub const INT_FIELD_MAX: i64 = i32::MAX as i64;

/// Extract a required integer field with an inclusive minimum.
///
/// Accepts JSON integers and strings of digits (the original service
/// coerces numeric strings); floats and everything else are rejected.
/// Values above [`INT_FIELD_MAX`] are rejected rather than truncated.
pub fn required_int(
    payload: &JsonMap,
    field: &str,
    min: i64,
    errors: &mut FieldErrors,
) -> Option<i64> {
    match payload.get(field) {
        None => {
            errors.push(field, REQUIRED);
            None
        }
        Some(value) => check_int(value, field, min, errors),
    }
}

/// Extract an integer field that may be absent (see [`optional_string`]).
pub fn optional_int(
    payload: &JsonMap,
    field: &str,
    min: i64,
    errors: &mut FieldErrors,
) -> Option<i64> {
    let value = payload.get(field)?;
    check_int(value, field, min, errors)
}

fn check_int(value: &Value, field: &str, min: i64, errors: &mut FieldErrors) -> Option<i64> {
    let n = match value {
        Value::Null => {
            errors.push(field, NOT_NULL);
            return None;
        }
        other => match coerce_int(other) {
            Some(n) => n,
            None => {
                errors.push(field, INVALID_INTEGER);
                return None;
            }
        },
    };

    if n < min {
        errors.push(field, min_value_message(min));
        return None;
    }
    if n > INT_FIELD_MAX {
        errors.push(field, max_value_message(INT_FIELD_MAX));
        return None;
    }
    Some(n)
}

fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Relation id lists
// ---------------------------------------------------------------------------

/// Extract a required list of relation ids.
///
/// An empty list is valid (a record may have no relations); each element
/// must read as an id. Duplicates are preserved here; the store layer
/// treats the list as a set.
pub fn required_id_list(
    payload: &JsonMap,
    field: &str,
    errors: &mut FieldErrors,
) -> Option<Vec<DbId>> {
    match payload.get(field) {
        None => {
            errors.push(field, REQUIRED);
            None
        }
        Some(value) => check_id_list(value, field, errors),
    }
}

/// Extract a relation id list that may be absent (see [`optional_string`]).
pub fn optional_id_list(
    payload: &JsonMap,
    field: &str,
    errors: &mut FieldErrors,
) -> Option<Vec<DbId>> {
    let value = payload.get(field)?;
    check_id_list(value, field, errors)
}

fn check_id_list(value: &Value, field: &str, errors: &mut FieldErrors) -> Option<Vec<DbId>> {
    let items = match value {
        Value::Null => {
            errors.push(field, NOT_NULL);
            return None;
        }
        Value::Array(items) => items,
        other => {
            errors.push(field, not_a_list_message(other));
            return None;
        }
    };

    let mut ids = Vec::with_capacity(items.len());
    for item in items {
        match coerce_int(item) {
            Some(id) => ids.push(id),
            None => {
                errors.push(field, incorrect_pk_type_message(item));
                return None;
            }
        }
    }
    Some(ids)
}
