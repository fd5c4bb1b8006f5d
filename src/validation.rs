//! Request payload validation.
//!
//! Payload fields arrive as loose JSON values; the checks below follow the
//! truthiness rules the HTTP clients were written against (`null`, `false`,
//! `0` and `""` do not satisfy a required field) and turn a payload into a typed create/patch
//! value or a `NotefulError::Validation` carrying the client-facing message.

use crate::db::{FolderCreate, FolderPatch, NoteCreate, NotePatch};
use crate::error::NotefulError;
use noteful_schema::{FolderPayload, NotePayload};
use serde_json::Value;

pub const FOLDER_NAME_REQUIRED: &str = "'name' is required";
pub const FOLDER_PATCH_REQUIRED: &str = "Request body must contain 'name'";
pub const NOTE_NAME_REQUIRED: &str = "'name' is required";
pub const NOTE_FOLDER_ID_REQUIRED: &str = "'folder_id' is required";
pub const NOTE_FOLDER_ID_INVALID: &str = "A valid 'folder_id' is required";
pub const NOTE_PATCH_REQUIRED: &str =
    "Request body must contain either 'name', 'folder_id', or 'content'";
pub const NOTE_PATCH_FOLDER_ID_INVALID: &str = "Request body must contain a valid 'folder_id'";

/// `false` for `null`, `false`, `0` and `""`; `true` otherwise.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn truthy(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| is_truthy(v))
}

/// Parses an integer from a JSON number or a numeric string.
///
/// Whole floats (`4.0`) are accepted; fractional values, booleans and
/// non-numeric strings are not.
pub fn parse_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(whole_f64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(whole_f64))
        }
        _ => None,
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn whole_f64(f: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive.
    let in_range = f >= i64::MIN as f64 && f < i64::MAX as f64;
    (f.is_finite() && f.fract() == 0.0 && in_range).then(|| f as i64)
}

fn as_text(value: &Value, field: &str) -> Result<String, NotefulError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        _ => Err(NotefulError::validation(format!(
            "'{field}' must be a string"
        ))),
    }
}

pub fn validate_new_folder(payload: &FolderPayload) -> Result<FolderCreate, NotefulError> {
    let name = truthy(payload.name.as_ref())
        .ok_or_else(|| NotefulError::validation(FOLDER_NAME_REQUIRED))?;
    Ok(FolderCreate {
        name: as_text(name, "name")?,
    })
}

pub fn validate_folder_patch(payload: &FolderPayload) -> Result<FolderPatch, NotefulError> {
    let name = truthy(payload.name.as_ref())
        .ok_or_else(|| NotefulError::validation(FOLDER_PATCH_REQUIRED))?;
    Ok(FolderPatch {
        name: Some(as_text(name, "name")?),
    })
}

pub fn validate_new_note(payload: &NotePayload) -> Result<NoteCreate, NotefulError> {
    let name = truthy(payload.name.as_ref())
        .ok_or_else(|| NotefulError::validation(NOTE_NAME_REQUIRED))?;
    let folder_id = truthy(payload.folder_id.as_ref())
        .ok_or_else(|| NotefulError::validation(NOTE_FOLDER_ID_REQUIRED))?;
    let folder_id =
        parse_integer(folder_id).ok_or_else(|| NotefulError::validation(NOTE_FOLDER_ID_INVALID))?;

    let content = match payload.content.as_ref() {
        None | Some(Value::Null) => None,
        Some(v) => Some(as_text(v, "content")?),
    };

    Ok(NoteCreate {
        name: as_text(name, "name")?,
        folder_id,
        content,
    })
}

/// At least one field must be truthy; every supplied field is then written.
///
/// `content` may be cleared with `""` or `null`. `name` stays non-empty, so a
/// falsy `name` is left unchanged. A supplied `folder_id` must parse as an
/// integer even when falsy.
pub fn validate_note_patch(payload: &NotePayload) -> Result<NotePatch, NotefulError> {
    let any_truthy = [&payload.name, &payload.folder_id, &payload.content]
        .into_iter()
        .any(|field| truthy(field.as_ref()).is_some());
    if !any_truthy {
        return Err(NotefulError::validation(NOTE_PATCH_REQUIRED));
    }

    let folder_id = match payload.folder_id.as_ref() {
        None | Some(Value::Null) => None,
        Some(v) => Some(
            parse_integer(v).ok_or_else(|| NotefulError::validation(NOTE_PATCH_FOLDER_ID_INVALID))?,
        ),
    };

    let content = match payload.content.as_ref() {
        None => None,
        Some(Value::Null) => Some(None),
        Some(v) => Some(Some(as_text(v, "content")?)),
    };

    Ok(NotePatch {
        name: truthy(payload.name.as_ref())
            .map(|v| as_text(v, "name"))
            .transpose()?,
        folder_id,
        content,
    })
}
