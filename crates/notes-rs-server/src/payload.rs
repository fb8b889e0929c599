//! Request body decoding ahead of field validation.

use crate::error::{ApiError, ErrorDetail};
use notes_rs_core::{FieldError, FieldErrorKind, NoteCreate, NoteId, NoteUpdate, ValidationErrors};
use rocket::serde::json::{self, Json};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Data guard result for a JSON note body.
pub(crate) type JsonBody<'r> = Result<Json<Value>, json::Error<'r>>;

/// Loosely typed note body; `null` and a missing key both mean "not supplied".
#[derive(Debug, Default)]
pub(crate) struct NotePayload {
    title: Option<Value>,
    content: Option<Value>,
}

impl NotePayload {
    /// Take the note fields out of a JSON object, ignoring unknown keys.
    pub(crate) fn from_object(mut object: Map<String, Value>) -> Self {
        let mut field = |name: &str| object.remove(name).filter(|value| !value.is_null());
        Self {
            title: field("title"),
            content: field("content"),
        }
    }
}

impl NotePayload {
    /// Validate as a create payload.
    pub(crate) fn into_create(self) -> Result<NoteCreate, ApiError> {
        let mut type_errors = ValidationErrors::new();
        let title = string_field("title", self.title.as_ref(), &mut type_errors);
        let content = string_field("content", self.content.as_ref(), &mut type_errors);
        finish(NoteCreate::parse(title, content), type_errors)
    }

    /// Validate as an update payload.
    pub(crate) fn into_update(self) -> Result<NoteUpdate, ApiError> {
        let mut type_errors = ValidationErrors::new();
        let title = string_field("title", self.title.as_ref(), &mut type_errors);
        let content = string_field("content", self.content.as_ref(), &mut type_errors);
        finish(NoteUpdate::parse(title, content), type_errors)
    }
}

/// Combine type errors with field validation, one entry per field.
fn finish<T>(
    parsed: Result<T, ValidationErrors>,
    mut errors: ValidationErrors,
) -> Result<T, ApiError> {
    match parsed {
        Ok(value) if errors.is_empty() => Ok(value),
        Ok(_) => Err(errors.into()),
        Err(field_errors) => {
            for error in field_errors.into_inner() {
                let reported = errors.iter().any(|seen| seen.field() == error.field());
                if !reported {
                    errors.push(error);
                }
            }
            Err(errors.into())
        }
    }
}

/// Unwrap the data guard, mapping malformed JSON and non-object bodies to a 422.
pub(crate) fn decode(body: JsonBody<'_>) -> Result<NotePayload, ApiError> {
    match body {
        Ok(Json(Value::Object(object))) => Ok(NotePayload::from_object(object)),
        Ok(Json(_)) => Err(ApiError::Unprocessable(vec![ErrorDetail::new(
            &["body"],
            "Input should be a valid dictionary or object to extract fields from",
            "model_attributes_type",
        )])),
        Err(json::Error::Parse(_, err)) => Err(ApiError::Unprocessable(vec![ErrorDetail::new(
            &["body"],
            format!("JSON decode error: {err}"),
            "json_invalid",
        )])),
        Err(json::Error::Io(err)) => Err(ApiError::BadRequest(format!(
            "failed to read request body: {err}"
        ))),
    }
}

/// Parse the `{note_id}` path segment.
pub(crate) fn note_id(raw: &str) -> Result<NoteId, ApiError> {
    Uuid::parse_str(raw).map_err(|err| {
        ApiError::Unprocessable(vec![ErrorDetail::new(
            &["path", "note_id"],
            format!("Input should be a valid UUID, {err}"),
            "uuid_parsing",
        )])
    })
}

fn string_field<'a>(
    field: &str,
    value: Option<&'a Value>,
    errors: &mut ValidationErrors,
) -> Option<&'a str> {
    match value {
        None => None,
        Some(Value::String(raw)) => Some(raw.as_str()),
        Some(_) => {
            errors.push(FieldError::body(
                field,
                FieldErrorKind::StringType,
                "Input should be a valid string",
            ));
            None
        }
    }
}
