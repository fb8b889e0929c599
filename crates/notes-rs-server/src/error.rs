//! JSON error responses for the notes API.

use notes_rs_core::{FieldError, NotesCoreError, ValidationErrors};
use rocket::Request;
use rocket::http::Status;
use rocket::response::{self, Responder};
use rocket::serde::json::Json;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// One entry of a 422 response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ErrorDetail {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl ErrorDetail {
    pub fn new(loc: &[&str], msg: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            loc: loc.iter().map(|segment| segment.to_string()).collect(),
            msg: msg.into(),
            kind: kind.into(),
        }
    }
}

impl From<FieldError> for ErrorDetail {
    fn from(error: FieldError) -> Self {
        let kind = serde_json::to_value(error.kind)
            .ok()
            .and_then(|value| value.as_str().map(str::to_string))
            .unwrap_or_default();
        Self {
            loc: error.loc,
            msg: error.msg,
            kind,
        }
    }
}

/// Body of every non-validation error: `{"detail": "<message>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct MessageBody {
    pub detail: String,
}

impl MessageBody {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

/// Body of a 422 response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ValidationBody {
    pub detail: Vec<ErrorDetail>,
}

/// Errors returned by route handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request was well formed but cannot be acted on (400).
    #[error("{0}")]
    BadRequest(String),
    /// Unknown note id (404).
    #[error("Note not found")]
    NotFound,
    /// Request failed validation (422).
    #[error("validation failed ({} errors)", .0.len())]
    Unprocessable(Vec<ErrorDetail>),
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> Status {
        match self {
            ApiError::BadRequest(_) => Status::BadRequest,
            ApiError::NotFound => Status::NotFound,
            ApiError::Unprocessable(_) => Status::UnprocessableEntity,
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::Unprocessable(errors.into_inner().into_iter().map(Into::into).collect())
    }
}

impl From<NotesCoreError> for ApiError {
    fn from(error: NotesCoreError) -> Self {
        match error {
            NotesCoreError::NotFound(_) => ApiError::NotFound,
            NotesCoreError::EmptyUpdate => ApiError::BadRequest("No fields to update".to_string()),
            NotesCoreError::Validation(errors) => errors.into(),
        }
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        let status = self.status();
        match self {
            ApiError::Unprocessable(detail) => {
                (status, Json(ValidationBody { detail })).respond_to(request)
            }
            other => (status, Json(MessageBody::new(other.to_string()))).respond_to(request),
        }
    }
}

/// Failures while assembling the server.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The configured origins could not be turned into a CORS policy.
    #[error("invalid cors configuration: {0}")]
    Cors(#[from] rocket_cors::Error),
}
