//! Error types for the notes core crate.

use crate::types::NoteId;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Errors surfaced to callers of the note operations.
#[derive(Debug, Error)]
pub enum NotesCoreError {
    /// Note id is unknown to the repository.
    #[error("note not found: {0}")]
    NotFound(NoteId),
    /// Update payload carried neither a title nor content.
    #[error("no fields to update")]
    EmptyUpdate,
    /// Payload failed field validation.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
}

/// Machine-readable category of a field failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorKind {
    /// Required field was absent.
    Missing,
    /// Value was empty after trimming.
    StringTooShort,
    /// Value exceeded the maximum length after trimming.
    StringTooLong,
    /// Value was present but not a string.
    StringType,
}

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Location of the offending value, e.g. `["body", "title"]`.
    pub loc: Vec<String>,
    /// Human readable description.
    pub msg: String,
    /// Failure category.
    #[serde(rename = "type")]
    pub kind: FieldErrorKind,
}

impl FieldError {
    /// Build an error located in the request body.
    pub fn body(field: &str, kind: FieldErrorKind, msg: impl Into<String>) -> Self {
        Self {
            loc: vec!["body".to_string(), field.to_string()],
            msg: msg.into(),
            kind,
        }
    }

    /// Name of the offending field (last location segment).
    pub fn field(&self) -> &str {
        self.loc.last().map(String::as_str).unwrap_or_default()
    }
}

/// All field failures collected while validating one payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure.
    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    /// True when no failures were recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over recorded failures in field order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// Consume into the underlying list.
    pub fn into_inner(self) -> Vec<FieldError> {
        self.0
    }
}

impl From<FieldError> for ValidationErrors {
    fn from(error: FieldError) -> Self {
        Self(vec![error])
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation failed")?;
        for (idx, error) in self.0.iter().enumerate() {
            let sep = if idx == 0 { ": " } else { "; " };
            write!(f, "{sep}{} ({})", error.msg, error.loc.join("."))?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}
