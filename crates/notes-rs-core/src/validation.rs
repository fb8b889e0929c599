//! Field validation for note payloads.
//!
//! Values are trimmed before their length is checked and the trimmed value is
//! what gets stored. Lengths count characters, not bytes.

use crate::error::{FieldError, FieldErrorKind, ValidationErrors};
use crate::types::{NoteContent, NoteCreate, NoteTitle, NoteUpdate};

/// Maximum title length in characters.
pub const TITLE_MAX_CHARS: usize = 200;
/// Maximum content length in characters.
pub const CONTENT_MAX_CHARS: usize = 10_000;

const TITLE_FIELD: &str = "title";
const CONTENT_FIELD: &str = "content";

impl NoteTitle {
    /// Trim and validate a raw title.
    pub fn parse(raw: &str) -> Result<Self, FieldError> {
        bounded_trimmed(TITLE_FIELD, raw, TITLE_MAX_CHARS).map(Self::new_unchecked)
    }
}

impl NoteContent {
    /// Trim and validate raw content.
    pub fn parse(raw: &str) -> Result<Self, FieldError> {
        bounded_trimmed(CONTENT_FIELD, raw, CONTENT_MAX_CHARS).map(Self::new_unchecked)
    }
}

impl NoteCreate {
    /// Validate both required fields, reporting every failure at once.
    pub fn parse(title: Option<&str>, content: Option<&str>) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let title = required(TITLE_FIELD, title, NoteTitle::parse, &mut errors);
        let content = required(CONTENT_FIELD, content, NoteContent::parse, &mut errors);
        match (title, content) {
            (Some(title), Some(content)) if errors.is_empty() => Ok(Self { title, content }),
            _ => Err(errors),
        }
    }
}

impl NoteUpdate {
    /// Validate whichever fields are present; absent fields stay `None`.
    pub fn parse(title: Option<&str>, content: Option<&str>) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let title = optional(title, NoteTitle::parse, &mut errors);
        let content = optional(content, NoteContent::parse, &mut errors);
        if errors.is_empty() {
            Ok(Self { title, content })
        } else {
            Err(errors)
        }
    }
}

fn required<T>(
    field: &str,
    raw: Option<&str>,
    parse: impl Fn(&str) -> Result<T, FieldError>,
    errors: &mut ValidationErrors,
) -> Option<T> {
    match raw {
        Some(raw) => optional(Some(raw), parse, errors),
        None => {
            errors.push(FieldError::body(
                field,
                FieldErrorKind::Missing,
                "Field required",
            ));
            None
        }
    }
}

fn optional<T>(
    raw: Option<&str>,
    parse: impl Fn(&str) -> Result<T, FieldError>,
    errors: &mut ValidationErrors,
) -> Option<T> {
    match parse(raw?) {
        Ok(value) => Some(value),
        Err(err) => {
            errors.push(err);
            None
        }
    }
}

fn bounded_trimmed(field: &str, raw: &str, max_chars: usize) -> Result<String, FieldError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FieldError::body(
            field,
            FieldErrorKind::StringTooShort,
            "String should have at least 1 character",
        ));
    }
    if trimmed.chars().count() > max_chars {
        return Err(FieldError::body(
            field,
            FieldErrorKind::StringTooLong,
            format!("String should have at most {max_chars} characters"),
        ));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn title_is_trimmed() {
        let title = NoteTitle::parse("  Groceries \n").expect("title");
        assert_eq!(title.as_str(), "Groceries");
    }

    #[test]
    fn whitespace_only_title_is_too_short() {
        let err = NoteTitle::parse("   ").unwrap_err();
        assert_eq!(err.kind, FieldErrorKind::StringTooShort);
        assert_eq!(err.loc, vec!["body".to_string(), "title".to_string()]);
    }

    #[test]
    fn title_limit_counts_characters_after_trim() {
        let at_limit = "é".repeat(TITLE_MAX_CHARS);
        assert!(NoteTitle::parse(&format!("  {at_limit}  ")).is_ok());

        let over = "a".repeat(TITLE_MAX_CHARS + 1);
        let err = NoteTitle::parse(&over).unwrap_err();
        assert_eq!(err.kind, FieldErrorKind::StringTooLong);
    }

    #[test]
    fn content_limit() {
        assert!(NoteContent::parse(&"x".repeat(CONTENT_MAX_CHARS)).is_ok());
        let err = NoteContent::parse(&"x".repeat(CONTENT_MAX_CHARS + 1)).unwrap_err();
        assert_eq!(err.field(), "content");
        assert_eq!(err.kind, FieldErrorKind::StringTooLong);
    }

    #[test]
    fn create_reports_every_failing_field() {
        let errors = NoteCreate::parse(None, Some(" ")).unwrap_err();
        let kinds: Vec<_> = errors
            .iter()
            .map(|err| (err.field().to_string(), err.kind))
            .collect();
        assert_eq!(
            kinds,
            vec![
                ("title".to_string(), FieldErrorKind::Missing),
                ("content".to_string(), FieldErrorKind::StringTooShort),
            ]
        );
    }

    #[test]
    fn update_keeps_absent_fields_absent() {
        let update = NoteUpdate::parse(None, Some(" new body ")).expect("update");
        assert!(update.title.is_none());
        assert_eq!(update.content.expect("content").as_str(), "new body");

        assert!(NoteUpdate::parse(None, None).expect("empty").is_empty());
    }

    #[test]
    fn update_rejects_invalid_present_field() {
        let errors = NoteUpdate::parse(Some(""), None).unwrap_err();
        assert_eq!(errors.into_inner().len(), 1);
    }
}
