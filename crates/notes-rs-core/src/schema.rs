//! OpenAPI schemas for the validated string fields.

use crate::validation::{CONTENT_MAX_CHARS, TITLE_MAX_CHARS};
use utoipa::openapi::schema::{Object, ObjectBuilder, Type};

/// Schema of a note title, bounded by [`TITLE_MAX_CHARS`].
pub fn title_schema() -> Object {
    bounded_string(TITLE_MAX_CHARS)
}

/// Schema of note content, bounded by [`CONTENT_MAX_CHARS`].
pub fn content_schema() -> Object {
    bounded_string(CONTENT_MAX_CHARS)
}

fn bounded_string(max_chars: usize) -> Object {
    ObjectBuilder::new()
        .schema_type(Type::String)
        .min_length(Some(1))
        .max_length(Some(max_chars))
        .build()
}
