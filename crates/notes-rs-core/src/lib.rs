//! Core note primitives for the notes service.
//!
//! This crate owns the note data model, the field validation rules, and the
//! in-memory repository that the HTTP server wraps.

pub mod clock;
pub mod error;
pub mod repository;
pub mod schema;
pub mod types;
pub mod validation;

/// Time source used to stamp notes.
pub use clock::{Clock, SystemClock};
/// Error types for repository callers and validation failures.
pub use error::{FieldError, FieldErrorKind, NotesCoreError, ValidationErrors};
pub use repository::NotesRepository;
/// Note model and validated payloads.
pub use types::{Note, NoteContent, NoteCreate, NoteId, NoteTitle, NoteUpdate};
pub use validation::{CONTENT_MAX_CHARS, TITLE_MAX_CHARS};
