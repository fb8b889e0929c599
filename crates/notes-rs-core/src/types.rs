//! Note data types shared by the repository and the HTTP boundary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::schema::{content_schema, title_schema};
use std::fmt;
use utoipa::ToSchema;
use uuid::Uuid;

/// Unique identifier for a note.
pub type NoteId = Uuid;

/// A stored note as returned to callers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct Note {
    /// Unique identifier of the note
    #[schema(value_type = Uuid)]
    pub id: NoteId,
    /// Title of the note
    #[schema(schema_with = title_schema)]
    pub title: String,
    /// Content/body of the note
    #[schema(schema_with = content_schema)]
    pub content: String,
    /// Creation timestamp (UTC)
    pub created_at: DateTime<Utc>,
    /// Last update timestamp (UTC)
    pub updated_at: DateTime<Utc>,
}

/// A title that already passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NoteTitle(String);

/// Note content that already passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NoteContent(String);

macro_rules! validated_string {
    ($name:ident) => {
        impl $name {
            /// Borrow the validated value.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume into the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }

            pub(crate) fn new_unchecked(value: String) -> Self {
                Self(value)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }
    };
}

validated_string!(NoteTitle);
validated_string!(NoteContent);

/// Validated payload for creating a note.
#[derive(Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct NoteCreate {
    #[schema(schema_with = title_schema)]
    pub title: NoteTitle,
    #[schema(schema_with = content_schema)]
    pub content: NoteContent,
}

/// Validated payload for updating a note; `None` means "leave unchanged".
#[derive(Debug, Clone, Default, PartialEq, Eq, ToSchema)]
pub struct NoteUpdate {
    #[schema(schema_with = title_schema)]
    pub title: Option<NoteTitle>,
    #[schema(schema_with = content_schema)]
    pub content: Option<NoteContent>,
}

impl NoteUpdate {
    /// True when neither field was supplied.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}
