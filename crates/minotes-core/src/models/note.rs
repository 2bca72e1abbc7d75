//! Note model

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::timestamp;
use crate::util::preview_text;

/// Maximum title length in characters
pub const TITLE_MAX_CHARS: usize = 72;

/// Maximum content length in characters
pub const CONTENT_MAX_CHARS: usize = 1500;

/// Number of content characters shown in list previews
pub const PREVIEW_CHARS: usize = 35;

/// A unique identifier for a note
///
/// New ids are UUID v7 strings. Ids read from storage are kept verbatim, so
/// collections written with other id schemes still load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    /// Create a new unique note ID using UUID v7
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Get the string representation of this ID
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NoteId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for NoteId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A note in the collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Unique identifier
    pub id: NoteId,
    /// Non-empty title
    pub title: String,
    /// Plain text body, may be empty
    pub content: String,
    /// Creation timestamp, never changes
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    /// Last successful edit (equals `created_at` for untouched notes)
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Create a new note stamped with `now`
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: NoteId::new(),
            title: title.into(),
            content: content.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace title and content, moving `updated_at` forward.
    ///
    /// `updated_at` never goes backwards, even if `now` does.
    pub fn apply_edit(&mut self, title: String, content: String, now: DateTime<Utc>) {
        self.title = title;
        self.content = content;
        self.updated_at = now.max(self.updated_at);
    }

    /// Content preview for the note list
    #[must_use]
    pub fn preview(&self) -> String {
        preview_text(&self.content, PREVIEW_CHARS)
    }
}
