//! Uncommitted title/content pair

use super::note::{Note, CONTENT_MAX_CHARS, TITLE_MAX_CHARS};
use crate::util::truncate_chars;

/// The title and content being edited, before they are saved
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub content: String,
}

impl Draft {
    /// Draft seeded from an existing note
    #[must_use]
    pub fn from_note(note: &Note) -> Self {
        Self {
            title: note.title.clone(),
            content: note.content.clone(),
        }
    }

    /// Set the title, capped at `TITLE_MAX_CHARS`
    pub fn set_title(&mut self, text: &str) {
        self.title = truncate_chars(text, TITLE_MAX_CHARS);
    }

    /// Set the content, capped at `CONTENT_MAX_CHARS`
    pub fn set_content(&mut self, text: &str) {
        self.content = truncate_chars(text, CONTENT_MAX_CHARS);
    }

    /// Whether the title is blank after trimming
    #[must_use]
    pub fn has_blank_title(&self) -> bool {
        self.title.trim().is_empty()
    }

    /// Characters left before the title limit
    #[must_use]
    pub fn title_remaining(&self) -> usize {
        TITLE_MAX_CHARS.saturating_sub(self.title.chars().count())
    }

    /// Characters left before the content limit
    #[must_use]
    pub fn content_remaining(&self) -> usize {
        CONTENT_MAX_CHARS.saturating_sub(self.content.chars().count())
    }
}
