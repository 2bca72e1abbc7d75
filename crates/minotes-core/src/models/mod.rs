//! Data models for Minotes

mod draft;
mod note;
pub mod timestamp;

pub use draft::Draft;
pub use note::{Note, NoteId, CONTENT_MAX_CHARS, PREVIEW_CHARS, TITLE_MAX_CHARS};
