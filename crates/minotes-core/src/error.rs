//! Error types for minotes-core

use thiserror::Error;

/// Result type alias using minotes-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in minotes-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A draft was rejected on save
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Note not found
    #[error("Note not found: {0}")]
    NotFound(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Reasons a draft cannot be saved.
///
/// The display text is shown to the user verbatim.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Title is empty after trimming whitespace
    #[error("Title cannot be empty")]
    EmptyTitle,
}

impl Error {
    /// Whether this error is a user-facing validation failure.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
