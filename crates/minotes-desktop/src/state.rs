//! Application state management
//!
//! The workspace lives in a signal shared through a Dioxus context provider.
//! Components read its display projection and route user actions through
//! the methods below.

use dioxus::prelude::*;

use minotes_core::{JsonFileStore, NoteId, Workspace, WorkspaceView};

use crate::services::show_validation_error;
use crate::theme::Palette;

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Note collection plus selection and editing state
    pub workspace: Signal<Workspace<JsonFileStore>>,
    /// Colors used by every component
    pub palette: Palette,
}

impl AppState {
    /// Render model for the current workspace state
    #[must_use]
    pub fn view(&self) -> WorkspaceView {
        self.workspace.read().view()
    }

    pub fn select(&mut self, id: &NoteId) {
        self.workspace.write().select(Some(id));
    }

    pub fn start_create(&mut self) {
        self.workspace.write().start_create();
    }

    pub fn start_edit(&mut self) {
        self.workspace.write().start_edit();
    }

    pub fn change_title(&mut self, text: &str) {
        self.workspace.write().change_draft_title(text);
    }

    pub fn change_content(&mut self, text: &str) {
        self.workspace.write().change_draft_content(text);
    }

    /// Save the draft, telling the user when it is rejected
    pub fn save(&mut self) {
        // Release the write guard before a dialog blocks the thread.
        let result = self.workspace.write().save();
        match result {
            Ok(Some(id)) => tracing::debug!("Saved note {}", id),
            Ok(None) => {}
            Err(e) if e.is_validation() => show_validation_error(&e.to_string()),
            Err(e) => tracing::error!("Failed to save note: {}", e),
        }
    }

    pub fn cancel_edit(&mut self) {
        self.workspace.write().cancel_edit();
    }

    pub fn request_delete(&mut self) {
        self.workspace.write().request_delete();
    }

    pub fn confirm_delete(&mut self) {
        let removed = self.workspace.write().confirm_delete();
        if let Some(note) = removed {
            tracing::debug!("Removed note {}", note.id);
        }
    }

    pub fn cancel_delete(&mut self) {
        self.workspace.write().cancel_delete();
    }
}
