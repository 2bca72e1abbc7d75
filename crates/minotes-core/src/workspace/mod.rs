//! Note workspace
//!
//! Owns the note collection together with the transient UI state: which note
//! is selected, whether a draft is being edited, and whether a delete is
//! awaiting confirmation. Every change to the collection is written through
//! the [`NoteStore`] before the operation returns.
//!
//! # State machine
//!
//! | state              | selection | edit mode                    |
//! |--------------------|-----------|------------------------------|
//! | `IdleEmpty`        | none      | `NotEditing`                 |
//! | `IdleViewing`      | some      | `NotEditing`                 |
//! | `EditingNew`       | none      | `CreatingNew`                |
//! | `EditingExisting`  | some      | `EditingExisting`            |
//!
//! Delete confirmation is a flag that can only be raised in `IdleViewing`.
//! Operations whose preconditions do not hold are no-ops.

mod clock;

use crate::error::{Error, Result, ValidationError};
use crate::models::{Draft, Note, NoteId};
use crate::store::NoteStore;

pub use clock::{Clock, SystemClock};

/// What the editor form is doing, and for which note
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditMode {
    #[default]
    NotEditing,
    /// Composing a note that does not exist yet
    CreatingNew(Draft),
    /// Editing the note `target`
    EditingExisting { target: NoteId, draft: Draft },
}

impl EditMode {
    /// The draft being edited, if any
    #[must_use]
    pub const fn draft(&self) -> Option<&Draft> {
        match self {
            Self::NotEditing => None,
            Self::CreatingNew(draft) | Self::EditingExisting { draft, .. } => Some(draft),
        }
    }

    fn draft_mut(&mut self) -> Option<&mut Draft> {
        match self {
            Self::NotEditing => None,
            Self::CreatingNew(draft) | Self::EditingExisting { draft, .. } => Some(draft),
        }
    }
}

/// Coarse workspace state, derived from selection and edit mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkspaceState {
    IdleEmpty,
    IdleViewing,
    EditingNew,
    EditingExisting,
}

/// The note collection plus selection, draft, and delete confirmation
pub struct Workspace<S: NoteStore, C: Clock = SystemClock> {
    store: S,
    clock: C,
    notes: Vec<Note>,
    selected: Option<NoteId>,
    mode: EditMode,
    confirm_delete: bool,
    last_persist_error: Option<String>,
}

impl<S: NoteStore> Workspace<S> {
    /// Open a workspace over `store` using the system clock
    pub fn open(store: S) -> Self {
        Self::open_with_clock(store, SystemClock)
    }
}

impl<S: NoteStore, C: Clock> Workspace<S, C> {
    /// Open a workspace over `store` with an explicit time source.
    ///
    /// Unreadable stored data is logged and replaced by an empty collection.
    /// The most recently updated note starts selected.
    pub fn open_with_clock(store: S, clock: C) -> Self {
        let notes = store.load().unwrap_or_else(|e| {
            tracing::warn!("Failed to load notes, starting empty: {}", e);
            Vec::new()
        });
        tracing::info!("Loaded {} notes", notes.len());

        let mut workspace = Self {
            store,
            clock,
            notes,
            selected: None,
            mode: EditMode::NotEditing,
            confirm_delete: false,
            last_persist_error: None,
        };
        workspace.selected = workspace.most_recent_id();
        workspace
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Notes in stored (insertion) order
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Notes in display order: most recently updated first.
    ///
    /// Ties keep their stored order.
    pub fn sorted_notes(&self) -> Vec<&Note> {
        let mut sorted: Vec<&Note> = self.notes.iter().collect();
        sorted.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        sorted
    }

    /// Look up a note by id
    pub fn note(&self, id: &NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| &note.id == id)
    }

    pub const fn selected_id(&self) -> Option<&NoteId> {
        self.selected.as_ref()
    }

    /// The note shown in the detail pane
    pub fn selected_note(&self) -> Option<&Note> {
        self.selected.as_ref().and_then(|id| self.note(id))
    }

    pub const fn edit_mode(&self) -> &EditMode {
        &self.mode
    }

    pub const fn draft(&self) -> Option<&Draft> {
        self.mode.draft()
    }

    pub const fn is_editing(&self) -> bool {
        !matches!(self.mode, EditMode::NotEditing)
    }

    pub const fn delete_confirmation_visible(&self) -> bool {
        self.confirm_delete
    }

    pub fn state(&self) -> WorkspaceState {
        match (&self.mode, &self.selected) {
            (EditMode::NotEditing, None) => WorkspaceState::IdleEmpty,
            (EditMode::NotEditing, Some(_)) => WorkspaceState::IdleViewing,
            (EditMode::CreatingNew(_), _) => WorkspaceState::EditingNew,
            (EditMode::EditingExisting { .. }, _) => WorkspaceState::EditingExisting,
        }
    }

    /// Message from the most recent failed write, cleared by the next success
    pub fn last_persist_error(&self) -> Option<&str> {
        self.last_persist_error.as_deref()
    }

    /// The backing store
    pub const fn store(&self) -> &S {
        &self.store
    }

    // ------------------------------------------------------------------
    // Operations
    // ------------------------------------------------------------------

    /// Select a note (or nothing), leaving edit mode and any pending delete.
    ///
    /// Ids not in the collection are ignored.
    pub fn select(&mut self, id: Option<&NoteId>) {
        if let Some(id) = id {
            if self.note(id).is_none() {
                tracing::debug!("Ignoring selection of unknown note {}", id);
                return;
            }
        }

        self.selected = id.cloned();
        self.mode = EditMode::NotEditing;
        self.confirm_delete = false;
        tracing::debug!("Selected {:?}", self.selected);
    }

    /// Start composing a new note with an empty draft
    pub fn start_create(&mut self) {
        self.selected = None;
        self.mode = EditMode::CreatingNew(Draft::default());
        self.confirm_delete = false;
        tracing::debug!("Started new note");
    }

    /// Start editing the selected note
    pub fn start_edit(&mut self) {
        let Some(note) = self.selected_note() else {
            return;
        };

        let target = note.id.clone();
        let draft = Draft::from_note(note);
        tracing::debug!("Editing note {}", target);
        self.mode = EditMode::EditingExisting { target, draft };
        self.confirm_delete = false;
    }

    /// Replace the draft title (capped at the title limit)
    pub fn change_draft_title(&mut self, text: &str) {
        if let Some(draft) = self.mode.draft_mut() {
            draft.set_title(text);
        }
    }

    /// Replace the draft content (capped at the content limit)
    pub fn change_draft_content(&mut self, text: &str) {
        if let Some(draft) = self.mode.draft_mut() {
            draft.set_content(text);
        }
    }

    /// Commit the draft.
    ///
    /// Returns the id of the created or updated note, or `None` when not
    /// editing. A blank title fails with [`ValidationError::EmptyTitle`] and
    /// leaves everything as it was, still in edit mode.
    pub fn save(&mut self) -> Result<Option<NoteId>> {
        if let Some(draft) = self.mode.draft() {
            if draft.has_blank_title() {
                tracing::debug!("Rejected save with blank title");
                return Err(ValidationError::EmptyTitle.into());
            }
        }

        let now = self.clock.now();
        let saved = match std::mem::take(&mut self.mode) {
            EditMode::NotEditing => return Ok(None),
            EditMode::CreatingNew(draft) => {
                let note = Note::new(draft.title, draft.content, now);
                let id = note.id.clone();
                self.notes.insert(0, note);
                tracing::info!("Created note {}", id);
                id
            }
            EditMode::EditingExisting { target, draft } => {
                let Some(note) = self.notes.iter_mut().find(|note| note.id == target) else {
                    self.confirm_delete = false;
                    return Err(Error::NotFound(target.to_string()));
                };
                note.apply_edit(draft.title, draft.content, now);
                tracing::info!("Updated note {}", target);
                target
            }
        };

        self.selected = Some(saved.clone());
        self.confirm_delete = false;
        self.persist();
        Ok(Some(saved))
    }

    /// Ask for confirmation before deleting the selected note
    pub fn request_delete(&mut self) {
        if self.selected_note().is_some() && !self.is_editing() {
            self.confirm_delete = true;
        }
    }

    /// Delete the selected note after confirmation.
    ///
    /// The most recently updated remaining note becomes selected. Returns the
    /// removed note.
    pub fn confirm_delete(&mut self) -> Option<Note> {
        if !self.confirm_delete {
            return None;
        }
        let id = self.selected.clone()?;
        let index = self.notes.iter().position(|note| note.id == id)?;

        let removed = self.notes.remove(index);
        tracing::info!("Deleted note {}", removed.id);

        self.selected = self.most_recent_id();
        self.mode = EditMode::NotEditing;
        self.confirm_delete = false;
        self.persist();
        Some(removed)
    }

    /// Dismiss the delete confirmation
    pub fn cancel_delete(&mut self) {
        self.confirm_delete = false;
    }

    /// Leave edit mode, discarding the draft
    pub fn cancel_edit(&mut self) {
        self.mode = EditMode::NotEditing;
        self.confirm_delete = false;
    }

    // ------------------------------------------------------------------
    // Private
    // ------------------------------------------------------------------

    fn most_recent_id(&self) -> Option<NoteId> {
        self.sorted_notes().first().map(|note| note.id.clone())
    }

    fn persist(&mut self) {
        match self.store.save_all(&self.notes) {
            Ok(()) => {
                tracing::debug!("Persisted {} notes", self.notes.len());
                self.last_persist_error = None;
            }
            Err(e) => {
                tracing::error!("Failed to persist notes: {}", e);
                self.last_persist_error = Some(e.to_string());
            }
        }
    }
}
