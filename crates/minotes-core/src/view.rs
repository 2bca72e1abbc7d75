//! Display projection of a workspace.
//!
//! Everything the two-pane layout needs, as plain data: the note list in
//! display order, the detail pane contents, and which actions are offered.

use chrono::{DateTime, Local, Utc};

use crate::models::NoteId;
use crate::store::NoteStore;
use crate::workspace::{Clock, EditMode, Workspace};

/// Display format for created/updated timestamps (local time)
pub const TIMESTAMP_DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One row of the note list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteListEntry {
    pub id: NoteId,
    pub title: String,
    /// Leading content characters, with `…` when cut
    pub preview: String,
    pub is_selected: bool,
}

/// Contents of the detail/editor pane
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailPane {
    /// Nothing selected and not editing
    Placeholder,
    /// Read-only view of the selected note
    Viewing {
        title: String,
        content: String,
        created_label: String,
        updated_label: String,
    },
    /// Editable form bound to the draft
    Editing {
        title: String,
        content: String,
        is_new: bool,
        title_remaining: usize,
        content_remaining: usize,
    },
}

/// Which controls are enabled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct Actions {
    pub can_edit: bool,
    pub can_delete: bool,
    pub can_save: bool,
    pub can_cancel: bool,
}

/// Full render model of a workspace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceView {
    pub list: Vec<NoteListEntry>,
    pub detail: DetailPane,
    pub confirm_delete: bool,
    pub actions: Actions,
    /// Set when the last write to storage failed
    pub storage_error: Option<String>,
}

/// Format a timestamp for display in local time
pub fn format_timestamp(value: &DateTime<Utc>) -> String {
    value
        .with_timezone(&Local)
        .format(TIMESTAMP_DISPLAY_FORMAT)
        .to_string()
}

impl<S: NoteStore, C: Clock> Workspace<S, C> {
    /// Build the render model for the current state
    pub fn view(&self) -> WorkspaceView {
        let selected = self.selected_id();
        let list = self
            .sorted_notes()
            .into_iter()
            .map(|note| NoteListEntry {
                id: note.id.clone(),
                title: note.title.clone(),
                preview: note.preview(),
                is_selected: selected == Some(&note.id),
            })
            .collect();

        let detail = match self.edit_mode() {
            EditMode::NotEditing => self
                .selected_note()
                .map_or(DetailPane::Placeholder, |note| DetailPane::Viewing {
                    title: note.title.clone(),
                    content: note.content.clone(),
                    created_label: format_timestamp(&note.created_at),
                    updated_label: format_timestamp(&note.updated_at),
                }),
            EditMode::CreatingNew(draft) | EditMode::EditingExisting { draft, .. } => {
                DetailPane::Editing {
                    title: draft.title.clone(),
                    content: draft.content.clone(),
                    is_new: matches!(self.edit_mode(), EditMode::CreatingNew(_)),
                    title_remaining: draft.title_remaining(),
                    content_remaining: draft.content_remaining(),
                }
            }
        };

        let viewing = matches!(detail, DetailPane::Viewing { .. });
        let editing = self.is_editing();
        let actions = Actions {
            can_edit: viewing,
            can_delete: viewing,
            can_save: editing,
            can_cancel: editing,
        };

        WorkspaceView {
            list,
            detail,
            confirm_delete: self.delete_confirmation_visible(),
            actions,
            storage_error: self.last_persist_error().map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Note, TITLE_MAX_CHARS};
    use crate::store::MemoryStore;
    use chrono::{Duration, TimeZone};
    use pretty_assertions::assert_eq;

    fn seeded() -> Workspace<MemoryStore> {
        let t0 = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
        let mut older = Note::new("Older", "a".repeat(50), t0);
        older.id = NoteId::from("older");
        let mut newer = Note::new("Newer", "short", t0 + Duration::hours(1));
        newer.id = NoteId::from("newer");
        Workspace::open(MemoryStore::with_notes(&[older, newer]).unwrap())
    }

    #[test]
    fn empty_workspace_shows_placeholder() {
        let view = Workspace::open(MemoryStore::new()).view();
        assert!(view.list.is_empty());
        assert_eq!(view.detail, DetailPane::Placeholder);
        assert_eq!(view.actions, Actions::default());
        assert!(!view.confirm_delete);
    }

    #[test]
    fn list_is_in_display_order_with_previews() {
        let view = seeded().view();
        let titles: Vec<&str> = view.list.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Newer", "Older"]);
        assert!(view.list[0].is_selected);
        assert!(!view.list[1].is_selected);
        assert_eq!(view.list[0].preview, "short");
        assert_eq!(view.list[1].preview, format!("{}…", "a".repeat(35)));
    }

    #[test]
    fn viewing_pane_offers_edit_and_delete() {
        let view = seeded().view();
        match view.detail {
            DetailPane::Viewing {
                title,
                created_label,
                ..
            } => {
                assert_eq!(title, "Newer");
                assert!(!created_label.is_empty());
            }
            other => panic!("expected viewing pane, got {other:?}"),
        }
        assert!(view.actions.can_edit && view.actions.can_delete);
        assert!(!view.actions.can_save && !view.actions.can_cancel);
    }

    #[test]
    fn editing_pane_reports_remaining_characters() {
        let mut workspace = seeded();
        workspace.start_create();
        workspace.change_draft_title("Hello");

        let view = workspace.view();
        assert_eq!(
            view.detail,
            DetailPane::Editing {
                title: "Hello".to_string(),
                content: String::new(),
                is_new: true,
                title_remaining: TITLE_MAX_CHARS - 5,
                content_remaining: crate::models::CONTENT_MAX_CHARS,
            }
        );
        assert!(view.list.iter().all(|entry| !entry.is_selected));
        assert!(view.actions.can_save && !view.actions.can_delete);
    }

    #[test]
    fn confirmation_and_storage_error_are_surfaced() {
        let mut workspace = seeded();
        workspace.request_delete();
        assert!(workspace.view().confirm_delete);

        workspace.store().set_fail_writes(true);
        workspace.confirm_delete();
        assert!(workspace.view().storage_error.is_some());
    }

    #[test]
    fn format_timestamp_uses_display_format() {
        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
        let label = format_timestamp(&ts);
        assert_eq!(label.len(), "2024-05-01 10:00:00".len());
    }
}
