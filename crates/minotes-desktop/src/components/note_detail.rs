//! Detail pane: placeholder, read-only view, or editor form

use dioxus::prelude::*;

use minotes_core::models::{CONTENT_MAX_CHARS, TITLE_MAX_CHARS};
use minotes_core::view::{Actions, DetailPane};

use crate::state::AppState;
use crate::theme::Palette;

/// Shows the selected note, or the draft form while editing
#[component]
pub fn NoteDetail(detail: DetailPane, actions: Actions) -> Element {
    let state = use_context::<AppState>();
    let palette = state.palette;

    let body = match detail {
        DetailPane::Placeholder => rsx! {
            div {
                style: "
                    color: {palette.text_faint};
                    font-size: 22px;
                    text-align: center;
                    margin-top: 120px;
                ",
                "Select or create a note!"
            }
        },
        DetailPane::Viewing {
            title,
            content,
            created_label,
            updated_label,
        } => rsx! {
            NoteViewer { title, content, created_label, updated_label, actions }
        },
        DetailPane::Editing {
            title,
            content,
            is_new,
            title_remaining,
            content_remaining,
        } => rsx! {
            NoteForm { title, content, is_new, title_remaining, content_remaining }
        },
    };

    rsx! {
        div {
            class: "note-detail",
            style: "
                width: 100%;
                max-width: 720px;
                margin: 40px auto;
                background: {palette.bg_card};
                border-radius: 13px;
                padding: 38px;
                box-sizing: border-box;
                box-shadow: 0 2px 24px rgba(133, 154, 181, 0.14);
                min-height: 380px;
                display: flex;
                flex-direction: column;
            ",
            {body}
        }
    }
}

/// Read-only rendering of the selected note
#[component]
fn NoteViewer(
    title: String,
    content: String,
    created_label: String,
    updated_label: String,
    actions: Actions,
) -> Element {
    let mut state = use_context::<AppState>();
    let palette = state.palette;

    rsx! {
        input {
            r#type: "text",
            value: "{title}",
            readonly: true,
            style: title_style(&palette, false),
        }
        div {
            style: "font-size: 12px; color: {palette.text_muted}; margin: 8px 0 14px 2px;",
            "Created: {created_label} | Updated: {updated_label}"
        }
        textarea {
            value: "{content}",
            readonly: true,
            placeholder: "Write your note here...",
            style: content_style(&palette, false),
        }
        div {
            style: "display: flex; justify-content: flex-start; gap: 10px; margin-top: 18px;",

            if actions.can_edit {
                button {
                    "aria-label": "Edit note",
                    style: primary_button_style(&palette),
                    onclick: move |_| state.start_edit(),
                    "Edit"
                }
            }
            if actions.can_delete {
                button {
                    "aria-label": "Delete note",
                    style: secondary_button_style(&palette),
                    onclick: move |_| state.request_delete(),
                    "Delete"
                }
            }
        }
    }
}

/// Editor form bound to the workspace draft
#[component]
fn NoteForm(
    title: String,
    content: String,
    is_new: bool,
    title_remaining: usize,
    content_remaining: usize,
) -> Element {
    let mut state = use_context::<AppState>();
    let palette = state.palette;
    let heading = if is_new { "New note" } else { "Edit note" };

    // Ctrl+S saves, Escape cancels
    let on_keydown = move |evt: KeyboardEvent| {
        if evt.modifiers().ctrl() && evt.key() == Key::Character("s".to_string()) {
            evt.prevent_default();
            state.save();
        } else if evt.key() == Key::Escape {
            state.cancel_edit();
        }
    };

    rsx! {
        div {
            style: "display: flex; flex-direction: column; flex: 1;",
            onkeydown: on_keydown,

            div {
                style: "font-size: 13px; color: {palette.text_muted}; margin-bottom: 8px;",
                "{heading}"
            }
            input {
                r#type: "text",
                value: "{title}",
                placeholder: "Title",
                maxlength: "{TITLE_MAX_CHARS}",
                autofocus: true,
                style: title_style(&palette, true),
                oninput: move |evt: FormEvent| state.change_title(&evt.value()),
            }
            div {
                style: "font-size: 11px; color: {palette.text_faint}; text-align: right; margin: 4px 0 10px 0;",
                "{title_remaining} characters left"
            }
            textarea {
                value: "{content}",
                placeholder: "Write your note here...",
                maxlength: "{CONTENT_MAX_CHARS}",
                style: content_style(&palette, true),
                oninput: move |evt: FormEvent| state.change_content(&evt.value()),
            }
            div {
                style: "font-size: 11px; color: {palette.text_faint}; text-align: right; margin-top: 4px;",
                "{content_remaining} characters left"
            }
            div {
                style: "display: flex; justify-content: flex-end; gap: 10px; margin-top: 18px;",

                button {
                    "aria-label": "Save note",
                    style: primary_button_style(&palette),
                    onclick: move |_| state.save(),
                    "Save"
                }
                button {
                    "aria-label": "Cancel",
                    style: secondary_button_style(&palette),
                    onclick: move |_| state.cancel_edit(),
                    "Cancel"
                }
            }
        }
    }
}

fn title_style(palette: &Palette, editing: bool) -> String {
    let (border, bg) = field_colors(palette, editing);
    format!(
        "font-size: 22px; font-weight: 600; padding: 10px 12px; border-radius: 7px; \
         border: {border}; background: {bg}; color: {}; outline: none;",
        palette.secondary
    )
}

fn content_style(palette: &Palette, editing: bool) -> String {
    let (border, bg) = field_colors(palette, editing);
    format!(
        "flex: 1; min-height: 220px; resize: vertical; font-size: 15px; line-height: 1.5; \
         padding: 12px; border-radius: 7px; border: {border}; background: {bg}; color: {}; \
         outline: none; font-family: inherit;",
        palette.secondary
    )
}

fn field_colors(palette: &Palette, editing: bool) -> (String, &'static str) {
    if editing {
        (format!("1.5px solid {}", palette.primary), palette.bg_input_active)
    } else {
        ("1.5px solid #f0f2f5".to_string(), palette.bg_input)
    }
}

fn primary_button_style(palette: &Palette) -> String {
    format!(
        "background: {}; color: #fff; border: none; border-radius: 7px; padding: 9px 23px; \
         font-weight: 600; font-size: 15px; cursor: pointer;",
        palette.primary
    )
}

fn secondary_button_style(palette: &Palette) -> String {
    format!(
        "background: {}; color: {}; border: none; border-radius: 7px; padding: 9px 23px; \
         font-weight: 600; font-size: 15px; cursor: pointer;",
        palette.accent, palette.secondary
    )
}
