//! Note list component

use dioxus::prelude::*;

use minotes_core::view::NoteListEntry;

use super::NoteCard;
use crate::state::AppState;

/// Sidebar with the new-note button and notes in display order
#[component]
pub fn NoteList(entries: Vec<NoteListEntry>) -> Element {
    let mut state = use_context::<AppState>();
    let palette = state.palette;
    let is_empty = entries.is_empty();

    rsx! {
        aside {
            class: "note-list",
            style: "
                width: 280px;
                background: {palette.bg_sidebar};
                border-right: 1px solid {palette.border};
                padding: 20px 0 10px 0;
                box-sizing: border-box;
                display: flex;
                flex-direction: column;
            ",

            h1 {
                style: "
                    font-size: 23px;
                    font-weight: 700;
                    margin: 0 0 16px 32px;
                    color: {palette.primary};
                    letter-spacing: 0.5px;
                ",
                "Notes"
            }

            button {
                "aria-label": "Create new note",
                style: "
                    width: 80%;
                    margin: 0 auto 20px auto;
                    padding: 10px 0;
                    font-weight: 600;
                    background: {palette.primary};
                    border: none;
                    border-radius: 7px;
                    color: #fff;
                    cursor: pointer;
                    font-size: 15px;
                ",
                onclick: move |_| state.start_create(),
                "+ New Note"
            }

            nav {
                style: "overflow-y: auto; flex: 1;",

                if is_empty {
                    div {
                        style: "
                            color: {palette.text_faint};
                            margin-top: 50px;
                            text-align: center;
                            font-size: 16px;
                        ",
                        "No notes yet."
                    }
                }

                ul {
                    style: "list-style: none; padding: 0; margin: 0;",

                    for entry in entries {
                        {
                            let note_id = entry.id.clone();

                            rsx! {
                                NoteCard {
                                    key: "{note_id}",
                                    title: entry.title,
                                    preview: entry.preview,
                                    is_selected: entry.is_selected,
                                    onselect: move |()| state.select(&note_id),
                                }
                            }
                        }
                    }
                }
            }

            footer {
                style: "
                    margin-top: 18px;
                    font-size: 11px;
                    text-align: center;
                    color: {palette.text_faint};
                    letter-spacing: 0.04em;
                ",
                span { "Minimal Notes" }
            }
        }
    }
}
