//! Note card component

use dioxus::prelude::*;

use crate::state::AppState;

/// A single note row rendered in the note list.
#[component]
pub fn NoteCard(
    title: String,
    preview: String,
    is_selected: bool,
    onselect: EventHandler<()>,
) -> Element {
    let state = use_context::<AppState>();
    let palette = state.palette;

    let (bg, fg, weight, border) = if is_selected {
        (palette.accent, palette.secondary, 700, palette.secondary)
    } else {
        ("none", palette.primary, 500, "transparent")
    };

    rsx! {
        li {
            class: if is_selected { "note-item selected" } else { "note-item" },
            tabindex: "0",
            title: "{title}",
            "aria-selected": "{is_selected}",
            style: "
                background: {bg};
                border-radius: 7px;
                margin: 4px 12px;
                padding: 7px 12px;
                cursor: pointer;
                font-weight: {weight};
                color: {fg};
                border: 1.5px solid {border};
                transition: background 0.2s, color 0.2s;
            ",
            onclick: move |_| onselect.call(()),
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Enter {
                    onselect.call(());
                }
            },

            div {
                class: "note-title",
                style: "
                    overflow: hidden;
                    white-space: nowrap;
                    text-overflow: ellipsis;
                    font-size: 15px;
                ",
                "{title}"
            }

            div {
                class: "note-preview",
                style: "
                    font-size: 12px;
                    color: {palette.text_muted};
                    margin-top: 2px;
                    font-weight: 400;
                    overflow: hidden;
                    white-space: nowrap;
                    text-overflow: ellipsis;
                ",
                "{preview}"
            }
        }
    }
}
