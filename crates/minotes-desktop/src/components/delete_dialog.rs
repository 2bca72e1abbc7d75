//! Two-step delete confirmation

use dioxus::prelude::*;

use crate::state::AppState;

/// Modal asking the user to confirm deletion of the selected note
#[component]
pub fn DeleteDialog() -> Element {
    let mut state = use_context::<AppState>();
    let palette = state.palette;

    rsx! {
        div {
            class: "delete-overlay",
            style: "
                position: fixed;
                inset: 0;
                background: {palette.overlay};
                display: flex;
                align-items: center;
                justify-content: center;
                z-index: 10;
            ",

            div {
                role: "dialog",
                style: "
                    background: {palette.bg_card};
                    border-radius: 13px;
                    padding: 28px 34px;
                    box-shadow: 0 4px 32px rgba(0, 0, 0, 0.12);
                    text-align: center;
                ",

                div {
                    style: "font-weight: 700; font-size: 20px; color: {palette.secondary}; margin-bottom: 6px;",
                    "Delete this note?"
                }
                div {
                    style: "font-size: 14px; color: {palette.text_muted}; margin-bottom: 18px;",
                    "This cannot be undone!"
                }

                button {
                    "aria-label": "Confirm delete",
                    style: "
                        background: {palette.primary};
                        color: #fff;
                        border: none;
                        border-radius: 7px;
                        padding: 9px 23px;
                        font-weight: 600;
                        margin: 0 7px;
                        font-size: 15px;
                        cursor: pointer;
                    ",
                    onclick: move |_| state.confirm_delete(),
                    "Yes, Delete"
                }
                button {
                    "aria-label": "Cancel delete",
                    style: "
                        background: #eee;
                        color: {palette.secondary};
                        border: none;
                        border-radius: 7px;
                        padding: 9px 23px;
                        font-weight: 600;
                        margin: 0 7px;
                        font-size: 15px;
                        cursor: pointer;
                    ",
                    onclick: move |_| state.cancel_delete(),
                    "Cancel"
                }
            }
        }
    }
}
