//! Home view - main application screen

use dioxus::prelude::*;

use crate::components::{DeleteDialog, NoteDetail, NoteList, StorageBanner};
use crate::state::AppState;

/// Home view component: note list on the left, detail or editor on the right
#[component]
pub fn Home() -> Element {
    let state = use_context::<AppState>();
    let view = state.view();
    let palette = state.palette;

    rsx! {
        div {
            class: "home-container",
            style: "display: flex; height: 100vh;",

            NoteList { entries: view.list }

            main {
                class: "main-content",
                style: "
                    flex: 1;
                    display: flex;
                    flex-direction: column;
                    min-width: 0;
                    background: {palette.bg_main};
                ",

                {view.storage_error.map(|message| rsx! { StorageBanner { message } })}

                NoteDetail { detail: view.detail, actions: view.actions }

                if view.confirm_delete {
                    DeleteDialog {}
                }
            }
        }
    }
}
