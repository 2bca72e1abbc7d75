//! Banner shown when notes could not be written to disk

use dioxus::prelude::*;

use crate::state::AppState;

#[component]
pub fn StorageBanner(message: String) -> Element {
    let state = use_context::<AppState>();
    let palette = state.palette;

    rsx! {
        div {
            role: "alert",
            style: "
                background: {palette.error};
                color: #fff;
                padding: 8px 16px;
                font-size: 13px;
            ",
            "Notes could not be saved to disk: {message}"
        }
    }
}
