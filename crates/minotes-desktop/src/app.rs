//! Main application component

use dioxus::prelude::*;

use crate::services::open_workspace;
use crate::state::AppState;
use crate::theme::Palette;
use crate::views::Home;

/// Root application component
#[component]
pub fn App() -> Element {
    // Loading happens once; the store is read synchronously.
    let workspace = use_signal(open_workspace);
    let palette = Palette::default();

    use_context_provider(|| AppState { workspace, palette });

    rsx! {
        div {
            class: "app-container",
            style: "
                min-height: 100vh;
                margin: 0;
                font-family: 'Inter', 'Segoe UI', Arial, sans-serif;
                background: {palette.bg_app};
                color: {palette.secondary};
            ",
            Home {}
        }
    }
}
