//! Colors for the desktop app

/// Fixed color palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Buttons, links, unselected titles
    pub primary: &'static str,
    /// Body text and selected titles
    pub secondary: &'static str,
    /// Selected row highlight
    pub accent: &'static str,
    pub bg_app: &'static str,
    pub bg_sidebar: &'static str,
    pub bg_main: &'static str,
    pub bg_card: &'static str,
    pub bg_input: &'static str,
    pub bg_input_active: &'static str,
    pub border: &'static str,
    pub text_muted: &'static str,
    pub text_faint: &'static str,
    pub overlay: &'static str,
    pub error: &'static str,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: "#1976d2",
            secondary: "#424242",
            accent: "#ffeb3b",
            bg_app: "#fafbfc",
            bg_sidebar: "#ffffff",
            bg_main: "#f7faff",
            bg_card: "#ffffff",
            bg_input: "#fafbfc",
            bg_input_active: "#f9fbfd",
            border: "#e3e6ea",
            text_muted: "#888888",
            text_faint: "#bbbbbb",
            overlay: "rgba(48, 48, 48, 0.15)",
            error: "#c62828",
        }
    }
}
