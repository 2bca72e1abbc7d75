//! Native message dialogs

use rfd::{MessageButtons, MessageDialog, MessageLevel};

/// Show a blocking warning explaining why a note was not saved
pub fn show_validation_error(message: &str) {
    tracing::debug!("Validation failed: {}", message);
    let _ = MessageDialog::new()
        .set_level(MessageLevel::Warning)
        .set_title("Cannot save note")
        .set_description(message)
        .set_buttons(MessageButtons::Ok)
        .show();
}
