use rfd::{MessageButtons, MessageDialog, MessageLevel};

/// Modal error box. Blocks until the user acknowledges it.
pub fn show_blocking_alert(title: &str, message: &str) {
    MessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title(title)
        .set_description(message)
        .set_buttons(MessageButtons::Ok)
        .show();
}
