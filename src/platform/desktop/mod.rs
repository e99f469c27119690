pub mod dialogs;
pub mod timer;
