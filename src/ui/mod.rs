pub mod components;
pub mod state;
pub mod styles;
pub mod toast;
