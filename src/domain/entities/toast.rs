#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    Error,
    Success,
    #[default]
    Info,
    Warning,
}

impl ToastKind {
    pub fn accent(self) -> &'static str {
        match self {
            ToastKind::Error => "#dc2626",
            ToastKind::Success => "#16a34a",
            ToastKind::Info => "#2563eb",
            ToastKind::Warning => "#d97706",
        }
    }
}

/// Single-slot notification. Showing overwrites the slot; dismissing only
/// hides it and keeps the last text and kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastSlot {
    pub text: String,
    pub kind: ToastKind,
    pub visible: bool,
    /// Bumped on every show so a pending auto-dismiss for an older message
    /// can tell it was superseded.
    pub serial: u64,
}

impl ToastSlot {
    pub fn show(&mut self, text: impl Into<String>, kind: ToastKind) -> u64 {
        self.text = text.into();
        self.kind = kind;
        self.visible = true;
        self.serial += 1;
        self.serial
    }

    pub fn dismiss(&mut self) {
        self.visible = false;
    }

    pub fn dismiss_if_current(&mut self, serial: u64) {
        if self.serial == serial {
            self.dismiss();
        }
    }
}
