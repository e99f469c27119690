use std::time::Duration;

use dioxus::prelude::*;

use crate::domain::entities::toast::{ToastKind, ToastSlot};
use crate::platform::desktop::timer::sleep;
use crate::ui::styles::toast_style;

pub const AUTO_DISMISS_AFTER: Duration = Duration::from_secs(5);

/// Handle to the root-scoped toast slot. Cheap to copy into handlers and tasks.
#[derive(Clone, Copy, PartialEq)]
pub struct Toaster {
    slot: Signal<ToastSlot>,
}

impl Toaster {
    pub fn show(mut self, text: impl Into<String>, kind: ToastKind) {
        self.slot.write().show(text, kind);
    }

    pub fn dismiss(mut self) {
        self.slot.write().dismiss();
    }

    pub fn current(&self) -> ToastSlot {
        self.slot.read().clone()
    }
}

/// Panics outside a `ToastProvider`: that is a wiring bug, not a runtime state.
pub fn use_toaster() -> Toaster {
    match try_use_context::<Toaster>() {
        Some(toaster) => toaster,
        None => panic!("use_toaster must be used within a ToastProvider"),
    }
}

/// Owns the slot and its auto-dismiss timer. The timer lives in this scope,
/// so it keeps running after the component that raised the toast unmounts.
#[component]
pub fn ToastProvider(
    #[props(default = AUTO_DISMISS_AFTER)] dismiss_after: Duration,
    children: Element,
) -> Element {
    let mut slot = use_signal(ToastSlot::default);
    let toaster = use_context_provider(|| Toaster { slot });

    // Restarts on every show; only the newest serial can be dismissed.
    let _auto_dismiss = use_resource(move || async move {
        let (serial, visible) = {
            let current = slot.read();
            (current.serial, current.visible)
        };
        if !visible {
            return;
        }
        sleep(dismiss_after).await;
        slot.write().dismiss_if_current(serial);
    });

    rsx! {
        {children}
        ToastView { slot, toaster }
    }
}

#[component]
fn ToastView(slot: Signal<ToastSlot>, toaster: Toaster) -> Element {
    let current = slot.read().clone();
    let accent = current.kind.accent();
    let role = if current.kind == ToastKind::Error { "alert" } else { "status" };

    rsx! {
        div {
            role: "{role}",
            style: "{toast_style(accent, current.visible)}",
            div { style: "flex: 1; font-size: 14px; line-height: 1.4;", "{current.text}" }
            button {
                style: "border: none; background: transparent; color: #6b7280; cursor: pointer; font-size: 16px;",
                aria_label: "Dismiss notification",
                onclick: move |_| toaster.dismiss(),
                "×"
            }
        }
    }
}
