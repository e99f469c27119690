use dioxus::logger::tracing::error;
use dioxus::prelude::*;

use crate::domain::entities::toast::ToastKind;
use crate::platform::desktop::dialogs::show_blocking_alert;
use crate::ui::state::app_state::Services;
use crate::ui::toast::use_toaster;

pub const EXPORT_FAILED_MESSAGE: &str = "Failed to download Excel file. Please try again.";

#[component]
pub fn ExcelExportButton(request_id: String) -> Element {
    let services = use_context::<Services>();
    let toaster = use_toaster();
    let mut downloading = use_signal(|| false);

    let disabled = downloading() || request_id.trim().is_empty();
    let label = if downloading() { "Downloading..." } else { "Download Excel" };

    rsx! {
        button {
            r#type: "button",
            style: "display: inline-flex; align-items: center; gap: 8px; border: 1px solid #16a34a; background: #fff; color: #15803d; border-radius: 8px; padding: 6px 12px; font-size: 14px; cursor: pointer;",
            disabled: disabled,
            onclick: move |_| {
                if downloading() {
                    return;
                }
                downloading.set(true);
                let export = services.export.clone();
                let request_id = request_id.clone();
                spawn(async move {
                    match export.export_excel(&request_id).await {
                        Ok(path) => {
                            toaster.show(format!("Saved {}", path.display()), ToastKind::Info);
                        }
                        Err(err) => {
                            error!("excel export failed: {err}");
                            show_blocking_alert("Export failed", EXPORT_FAILED_MESSAGE);
                        }
                    }
                    downloading.set(false);
                });
            },
            if downloading() {
                span { class: "spinner" }
            }
            "{label}"
        }
    }
}
