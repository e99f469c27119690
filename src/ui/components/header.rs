use dioxus::prelude::*;

#[component]
pub fn Header(environment: String) -> Element {
    rsx! {
        header { style: "width: 100%; background: #fff; border-bottom: 1px solid #e5e7eb;",
            div { style: "max-width: 1152px; margin: 0 auto; padding: 16px; display: flex; align-items: center; justify-content: space-between;",
                h1 { style: "margin: 0; font-size: 20px; font-weight: 700; color: #111827;", "ChEMBL Search" }
                span { style: "font-size: 12px; color: #6b7280; text-transform: uppercase; letter-spacing: 0.05em;",
                    "{environment}"
                }
            }
        }
    }
}
