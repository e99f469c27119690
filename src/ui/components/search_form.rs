use dioxus::prelude::*;

use crate::domain::entities::query::QueryMode;
use crate::ui::styles::search_button_style;

const PLACEHOLDER: &str = "e.g. Any new protein degradation studies?";

#[component]
pub fn SearchForm(
    query: String,
    mode: QueryMode,
    loading: bool,
    on_input: EventHandler<String>,
    on_mode: EventHandler<QueryMode>,
    on_submit: EventHandler<()>,
) -> Element {
    let rows = query.lines().count().clamp(1, 10);

    rsx! {
        form {
            style: "width: 100%;",
            onsubmit: move |event| event.prevent_default(),
            div { style: "display: flex; gap: 8px; margin-bottom: 8px;",
                {[QueryMode::Database, QueryMode::Literature].into_iter().map(|option| {
                    let selected = option == mode;
                    let style = if selected {
                        "border: 1px solid #111827; background: #111827; color: #fff; border-radius: 999px; padding: 4px 12px; cursor: pointer;"
                    } else {
                        "border: 1px solid #d1d5db; background: #fff; color: #374151; border-radius: 999px; padding: 4px 12px; cursor: pointer;"
                    };
                    rsx!(
                        button {
                            key: "{option.label()}",
                            r#type: "button",
                            style: "{style}",
                            disabled: loading,
                            onclick: move |_| on_mode.call(option),
                            "{option.label()}"
                        }
                    )
                })}
            }
            div { style: "display: flex; align-items: center; gap: 8px;",
                textarea {
                    style: "flex: 1; padding: 8px 16px; border: 1px solid #d1d5db; border-radius: 12px; font: inherit; color: #374151; resize: none; outline: none;",
                    rows: "{rows}",
                    placeholder: PLACEHOLDER,
                    value: "{query}",
                    oninput: move |event| on_input.call(event.value()),
                    onkeydown: move |event| {
                        if event.key() == Key::Enter && event.modifiers().ctrl() {
                            event.prevent_default();
                            on_submit.call(());
                        }
                    },
                }
                button {
                    r#type: "button",
                    style: "{search_button_style(loading)}",
                    disabled: loading,
                    onclick: move |_| on_submit.call(()),
                    if loading {
                        span { class: "spinner" }
                    }
                    span { "Search" }
                }
            }
        }
    }
}
