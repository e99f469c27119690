use dioxus::prelude::*;
use pulldown_cmark::{html, Event, Options, Parser};

use crate::ui::styles::panel_style;

/// Renders Markdown to HTML. Raw HTML in the source is emitted as escaped text.
pub fn render_summary_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let events = Parser::new_ext(markdown, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });

    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, events);
    out
}

#[component]
pub fn SummaryPanel(summary: String, visible: bool) -> Element {
    let body = render_summary_html(&summary);

    rsx! {
        div { style: "{panel_style(visible, true)}",
            h2 { style: "margin: 0 0 16px; font-size: 20px; font-weight: 600; color: #1f2937;",
                "Summary"
            }
            div {
                class: "summary-body",
                style: "max-width: none; color: #374151; line-height: 1.6;",
                dangerous_inner_html: "{body}",
            }
        }
    }
}
