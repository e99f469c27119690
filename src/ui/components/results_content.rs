use dioxus::prelude::*;

use crate::domain::entities::table::result_count_label;
use crate::ui::components::dynamic_table::DynamicTable;
use crate::ui::components::excel_export::ExcelExportButton;
use crate::ui::components::figure::FigureView;
use crate::ui::components::summary::SummaryPanel;
use crate::ui::state::results_state::ResultsState;
use crate::ui::styles::{panel_style, results_wrapper_style};

/// Summary card above the results card. Both slide in on their own timers.
#[component]
pub fn ResultsContent(results: Signal<ResultsState>) -> Element {
    let state = results.read();
    if !state.has_results() {
        return rsx! {
            div { style: "{results_wrapper_style(false)}" }
        };
    }

    let summary = state.summary().to_string();
    let table = state.table().clone();
    let figure = state.figure().cloned();
    let request_id = state.request_id().to_string();
    let generation = state.generation();
    let summary_visible = state.summary_visible();
    let results_visible = state.results_visible();
    let count = result_count_label(table.len());
    let show_results_panel = !table.is_empty() || figure.is_some();

    rsx! {
        div { style: "{results_wrapper_style(true)}",
            if !summary.is_empty() {
                SummaryPanel { summary, visible: summary_visible }
            }
            if show_results_panel {
                div { style: "{panel_style(results_visible, false)}",
                    div { style: "display: flex; align-items: center; justify-content: space-between; margin-bottom: 24px;",
                        h2 { style: "margin: 0; font-size: 20px; font-weight: 600; color: #1f2937;",
                            "Search Results"
                        }
                        div { style: "display: flex; align-items: center; gap: 16px;",
                            span { style: "font-size: 14px; color: #6b7280;", "{count}" }
                            ExcelExportButton { request_id }
                        }
                    }
                    if let Some(figure) = figure {
                        FigureView { figure }
                    }
                    DynamicTable { key: "{generation}", table }
                }
            }
        }
    }
}
