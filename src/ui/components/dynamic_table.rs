use dioxus::prelude::*;

use crate::domain::entities::pagination::{page_buttons, PageButton, Pagination};
use crate::domain::entities::table::{
    cell_view, header_label, next_sort, ResultTable, SortDirection, SortState,
};
use crate::ui::styles::{
    page_button_style, table_cell_style, table_container_style, table_fade_style,
    table_header_cell_style, table_row_style,
};

#[component]
pub fn DynamicTable(table: ResultTable) -> Element {
    let mut sort = use_signal(|| None::<SortState>);
    let mut pagination = use_signal(Pagination::default);
    let mut mounted = use_signal(|| false);

    use_effect(move || mounted.set(true));

    if table.is_empty() {
        return rsx! {};
    }

    let row_count = table.len();
    let page = pagination();
    let total_pages = page.total_pages(row_count);
    let order = table.sorted_indices(sort.read().as_ref());
    let visible_rows: Vec<usize> = order[page.page_range(row_count)].to_vec();
    let wide = table.wide_columns();
    let current_sort = sort();

    rsx! {
        div { style: "{table_fade_style(mounted())}",
            div { style: "{table_container_style()}",
                table { style: "min-width: 100%; border-collapse: collapse;",
                    thead {
                        tr {
                            for (col_idx , column) in table.columns.iter().enumerate() {
                                {
                                    let column = column.clone();
                                    let indicator = match current_sort.as_ref() {
                                        Some(s) if s.column == column => match s.direction {
                                            SortDirection::Asc => "↑",
                                            SortDirection::Desc => "↓",
                                        },
                                        _ => "",
                                    };
                                    let label = header_label(&column);
                                    let is_wide = wide.get(col_idx).copied().unwrap_or(false);
                                    rsx! {
                                        th {
                                            key: "{column}",
                                            style: "{table_header_cell_style(is_wide)}",
                                            onclick: move |_| {
                                                let next = next_sort(sort.peek().as_ref(), &column);
                                                sort.set(Some(next));
                                            },
                                            div { style: "display: flex; align-items: center; gap: 4px;",
                                                span { "{label}" }
                                                if indicator.is_empty() {
                                                    span { class: "sort-hint", "↕" }
                                                } else {
                                                    span { "{indicator}" }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                    tbody {
                        for (position , row_idx) in visible_rows.iter().copied().enumerate() {
                            tr {
                                key: "{row_idx}",
                                class: "table-row",
                                style: "{table_row_style(position)}",
                                for (col_idx , value) in table.rows[row_idx].iter().enumerate() {
                                    {
                                        let view = cell_view(value);
                                        let text_class = if view.truncate { "cell-text truncate" } else { "cell-text" };
                                        let text_style = if view.placeholder { "color: #9ca3af;" } else { "" };
                                        rsx! {
                                            td {
                                                key: "{col_idx}",
                                                class: "cell",
                                                style: "{table_cell_style()}",
                                                div {
                                                    class: "{text_class}",
                                                    style: "{text_style}",
                                                    title: view.title.clone(),
                                                    "{view.text}"
                                                }
                                                if view.hover_detail {
                                                    div { class: "cell-tooltip", "{view.text}" }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
            div { style: "display: flex; align-items: center; justify-content: space-between; padding: 12px 16px;",
                if row_count > page.page_size {
                    div { style: "display: flex; gap: 4px; align-items: center;",
                        for (idx , button) in page_buttons(page.current_page, total_pages).into_iter().enumerate() {
                            {
                                match button {
                                    PageButton::Prev { target, enabled } => rsx! {
                                        button {
                                            key: "{idx}",
                                            style: "{page_button_style(false, enabled)}",
                                            disabled: !enabled,
                                            onclick: move |_| pagination.write().go_to(target, row_count),
                                            "Previous"
                                        }
                                    },
                                    PageButton::Next { target, enabled } => rsx! {
                                        button {
                                            key: "{idx}",
                                            style: "{page_button_style(false, enabled)}",
                                            disabled: !enabled,
                                            onclick: move |_| pagination.write().go_to(target, row_count),
                                            "Next"
                                        }
                                    },
                                    PageButton::Page { number, current } => rsx! {
                                        button {
                                            key: "{idx}",
                                            style: "{page_button_style(current, true)}",
                                            onclick: move |_| pagination.write().go_to(number, row_count),
                                            "{number}"
                                        }
                                    },
                                    PageButton::Ellipsis => rsx! {
                                        span { key: "{idx}", style: "padding: 0 4px; color: #6b7280;", "…" }
                                    },
                                }
                            }
                        }
                    }
                } else {
                    div {}
                }
                span { style: "font-size: 14px; color: #6b7280;",
                    "Page {page.current_page} of {total_pages}"
                }
            }
        }
    }
}
