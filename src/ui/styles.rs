pub const GLOBAL_CSS: &str = r#"
body { margin: 0; font-family: system-ui, -apple-system, "Segoe UI", sans-serif; background: linear-gradient(135deg, #eff6ff, #eef2ff); color: #1f2937; }
@keyframes row-enter { from { opacity: 0; transform: translateX(-16px); } to { opacity: 1; transform: translateX(0); } }
@keyframes spin { to { transform: rotate(360deg); } }
.table-row { animation: row-enter 300ms ease-in-out both; }
.table-row:hover { background: #f9fafb; }
.cell { position: relative; }
.cell-text { max-width: 320px; overflow: hidden; text-overflow: ellipsis; }
.cell-text.truncate { white-space: nowrap; }
.cell-tooltip { position: absolute; right: 0; bottom: 100%; margin-bottom: 8px; z-index: 10; visibility: hidden; opacity: 0; max-width: 380px; padding: 4px 8px; border-radius: 4px; background: #1f2937; color: #fff; font-size: 12px; white-space: normal; word-break: break-word; transition: opacity 200ms; }
.cell:hover .cell-tooltip { visibility: visible; opacity: 1; }
.sort-hint { opacity: 0; }
th:hover .sort-hint { opacity: 1; }
.spinner { display: inline-block; width: 14px; height: 14px; border: 2px solid #e5e7eb; border-top-color: transparent; border-radius: 50%; animation: spin 800ms linear infinite; }
.summary-body table { border-collapse: collapse; }
.summary-body th, .summary-body td { border: 1px solid #e5e7eb; padding: 4px 8px; }
"#;

pub fn root_container_style() -> &'static str {
    "min-height: 100vh; display: flex; flex-direction: column; width: 100%;"
}

pub fn content_container_style() -> &'static str {
    "width: 100%; max-width: 1152px; margin: 0 auto; padding: 32px 16px; box-sizing: border-box;"
}

/// Wrapper around both panels; collapses when there is nothing to show.
pub fn results_wrapper_style(has_results: bool) -> String {
    if has_results {
        "opacity: 1; visibility: visible; height: auto; margin-top: 16px; transition: opacity 500ms ease-in-out; position: relative;".to_string()
    } else {
        "opacity: 0; visibility: hidden; height: 0; margin-top: 0; overflow: hidden; transition: opacity 500ms ease-in-out; position: relative;".to_string()
    }
}

/// Card that slides in from above (summary) or below (results).
pub fn panel_style(visible: bool, from_above: bool) -> String {
    let offset = if from_above { "-32px" } else { "32px" };
    let (opacity, translate) = if visible { ("1", "0") } else { ("0", offset) };
    format!(
        "background: #fff; border-radius: 12px; border: 1px solid #f3f4f6; box-shadow: 0 4px 6px rgba(0,0,0,0.08); padding: 24px; margin-bottom: 32px; transition: all 500ms ease-out; opacity: {opacity}; transform: translateY({translate});"
    )
}

pub fn table_fade_style(visible: bool) -> String {
    let (opacity, translate) = if visible { ("1", "0") } else { ("0", "16px") };
    format!(
        "width: 100%; overflow-x: auto; transition: all 500ms ease-in-out; opacity: {opacity}; transform: translateY({translate});"
    )
}

pub fn table_container_style() -> &'static str {
    "overflow: auto; max-height: 70vh; border: 1px solid #e5e7eb; border-radius: 12px;"
}

pub fn table_header_cell_style(wide: bool) -> String {
    let min_width = if wide { " min-width: 200px;" } else { "" };
    format!(
        "position: sticky; top: 0; z-index: 1; background: #f9fafb; padding: 12px 24px; text-align: left; font-size: 12px; font-weight: 500; color: #6b7280; letter-spacing: 0.05em; cursor: pointer; user-select: none;{min_width}"
    )
}

pub fn table_cell_style() -> &'static str {
    "padding: 16px 24px; font-size: 14px; color: #374151; border-top: 1px solid #e5e7eb;"
}

/// Rows enter one after another, 50ms apart.
pub fn table_row_style(position: usize) -> String {
    format!("animation-delay: {}ms;", position * 50)
}

pub fn page_button_style(current: bool, enabled: bool) -> String {
    let colors = if current {
        "background: #2563eb; color: #fff; cursor: pointer;"
    } else if enabled {
        "background: transparent; color: #2563eb; cursor: pointer;"
    } else {
        "background: transparent; color: #9ca3af; cursor: not-allowed;"
    };
    format!("border: none; padding: 4px 12px; border-radius: 6px; {colors}")
}

pub fn search_button_style(loading: bool) -> String {
    let background = if loading { "#374151" } else { "#111827" };
    format!(
        "width: 128px; height: 40px; border: none; border-radius: 12px; color: #fff; font-weight: 500; background: {background}; display: inline-flex; align-items: center; justify-content: center; gap: 8px; cursor: pointer;"
    )
}

pub fn toast_style(accent: &str, visible: bool) -> String {
    let (opacity, translate) = if visible { ("1", "0") } else { ("0", "16px") };
    format!(
        "position: fixed; right: 24px; bottom: 24px; z-index: 2000; min-width: 260px; max-width: 420px; padding: 12px 16px; border-radius: 10px; background: #fff; border-left: 4px solid {accent}; box-shadow: 0 10px 24px rgba(0,0,0,0.15); display: flex; align-items: flex-start; gap: 12px; transition: all 300ms ease; opacity: {opacity}; transform: translateY({translate}); pointer-events: {};",
        if visible { "auto" } else { "none" }
    )
}
