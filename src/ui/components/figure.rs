use std::fmt::Write as _;

use dioxus::prelude::*;

use crate::domain::entities::figure::{layout_figure, series_color, Figure};

const CHART_WIDTH: f64 = 720.0;
const CHART_HEIGHT: f64 = 320.0;

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Inline SVG markup for a figure. Every label is XML-escaped.
pub fn figure_svg(figure: &Figure, width: f64, height: f64) -> String {
    let chart = layout_figure(figure, width, height);
    let mut svg = String::new();

    // Writing into a String cannot fail.
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="100%" role="img">"#,
        w = chart.width,
        h = chart.height
    );
    let _ = write!(
        svg,
        r##"<line x1="{l}" y1="{b}" x2="{r}" y2="{b}" stroke="#9ca3af"/><line x1="{l}" y1="{t}" x2="{l}" y2="{b}" stroke="#9ca3af"/>"##,
        l = chart.plot_left,
        r = chart.plot_right,
        t = chart.plot_top,
        b = chart.plot_bottom
    );
    for (y, label) in &chart.y_ticks {
        let _ = write!(
            svg,
            r##"<line x1="{l}" y1="{y:.1}" x2="{r}" y2="{y:.1}" stroke="#f3f4f6"/><text x="{tx}" y="{y:.1}" font-size="11" fill="#6b7280" text-anchor="end" dominant-baseline="middle">{label}</text>"##,
            l = chart.plot_left,
            r = chart.plot_right,
            tx = chart.plot_left - 6.0,
            label = escape_xml(label)
        );
    }
    for (x, label) in &chart.x_labels {
        let _ = write!(
            svg,
            r##"<text x="{x:.1}" y="{y}" font-size="11" fill="#6b7280" text-anchor="middle">{label}</text>"##,
            y = chart.plot_bottom + 18.0,
            label = escape_xml(label)
        );
    }
    for bar in &chart.bars {
        let _ = write!(
            svg,
            r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}"/>"#,
            bar.x,
            bar.y,
            bar.width,
            bar.height,
            series_color(bar.series)
        );
    }
    for line in &chart.lines {
        let points = line
            .points
            .iter()
            .map(|(x, y)| format!("{x:.1},{y:.1}"))
            .collect::<Vec<_>>()
            .join(" ");
        let color = series_color(line.series);
        let _ = write!(
            svg,
            r#"<polyline points="{points}" fill="none" stroke="{color}" stroke-width="2"/>"#
        );
        for (x, y) in &line.points {
            let _ = write!(
                svg,
                r#"<circle cx="{x:.1}" cy="{y:.1}" r="3" fill="{color}"/>"#
            );
        }
    }
    svg.push_str("</svg>");
    svg
}

fn legend_labels(figure: &Figure) -> Vec<String> {
    figure
        .traces
        .iter()
        .enumerate()
        .map(|(idx, trace)| {
            trace
                .name
                .clone()
                .unwrap_or_else(|| format!("Series {}", idx + 1))
        })
        .collect()
}

#[component]
pub fn FigureView(figure: Figure) -> Element {
    let svg = figure_svg(&figure, CHART_WIDTH, CHART_HEIGHT);

    rsx! {
        div { style: "margin-bottom: 24px;",
            if let Some(title) = figure.title.as_ref() {
                h3 { style: "margin: 0 0 8px; font-size: 16px; font-weight: 600; color: #1f2937;", "{title}" }
            }
            div { dangerous_inner_html: "{svg}" }
            div { style: "display: flex; flex-wrap: wrap; gap: 12px; margin-top: 8px; font-size: 12px; color: #4b5563;",
                for (series , label) in legend_labels(&figure).into_iter().enumerate() {
                    span { key: "{series}", style: "display: inline-flex; align-items: center; gap: 4px;",
                        span { style: "width: 10px; height: 10px; border-radius: 2px; background: {series_color(series)};" }
                        "{label}"
                    }
                }
            }
        }
    }
}
