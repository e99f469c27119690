use dioxus::logger::tracing::warn;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceKind {
    Bar,
    Scatter,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    pub kind: TraceKind,
    pub name: Option<String>,
    pub x: Vec<String>,
    pub y: Vec<Option<f64>>,
}

/// Chart returned by the backend in Plotly's `{data, layout}` shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub title: Option<String>,
    pub traces: Vec<Trace>,
}

impl Figure {
    pub fn from_value(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        let traces: Vec<Trace> = object
            .get("data")?
            .as_array()?
            .iter()
            .filter_map(parse_trace)
            .collect();
        if traces.is_empty() {
            warn!("figure has no drawable traces; skipping it");
            return None;
        }
        let title = object.get("layout").and_then(|layout| match layout.get("title") {
            Some(Value::String(text)) => Some(text.clone()),
            Some(Value::Object(title)) => title.get("text").and_then(Value::as_str).map(str::to_string),
            _ => None,
        });
        Some(Self { title, traces })
    }
}

fn parse_trace(value: &Value) -> Option<Trace> {
    let kind = match value.get("type").and_then(Value::as_str) {
        Some("bar") => TraceKind::Bar,
        Some("scatter") | Some("scattergl") | Some("line") | None => TraceKind::Scatter,
        Some(other) => {
            warn!("unsupported trace type '{other}'");
            return None;
        }
    };
    let Some(y) = value.get("y").and_then(Value::as_array) else {
        warn!("trace without a plain y array; skipping it");
        return None;
    };
    let y: Vec<Option<f64>> = y.iter().map(Value::as_f64).collect();
    let x = match value.get("x").and_then(Value::as_array) {
        Some(x) => x
            .iter()
            .map(|v| match v {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect(),
        None => (0..y.len()).map(|idx| idx.to_string()).collect(),
    };
    Some(Trace {
        kind,
        name: value.get("name").and_then(Value::as_str).map(str::to_string),
        x,
        y,
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub series: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    pub points: Vec<(f64, f64)>,
    pub series: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub plot_left: f64,
    pub plot_top: f64,
    pub plot_right: f64,
    pub plot_bottom: f64,
    pub bars: Vec<BarRect>,
    pub lines: Vec<Polyline>,
    pub x_labels: Vec<(f64, String)>,
    pub y_ticks: Vec<(f64, String)>,
}

const MARGIN_LEFT: f64 = 56.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_TOP: f64 = 16.0;
const MARGIN_BOTTOM: f64 = 40.0;
const Y_TICKS: usize = 4;

/// Projects the figure onto a `width` x `height` canvas. The x axis is
/// categorical: one band per distinct x label, in first-seen order.
pub fn layout_figure(figure: &Figure, width: f64, height: f64) -> ChartLayout {
    let plot_left = MARGIN_LEFT;
    let plot_right = width - MARGIN_RIGHT;
    let plot_top = MARGIN_TOP;
    let plot_bottom = height - MARGIN_BOTTOM;

    let mut categories: Vec<String> = Vec::new();
    for trace in &figure.traces {
        for label in &trace.x {
            if !categories.contains(label) {
                categories.push(label.clone());
            }
        }
    }

    let values = figure
        .traces
        .iter()
        .flat_map(|trace| trace.y.iter().flatten().copied());
    // The baseline is always on the axis.
    let (y_min, mut y_max) =
        values.fold((0.0_f64, 0.0_f64), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if (y_max - y_min).abs() < f64::EPSILON {
        y_max = y_min + 1.0;
    }

    let band = (plot_right - plot_left) / categories.len().max(1) as f64;
    let scale_y = |v: f64| plot_bottom - (v - y_min) / (y_max - y_min) * (plot_bottom - plot_top);
    let band_center = |label: &str| {
        categories
            .iter()
            .position(|c| c == label)
            .map(|idx| plot_left + band * (idx as f64 + 0.5))
    };

    let bar_series: Vec<usize> = figure
        .traces
        .iter()
        .enumerate()
        .filter(|(_, t)| t.kind == TraceKind::Bar)
        .map(|(idx, _)| idx)
        .collect();
    let bar_width = band * 0.8 / bar_series.len().max(1) as f64;

    let mut bars = Vec::new();
    let mut lines = Vec::new();
    for (series, trace) in figure.traces.iter().enumerate() {
        let points = trace
            .x
            .iter()
            .zip(trace.y.iter())
            .filter_map(|(label, y)| Some((band_center(label)?, (*y)?)));
        match trace.kind {
            TraceKind::Bar => {
                let slot = bar_series.iter().position(|s| *s == series).unwrap_or(0);
                for (center, value) in points {
                    let left = center - band * 0.4 + bar_width * slot as f64;
                    let top = scale_y(value.max(0.0));
                    let bottom = scale_y(value.min(0.0));
                    bars.push(BarRect {
                        x: left,
                        y: top,
                        width: bar_width,
                        height: bottom - top,
                        series,
                    });
                }
            }
            TraceKind::Scatter => lines.push(Polyline {
                points: points.map(|(x, y)| (x, scale_y(y))).collect(),
                series,
            }),
        }
    }

    let x_labels = categories
        .iter()
        .enumerate()
        .map(|(idx, label)| (plot_left + band * (idx as f64 + 0.5), label.clone()))
        .collect();
    let y_ticks = (0..=Y_TICKS)
        .map(|step| {
            let value = y_min + (y_max - y_min) * step as f64 / Y_TICKS as f64;
            (scale_y(value), format_tick(value))
        })
        .collect();

    ChartLayout {
        width,
        height,
        plot_left,
        plot_top,
        plot_right,
        plot_bottom,
        bars,
        lines,
        x_labels,
        y_ticks,
    }
}

fn format_tick(value: f64) -> String {
    if value.fract().abs() < 1e-9 {
        format!("{}", value as i64)
    } else {
        format!("{value:.2}")
    }
}

pub const SERIES_COLORS: [&str; 6] = [
    "#2563eb", "#f97316", "#16a34a", "#dc2626", "#9333ea", "#0891b2",
];

pub fn series_color(series: usize) -> &'static str {
    SERIES_COLORS[series % SERIES_COLORS.len()]
}
