use std::cmp::Ordering;
use std::fmt;

use dioxus::logger::tracing::warn;
use serde_json::Value;

use crate::domain::entities::query::RawRow;

pub const PAGE_SIZE: usize = 10;
pub const WIDE_VALUE_CHARS: usize = 40;
pub const ALWAYS_TRUNCATE_CHARS: usize = 100;
pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl CellValue {
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Null => CellValue::Null,
            Value::Bool(v) => CellValue::Bool(*v),
            Value::Number(v) => v
                .as_f64()
                .map(CellValue::Number)
                .unwrap_or_else(|| CellValue::Text(v.to_string())),
            Value::String(v) => CellValue::Text(v.clone()),
            other => CellValue::Text(other.to_string()),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(text) => Some(text),
            _ => None,
        }
    }

    fn text_chars(&self) -> usize {
        self.as_text().map(|text| text.chars().count()).unwrap_or(0)
    }

    fn rank(&self) -> u8 {
        match self {
            CellValue::Null => 0,
            CellValue::Bool(_) => 1,
            CellValue::Number(_) => 2,
            CellValue::Text(_) => 3,
        }
    }

    /// Total order used for sorting: values of the same kind compare
    /// naturally, different kinds order as null < bool < number < text.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (CellValue::Bool(a), CellValue::Bool(b)) => a.cmp(b),
            (CellValue::Number(a), CellValue::Number(b)) => a.total_cmp(b),
            (CellValue::Text(a), CellValue::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => write!(f, "{NOT_AVAILABLE}"),
            CellValue::Bool(v) => write!(f, "{v}"),
            CellValue::Number(v) if v.fract() == 0.0 && v.abs() < 1e15 => {
                write!(f, "{}", *v as i64)
            }
            CellValue::Number(v) => write!(f, "{v}"),
            CellValue::Text(v) => write!(f, "{v}"),
        }
    }
}

/// Rows normalized to the schema of the first row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl ResultTable {
    pub fn from_rows(raw_rows: &[RawRow]) -> Self {
        let Some(first) = raw_rows.first() else {
            return Self::default();
        };
        let columns: Vec<String> = first.keys().cloned().collect();

        let rows = raw_rows
            .iter()
            .enumerate()
            .map(|(row_idx, raw)| {
                let extra = raw.keys().filter(|key| !columns.contains(key)).count();
                if extra > 0 {
                    warn!("row {row_idx} has {extra} column(s) outside the schema; dropping them");
                }
                columns
                    .iter()
                    .map(|column| match raw.get(column) {
                        Some(value) => CellValue::from_json(value),
                        None => {
                            warn!("row {row_idx} is missing column '{column}'; rendering N/A");
                            CellValue::Null
                        }
                    })
                    .collect()
            })
            .collect();

        Self { columns, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// A column is wide when any of its string values exceeds 40 characters.
    pub fn wide_columns(&self) -> Vec<bool> {
        (0..self.columns.len())
            .map(|col_idx| {
                self.rows.iter().any(|row| {
                    row.get(col_idx)
                        .map(|cell| cell.text_chars() > WIDE_VALUE_CHARS)
                        .unwrap_or(false)
                })
            })
            .collect()
    }

    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }

    /// Indices of rows in display order. Ties keep their original order.
    pub fn sorted_indices(&self, sort: Option<&SortState>) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..self.rows.len()).collect();
        let Some(sort) = sort else {
            return indices;
        };
        let Some(col_idx) = self.column_index(&sort.column) else {
            return indices;
        };
        indices.sort_by(|&a, &b| {
            let ordering = self.rows[a][col_idx].compare(&self.rows[b][col_idx]);
            match sort.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
        indices
    }
}

pub fn header_label(column: &str) -> String {
    column.replace('_', " ").to_uppercase()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    pub column: String,
    pub direction: SortDirection,
}

/// Header click: unsorted -> asc -> desc -> asc; another column starts at asc.
pub fn next_sort(current: Option<&SortState>, clicked: &str) -> SortState {
    let direction = match current {
        Some(sort) if sort.column == clicked && sort.direction == SortDirection::Asc => {
            SortDirection::Desc
        }
        _ => SortDirection::Asc,
    };
    SortState {
        column: clicked.to_string(),
        direction,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellView {
    pub text: String,
    pub title: Option<String>,
    pub truncate: bool,
    pub hover_detail: bool,
    pub placeholder: bool,
}

pub fn cell_view(value: &CellValue) -> CellView {
    if value.is_null() {
        return CellView {
            text: NOT_AVAILABLE.to_string(),
            title: None,
            truncate: false,
            hover_detail: false,
            placeholder: true,
        };
    }
    let text = value.to_string();
    let chars = value.text_chars();
    let long = chars > WIDE_VALUE_CHARS;
    CellView {
        title: long.then(|| text.clone()),
        truncate: long || chars > ALWAYS_TRUNCATE_CHARS,
        hover_detail: long,
        placeholder: false,
        text,
    }
}

/// Result count label; the backend caps results at 100 rows.
pub fn result_count_label(count: usize) -> String {
    let noun = if count == 1 { "result" } else { "results" };
    if count == 100 {
        format!("100+ {noun}")
    } else {
        format!("{count} {noun}")
    }
}
