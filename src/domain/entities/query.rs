use dioxus::logger::tracing::warn;
use serde_json::{Map, Value};

use crate::domain::entities::figure::Figure;

pub type RawRow = Map<String, Value>;

/// Which backend surface a query goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum QueryMode {
    #[default]
    Database,
    Literature,
}

impl QueryMode {
    pub fn label(self) -> &'static str {
        match self {
            QueryMode::Database => "Database",
            QueryMode::Literature => "Literature",
        }
    }
}

/// Decoded response body. Every field is optional because the service passes
/// the body through without validating its shape.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryResponse {
    pub summary: Option<String>,
    pub search_results: Option<Vec<RawRow>>,
    pub request_id: Option<String>,
    pub figure: Option<Figure>,
    pub error: Option<String>,
}

impl QueryResponse {
    pub fn from_error(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::default()
        }
    }

    /// Lenient decode: unknown shapes become absent fields instead of errors.
    pub fn from_value(value: Value) -> Self {
        let Value::Object(mut body) = value else {
            warn!("query response is not a JSON object; treating it as empty");
            return Self::default();
        };

        let summary = take_first(&mut body, &["summary", "text"]).and_then(value_to_text);
        let request_id =
            take_first(&mut body, &["requestId", "request_id"]).and_then(value_to_text);
        let error = take_first(&mut body, &["error"])
            .and_then(value_to_text)
            .filter(|error| !error.is_empty());
        let figure = take_first(&mut body, &["figure"]).and_then(|v| Figure::from_value(&v));
        let search_results = match take_first(&mut body, &["searchResults", "search_results"]) {
            None | Some(Value::Null) => None,
            Some(Value::Array(items)) => Some(
                items
                    .into_iter()
                    .filter_map(|item| match item {
                        Value::Object(row) => Some(row),
                        other => {
                            warn!("dropping non-object search result: {other}");
                            None
                        }
                    })
                    .collect(),
            ),
            Some(other) => {
                warn!("searchResults is not an array ({other}); ignoring it");
                None
            }
        };

        Self {
            summary,
            search_results,
            request_id,
            figure,
            error,
        }
    }
}

fn take_first(body: &mut Map<String, Value>, keys: &[&str]) -> Option<Value> {
    keys.iter().find_map(|key| body.remove(*key))
}

fn value_to_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    }
}

/// A query that is blank after trimming is "no query".
pub fn is_blank_query(query: &str) -> bool {
    query.trim().is_empty()
}
