use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::domain::entities::query::QueryMode;

pub const NO_RESPONSE_MESSAGE: &str = "No response from server. Please check your connection.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("{}", NO_RESPONSE_MESSAGE)]
    NoResponse,
    /// The server answered with a non-success status.
    #[error("{}", server_message(*status, message.as_deref()))]
    Server { status: u16, message: Option<String> },
    #[error("{0}")]
    Other(String),
}

fn server_message(status: u16, message: Option<&str>) -> String {
    match message {
        Some(message) if !message.is_empty() => message.to_string(),
        _ => format!("Server error: {status}"),
    }
}

/// Outbound surface of the remote query backend.
#[async_trait]
pub trait QueryApi: Send + Sync {
    /// POSTs `{query}` to the endpoint for `mode` and returns the raw JSON body.
    async fn post_query(&self, mode: QueryMode, query: &str) -> Result<Value, ApiError>;

    /// Downloads the spreadsheet generated for `request_id`.
    async fn download_excel(&self, request_id: &str) -> Result<Vec<u8>, ApiError>;
}
