use std::time::Duration;

use async_trait::async_trait;
use dioxus::logger::tracing::{debug, warn};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::entities::query::QueryMode;
use crate::infra::config::env_config::ApiEndpoints;
use crate::usecase::ports::query_api::{ApiError, QueryApi};

#[derive(Debug, Clone)]
pub struct HttpSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            // Query answers are generated by a model on the backend and can be slow.
            request_timeout: Duration::from_secs(120),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReqwestQueryApi {
    endpoints: ApiEndpoints,
    client: reqwest::Client,
}

impl ReqwestQueryApi {
    pub fn new(endpoints: ApiEndpoints, settings: HttpSettings) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ApiError::Other(err.to_string()))?;
        Ok(Self { endpoints, client })
    }

    fn endpoint(&self, mode: QueryMode) -> &str {
        match mode {
            QueryMode::Database => &self.endpoints.query,
            QueryMode::Literature => &self.endpoints.literature,
        }
    }
}

#[async_trait]
impl QueryApi for ReqwestQueryApi {
    async fn post_query(&self, mode: QueryMode, query: &str) -> Result<Value, ApiError> {
        let url = self.endpoint(mode);
        debug!("POST {url}");
        let response = self
            .client
            .post(url)
            .json(&QueryRequest { query })
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(server_error(status, response).await);
        }

        let body = response.bytes().await.map_err(map_reqwest_error)?;
        match serde_json::from_slice::<Value>(&body) {
            Ok(value) => Ok(value),
            Err(err) => {
                warn!("{url} answered with a non-JSON body ({err}); treating it as empty");
                Ok(Value::Null)
            }
        }
    }

    async fn download_excel(&self, request_id: &str) -> Result<Vec<u8>, ApiError> {
        let url = self
            .endpoints
            .download_excel(request_id)
            .map_err(|err| ApiError::Other(err.to_string()))?;
        debug!("GET {url}");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(server_error(status, response).await);
        }

        let bytes = response.bytes().await.map_err(map_reqwest_error)?;
        Ok(bytes.to_vec())
    }
}

async fn server_error(status: StatusCode, response: reqwest::Response) -> ApiError {
    let message = match response.text().await {
        Ok(body) => structured_message(&body),
        Err(err) => {
            warn!("failed to read error body: {err}");
            None
        }
    };
    ApiError::Server {
        status: status.as_u16(),
        message,
    }
}

#[derive(Debug, Serialize)]
struct QueryRequest<'a> {
    query: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Pulls `message` (or the backend's `error`) out of a JSON error body.
pub fn structured_message(body: &str) -> Option<String> {
    let body: ErrorBody = serde_json::from_str(body).ok()?;
    [body.message, body.error]
        .into_iter()
        .flatten()
        .find(|message| !message.is_empty())
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_builder() {
        return ApiError::Other(err.to_string());
    }
    if err.is_connect() || err.is_timeout() || err.is_request() {
        return ApiError::NoResponse;
    }
    ApiError::Other(err.to_string())
}
