use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use dioxus::logger::tracing::{error, info};

use crate::domain::entities::query::{QueryMode, QueryResponse};
use crate::usecase::ports::query_api::QueryApi;

/// Counts in-flight calls for one logical operation.
#[derive(Debug, Default)]
pub struct InFlight {
    active: AtomicUsize,
}

impl InFlight {
    pub fn begin(&self) -> InFlightGuard<'_> {
        self.active.fetch_add(1, Ordering::SeqCst);
        InFlightGuard { tracker: self }
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst) > 0
    }
}

pub struct InFlightGuard<'a> {
    tracker: &'a InFlight,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.tracker.active.fetch_sub(1, Ordering::SeqCst);
    }
}

pub struct QueryService {
    api: Arc<dyn QueryApi>,
    primary: InFlight,
    literature: InFlight,
}

impl QueryService {
    pub fn new(api: Arc<dyn QueryApi>) -> Self {
        Self {
            api,
            primary: InFlight::default(),
            literature: InFlight::default(),
        }
    }

    pub async fn submit_query(&self, query: &str) -> QueryResponse {
        self.submit(QueryMode::Database, query).await
    }

    pub async fn submit_secondary_query(&self, query: &str) -> QueryResponse {
        self.submit(QueryMode::Literature, query).await
    }

    /// Never fails: transport and server errors come back in `error`.
    pub async fn submit(&self, mode: QueryMode, query: &str) -> QueryResponse {
        let _in_flight = self.tracker(mode).begin();
        info!("submitting {} query ({} chars)", mode.label(), query.len());
        match self.api.post_query(mode, query).await {
            Ok(body) => {
                let response = QueryResponse::from_value(body);
                info!(
                    "{} query answered: {} row(s), summary {}",
                    mode.label(),
                    response.search_results.as_ref().map_or(0, Vec::len),
                    if response.summary.is_some() { "present" } else { "absent" }
                );
                response
            }
            Err(err) => {
                error!("{} query failed: {err}", mode.label());
                QueryResponse::from_error(err.to_string())
            }
        }
    }

    pub fn is_loading(&self, mode: QueryMode) -> bool {
        self.tracker(mode).is_active()
    }

    fn tracker(&self, mode: QueryMode) -> &InFlight {
        match mode {
            QueryMode::Database => &self.primary,
            QueryMode::Literature => &self.literature,
        }
    }
}
