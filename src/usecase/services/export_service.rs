use std::path::PathBuf;
use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use dioxus::logger::tracing::{error, info};
use thiserror::Error;

use crate::infra::export::workbook::{export_file_name, inspect_workbook, save_workbook};
use crate::usecase::ports::query_api::{ApiError, QueryApi};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("there is no request to export")]
    MissingRequestId,
    #[error(transparent)]
    Download(#[from] ApiError),
    #[error("downloaded file is not a valid workbook: {0}")]
    InvalidWorkbook(String),
    #[error("failed to save workbook: {0}")]
    Save(String),
}

pub struct ExportService {
    api: Arc<dyn QueryApi>,
    target_dir: PathBuf,
}

impl ExportService {
    pub fn new(api: Arc<dyn QueryApi>, target_dir: PathBuf) -> Self {
        Self { api, target_dir }
    }

    pub async fn export_excel(&self, request_id: &str) -> Result<PathBuf, ExportError> {
        self.export_excel_on(request_id, Utc::now().date_naive()).await
    }

    /// Downloads, validates and saves the workbook named for `date`.
    pub async fn export_excel_on(
        &self,
        request_id: &str,
        date: NaiveDate,
    ) -> Result<PathBuf, ExportError> {
        if request_id.trim().is_empty() {
            return Err(ExportError::MissingRequestId);
        }

        let bytes = self.api.download_excel(request_id).await.inspect_err(|err| {
            error!("excel download for {request_id} failed: {err}");
        })?;

        let sheets =
            inspect_workbook(&bytes).map_err(|err| ExportError::InvalidWorkbook(err.to_string()))?;

        let path = save_workbook(&self.target_dir, &export_file_name(date), &bytes)
            .map_err(|err| ExportError::Save(format!("{err:#}")))?;
        info!(
            "saved export for {request_id} ({} sheet(s), {} bytes) to {}",
            sheets.len(),
            bytes.len(),
            path.display()
        );
        Ok(path)
    }
}
