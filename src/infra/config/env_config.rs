use std::fmt;
use std::str::FromStr;

use reqwest::Url;
use thiserror::Error;

/// Runtime variable naming the deployment profile.
pub const ENV_VAR: &str = "CHEMBL_SEARCH_ENV";

/// Value baked in at build time, used when the runtime variable is unset.
const BUILD_TIME_ENV: Option<&str> = option_env!("CHEMBL_SEARCH_ENV");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deployment {
    Local,
    Dev,
    Main,
}

impl Deployment {
    pub const ALL: [Deployment; 3] = [Deployment::Local, Deployment::Dev, Deployment::Main];

    pub fn name(self) -> &'static str {
        match self {
            Deployment::Local => "local",
            Deployment::Dev => "dev",
            Deployment::Main => "main",
        }
    }

    fn base_url(self) -> &'static str {
        match self {
            Deployment::Local => "http://127.0.0.1:5000",
            Deployment::Dev => "https://dev-backend-api-dot-project-1-450712.uc.r.appspot.com",
            Deployment::Main => "https://beta.typetwo.ai",
        }
    }

    pub fn endpoints(self) -> ApiEndpoints {
        ApiEndpoints::from_base(self.base_url())
    }
}

impl fmt::Display for Deployment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Deployment {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Deployment::ALL
            .into_iter()
            .find(|deployment| deployment.name() == value)
            .ok_or_else(|| ConfigError::InvalidEnvironment {
                value: value.to_string(),
                valid: valid_names(),
            })
    }
}

fn valid_names() -> String {
    Deployment::ALL
        .iter()
        .map(|deployment| deployment.name())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("CHEMBL_SEARCH_ENV environment variable is not defined")]
    MissingEnvironment,
    #[error("Invalid environment: \"{value}\". Valid environments are: {valid}")]
    InvalidEnvironment { value: String, valid: String },
    #[error("invalid endpoint URL: {0}")]
    InvalidUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoints {
    pub query: String,
    pub literature: String,
    download_excel_base: String,
}

impl ApiEndpoints {
    pub fn from_base(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            query: format!("{base}/api/query"),
            literature: format!("{base}/api/literature"),
            download_excel_base: format!("{base}/api/download-excel"),
        }
    }

    /// Download URL for `request_id`, percent-encoded as a single path segment.
    pub fn download_excel(&self, request_id: &str) -> Result<Url, ConfigError> {
        let invalid = || ConfigError::InvalidUrl(self.download_excel_base.clone());
        let mut url = Url::parse(&self.download_excel_base).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|()| invalid())?
            .pop_if_empty()
            .push(request_id);
        Ok(url)
    }
}

/// Resolves a deployment name; an absent or blank name is an error.
pub fn resolve_deployment(name: Option<&str>) -> Result<Deployment, ConfigError> {
    match name.map(str::trim) {
        None | Some("") => Err(ConfigError::MissingEnvironment),
        Some(value) => value.parse(),
    }
}

/// Reads the deployment from the process environment, then the build-time value.
pub fn resolve_from_env() -> Result<Deployment, ConfigError> {
    let runtime = std::env::var(ENV_VAR).ok();
    resolve_deployment(runtime.as_deref().or(BUILD_TIME_ENV))
}
