use std::sync::Arc;

use dioxus::logger::tracing::{error, info};
use dioxus::prelude::*;

use crate::infra::config::env_config::Deployment;
use crate::infra::export::workbook::default_download_dir;
use crate::infra::http::api_client::{HttpSettings, ReqwestQueryApi};
use crate::ui::components::content_area::ContentArea;
use crate::ui::components::header::Header;
use crate::ui::state::app_state::Services;
use crate::ui::styles::{root_container_style, GLOBAL_CSS};
use crate::ui::toast::ToastProvider;
use crate::usecase::ports::query_api::{ApiError, QueryApi};
use crate::usecase::services::export_service::ExportService;
use crate::usecase::services::query_service::QueryService;

pub fn build_services(deployment: Deployment) -> Result<Services, ApiError> {
    let api: Arc<dyn QueryApi> = Arc::new(ReqwestQueryApi::new(
        deployment.endpoints(),
        HttpSettings::default(),
    )?);
    let download_dir = default_download_dir();
    info!(
        "using {deployment} backend, exports go to {}",
        download_dir.display()
    );
    Ok(Services {
        query: Arc::new(QueryService::new(api.clone())),
        export: Arc::new(ExportService::new(api, download_dir)),
    })
}

#[component]
pub fn App() -> Element {
    let deployment = use_context::<Deployment>();
    let services = use_hook(move || build_services(deployment).map_err(|err| err.to_string()));

    let services = match services {
        Ok(services) => services,
        Err(err) => {
            error!("failed to start HTTP client: {err}");
            return rsx! {
                div {
                    p { "Unable to start the HTTP client: {err}" }
                }
            };
        }
    };

    rsx! {
        style { "{GLOBAL_CSS}" }
        ToastProvider {
            ServicesScope { services,
                div { style: "{root_container_style()}",
                    Header { environment: deployment.name().to_string() }
                    ContentArea {}
                }
            }
        }
    }
}

#[component]
fn ServicesScope(services: Services, children: Element) -> Element {
    use_context_provider(|| services);
    rsx! {
        {children}
    }
}
