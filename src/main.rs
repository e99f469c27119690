use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use dioxus::logger::tracing::{error, Level};
use directories::ProjectDirs;

mod app;
mod domain;
mod infra;
mod platform;
mod ui;
mod usecase;


use crate::infra::config::env_config::resolve_from_env;

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("failed to initialise logging: {err}");
    }

    let deployment = match resolve_from_env() {
        Ok(deployment) => deployment,
        Err(err) => {
            error!("{err}");
            std::process::exit(2);
        }
    };

    let mut config = dioxus::desktop::Config::new()
        .with_window(
            dioxus::desktop::WindowBuilder::new()
                .with_title("ChEMBL Search")
                .with_inner_size(dioxus::desktop::LogicalSize::new(1200.0, 860.0)),
        );
    match default_webview_data_dir() {
        Ok(dir) => config = config.with_data_directory(dir),
        Err(err) => error!("falling back to the default WebView data dir: {err:#}"),
    }

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .with_context(deployment)
        .launch(app::App);
}

pub(crate) fn ensure_webview_data_dir(base_data_dir: &Path) -> Result<PathBuf> {
    let webview_data_dir = base_data_dir.join("webview2");
    std::fs::create_dir_all(&webview_data_dir).with_context(|| {
        format!(
            "failed to create webview dir: {}",
            webview_data_dir.display()
        )
    })?;
    Ok(webview_data_dir)
}

fn default_webview_data_dir() -> Result<PathBuf> {
    let project_dirs = ProjectDirs::from("com", "hellhbbd", "chembl-search")
        .ok_or_else(|| anyhow!("unable to resolve data directory"))?;
    ensure_webview_data_dir(project_dirs.data_local_dir())
}
