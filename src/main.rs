mod api;
mod app;
mod browser;
mod components;
mod config;
mod error;
mod forms;
mod logging;
mod pages;
mod render;
mod resources;
mod tabs;
#[cfg(test)]
mod testing;
mod translate;

use app::App;
use config::AppConfig;
use leptos::prelude::*;
use tracing::{error, info};

fn main() {
    console_error_panic_hook::set_once();
    logging::init();

    let config = AppConfig::from_environment().unwrap_or_else(|e| {
        error!("Invalid configuration, using defaults: {}", e);
        AppConfig::default()
    });
    info!(
        "FitTrack starting against {} (tab: {})",
        config.api_base_url,
        config.default_tab.id()
    );

    leptos::mount::mount_to_body(move || view! { <App config=config.clone() /> });
}
