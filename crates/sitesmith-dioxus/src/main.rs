use anyhow::Context;
use dioxus::prelude::*;
use sitesmith_client::{ApiClient, JokeApi, Stores, ZenQuotes};
use std::env;
use std::sync::Arc;
use std::time::Duration;

mod ui;

use sitesmith_config::Config;
use ui::components::ErrorScreen;
use ui::{App, Enrichment};

const ENRICHMENT_TIMEOUT: Duration = Duration::from_secs(10);

/// Why the app could not start, shown in place of the UI.
#[derive(Clone)]
struct StartupError {
    details: String,
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("sitesmith starting up!");
    log::info!("Config path: {}", Config::config_path().display());

    match bootstrap() {
        Ok((stores, enrichment)) => {
            log::info!("Launching desktop app");
            dioxus::LaunchBuilder::desktop()
                .with_cfg(make_window_config())
                .with_context(stores)
                .with_context(enrichment)
                .launch(App);
        }
        Err(err) => {
            log::error!("Startup failed: {err:#}");
            dioxus::LaunchBuilder::desktop()
                .with_cfg(make_window_config())
                .with_context(StartupError {
                    details: format!("{err:#}"),
                })
                .launch(StartupFailed);
        }
    }
}

/// Load the config (a CLI argument overrides the API base URL) and build the
/// stores and enrichment sources from it.
fn bootstrap() -> anyhow::Result<(Stores, Enrichment)> {
    let mut config = Config::load_or_default().context("Could not load configuration")?;
    if let Some(api_base_url) = env::args().nth(1) {
        log::info!("Using API base URL from CLI argument: {api_base_url}");
        config.api_base_url = api_base_url;
    }
    log::info!("API base URL: {}", config.api_base());

    let api = ApiClient::new(config.api_base()).context("Could not create API client")?;

    let http = reqwest::Client::builder()
        .timeout(ENRICHMENT_TIMEOUT)
        .build()
        .context("Could not create HTTP client")?;
    let enrichment = Enrichment {
        quotes: Arc::new(ZenQuotes::new(http.clone(), config.quote_url.clone())),
        jokes: Arc::new(JokeApi::new(http, config.joke_url.clone())),
        joke_category: config.joke_category.clone(),
        safe_mode: config.joke_safe_mode,
    };

    Ok((Stores::new(api), enrichment))
}

#[component]
fn StartupFailed() -> Element {
    let error = use_context::<StartupError>();
    let config_path = Config::config_path();

    rsx! {
        ErrorScreen {
            title: "sitesmith could not start".to_string(),
            message: format!("Check the config file at {}", config_path.display()),
            details: Some(error.details),
        }
    }
}

fn make_window_config() -> dioxus::desktop::Config {
    use dioxus::desktop::{Config, WindowBuilder};

    let window = WindowBuilder::new()
        .with_title("sitesmith")
        .with_always_on_top(false);

    Config::default().with_window(window)
}
