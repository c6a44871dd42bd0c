//! SpotShare Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod error;
mod filters;
mod models;
mod navigation;
mod pages;
mod projector;
mod routes;
mod source;
mod store;

use std::sync::Arc;

use app::App;
use config::SiteConfig;
use context::ListingContext;
use leptos::prelude::*;
use source::StaticSpotSource;

fn main() {
    console_error_panic_hook::set_once();

    let loaded = SiteConfig::embedded();
    let config = loaded.clone().unwrap_or_default();
    if let Err(err) = console_logger::init(config.level_filter(), config.log_history) {
        web_sys::console::error_1(&format!("[APP] logger already set: {}", err).into());
    }
    if let Err(err) = loaded {
        log::warn!("using default site config: {}", err);
    }

    let source = StaticSpotSource::embedded().unwrap_or_else(|err| {
        log::error!("could not load parking spots: {}", err);
        StaticSpotSource::default()
    });
    let context = ListingContext::new(Arc::new(source), config);

    mount_to_body(move || view! { <App context=context /> });
}
