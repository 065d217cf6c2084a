//! SweetVerse Frontend Entry Point

mod api;
mod app;
mod catalog;
mod components;
mod config;
mod context;
mod error;
mod guard;
mod models;
mod pages;
mod session;
mod store;

use std::sync::Arc;

use app::App;
use config::AppConfig;
use leptos::prelude::*;
use session::{LocalStorage, MemoryStorage, SessionStorage};

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_build_env();
    _ = console_log::init_with_level(config.log_level);
    log::info!("[App] starting, api={}", config.api_base);

    let storage: Arc<dyn SessionStorage> = if LocalStorage::available() {
        Arc::new(LocalStorage)
    } else {
        log::warn!("[App] localStorage unavailable, sessions will not survive a reload");
        Arc::new(MemoryStorage::new())
    };

    mount_to_body(move || view! { <App config=config storage=storage /> });
}
