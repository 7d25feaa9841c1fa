//! # overclockart-web
//!
//! Leptos + WASM storefront for the OverclocKart gateway: token login, a
//! product catalog with admin-only creation, and order placement.
//!
//! Session, claims, and routing logic live in plain modules (`state`,
//! `routes`) that build and test natively; `pages` and `components` wire
//! them into the browser UI, and `net` talks to the REST gateway.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// Browser entry point: install logging and mount the app.
#[cfg(feature = "csr")]
pub fn start() {
    let config = config::ClientConfig::from_build_env();
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(config.log_level) {
        leptos::logging::warn!("logger already installed: {err}");
    }
    log::info!("starting storefront: api={}", config.api_base_url);
    leptos::mount::mount_to_body(app::App);
}
