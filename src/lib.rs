//! # inventory-dashboard
//!
//! Leptos + WASM frontend for the inventory/retail management dashboard.
//!
//! This crate contains the authentication core (session store, auth gateway,
//! route guard), the dashboard shell with its widgets, forms and reports, and
//! the REST helpers that talk to the external inventory backend.
//!
//! Browser-only glue is gated behind the `csr` feature so the rest of the
//! crate builds and tests natively.

pub mod app;
pub mod auth;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = config::log_level(option_env!("INVENTORY_LOG_LEVEL"));
    let _ = console_log::init_with_level(level);
    log::info!("inventory dashboard starting (api base {})", config::ApiConfig::from_build_env().base_url());
    leptos::mount::mount_to_body(app::App);
}
