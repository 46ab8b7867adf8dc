//! # libris-console
//!
//! Leptos + WASM admin console for the library service.
//!
//! This crate contains the session store, route guard, credential service,
//! and the navigation shell around the dashboard and section screens. Pure
//! logic lives outside the components so it runs under native tests; the
//! browser bindings are behind the `csr` feature.

pub mod app;
pub mod auth;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: install panic and log hooks, then mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already installed");
    }
    leptos::mount::mount_to_body(app::App);
}
