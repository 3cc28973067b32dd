//! # mindgauge
//!
//! Leptos + WASM single-page site for the stress & mood assessment demo:
//! a presentation shell plus a live widget that posts free text to an
//! external rule-based scoring service and renders the result and a
//! rolling history.
//!
//! The library compiles two ways: `hydrate` for the browser bundle and
//! `ssr` for the Axum server that renders and serves the page.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;

/// Browser entry point: attach the client runtime to the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
