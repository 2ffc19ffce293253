//! # trackside-client
//!
//! Leptos + WASM frontend for the Trackside motorsport social app: feed with
//! likes and comments, callout and event forms with device-local drafts,
//! notifications, racer search, and marketplace purchases.
//!
//! All remote calls go through `net::api`; view state lives in `state` as
//! plain structs so it can be tested without a browser.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs the panic hook and console logger, then
/// hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // Fails only when a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
