//! # client
//!
//! Leptos frontend for the Kazuki Girand portfolio site.
//!
//! The same crate renders on the server (`ssr`) and hydrates in the browser
//! (`hydrate`). Pages read the `content` tables directly; interactive state
//! lives in plain structs under `state` wrapped in signals by each page.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach the app to the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("console logger already set: {e}");
    }
    log::info!("hydrating kazukigirand");
    leptos::mount::hydrate_body(app::App);
}
