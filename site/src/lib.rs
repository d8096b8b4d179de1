//! # site
//!
//! Leptos frontend for a single-page developer portfolio. Rendered on the
//! server by the `portfolio` binary and hydrated in the browser.
//!
//! The only stateful piece with a real lifecycle is the theme manager in
//! `state::theme`; everything else is static content and scroll-driven
//! decoration.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the server markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
