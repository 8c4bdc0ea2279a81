//! # homepage-client
//!
//! Leptos + WASM frontend for a personal academic homepage.
//!
//! This crate contains the page, its components, the static content, and the
//! two pieces of client state with real decision logic: the theme preference
//! controller and the expanded-abstract set. Browser access is confined to
//! `util::browser_theme`.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install console logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("console logger not installed: {err}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
