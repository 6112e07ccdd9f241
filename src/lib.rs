//! # patentai-client
//!
//! Leptos + WASM frontend for the patent idea assistant.
//!
//! The user types a patent idea into a chat box; the client posts it to an
//! analysis backend and renders the similarity report it gets back. A
//! header toggle flips a light/dark theme persisted in `localStorage`.
//!
//! This crate contains pages, components, application state, the wire
//! schema for the analysis API, and the HTTP calls against it.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(crate::app::App);
}
