//! # client
//!
//! Leptos + WASM frontend for PhillyFlow, an event-discovery and RSVP app.
//!
//! This crate contains pages, components, the auth and event state stores,
//! and the typed API boundary to the same-origin proxy server. All real
//! network and browser access sits behind the `csr` feature so the state
//! stores stay unit-testable on native targets.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: mount the application onto `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
