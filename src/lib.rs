//! # lumen-client
//!
//! Leptos + WASM frontend for the Lumen web application's login flow.
//! Replaces the React `app/(auth)/login` page with a Rust-native UI layer.
//!
//! This crate contains pages, components, application state, network
//! types, and the API helpers for the authentication backend.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
pub mod validate;

/// WASM entry point, invoked by the generated JS shim after load.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
