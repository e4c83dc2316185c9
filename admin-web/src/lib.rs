//! # joyrent-admin-web
//!
//! Leptos + WASM admin console for the JoyRent game-rental platform.
//! Replaces the Vue 3 `rent-vue/` console with a Rust-native UI layer.
//!
//! This crate contains pages, application state (session store and route
//! guard), and the shared HTTP request pipeline that attaches the bearer
//! token to every outgoing call and reacts to authentication failures.

pub mod app;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: set up panic reporting and console logging, then
/// mount the root component.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
