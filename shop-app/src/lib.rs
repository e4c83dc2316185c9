//! # joyrent-shop-app
//!
//! Leptos + WASM shopper client for the JoyRent game-rental platform.
//! Replaces the uni-app mini program `switchRentApp/` with a Rust-native
//! UI layer.
//!
//! Browsing the catalog works without an account; the cart, orders, and
//! profile screens require a session. The shared request pipeline attaches
//! the bearer token to every call and reacts to authentication failures by
//! clearing the session and sending the shopper to the login screen.

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
