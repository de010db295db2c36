//! # client
//!
//! Leptos + WASM frontend for the on-chain chat room.
//!
//! The browser build (`hydrate`) connects a wallet, resolves the user's
//! display name, subscribes to the chat room event stream and renders the
//! feed. Every chat action is a wallet-signed transaction; nothing is stored
//! locally beyond the in-memory feed. The `ssr` build only renders the shell
//! for the host in the root package.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: install logging and hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
