pub mod admin;
pub mod api;
pub mod app;
pub mod auth;
mod components;
pub mod contact;
pub mod gallery;
pub mod guard;
pub mod models;
mod pages;
pub mod state;
pub mod storage;
pub mod util;

use leptos::prelude::*;

// Needed for `#[wasm_bindgen(start)]` on the wasm entrypoint.
#[cfg(all(target_arch = "wasm32", not(test)))]
use wasm_bindgen::prelude::wasm_bindgen;

// Only register the WASM start function for normal builds (not for tests),
// otherwise wasm-bindgen-test will end up with multiple entry symbols.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() {
    console_error_panic_hook::set_once();

    // Ignore the error if a logger is already installed.
    drop(console_log::init_with_level(log::Level::Debug));
    log::info!("portfolio app starting");

    mount_to_body(app::App);
}
