//! Swap dApp frontend - Leptos CSR entry point.
//!
//! Connect a wallet through the web3 modal, watch the session, swap one
//! token for another through the swap contract.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

mod app;
mod components;
mod pages;
mod services;
mod state;
mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Panic messages should land in the browser console, not disappear
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("swap-web starting");

    hide_loading_screen();

    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Hide the static loading placeholder once the WASM bundle is running.
fn hide_loading_screen() {
    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(d) => d,
        None => return,
    };

    if let Some(loading) = document.get_element_by_id("leptos-loading") {
        if loading.set_attribute("style", "display: none;").is_err() {
            log::warn!("could not hide loading screen");
        }
    }
}
