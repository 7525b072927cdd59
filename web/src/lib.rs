//! Shelter Web – Leptos site for browsing adoptable dogs.

pub mod app;
pub mod components;
pub mod listing;
pub mod pages;

/// Entry-point called from the WASM bundle to hydrate the server-rendered HTML.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // Routes `tracing` events to the browser console.
    tracing_wasm::set_as_global_default();
    leptos::mount_to_body(app::App);
}
