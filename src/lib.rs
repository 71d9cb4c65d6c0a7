//! Browser client for the LMS portal.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything user-visible is rendered by Leptos components. Browser-only
//! behavior (HTTP, timers, storage, file reads, Chart.js interop) is gated
//! behind the `hydrate` feature so the same component tree renders on the
//! server and the pure state machines stay natively testable.

pub mod app;
pub mod charts;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: wires up logging and mounts the app over server markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
