//! # fleema-client
//!
//! Leptos + WASM frontend for the FleeMa fleet-management application:
//! session state, role-derived permissions, and guarded routing over the
//! backend auth API.
//!
//! The crate is CSR-only. The `csr` feature enables the browser entry point
//! and the real HTTP boundary; the default (native) build substitutes stubs
//! so the core logic tests run under plain `cargo test`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;

/// Browser entry point: install logging and mount the app onto `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
