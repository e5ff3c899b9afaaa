//! # client
//!
//! Leptos + WASM frontend for the BTS Global Bank onboarding (KYC) portal.
//!
//! This crate contains the route table, pages, page chrome, the session state
//! machine with its route guard, and the login flow. It is compiled with
//! `hydrate` for the browser and with `ssr` for the axum host that renders the
//! first paint.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
