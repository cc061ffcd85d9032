//! # client
//!
//! Leptos + WASM frontend for VolunteerHub.
//!
//! This crate contains the login and add-volunteer-post pages, the toast
//! surface, session/auth state, and the HTTP clients for the identity service
//! and the volunteer API. The `server` crate links it with the `ssr` feature
//! and the browser bundle is built with `hydrate`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install console logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
