//! # stackit-client
//!
//! Leptos + WASM frontend for StackIt, a question-and-answer community
//! for developers. Renders the marketing pages (hero, features,
//! trending topics), the authentication forms (login, signup), and the
//! authenticated surfaces (dashboard, profile).
//!
//! The behavioral core lives in `state::forms` (local credential
//! validation) and `net::outcome` (reduction of an authentication
//! response into a single display message plus follow-on effects).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Hydration entry point invoked by the generated WASM bindings.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
