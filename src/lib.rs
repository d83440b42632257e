//! QuizMaster - Quiz Application Frontend
//!
//! Login and navigation UI for the quiz web application, built with Leptos
//! and WebAssembly. Credential checking and token issuance live in an
//! external HTTP service; this crate owns the login form, the persisted
//! client session, and the in-page `authChanged` broadcast that keeps
//! sibling components in sync.

#![recursion_limit = "512"]

pub mod app;
pub mod session;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
