//! Hearth Dashboard - Leptos frontend
//!
//! Reactive web UI listing household bills and their payment status.

pub mod api;
pub mod app;
pub mod components;
pub mod status;
pub mod toast;

pub use app::App;
pub use status::{classify, PaymentStatus, Severity, StatusPresentation};

/// Hydration entry point for WASM client
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    leptos::mount::hydrate_body(App);
}
