//! # client
//!
//! Leptos + WASM front end for the Softorize marketing site.
//!
//! Renders the page and binds the behaviors from the `softorize` core crate
//! to the DOM: theme toggle, mobile menu, smooth anchor scrolling, scroll
//! reveal, the contact form pipeline, and the page-load timing log.
//!
//! Browser glue is compiled only with the `csr` feature. Without it every
//! DOM helper degrades to a no-op so the crate builds and tests natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod util;

/// WASM entry point: mount the app and start the page-level behaviors.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    leptos::mount::mount_to_body(app::App);

    util::scroll::observe_reveals();
    util::perf::install();
    util::dom::mark_body_loaded();

    log::info!("Softorize website initialized successfully!");
}
