//! Network-facing adapters for the browser.
//!
//! DESIGN
//! ======
//! The core crate owns the EmailJS wire format; this layer only adapts it to
//! Leptos signals and browser timers.

pub mod contact;
