//! Browser glue shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate `web-sys` access from components so the view
//! code reads the same with or without the `csr` feature.

pub mod dom;
pub mod local_store;
pub mod perf;
pub mod scroll;
pub mod theme;
