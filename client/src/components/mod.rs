//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and the contact form while reading/writing
//! shared state from Leptos context providers.

pub mod contact_form;
pub mod site_header;
