//! Page-level views.

pub mod home;
