//! Theme initialization and DOM application.
//!
//! Builds the core `ThemeManager` over `localStorage` with the browser's
//! local hour, and mirrors the current theme into the `data-theme`
//! attribute on `<html>`.
//!
//! TRADE-OFFS
//! ==========
//! Outside the browser there is no clock or document to consult; the hour
//! falls back to noon and `apply` is a no-op so native builds stay
//! deterministic.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use softorize::theme::{Theme, ThemeManager};

use super::local_store::LocalStore;

/// Theme manager type shared through Leptos context.
pub type SiteThemes = ThemeManager<LocalStore>;

#[cfg(not(feature = "csr"))]
const FALLBACK_HOUR: u32 = 12;

/// Current local hour (0-23).
pub fn local_hour() -> u32 {
    #[cfg(feature = "csr")]
    {
        js_sys::Date::new_0().get_hours()
    }
    #[cfg(not(feature = "csr"))]
    {
        FALLBACK_HOUR
    }
}

/// Resolve the initial theme from storage and the clock.
pub fn init() -> SiteThemes {
    ThemeManager::new(LocalStore, local_hour())
}

/// Set the `data-theme` attribute on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        if let Some(el) = super::dom::document().and_then(|d| d.document_element()) {
            let _ = el.set_attribute(softorize::theme::THEME_ATTRIBUTE, theme.as_str());
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}
