//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use softorize::config::SiteConfig;
use softorize::nav::MobileMenu;

use crate::components::site_header::SiteHeader;
use crate::pages::home::HomePage;
use crate::util::theme;

/// Root application component.
///
/// Provides the theme manager and mobile-menu state to child components and
/// keeps the `data-theme` attribute in sync with the current theme.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = SiteConfig::from_build_env().unwrap_or_else(|e| {
        leptos::logging::warn!("site config override rejected, using defaults: {e}");
        SiteConfig::default()
    });

    let themes = RwSignal::new(theme::init());
    let menu = RwSignal::new(MobileMenu::default());
    provide_context(themes);
    provide_context(menu);

    Effect::new(move || theme::apply(themes.with(|m| m.theme())));

    view! {
        <Title text="Softorize"/>
        <SiteHeader/>
        <HomePage config=config/>
    }
}
