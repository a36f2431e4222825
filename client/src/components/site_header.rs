//! Site header with navigation, mobile menu toggle, and theme toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the theme manager and mobile-menu state from context. A document
//! click listener closes the open menu when the click lands outside `.nav`.

use leptos::prelude::*;
use softorize::nav::{MENU_OPEN_CLASS, MobileMenu, TOGGLE_ACTIVE_CLASS};
use softorize::theme::Theme;

use crate::util::scroll::follow_anchor;
use crate::util::theme::SiteThemes;

pub const NAV_LINKS: &[(&str, &str)] = &[
    ("#products", "Products"),
    ("#industries", "Industries"),
    ("#contact", "Contact"),
];

#[component]
pub fn SiteHeader() -> impl IntoView {
    let themes = expect_context::<RwSignal<SiteThemes>>();
    let menu = expect_context::<RwSignal<MobileMenu>>();

    #[cfg(feature = "csr")]
    {
        let _ = window_event_listener(leptos::ev::click, move |ev| {
            let inside = crate::util::dom::click_is_inside_nav(&ev);
            menu.update(|m| {
                m.on_document_click(inside);
            });
        });
    }

    let on_toggle_theme = move |_| {
        themes.update(|m| {
            m.toggle();
        });
    };
    let on_toggle_menu = move |_| {
        menu.update(|m| {
            m.toggle();
        });
    };

    let nav_class = move || {
        if menu.get().is_open() {
            format!("nav {MENU_OPEN_CLASS}")
        } else {
            "nav".to_owned()
        }
    };
    let toggle_class = move || {
        if menu.get().is_open() {
            format!("mobile-menu-toggle {TOGGLE_ACTIVE_CLASS}")
        } else {
            "mobile-menu-toggle".to_owned()
        }
    };
    let theme_icon = move || match themes.with(|m| m.theme()) {
        Theme::Dark => "☀",
        Theme::Light => "☾",
    };

    view! {
        <header class="header">
            <div class="container header__inner">
                <a href="#home" class="logo" on:click=move |ev| follow_anchor(&ev, "#home")>
                    "Softorize"
                </a>
                <nav class=nav_class>
                    <ul class="nav__links">
                        {NAV_LINKS
                            .iter()
                            .map(|&(href, label)| {
                                view! {
                                    <li>
                                        <a href=href class="nav__link" on:click=move |ev| follow_anchor(&ev, href)>
                                            {label}
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                    <button
                        id="mobileMenuToggle"
                        class=toggle_class
                        type="button"
                        aria-label="Toggle menu"
                        on:click=on_toggle_menu
                    >
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </nav>
                <button
                    id="themeToggle"
                    class="theme-toggle"
                    type="button"
                    aria-label="Toggle theme"
                    on:click=on_toggle_theme
                >
                    {theme_icon}
                </button>
            </div>
        </header>
    }
}
