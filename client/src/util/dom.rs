//! Small DOM lookups shared by the browser glue.

#[cfg(feature = "csr")]
pub fn document() -> Option<web_sys::Document> {
    web_sys::window()?.document()
}

/// Add the `loaded` class to `<body>` once the app is mounted.
pub fn mark_body_loaded() {
    #[cfg(feature = "csr")]
    {
        if let Some(body) = document().and_then(|d| d.body()) {
            let _ = body.class_list().add_1("loaded");
        }
    }
}

/// Whether a click landed inside the site navigation.
///
/// Outside the browser every click counts as inside, so nothing closes.
pub fn click_is_inside_nav(ev: &leptos::ev::MouseEvent) -> bool {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        ev.target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| el.closest(softorize::nav::NAV_SELECTOR).ok().flatten())
            .is_some()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = ev;
        true
    }
}
