//! Smooth anchor scrolling and scroll-triggered reveal.
//!
//! SYSTEM CONTEXT
//! ==============
//! Link handlers call `scroll_to_anchor` after preventing the default jump.
//! `observe_reveals` runs once after mount, when every revealable element
//! is already in the DOM.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use softorize::nav::anchor_target;

/// Smoothly scroll the element targeted by `href` to the top of the view.
///
/// Returns `true` if a target element was found and scrolled to.
pub fn scroll_to_anchor(href: &str) -> bool {
    let Some(id) = anchor_target(href) else {
        return false;
    };
    #[cfg(feature = "csr")]
    {
        let Some(target) = super::dom::document().and_then(|d| d.get_element_by_id(id)) else {
            return false;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        options.set_block(web_sys::ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
        false
    }
}

/// Click handler body for in-page links: cancel the jump and scroll smoothly.
pub fn follow_anchor(ev: &leptos::ev::MouseEvent, href: &str) {
    if anchor_target(href).is_some() {
        ev.prevent_default();
        scroll_to_anchor(href);
    }
}

/// Tag revealable elements and animate each in on first intersection.
pub fn observe_reveals() {
    #[cfg(feature = "csr")]
    {
        use softorize::reveal::{PENDING_CLASS, RevealOptions, class_for_intersection, selector_list};
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(document) = super::dom::document() else {
            return;
        };

        let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
            |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                    if let Some(class) = class_for_intersection(entry.is_intersecting()) {
                        let _ = entry.target().class_list().add_1(class);
                    }
                }
            },
        );

        let options = RevealOptions::default();
        let init = web_sys::IntersectionObserverInit::new();
        init.set_threshold(&wasm_bindgen::JsValue::from_f64(options.threshold));
        init.set_root_margin(options.root_margin);

        let observer = match web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => observer,
            Err(e) => {
                leptos::logging::warn!("scroll reveal disabled: {e:?}");
                return;
            }
        };
        callback.forget();

        let Ok(nodes) = document.query_selector_all(&selector_list()) else {
            return;
        };
        for i in 0..nodes.length() {
            let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) else {
                continue;
            };
            let _ = el.class_list().add_1(PENDING_CLASS);
            observer.observe(&el);
        }
    }
}
