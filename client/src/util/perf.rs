//! Page-load timing hook.
//!
//! Reports the navigation entry's load-event duration one tick after the
//! window `load` event, so `loadEventEnd` has been filled in.

#[cfg(feature = "csr")]
use softorize::perf::{NavigationTiming, report_load_time};

/// Schedule the load-time log. Safe to call after `load` has already fired.
pub fn install() {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(window) = web_sys::window() else {
            return;
        };
        let already_loaded = window.document().is_some_and(|d| d.ready_state() == "complete");
        if already_loaded {
            schedule_report();
            return;
        }
        let on_load = Closure::once_into_js(schedule_report);
        let _ = window.add_event_listener_with_callback("load", on_load.unchecked_ref());
    }
}

#[cfg(feature = "csr")]
fn schedule_report() {
    gloo_timers::callback::Timeout::new(0, || {
        let _ = report_load_time(navigation_timing());
    })
    .forget();
}

#[cfg(feature = "csr")]
fn navigation_timing() -> Option<NavigationTiming> {
    use wasm_bindgen::JsCast;

    let performance = web_sys::window()?.performance()?;
    let entry = performance.get_entries_by_type("navigation").get(0);
    let timing = entry.dyn_into::<web_sys::PerformanceNavigationTiming>().ok()?;
    Some(NavigationTiming {
        load_event_start: timing.load_event_start(),
        load_event_end: timing.load_event_end(),
    })
}
