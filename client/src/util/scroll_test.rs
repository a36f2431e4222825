#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn non_anchor_links_are_not_handled() {
    assert!(!scroll_to_anchor("/about"));
    assert!(!scroll_to_anchor("#"));
}

#[test]
fn anchor_scroll_is_noop_without_browser() {
    assert!(!scroll_to_anchor("#contact"));
}

#[test]
fn observe_reveals_is_callable_without_browser() {
    observe_reveals();
}
