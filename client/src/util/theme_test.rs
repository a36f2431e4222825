#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn local_hour_falls_back_to_noon() {
    assert_eq!(local_hour(), 12);
}

#[test]
fn init_uses_daytime_theme_without_browser() {
    assert_eq!(init().theme(), Theme::Light);
}

#[test]
fn toggle_works_even_when_storage_is_missing() {
    let mut themes = init();
    assert_eq!(themes.toggle(), Theme::Dark);
}

#[test]
fn apply_is_noop_but_callable() {
    apply(Theme::Dark);
    apply(Theme::Light);
}
