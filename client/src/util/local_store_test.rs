#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn get_is_empty_without_browser() {
    assert_eq!(LocalStore.get("theme"), None);
}

#[test]
fn set_reports_unavailable_without_browser() {
    let mut store = LocalStore;
    assert_eq!(store.set("theme", "dark"), Err(StorageError::Unavailable));
}
