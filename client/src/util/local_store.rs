//! `localStorage`-backed key/value store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Implements the core `KeyValueStore` seam so theme persistence runs
//! against the real browser store. Each call looks the storage object up
//! again, which keeps the type zero-sized and shareable through signals.

#[cfg(test)]
#[path = "local_store_test.rs"]
mod local_store_test;

use softorize::storage::{KeyValueStore, StorageError};

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

#[cfg(feature = "csr")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            let storage = storage().ok_or(StorageError::Unavailable)?;
            storage
                .set_item(key, value)
                .map_err(|e| StorageError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }
}
