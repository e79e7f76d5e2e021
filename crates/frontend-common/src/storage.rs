//! `window.localStorage` backend for the session store

use beacon_core::{CoreError, CoreResult, KeyValueStore};
use web_sys::Storage;

/// Persistent browser storage. Looks up `localStorage` on every call so a
/// page without storage access degrades to errors instead of a panic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> CoreResult<Storage> {
        web_sys::window()
            .ok_or_else(|| CoreError::storage("no window object"))?
            .local_storage()
            .map_err(|e| CoreError::storage(format!("localStorage access denied: {e:?}")))?
            .ok_or_else(|| CoreError::storage("localStorage unavailable"))
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> CoreResult<Option<String>> {
        Self::local_storage()?
            .get_item(key)
            .map_err(|e| CoreError::storage(format!("failed to read {key}: {e:?}")))
    }

    fn set(&self, key: &str, value: &str) -> CoreResult<()> {
        Self::local_storage()?
            .set_item(key, value)
            .map_err(|e| CoreError::storage(format!("failed to write {key}: {e:?}")))
    }

    fn remove(&self, key: &str) -> CoreResult<()> {
        Self::local_storage()?
            .remove_item(key)
            .map_err(|e| CoreError::storage(format!("failed to remove {key}: {e:?}")))
    }
}
