//! Browser `localStorage` access.
//!
//! `BrowserStorage` is the `KeyValueStore` the record store runs on in the
//! browser. The list layout preference is persisted next to it.

use contracts::domain::a001_user_entry::{KeyValueStore, StoreError};
use contracts::shared::config::ListLayout;
use web_sys::{window, Storage};

/// `window.localStorage`, looked up on every call so the handle is never held.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

fn local_storage() -> Result<Storage, StoreError> {
    let window = window().ok_or_else(|| StoreError::Unavailable("no window".to_string()))?;
    window
        .local_storage()
        .map_err(|e| StoreError::Unavailable(format!("{e:?}")))?
        .ok_or_else(|| StoreError::Unavailable("localStorage is disabled".to_string()))
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        local_storage()?
            .get_item(key)
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        // QuotaExceededError surfaces here
        local_storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::Write(format!("{e:?}")))
    }
}

/// Load the list layout from localStorage.
pub fn load_layout(key: &str) -> Option<ListLayout> {
    BrowserStorage
        .get_item(key)
        .ok()
        .flatten()
        .and_then(|s| ListLayout::from_str(&s))
}

/// Save the list layout to localStorage.
pub fn save_layout(key: &str, layout: ListLayout) {
    if let Err(e) = BrowserStorage.set_item(key, layout.as_str()) {
        log::warn!("Could not persist list layout: {}", e);
    }
}
