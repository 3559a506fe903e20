//! # `localStorage` store: browser-side persistence
//!
//! [`LocalStore`] is the [`KeyValueStore`] implementation used on the **web
//! platform**. It reads and writes `window.localStorage` through `web-sys`.
//!
//! ## Error handling
//!
//! All trait methods swallow errors (returning `None` for reads, logging and
//! doing nothing for writes). Private browsing modes and storage quotas can
//! make `localStorage` throw; the client degrades to "no saved session"
//! instead of failing, and the next profile fetch re-establishes the truth.

use crate::kv::KeyValueStore;

/// `window.localStorage`-backed KeyValueStore.
///
/// Zero-size and `Clone`: the storage handle is looked up on every call,
/// since `web_sys::Storage` is tied to the window and cheap to fetch.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            tracing::warn!("localStorage unavailable, not saving {key}");
            return;
        };
        if storage.set_item(key, value).is_err() {
            tracing::error!("Failed to write {key} to localStorage");
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            if storage.remove_item(key).is_err() {
                tracing::error!("Failed to remove {key} from localStorage");
            }
        }
    }
}
