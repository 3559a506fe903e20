//! # Key-value persistence: the durable side of the session
//!
//! The browser client keeps exactly one piece of state across page reloads:
//! the signed-in user, serialised as JSON under a fixed key. This module
//! defines the small synchronous interface that state goes through and the
//! JSON helpers layered on top of it.
//!
//! ## [`KeyValueStore`] trait
//!
//! Three string-keyed methods: `get`, `set`, `remove`. They are synchronous
//! because `window.localStorage` is, and the session pre-fill at startup
//! must complete before the first render. Implementations live in sibling
//! modules ([`crate::MemoryStore`], and `LocalStore` behind the `web`
//! feature).
//!
//! ## JSON helpers
//!
//! | Function | Behaviour |
//! |----------|-----------|
//! | [`load_json`] | Reads and parses a value. A missing key is `None`; an unparseable value is logged and also `None`. |
//! | [`save_json`] | Serialises and writes a value. Encoding failures are logged and dropped. |
//! | [`remove`] | Deletes the key. |
//!
//! None of these surface errors: a corrupt or unavailable store degrades to
//! "nothing saved", and the backend stays the authority on who is signed in.

use serde::{de::DeserializeOwned, Serialize};

/// Synchronous string-keyed storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Load and decode a JSON value, treating corrupt data as absent.
pub fn load_json<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> Option<T> {
    let raw = store.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::error!("Could not read saved value for {key}: {e}");
            None
        }
    }
}

/// Encode and store a JSON value.
pub fn save_json<T: Serialize>(store: &impl KeyValueStore, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(raw) => store.set(key, &raw),
        Err(e) => tracing::error!("Could not encode value for {key}: {e}"),
    }
}

/// Remove a stored value.
pub fn remove(store: &impl KeyValueStore, key: &str) {
    store.remove(key);
}
