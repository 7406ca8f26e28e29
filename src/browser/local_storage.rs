//! `window.localStorage` backend.

use wasm_bindgen::JsValue;

use crate::util::storage::{KeyValueStore, StorageError};

/// `localStorage`, or nothing when the browser refuses access.
pub struct LocalStorage {
    inner: Option<web_sys::Storage>,
}

impl LocalStorage {
    /// Open the page's local storage; blocked storage yields a backend
    /// whose every call fails with [`StorageError::Unavailable`].
    pub fn open() -> Self {
        let inner = match web_sys::window().map(|w| w.local_storage()) {
            Some(Ok(storage)) => storage,
            Some(Err(err)) => {
                log::warn!("localStorage is blocked: {}", describe(&err));
                None
            }
            None => None,
        };
        Self { inner }
    }
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let storage = self.inner.as_ref().ok_or(StorageError::Unavailable)?;
        storage
            .get_item(key)
            .map_err(|err| StorageError::Read { key: key.to_string(), reason: describe(&err) })
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = self.inner.as_ref().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|err| StorageError::Write { key: key.to_string(), reason: describe(&err) })
    }
}

/// Human-readable form of a thrown JS value.
pub fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
