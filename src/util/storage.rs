//! Failure-tolerant key-value persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! `localStorage` can be disabled, full, or throw on access in private
//! browsing. [`Storage`] wraps any [`KeyValueStore`] so callers see plain
//! `Option`/`bool` results and every failure is logged once as a warning.
//!
//! TRADE-OFFS
//! ==========
//! No retry and no write-behind cache: a failed write simply leaves the
//! in-memory state as the only copy for the rest of the session.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::BTreeMap;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Error reported by a [`KeyValueStore`] backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The backend cannot be reached at all (disabled, blocked, absent).
    #[error("storage is unavailable")]
    Unavailable,
    /// A read threw.
    #[error("failed to read `{key}`: {reason}")]
    Read { key: String, reason: String },
    /// A write threw, typically because the quota is exceeded.
    #[error("failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },
    /// A stored value did not deserialize into the expected shape.
    #[error("malformed value under `{key}`: {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Raw string key-value backend.
pub trait KeyValueStore {
    /// Read the value stored under `key`.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory backend for tests and non-browser hosts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value under `key`, bypassing the adapter.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Best-effort adapter over a [`KeyValueStore`].
#[derive(Debug)]
pub struct Storage<S> {
    store: S,
}

impl<S: KeyValueStore> Storage<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Read `key`, surfacing backend failures.
    pub fn try_get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.store.get_item(key)
    }

    /// Read `key`; a failing backend reads as absent.
    pub fn get(&self, key: &str) -> Option<String> {
        match self.store.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("could not read {key} from storage: {err}");
                None
            }
        }
    }

    /// Write `key`; returns whether the value was stored.
    pub fn set(&mut self, key: &str, value: &str) -> bool {
        match self.store.set_item(key, value) {
            Ok(()) => true,
            Err(err) => {
                log::warn!("could not save {key} to storage: {err}");
                false
            }
        }
    }

    /// Load and deserialize a JSON value stored under `key`.
    ///
    /// Read failures and malformed payloads are logged and read as absent.
    pub fn load_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.get(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(source) => {
                let err = StorageError::Malformed { key: key.to_string(), source };
                log::warn!("could not load state from storage: {err}");
                None
            }
        }
    }

    /// Serialize `value` as JSON and store it under `key`.
    pub fn save_json<T: Serialize>(&mut self, key: &str, value: &T) -> bool {
        match serde_json::to_string(value) {
            Ok(raw) => self.set(key, &raw),
            Err(err) => {
                log::warn!("could not serialize {key}: {err}");
                false
            }
        }
    }

    /// Borrow the backend.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Release the backend, e.g. to hand it to a fresh controller.
    pub fn into_store(self) -> S {
        self.store
    }
}
