//! Best-effort preference persistence over `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Raw backends report failures as [`StorageError`]. [`PreferencePersistence`]
//! is the only caller of a backend and turns every failure into a warning
//! plus "no stored value" or "write skipped", so nothing above it ever sees
//! a storage error.
//!
//! TRADE-OFFS
//! ==========
//! Storage is advisory. A corrupt or foreign value under our key is treated
//! exactly like an absent key rather than being cleaned up.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::marker::PhantomData;
use std::rc::Rc;

use crate::state::preference::Preference;

/// Failure reported by a raw key/value backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage read failed: {0}")]
    Read(String),
    #[error("storage write failed: {0}")]
    Write(String),
}

/// Raw string key/value storage.
pub trait KeyValueStorage {
    /// Raw value stored under `key`, `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backend cannot be reached or read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backend is unavailable or rejects
    /// the write, e.g. on quota exhaustion.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Typed, error-swallowing adapter for one preference kind.
pub struct PreferencePersistence<T> {
    backend: Rc<dyn KeyValueStorage>,
    _kind: PhantomData<T>,
}

impl<T: Preference> PreferencePersistence<T> {
    pub fn new(backend: Rc<dyn KeyValueStorage>) -> Self {
        Self { backend, _kind: PhantomData }
    }

    /// Read the stored value, if one exists and is valid for `T`.
    pub fn read(&self) -> Option<T> {
        let raw = match self.backend.get(T::STORAGE_KEY) {
            Ok(raw) => raw?,
            Err(e) => {
                leptos::logging::warn!("{} read skipped, using system preference: {e}", T::LABEL);
                return None;
            }
        };
        let parsed = T::parse(&raw);
        if parsed.is_none() {
            leptos::logging::log!("ignoring unrecognized stored {}: {raw:?}", T::LABEL);
        }
        parsed
    }

    /// Persist `value`. Failures are logged and dropped.
    pub fn write(&self, value: T) {
        if let Err(e) = self.backend.set(T::STORAGE_KEY, value.as_str()) {
            leptos::logging::warn!("failed to persist {}: {e}", T::LABEL);
        }
    }
}

/// In-memory backend for SSR and tests, with failure injection.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
    fail_reads: Cell<bool>,
    fail_writes: Cell<bool>,
    writes: Cell<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with one entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::default();
        storage.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        storage
    }

    /// Make every read fail, as when storage access is denied.
    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.set(fail);
    }

    /// Make every write fail, as when the quota is exceeded.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// Stored raw value for `key`, bypassing failure injection.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    /// Number of write attempts, including failed ones.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.fail_reads.get() {
            return Err(StorageError::Unavailable);
        }
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.writes.set(self.writes.get() + 1);
        if self.fail_writes.get() {
            return Err(StorageError::Write("quota exceeded".to_owned()));
        }
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// `window.localStorage` backend. Requires a browser environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
impl BrowserStorage {
    fn local_storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .map_err(|e| StorageError::Read(format!("{e:?}")))?
            .ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            Self::local_storage()?
                .get_item(key)
                .map_err(|e| StorageError::Read(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            Self::local_storage()?
                .set_item(key, value)
                .map_err(|e| StorageError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }
}
