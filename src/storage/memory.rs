// SPDX-License-Identifier: MPL-2.0
//! In-memory key-value store, used by tests and as a fallback when no data
//! directory can be resolved.

use super::backend::{validate_key, KeyValueStore, StorageResult};
use crate::error::StorageError;
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

/// Uses `RefCell` for interior mutability; the application is single-threaded.
#[derive(Default)]
pub struct MemoryStore {
    entries: RefCell<BTreeMap<String, Vec<u8>>>,
    simulate_write_error: Cell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent write fail, for error-path tests.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Stores raw bytes without validation, for corrupt-record tests.
    pub fn insert_raw(&self, key: &str, value: Vec<u8>) {
        self.entries.borrow_mut().insert(key.to_string(), value);
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<Vec<u8>>> {
        validate_key(key)?;
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &[u8]) -> StorageResult<()> {
        validate_key(key)?;
        if self.simulate_write_error.get() {
            return Err(StorageError::Io("simulated write error".to_string()));
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<bool> {
        validate_key(key)?;
        Ok(self.entries.borrow_mut().remove(key).is_some())
    }

    fn keys(&self) -> StorageResult<Vec<String>> {
        Ok(self.entries.borrow().keys().cloned().collect())
    }
}
