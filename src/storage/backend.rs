// SPDX-License-Identifier: MPL-2.0
//! Raw key-value storage interface.

use crate::error::StorageError;

pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// Abstract interface for raw record I/O.
///
/// Implementations only move bytes; encoding and key naming belong to
/// [`DiaryStore`](super::DiaryStore).
pub trait KeyValueStore {
    /// Reads the value stored under `key`.
    /// Returns `Ok(None)` when the key is absent and `Err` only on I/O failure.
    fn get(&self, key: &str) -> StorageResult<Option<Vec<u8>>>;

    /// Stores `value` under `key`, replacing any previous value.
    /// Writes must be atomic: readers never observe a partial record.
    fn set(&self, key: &str, value: &[u8]) -> StorageResult<()>;

    /// Removes `key`. Returns whether it was present.
    fn remove(&self, key: &str) -> StorageResult<bool>;

    /// Lists every stored key, sorted.
    fn keys(&self) -> StorageResult<Vec<String>>;
}

/// Keys are mapped to file names, so only a conservative alphabet is allowed.
pub(crate) fn validate_key(key: &str) -> StorageResult<()> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_key_accepts_prefixed_ids() {
        assert!(validate_key("scrapbook-a1B2_c3-d4").is_ok());
    }

    #[test]
    fn validate_key_rejects_path_like_keys() {
        assert!(validate_key("").is_err());
        assert!(validate_key("../escape").is_err());
        assert!(validate_key("a/b").is_err());
        assert!(validate_key(".hidden").is_err());
    }
}
