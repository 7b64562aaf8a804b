// SPDX-License-Identifier: MPL-2.0
//! Diary persistence on top of a key-value store.
//!
//! Each diary is one record under the key `scrapbook-<id>`, holding the CBOR
//! encoding of the whole [`Diary`]. Saving overwrites the record; there is no
//! merge step and no history.
//!
//! # Components
//!
//! - [`backend`] - [`KeyValueStore`] trait
//! - [`fs`] - [`FsStore`], one file per key below the data directory
//! - [`memory`] - [`MemoryStore`], for tests and as a fallback

pub mod backend;
pub mod fs;
pub mod memory;

pub use backend::{KeyValueStore, StorageResult};
pub use fs::FsStore;
pub use memory::MemoryStore;

use crate::domain::diary::{Diary, DiaryId};
use crate::error::StorageError;
use chrono::{DateTime, Utc};

/// Prefix shared by every diary record key.
pub const KEY_PREFIX: &str = "scrapbook-";

/// Returns the storage key of a diary.
#[must_use]
pub fn key_for(id: &DiaryId) -> String {
    format!("{KEY_PREFIX}{id}")
}

/// Result of looking a diary up by identifier.
#[derive(Debug)]
pub enum Lookup {
    Found(Diary),
    NotFound,
    Failed(StorageError),
}

/// One line of the saved-diaries listing.
#[derive(Debug, Clone, PartialEq)]
pub struct DiarySummary {
    pub id: DiaryId,
    /// `None` when the record could not be decoded.
    pub page_count: Option<usize>,
    pub last_updated: Option<DateTime<Utc>>,
}

pub struct DiaryStore {
    backend: Box<dyn KeyValueStore>,
}

impl std::fmt::Debug for DiaryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiaryStore").finish_non_exhaustive()
    }
}

impl DiaryStore {
    pub fn new(backend: impl KeyValueStore + 'static) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    /// An in-memory store.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }

    /// Writes the whole diary, replacing any previous record.
    pub fn save(&self, diary: &Diary) -> StorageResult<()> {
        let mut encoded = Vec::new();
        ciborium::into_writer(diary, &mut encoded)
            .map_err(|err| StorageError::Encode(err.to_string()))?;
        self.backend.set(&key_for(&diary.id), &encoded)?;
        tracing::debug!(diary = %diary.id, bytes = encoded.len(), "diary saved");
        Ok(())
    }

    /// Reads a diary. `Ok(None)` when no record exists.
    pub fn load(&self, id: &DiaryId) -> StorageResult<Option<Diary>> {
        let Some(bytes) = self.backend.get(&key_for(id))? else {
            return Ok(None);
        };
        let diary: Diary = ciborium::from_reader(bytes.as_slice())
            .map_err(|err| StorageError::Corrupted(err.to_string()))?;
        Ok(Some(diary))
    }

    /// Looks a diary up, folding every outcome into a [`Lookup`].
    pub fn lookup(&self, id: &DiaryId) -> Lookup {
        match self.load(id) {
            Ok(Some(diary)) => Lookup::Found(diary),
            Ok(None) => Lookup::NotFound,
            Err(err) => {
                tracing::warn!(diary = %id, error = %err, "failed to load diary");
                Lookup::Failed(err)
            }
        }
    }

    /// Identifiers of every stored diary, sorted.
    pub fn list(&self) -> StorageResult<Vec<DiaryId>> {
        Ok(self
            .backend
            .keys()?
            .iter()
            .filter_map(|key| key.strip_prefix(KEY_PREFIX))
            .filter_map(DiaryId::parse)
            .collect())
    }

    /// Lists stored diaries with their page count and modification time.
    pub fn summaries(&self) -> StorageResult<Vec<DiarySummary>> {
        let mut summaries = Vec::new();
        for id in self.list()? {
            let summary = match self.load(&id) {
                Ok(Some(diary)) => DiarySummary {
                    page_count: Some(diary.page_count()),
                    last_updated: Some(diary.last_updated),
                    id,
                },
                Ok(None) | Err(_) => DiarySummary {
                    id,
                    page_count: None,
                    last_updated: None,
                },
            };
            summaries.push(summary);
        }
        Ok(summaries)
    }

    /// Deletes a diary record. Returns whether it existed.
    pub fn delete(&self, id: &DiaryId) -> StorageResult<bool> {
        self.backend.remove(&key_for(id))
    }
}
