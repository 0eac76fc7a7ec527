//! In-memory storage implementation.
//!
//! Keeps the vocabulary table in a `BTreeMap` keyed by word. Nothing is
//! persisted; intended for tests and one-off runs. Writes for selected
//! words can be made to fail so callers can exercise partial-failure
//! handling.

use crate::core::FrequencyRecord;
use crate::error::{Result, StorageError};
use crate::storage::traits::{VocabularyStats, VocabularyStore, WriteFailure, WriteKind};
use std::collections::{BTreeMap, HashSet};

/// Volatile vocabulary storage.
///
/// # Examples
///
/// ```
/// use vocab_rs::core::FrequencyRecord;
/// use vocab_rs::storage::{MemoryStorage, VocabularyStore};
///
/// let mut storage = MemoryStorage::new();
/// storage.insert_batch(&[FrequencyRecord::new("cat", 2, false)]);
/// assert_eq!(storage.get("cat").unwrap().unwrap().count, 2);
/// ```
#[derive(Debug, Default)]
pub struct MemoryStorage {
    records: BTreeMap<String, FrequencyRecord>,
    rejected: HashSet<String>,
    fail_reads: bool,
}

impl MemoryStorage {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every insert or update of `word` fail.
    #[must_use]
    pub fn reject_writes_for(mut self, word: impl Into<String>) -> Self {
        self.rejected.insert(word.into());
        self
    }

    /// Makes every read fail.
    #[must_use]
    pub const fn fail_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    fn check_read(&self) -> Result<()> {
        if self.fail_reads {
            return Err(StorageError::Database("read rejected".to_string()).into());
        }
        Ok(())
    }
}

impl VocabularyStore for MemoryStorage {
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    fn is_initialized(&self) -> Result<bool> {
        Ok(true)
    }

    fn reset(&mut self) -> Result<()> {
        self.records.clear();
        Ok(())
    }

    fn load_all(&self) -> Result<Vec<FrequencyRecord>> {
        self.check_read()?;
        Ok(self.records.values().cloned().collect())
    }

    fn get(&self, word: &str) -> Result<Option<FrequencyRecord>> {
        self.check_read()?;
        Ok(self.records.get(word).cloned())
    }

    fn insert_batch(&mut self, records: &[FrequencyRecord]) -> Vec<WriteFailure> {
        let mut failures = Vec::new();
        for record in records {
            let reason = if self.rejected.contains(&record.word) {
                Some("write rejected")
            } else if self.records.contains_key(&record.word) {
                Some("word already exists")
            } else {
                None
            };

            match reason {
                Some(reason) => failures.push(WriteFailure {
                    word: record.word.clone(),
                    kind: WriteKind::Insert,
                    reason: reason.to_string(),
                }),
                None => {
                    self.records.insert(record.word.clone(), record.clone());
                }
            }
        }
        failures
    }

    fn update_count(&mut self, word: &str, count: u64) -> Result<()> {
        if self.rejected.contains(word) {
            return Err(StorageError::Database("write rejected".to_string()).into());
        }
        let record = self
            .records
            .get_mut(word)
            .ok_or_else(|| StorageError::WordNotFound {
                word: word.to_string(),
            })?;
        record.count = count;
        Ok(())
    }

    fn set_learning(&mut self, word: &str, learning: bool) -> Result<()> {
        let record = self
            .records
            .get_mut(word)
            .ok_or_else(|| StorageError::WordNotFound {
                word: word.to_string(),
            })?;
        record.learning = learning;
        Ok(())
    }

    fn stats(&self) -> Result<VocabularyStats> {
        self.check_read()?;
        Ok(VocabularyStats {
            word_count: self.records.len(),
            total_occurrences: self.records.values().map(|r| r.count).sum(),
            stopword_count: self.records.values().filter(|r| r.is_stopword).count(),
            learning_count: self.records.values().filter(|r| r.learning).count(),
            schema_version: 0,
            db_size: None,
        })
    }
}
