//! Storage trait definition.
//!
//! Defines the contract the vocabulary core needs from a persistence
//! backend: a full-table read, per-record inserts and targeted count
//! updates.

use crate::core::FrequencyRecord;
use crate::error::Result;
use serde::Serialize;

/// A write that did not go through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WriteFailure {
    /// Word whose insert or update failed.
    pub word: String,
    /// Which write failed.
    pub kind: WriteKind,
    /// Backend error message.
    pub reason: String,
}

/// Kind of write attempted for a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteKind {
    /// New record insert.
    Insert,
    /// Count update of an existing record.
    Update,
}

/// Trait for vocabulary persistence backends.
///
/// The aggregator relies on one writer per store; implementations that can
/// be shared between processes should make [`Self::begin_write`] exclusive.
pub trait VocabularyStore {
    /// Initializes storage (creates schema, runs migrations).
    ///
    /// Should be idempotent - safe to call multiple times.
    ///
    /// # Errors
    ///
    /// Returns an error if schema creation or migration fails.
    fn init(&mut self) -> Result<()>;

    /// Checks if storage is initialized.
    ///
    /// # Errors
    ///
    /// Returns an error if the check cannot be performed.
    fn is_initialized(&self) -> Result<bool>;

    /// Deletes all records but preserves the schema.
    ///
    /// # Errors
    ///
    /// Returns an error if deletion fails.
    fn reset(&mut self) -> Result<()>;

    /// Loads every record, ordered by word.
    ///
    /// # Errors
    ///
    /// Returns an error if the table cannot be read completely.
    fn load_all(&self) -> Result<Vec<FrequencyRecord>>;

    /// Loads records whose count is strictly above `threshold`.
    ///
    /// Ordered by count descending, ties by word descending. The default
    /// filters [`Self::load_all`]; indexed backends should override it.
    ///
    /// # Errors
    ///
    /// Returns an error if the table cannot be read.
    fn load_above(&self, threshold: u64) -> Result<Vec<FrequencyRecord>> {
        let mut records: Vec<FrequencyRecord> = self
            .load_all()?
            .into_iter()
            .filter(|r| r.exceeds(threshold))
            .collect();
        records.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| b.word.cmp(&a.word)));
        Ok(records)
    }

    /// Looks up one record.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn get(&self, word: &str) -> Result<Option<FrequencyRecord>>;

    /// Inserts records, each one independently.
    ///
    /// A record that cannot be written is reported in the returned list;
    /// every other record is still written.
    fn insert_batch(&mut self, records: &[FrequencyRecord]) -> Vec<WriteFailure>;

    /// Sets the count of the record for `word`, leaving other fields alone.
    ///
    /// # Errors
    ///
    /// Returns an error if the word is absent or the update fails.
    fn update_count(&mut self, word: &str, count: u64) -> Result<()>;

    /// Sets the learning flag of the record for `word`.
    ///
    /// # Errors
    ///
    /// Returns an error if the word is absent or the update fails.
    fn set_learning(&mut self, word: &str, learning: bool) -> Result<()>;

    /// Opens an exclusive write window for a merge.
    ///
    /// # Errors
    ///
    /// Returns an error if the window cannot be opened.
    fn begin_write(&mut self) -> Result<()> {
        Ok(())
    }

    /// Closes the write window opened by [`Self::begin_write`].
    ///
    /// # Errors
    ///
    /// Returns an error if pending writes cannot be made durable.
    fn end_write(&mut self) -> Result<()> {
        Ok(())
    }

    /// Discards a write window after a failed read. Never fails.
    fn abort_write(&mut self) {}

    /// Gets storage statistics.
    ///
    /// # Errors
    ///
    /// Returns an error if statistics cannot be gathered.
    fn stats(&self) -> Result<VocabularyStats>;
}

/// Storage statistics.
#[derive(Debug, Clone, Default, Serialize)]
pub struct VocabularyStats {
    /// Number of distinct words stored.
    pub word_count: usize,
    /// Sum of all counts.
    pub total_occurrences: u64,
    /// Words flagged as stopwords at insertion.
    pub stopword_count: usize,
    /// Words marked as learning.
    pub learning_count: usize,
    /// Schema version.
    pub schema_version: u32,
    /// Database file size in bytes (if applicable).
    pub db_size: Option<u64>,
}
