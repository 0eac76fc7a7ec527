//! Vocabulary aggregation.
//!
//! Folds one document's [`TokenBatch`] into the persisted vocabulary
//! table. The whole table is read first; words already present get their
//! count increased in place, new words are classified and inserted in a
//! single batch.
//!
//! Writes are isolated per word. A failed insert or update is logged and
//! reported in the [`MergeOutcome`], and the remaining words are still
//! written. Only a failed read (or failing to open or close the write
//! window) aborts the merge.

use crate::core::{FrequencyRecord, TokenBatch};
use crate::error::Result;
use crate::storage::{VocabularyStore, WriteFailure, WriteKind};
use crate::text::{StopwordSet, tokenize};
use serde::Serialize;
use std::collections::HashMap;

/// Result of merging one batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MergeOutcome {
    /// Words inserted as new records.
    pub inserted: usize,
    /// Existing records whose count was increased.
    pub updated: usize,
    /// Writes that did not go through.
    pub failed: Vec<WriteFailure>,
}

impl MergeOutcome {
    /// Returns true if every write succeeded.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    /// Returns the number of words the merge touched or tried to touch.
    #[must_use]
    pub fn attempted(&self) -> usize {
        self.inserted + self.updated + self.failed.len()
    }

    /// Adds another outcome's totals to this one.
    pub fn absorb(&mut self, other: Self) {
        self.inserted += other.inserted;
        self.updated += other.updated;
        self.failed.extend(other.failed);
    }
}

/// Merges token batches into a vocabulary store.
///
/// Holds the store mutably, so merges through one handle never overlap.
///
/// # Examples
///
/// ```
/// use vocab_rs::storage::{MemoryStorage, VocabularyStore};
/// use vocab_rs::text::StopwordSet;
/// use vocab_rs::vocab::Aggregator;
///
/// let mut storage = MemoryStorage::new();
/// let stopwords = StopwordSet::builtin();
///
/// let outcome = Aggregator::new(&mut storage, &stopwords)
///     .merge_text("The cat saw the cat")
///     .unwrap();
/// assert_eq!(outcome.inserted, 3);
/// assert_eq!(storage.get("cat").unwrap().unwrap().count, 2);
/// ```
pub struct Aggregator<'a, S: VocabularyStore + ?Sized> {
    store: &'a mut S,
    stopwords: &'a StopwordSet,
}

impl<'a, S: VocabularyStore + ?Sized> Aggregator<'a, S> {
    /// Creates an aggregator over `store`, classifying new words with
    /// `stopwords`.
    pub const fn new(store: &'a mut S, stopwords: &'a StopwordSet) -> Self {
        Self { store, stopwords }
    }

    /// Tokenizes `text` and merges the result.
    ///
    /// # Errors
    ///
    /// See [`Self::merge`].
    pub fn merge_text(&mut self, text: &str) -> Result<MergeOutcome> {
        self.merge(&tokenize(text))
    }

    /// Merges one document's batch into the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the table cannot be read, in which case nothing
    /// is written, or if the store's write window cannot be opened or
    /// closed. Individual write failures are not errors; they are listed
    /// in [`MergeOutcome::failed`].
    pub fn merge(&mut self, batch: &TokenBatch) -> Result<MergeOutcome> {
        if batch.is_empty() {
            return Ok(MergeOutcome::default());
        }

        self.store.begin_write()?;

        let existing = match self.store.load_all() {
            Ok(records) => records,
            Err(e) => {
                self.store.abort_write();
                return Err(e);
            }
        };

        let counts: HashMap<&str, u64> = existing
            .iter()
            .map(|r| (r.word.as_str(), r.count))
            .collect();

        let mut outcome = MergeOutcome::default();
        let mut staged = Vec::new();

        // On an empty table every word is staged and goes out in one batch.
        for (word, count) in batch.iter() {
            match counts.get(word) {
                Some(&current) => {
                    let total = current.saturating_add(count);
                    match self.store.update_count(word, total) {
                        Ok(()) => outcome.updated += 1,
                        Err(e) => {
                            tracing::warn!(word, error = %e, "count update failed");
                            outcome.failed.push(WriteFailure {
                                word: word.to_string(),
                                kind: WriteKind::Update,
                                reason: e.to_string(),
                            });
                        }
                    }
                }
                None => staged.push(FrequencyRecord::new(
                    word,
                    count,
                    self.stopwords.is_stopword(word),
                )),
            }
        }

        let failures = self.store.insert_batch(&staged);
        for failure in &failures {
            tracing::warn!(word = %failure.word, error = %failure.reason, "insert failed");
        }
        outcome.inserted = staged.len() - failures.len();
        outcome.failed.extend(failures);

        self.store.end_write()?;

        tracing::info!(
            words = batch.len(),
            inserted = outcome.inserted,
            updated = outcome.updated,
            failed = outcome.failed.len(),
            "merged batch"
        );

        Ok(outcome)
    }
}
