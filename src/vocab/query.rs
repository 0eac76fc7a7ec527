//! Vocabulary queries.
//!
//! Surfaces the words worth learning: records seen more often than a
//! threshold that are not stopwords. Stopword status is decided by the
//! classifier passed in, not by the flag stored at insertion, so changes to
//! the stopword table apply to words already in the store.

use crate::core::FrequencyRecord;
use crate::error::Result;
use crate::storage::VocabularyStore;
use crate::text::StopwordSet;

/// Default exclusive count threshold.
pub const DEFAULT_THRESHOLD: u64 = 2;

/// Options for [`query_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOptions {
    /// Records must have a count strictly above this.
    pub threshold: u64,
    /// Maximum number of records to return.
    pub limit: Option<usize>,
    /// Only return records marked as learning.
    pub learning_only: bool,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            limit: None,
            learning_only: false,
        }
    }
}

impl QueryOptions {
    /// Creates options with the given threshold.
    #[must_use]
    pub fn with_threshold(threshold: u64) -> Self {
        Self {
            threshold,
            ..Self::default()
        }
    }

    /// Sets the result limit.
    #[must_use]
    pub const fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Restricts results to learning words.
    #[must_use]
    pub const fn learning_only(mut self) -> Self {
        self.learning_only = true;
        self
    }
}

/// Returns non-stopword records with `count > threshold`.
///
/// Results are ordered by count descending, ties by word descending.
///
/// # Errors
///
/// Propagates storage read errors unchanged.
///
/// # Examples
///
/// ```
/// use vocab_rs::core::FrequencyRecord;
/// use vocab_rs::storage::{MemoryStorage, VocabularyStore};
/// use vocab_rs::text::StopwordSet;
/// use vocab_rs::vocab::query;
///
/// let mut storage = MemoryStorage::new();
/// storage.insert_batch(&[
///     FrequencyRecord::new("the", 10, true),
///     FrequencyRecord::new("run", 5, false),
///     FrequencyRecord::new("walk", 2, false),
///     FrequencyRecord::new("jump", 3, false),
/// ]);
///
/// let words: Vec<String> = query(&storage, &StopwordSet::builtin(), 2)
///     .unwrap()
///     .into_iter()
///     .map(|r| r.word)
///     .collect();
/// assert_eq!(words, ["run", "jump"]);
/// ```
pub fn query<S: VocabularyStore + ?Sized>(
    store: &S,
    stopwords: &StopwordSet,
    threshold: u64,
) -> Result<Vec<FrequencyRecord>> {
    query_with(store, stopwords, &QueryOptions::with_threshold(threshold))
}

/// Like [`query`], with a limit and a learning filter.
///
/// # Errors
///
/// Propagates storage read errors unchanged.
pub fn query_with<S: VocabularyStore + ?Sized>(
    store: &S,
    stopwords: &StopwordSet,
    options: &QueryOptions,
) -> Result<Vec<FrequencyRecord>> {
    let matches = store
        .load_above(options.threshold)?
        .into_iter()
        .filter(|r| !stopwords.is_stopword(&r.word))
        .filter(|r| !options.learning_only || r.learning)
        .take(options.limit.unwrap_or(usize::MAX))
        .collect::<Vec<_>>();

    tracing::debug!(
        threshold = options.threshold,
        results = matches.len(),
        "vocabulary query"
    );

    Ok(matches)
}
