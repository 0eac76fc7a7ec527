//! Token batches for vocab-rs.
//!
//! A token batch is the tokenizer's output for one document: the distinct
//! words in first-occurrence order, each paired with how many times it
//! occurred. Batches are consumed by the aggregator exactly once.

use crate::error::TokenError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::collections::HashSet;

/// Unique words of one document with their occurrence counts.
///
/// `words` and `counts` are parallel: `counts[i]` is the number of times
/// `words[i]` occurred. Every word is distinct and non-empty and every
/// count is at least one.
///
/// # Examples
///
/// ```
/// use vocab_rs::core::TokenBatch;
///
/// let batch = TokenBatch::from_segments(["cat", "dog", "cat"]);
/// assert_eq!(batch.words(), ["cat", "dog"]);
/// assert_eq!(batch.counts(), [2, 1]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenBatch {
    words: Vec<String>,
    counts: Vec<u64>,
}

impl TokenBatch {
    /// Creates an empty batch.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            words: Vec::new(),
            counts: Vec::new(),
        }
    }

    /// Folds a sequence of word segments into a batch.
    ///
    /// Words keep the order in which they first appear. Empty segments
    /// are skipped.
    #[must_use]
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut positions: HashMap<String, usize> = HashMap::new();
        let mut batch = Self::new();

        for segment in segments {
            let word = segment.as_ref();
            if word.is_empty() {
                continue;
            }
            if let Some(&idx) = positions.get(word) {
                batch.counts[idx] += 1;
            } else {
                positions.insert(word.to_string(), batch.words.len());
                batch.words.push(word.to_string());
                batch.counts.push(1);
            }
        }

        batch
    }

    /// Builds a batch from explicit parallel vectors.
    ///
    /// # Errors
    ///
    /// Returns a [`TokenError`] if the vectors differ in length, a word is
    /// empty or repeated, or a count is zero.
    pub fn from_parts(words: Vec<String>, counts: Vec<u64>) -> Result<Self, TokenError> {
        if words.len() != counts.len() {
            return Err(TokenError::LengthMismatch {
                words: words.len(),
                counts: counts.len(),
            });
        }

        let mut seen = HashSet::with_capacity(words.len());
        for (i, (word, &count)) in words.iter().zip(&counts).enumerate() {
            if word.is_empty() {
                return Err(TokenError::EmptyWord(i));
            }
            if count == 0 {
                return Err(TokenError::ZeroCount(word.clone()));
            }
            if !seen.insert(word.as_str()) {
                return Err(TokenError::DuplicateWord(word.clone()));
            }
        }

        Ok(Self { words, counts })
    }

    /// Returns the distinct words in first-occurrence order.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Returns the occurrence counts, parallel to [`Self::words`].
    #[must_use]
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Returns the number of distinct words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the batch holds no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns the total number of word occurrences.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Returns the count for a word, if present.
    #[must_use]
    pub fn count_of(&self, word: &str) -> Option<u64> {
        self.words
            .iter()
            .position(|w| w == word)
            .map(|i| self.counts[i])
    }

    /// Iterates over `(word, count)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.words
            .iter()
            .map(String::as_str)
            .zip(self.counts.iter().copied())
    }

    /// Rebuilds text from the batch, each word repeated by its count.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut parts = Vec::new();
        for (word, count) in self.iter() {
            for _ in 0..count {
                parts.push(word);
            }
        }
        parts.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_segments_first_occurrence_order() {
        let batch = TokenBatch::from_segments(["b", "a", "b", "c", "a", "b"]);
        assert_eq!(batch.words(), ["b", "a", "c"]);
        assert_eq!(batch.counts(), [3, 2, 1]);
        assert_eq!(batch.total(), 6);
    }

    #[test]
    fn test_from_segments_skips_empty() {
        let batch = TokenBatch::from_segments(["", "word", "", ""]);
        assert_eq!(batch.words(), ["word"]);
        assert_eq!(batch.counts(), [1]);
    }

    #[test]
    fn test_empty_batch() {
        let batch = TokenBatch::from_segments(Vec::<String>::new());
        assert!(batch.is_empty());
        assert_eq!(batch.total(), 0);
        assert_eq!(batch.to_text(), "");
    }

    #[test]
    fn test_from_parts_valid() {
        let batch =
            TokenBatch::from_parts(vec!["cat".to_string(), "dog".to_string()], vec![2, 1])
                .unwrap();
        assert_eq!(batch.count_of("cat"), Some(2));
        assert_eq!(batch.count_of("bird"), None);
    }

    #[test]
    fn test_from_parts_rejects_mismatch() {
        let err = TokenBatch::from_parts(vec!["cat".to_string()], vec![1, 2]).unwrap_err();
        assert_eq!(
            err,
            TokenError::LengthMismatch {
                words: 1,
                counts: 2
            }
        );
    }

    #[test]
    fn test_from_parts_rejects_duplicates_and_zero() {
        let err = TokenBatch::from_parts(vec!["cat".to_string(), "cat".to_string()], vec![1, 1])
            .unwrap_err();
        assert_eq!(err, TokenError::DuplicateWord("cat".to_string()));

        let err = TokenBatch::from_parts(vec!["cat".to_string()], vec![0]).unwrap_err();
        assert_eq!(err, TokenError::ZeroCount("cat".to_string()));

        let err = TokenBatch::from_parts(vec![String::new()], vec![1]).unwrap_err();
        assert_eq!(err, TokenError::EmptyWord(0));
    }

    #[test]
    fn test_to_text() {
        let batch =
            TokenBatch::from_parts(vec!["cat".to_string(), "dog".to_string()], vec![2, 1])
                .unwrap();
        assert_eq!(batch.to_text(), "cat cat dog");
    }
}
