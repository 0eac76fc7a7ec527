//! Frequency records.
//!
//! A frequency record is one row of the persisted vocabulary table: a word,
//! how often it has been seen across all merged documents, and the flags
//! attached to it.

use serde::{Deserialize, Serialize};

/// One word's cumulative count and classification.
///
/// # Examples
///
/// ```
/// use vocab_rs::core::FrequencyRecord;
///
/// let record = FrequencyRecord::new("lexicon", 3, false);
/// assert_eq!(record.count, 3);
/// assert!(!record.learning);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyRecord {
    /// The word; unique across the table.
    pub word: String,

    /// Cumulative occurrences across merged documents.
    pub count: u64,

    /// Stopword classification recorded when the word was first inserted.
    pub is_stopword: bool,

    /// Marked by the user as currently being learned. Never set by merges.
    pub learning: bool,
}

impl FrequencyRecord {
    /// Creates a record that is not marked as learning.
    #[must_use]
    pub fn new(word: impl Into<String>, count: u64, is_stopword: bool) -> Self {
        Self {
            word: word.into(),
            count,
            is_stopword,
            learning: false,
        }
    }

    /// Returns true if the count is strictly above `threshold`.
    #[must_use]
    pub const fn exceeds(&self, threshold: u64) -> bool {
        self.count > threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record() {
        let record = FrequencyRecord::new("cat", 2, false);
        assert_eq!(record.word, "cat");
        assert_eq!(record.count, 2);
        assert!(!record.is_stopword);
        assert!(!record.learning);
    }

    #[test]
    fn test_exceeds_is_strict() {
        let record = FrequencyRecord::new("walk", 2, false);
        assert!(!record.exceeds(2));
        assert!(record.exceeds(1));
    }

    #[test]
    fn test_serialization() {
        let record = FrequencyRecord::new("run", 5, false);
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"word\":\"run\""));
        let back: FrequencyRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
