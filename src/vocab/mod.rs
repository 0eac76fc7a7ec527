//! Vocabulary aggregation and retrieval.
//!
//! The aggregator merges per-document token batches into a
//! [`VocabularyStore`](crate::storage::VocabularyStore); the query module
//! reads the words worth learning back out.

pub mod aggregator;
pub mod query;

pub use aggregator::{Aggregator, MergeOutcome};
pub use query::{DEFAULT_THRESHOLD, QueryOptions, query, query_with};
