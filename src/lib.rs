//! # vocab-rs
//!
//! Vocabulary frequency tracking for language learners.
//!
//! vocab-rs tokenizes article text, merges per-document word counts into a
//! persistent `SQLite` table, and surfaces frequent words that are not
//! stopwords as candidates for study.
//!
//! ## Features
//!
//! - **Tokenizer**: fixed regex cleaning pipeline for Markdown prose
//! - **Stopwords**: closed, overridable table of function words
//! - **Incremental merge**: per-word isolated count updates and inserts
//! - **Threshold query**: most frequent interesting words first

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
// Note: unsafe is needed for memory-mapped I/O (memmap2)
#![warn(unsafe_code)]

pub mod cli;
pub mod core;
pub mod error;
pub mod io;
pub mod storage;
pub mod text;
pub mod vocab;

// Re-export commonly used types at crate root
pub use error::{Error, Result};

// Re-export core domain types
pub use core::{FrequencyRecord, TokenBatch};

// Re-export storage types
pub use storage::{DEFAULT_DB_PATH, MemoryStorage, SqliteStorage, VocabularyStore};

// Re-export text processing
pub use text::{StopwordSet, WordClass, normalize, tokenize};

// Re-export vocabulary operations
pub use vocab::{Aggregator, DEFAULT_THRESHOLD, MergeOutcome, QueryOptions, query, query_with};

// Re-export CLI types
pub use cli::{Cli, Commands, OutputFormat};
