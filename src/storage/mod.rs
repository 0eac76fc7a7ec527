//! Storage layer for vocab-rs.
//!
//! Provides persistent storage for the aggregated vocabulary table. The
//! [`VocabularyStore`] trait is the contract the merge and query code is
//! written against; [`SqliteStorage`] is the on-disk backend and
//! [`MemoryStorage`] a volatile one.

pub mod memory;
pub mod schema;
pub mod sqlite;
pub mod traits;

pub use memory::MemoryStorage;
pub use schema::{CURRENT_SCHEMA_VERSION, SCHEMA_SQL};
pub use sqlite::SqliteStorage;
pub use traits::{VocabularyStats, VocabularyStore, WriteFailure, WriteKind};

/// Default database path relative to the working directory.
pub const DEFAULT_DB_PATH: &str = ".vocab/vocab.db";
