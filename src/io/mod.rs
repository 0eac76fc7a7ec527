//! I/O utilities for vocab-rs.
//!
//! Provides article file reading with memory mapping for large inputs.

pub mod reader;

pub use reader::{ArticleReader, MAX_ARTICLE_SIZE, read_article};
