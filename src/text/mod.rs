//! Text processing for vocab-rs.
//!
//! Provides the article tokenizer and the stopword classifier. Both are
//! pure: the tokenizer is a free function and the classifier is an
//! immutable value built once at startup.

pub mod stopwords;
pub mod tokenizer;

pub use stopwords::{StopwordSet, WordClass};
pub use tokenizer::{CleanStep, normalize, segments, tokenize};
