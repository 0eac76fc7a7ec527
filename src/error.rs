//! Error types for vocabulary operations.
//!
//! This module provides the error hierarchy using `thiserror` for storage,
//! token batch construction, file input and CLI commands.

use thiserror::Error;

/// Result type alias for vocabulary operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    /// Storage-related errors (database operations).
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Token batch construction errors.
    #[error("token error: {0}")]
    Token(#[from] TokenError),

    /// I/O errors (file operations).
    #[error("I/O error: {0}")]
    Io(#[from] IoError),

    /// CLI command errors.
    #[error("command error: {0}")]
    Command(#[from] CommandError),

    /// Configuration errors.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },
}

/// Storage-specific errors for database operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Database connection or query error.
    #[error("database error: {0}")]
    Database(String),

    /// Storage not initialized (init command not run).
    #[error("vocabulary store not initialized. Run: vocab-rs init")]
    NotInitialized,

    /// Word not present in the vocabulary table.
    #[error("word not found: {word}")]
    WordNotFound {
        /// The word that was looked up.
        word: String,
    },

    /// A stored value could not be read back as the expected type.
    #[error("invalid stored value for '{word}': {reason}")]
    InvalidValue {
        /// Word whose row holds the bad value.
        word: String,
        /// What was wrong with it.
        reason: String,
    },

    /// Schema migration error.
    #[error("migration error: {0}")]
    Migration(String),

    /// Transaction error.
    #[error("transaction error: {0}")]
    Transaction(String),
}

/// Errors raised when assembling a token batch by hand.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    /// Words and counts differ in length.
    #[error("batch has {words} words but {counts} counts")]
    LengthMismatch {
        /// Number of words supplied.
        words: usize,
        /// Number of counts supplied.
        counts: usize,
    },

    /// The same word appears twice.
    #[error("duplicate word in batch: {0}")]
    DuplicateWord(String),

    /// An empty string was supplied as a word.
    #[error("empty word at position {0}")]
    EmptyWord(usize),

    /// A count of zero was supplied.
    #[error("zero count for word: {0}")]
    ZeroCount(String),
}

/// I/O-specific errors for file operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path to the file that was not found.
        path: String,
    },

    /// Failed to read file.
    #[error("failed to read file: {path}: {reason}")]
    ReadFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Memory mapping error.
    #[error("memory mapping failed: {path}: {reason}")]
    MmapFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// File content is not valid UTF-8.
    #[error("invalid UTF-8 in {path} at byte offset {offset}")]
    InvalidUtf8 {
        /// Path to the file.
        path: String,
        /// Byte offset of the first invalid sequence.
        offset: usize,
    },
}

/// CLI command-specific errors.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Invalid argument provided.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Command execution failed.
    #[error("command execution failed: {0}")]
    ExecutionFailed(String),
}

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        Self::Storage(StorageError::Database(err.to_string()))
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Database(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Config {
            message: "bad config".to_string(),
        };
        assert_eq!(err.to_string(), "configuration error: bad config");
    }

    #[test]
    fn test_storage_error_display() {
        let err = StorageError::NotInitialized;
        assert_eq!(
            err.to_string(),
            "vocabulary store not initialized. Run: vocab-rs init"
        );

        let err = StorageError::WordNotFound {
            word: "lexicon".to_string(),
        };
        assert_eq!(err.to_string(), "word not found: lexicon");

        let err = StorageError::InvalidValue {
            word: "cat".to_string(),
            reason: "count is negative".to_string(),
        };
        assert!(err.to_string().contains("cat"));
        assert!(err.to_string().contains("negative"));
    }

    #[test]
    fn test_token_error_display() {
        let err = TokenError::LengthMismatch {
            words: 3,
            counts: 2,
        };
        assert_eq!(err.to_string(), "batch has 3 words but 2 counts");

        let err = TokenError::DuplicateWord("cat".to_string());
        assert!(err.to_string().contains("cat"));

        let err = TokenError::ZeroCount("dog".to_string());
        assert!(err.to_string().contains("dog"));
    }

    #[test]
    fn test_io_error_display() {
        let err = IoError::FileNotFound {
            path: "/tmp/article.md".to_string(),
        };
        assert_eq!(err.to_string(), "file not found: /tmp/article.md");

        let err = IoError::InvalidUtf8 {
            path: "a.md".to_string(),
            offset: 7,
        };
        assert!(err.to_string().contains("offset 7"));
    }

    #[test]
    fn test_error_from_token() {
        let err: Error = TokenError::EmptyWord(0).into();
        assert!(matches!(err, Error::Token(_)));
    }

    #[test]
    fn test_from_rusqlite_error_to_error() {
        let rusqlite_err = rusqlite::Error::InvalidQuery;
        let err: Error = rusqlite_err.into();
        assert!(matches!(err, Error::Storage(StorageError::Database(_))));
    }

    #[test]
    fn test_command_error_display() {
        let err = CommandError::InvalidArgument("unknown output format: yaml".to_string());
        assert_eq!(err.to_string(), "invalid argument: unknown output format: yaml");
    }
}
