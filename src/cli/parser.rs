//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use crate::error::Result;
use crate::text::StopwordSet;
use crate::vocab::DEFAULT_THRESHOLD;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// vocab-rs: vocabulary frequency tracking for language learners.
///
/// Counts the words of the articles you read and lists the ones that
/// keep coming back.
#[derive(Parser, Debug)]
#[command(name = "vocab-rs")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the vocabulary database file.
    ///
    /// Defaults to `.vocab/vocab.db` in the current directory.
    #[arg(short, long, env = "VOCAB_DB_PATH", global = true)]
    pub db_path: Option<PathBuf>,

    /// Stopword overrides file (one word per line, `!word` removes).
    #[arg(long, env = "VOCAB_STOPWORDS", global = true)]
    pub stopwords: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (text, json).
    #[arg(long, default_value = "text", global = true)]
    pub format: String,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize the vocabulary database.
    ///
    /// Creates the database file and schema if they don't exist.
    Init {
        /// Force re-initialization (destroys existing data).
        #[arg(short, long)]
        force: bool,
    },

    /// Show vocabulary statistics.
    Status,

    /// Reset the vocabulary (delete all words).
    Reset {
        /// Skip confirmation prompt.
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Tokenize articles and merge their word counts.
    Ingest {
        /// Article files to ingest, merged in order.
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Tokenize an article and print its word counts without storing them.
    Tokenize {
        /// Article file.
        file: PathBuf,
    },

    /// List frequent words that are not stopwords.
    Query {
        /// Words must have been seen more than this many times.
        #[arg(short, long, default_value_t = DEFAULT_THRESHOLD)]
        threshold: u64,

        /// Maximum number of words to show.
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Only show words marked as learning.
        #[arg(short, long)]
        learning: bool,
    },

    /// List every stored word.
    #[command(alias = "ls")]
    List,

    /// Mark a stored word as being learned.
    Learn {
        /// Word to mark.
        word: String,

        /// Clear the mark instead.
        #[arg(short, long)]
        unset: bool,
    },

    /// Show whether words are stopwords.
    Classify {
        /// Words to classify.
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// List the active stopword table by word class.
    Stopwords,
}

impl Cli {
    /// Returns the database path, using the default if not specified.
    #[must_use]
    pub fn get_db_path(&self) -> PathBuf {
        self.db_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(crate::storage::DEFAULT_DB_PATH))
    }

    /// Returns the active stopword table.
    ///
    /// The built-in table, with the overrides file applied if one is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the overrides file cannot be read.
    pub fn load_stopwords(&self) -> Result<StopwordSet> {
        self.stopwords
            .as_ref()
            .map_or_else(|| Ok(StopwordSet::builtin()), StopwordSet::load_overrides)
    }
}
