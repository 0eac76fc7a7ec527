//! CLI command implementations.
//!
//! Contains the business logic for each CLI command.

use crate::cli::output::{
    Classification, OutputFormat, format_batch, format_classification, format_merge_outcome,
    format_records, format_status, format_stopwords,
};
use crate::cli::parser::{Cli, Commands};
use crate::core::TokenBatch;
use crate::error::{CommandError, Result, StorageError};
use crate::io::read_article;
use crate::storage::{SqliteStorage, VocabularyStore};
use crate::text::{StopwordSet, WordClass, tokenize};
use crate::vocab::{Aggregator, MergeOutcome, QueryOptions, query_with};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Executes the CLI command.
///
/// # Arguments
///
/// * `cli` - Parsed CLI arguments.
///
/// # Returns
///
/// Result with output string on success.
///
/// # Errors
///
/// Returns an error if the command fails to execute.
pub fn execute(cli: &Cli) -> Result<String> {
    let format = OutputFormat::parse(&cli.format)?;
    let db_path = cli.get_db_path();

    match &cli.command {
        Commands::Init { force } => cmd_init(&db_path, *force, format),
        Commands::Status => cmd_status(&db_path, format),
        Commands::Reset { yes } => cmd_reset(&db_path, *yes, format),
        Commands::Ingest { files } => {
            let stopwords = cli.load_stopwords()?;
            cmd_ingest(&db_path, files, &stopwords, format)
        }
        Commands::Tokenize { file } => cmd_tokenize(file, format),
        Commands::Query {
            threshold,
            limit,
            learning,
        } => {
            let stopwords = cli.load_stopwords()?;
            let mut options = QueryOptions::with_threshold(*threshold);
            options.limit = *limit;
            options.learning_only = *learning;
            cmd_query(&db_path, &stopwords, &options, format)
        }
        Commands::List => {
            let stopwords = cli.load_stopwords()?;
            cmd_list(&db_path, &stopwords, format)
        }
        Commands::Learn { word, unset } => {
            let stopwords = cli.load_stopwords()?;
            cmd_learn(&db_path, word, !*unset, &stopwords, format)
        }
        Commands::Classify { words } => {
            let stopwords = cli.load_stopwords()?;
            Ok(cmd_classify(words, &stopwords, format))
        }
        Commands::Stopwords => {
            let stopwords = cli.load_stopwords()?;
            Ok(format_stopwords(&stopwords.by_class(), format))
        }
    }
}

/// Opens storage and ensures it's initialized.
fn open_storage(db_path: &Path) -> Result<SqliteStorage> {
    let storage = SqliteStorage::open(db_path)?;

    if !storage.is_initialized()? {
        return Err(StorageError::NotInitialized.into());
    }

    Ok(storage)
}

/// Returns the database file and its WAL sidecar files.
fn database_files(db_path: &Path) -> Vec<PathBuf> {
    let mut files = vec![db_path.to_path_buf()];
    for suffix in ["-wal", "-shm"] {
        let mut name = db_path.as_os_str().to_os_string();
        name.push(suffix);
        files.push(PathBuf::from(name));
    }
    files
}

// ==================== Command Implementations ====================

fn cmd_init(db_path: &Path, force: bool, _format: OutputFormat) -> Result<String> {
    if db_path.exists() && !force {
        return Err(CommandError::ExecutionFailed(
            "Database already exists. Use --force to reinitialize.".to_string(),
        )
        .into());
    }

    if force {
        for file in database_files(db_path).iter().filter(|f| f.exists()) {
            std::fs::remove_file(file).map_err(|e| {
                CommandError::ExecutionFailed(format!("Failed to remove existing database: {e}"))
            })?;
        }
    }

    let mut storage = SqliteStorage::open(db_path)?;
    storage.init()?;

    Ok(format!(
        "Initialized vocabulary database at: {}\n",
        db_path.display()
    ))
}

fn cmd_status(db_path: &Path, format: OutputFormat) -> Result<String> {
    let storage = open_storage(db_path)?;
    let stats = storage.stats()?;
    Ok(format_status(&stats, format))
}

fn cmd_reset(db_path: &Path, yes: bool, _format: OutputFormat) -> Result<String> {
    if !yes {
        return Err(CommandError::ExecutionFailed(
            "Use --yes to confirm reset. This will delete all words.".to_string(),
        )
        .into());
    }

    let mut storage = open_storage(db_path)?;
    storage.reset()?;

    Ok("Vocabulary reset successfully.\n".to_string())
}

fn cmd_ingest(
    db_path: &Path,
    files: &[PathBuf],
    stopwords: &StopwordSet,
    format: OutputFormat,
) -> Result<String> {
    let mut storage = open_storage(db_path)?;

    // Tokenizing is pure; only the merges need the store.
    let batches: Vec<Result<TokenBatch>> = files
        .par_iter()
        .map(|file| read_article(file).map(|text| tokenize(&text)))
        .collect();

    let mut total = MergeOutcome::default();
    let mut aggregator = Aggregator::new(&mut storage, stopwords);
    for (file, batch) in files.iter().zip(batches) {
        let batch = batch?;
        tracing::debug!(file = %file.display(), words = batch.len(), "merging article");
        total.absorb(aggregator.merge(&batch)?);
    }

    Ok(format_merge_outcome(&total, files.len(), format))
}

fn cmd_tokenize(file: &Path, format: OutputFormat) -> Result<String> {
    let text = read_article(file)?;
    Ok(format_batch(&tokenize(&text), format))
}

fn cmd_query(
    db_path: &Path,
    stopwords: &StopwordSet,
    options: &QueryOptions,
    format: OutputFormat,
) -> Result<String> {
    let storage = open_storage(db_path)?;
    let records = query_with(&storage, stopwords, options)?;
    Ok(format_records(&records, stopwords, format))
}

fn cmd_list(db_path: &Path, stopwords: &StopwordSet, format: OutputFormat) -> Result<String> {
    let storage = open_storage(db_path)?;
    let records = storage.load_all()?;
    Ok(format_records(&records, stopwords, format))
}

fn cmd_learn(
    db_path: &Path,
    word: &str,
    learning: bool,
    stopwords: &StopwordSet,
    format: OutputFormat,
) -> Result<String> {
    let mut storage = open_storage(db_path)?;
    let word = word.to_lowercase();
    storage.set_learning(&word, learning)?;

    match format {
        OutputFormat::Text => {
            let state = if learning { "learning" } else { "not learning" };
            Ok(format!("Marked '{word}' as {state}.\n"))
        }
        OutputFormat::Json => {
            let record = storage
                .get(&word)?
                .ok_or(StorageError::WordNotFound { word })?;
            Ok(format_records(&[record], stopwords, format))
        }
    }
}

fn cmd_classify(words: &[String], stopwords: &StopwordSet, format: OutputFormat) -> String {
    let items: Vec<Classification> = words
        .iter()
        .map(|word| {
            let word = word.to_lowercase();
            Classification {
                is_stopword: stopwords.is_stopword(&word),
                class: WordClass::of(&word),
                word,
            }
        })
        .collect();
    format_classification(&items, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_database_files() {
        let files = database_files(Path::new("/tmp/vocab.db"));
        assert_eq!(
            files,
            [
                PathBuf::from("/tmp/vocab.db"),
                PathBuf::from("/tmp/vocab.db-wal"),
                PathBuf::from("/tmp/vocab.db-shm"),
            ]
        );
    }

    #[test]
    fn test_open_storage_requires_init() {
        let temp = TempDir::new().unwrap();
        let result = open_storage(&temp.path().join("vocab.db"));
        assert!(matches!(
            result,
            Err(crate::Error::Storage(StorageError::NotInitialized))
        ));
    }

    #[test]
    fn test_ingest_read_error_merges_nothing_after_it() {
        let temp = TempDir::new().unwrap();
        let db_path = temp.path().join("vocab.db");
        cmd_init(&db_path, false, OutputFormat::Text).unwrap();

        let good = temp.path().join("good.md");
        std::fs::write(&good, "cat cat").unwrap();
        let files = vec![good, temp.path().join("missing.md")];

        let result = cmd_ingest(&db_path, &files, &StopwordSet::builtin(), OutputFormat::Text);
        assert!(result.is_err());

        let storage = open_storage(&db_path).unwrap();
        assert_eq!(storage.get("cat").unwrap().unwrap().count, 2);
    }

    #[test]
    fn test_classify_lowercases() {
        let text = cmd_classify(&["The".to_string()], &StopwordSet::builtin(), OutputFormat::Text);
        assert_eq!(text, "the: stopword (article)\n");
    }
}
