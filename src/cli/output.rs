//! Output formatting for CLI commands.
//!
//! Supports text and JSON output formats.

use crate::core::{FrequencyRecord, TokenBatch};
use crate::error::{CommandError, Error, Result};
use crate::storage::VocabularyStats;
use crate::text::{StopwordSet, WordClass};
use crate::vocab::MergeOutcome;
use serde::Serialize;
use std::fmt::Write;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output.
    Json,
}

impl OutputFormat {
    /// Parses format from string.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::InvalidArgument`] for anything other than
    /// `text` or `json`.
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(CommandError::InvalidArgument(format!(
                "unknown output format: {other} (expected text or json)"
            ))
            .into()),
        }
    }
}

/// Formats a status response.
#[must_use]
pub fn format_status(stats: &VocabularyStats, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format_status_text(stats),
        OutputFormat::Json => format_json(stats),
    }
}

fn format_status_text(stats: &VocabularyStats) -> String {
    let mut output = String::new();
    output.push_str("vocab-rs Status\n");
    output.push_str("===============\n\n");
    let _ = writeln!(output, "  Words:         {}", stats.word_count);
    let _ = writeln!(output, "  Occurrences:   {}", stats.total_occurrences);
    let _ = writeln!(output, "  Stopwords:     {}", stats.stopword_count);
    let _ = writeln!(output, "  Learning:      {}", stats.learning_count);
    let _ = writeln!(output, "  Schema:        v{}", stats.schema_version);
    if let Some(size) = stats.db_size {
        let _ = writeln!(output, "  DB size:       {}", format_size(size));
    }
    output
}

/// Formats a list of vocabulary records.
///
/// The stopword flag reflects `stopwords`, the table in effect now, rather
/// than the flag stored when each word was first inserted.
#[must_use]
pub fn format_records(
    records: &[FrequencyRecord],
    stopwords: &StopwordSet,
    format: OutputFormat,
) -> String {
    let records: Vec<FrequencyRecord> = records
        .iter()
        .map(|r| FrequencyRecord {
            is_stopword: stopwords.is_stopword(&r.word),
            ..r.clone()
        })
        .collect();

    match format {
        OutputFormat::Text => format_records_text(&records),
        OutputFormat::Json => format_json(&records),
    }
}

fn format_records_text(records: &[FrequencyRecord]) -> String {
    if records.is_empty() {
        return "No words found.\n".to_string();
    }

    let mut output = String::new();
    let _ = writeln!(output, "{:<24} {:>8}  Flags", "Word", "Count");
    output.push_str(&"-".repeat(44));
    output.push('\n');

    for record in records {
        let mut flags = Vec::new();
        if record.is_stopword {
            flags.push("stopword");
        }
        if record.learning {
            flags.push("learning");
        }
        let _ = writeln!(
            output,
            "{:<24} {:>8}  {}",
            truncate(&record.word, 24),
            record.count,
            flags.join(",")
        );
    }

    output
}

/// Formats the combined outcome of an ingest run.
#[must_use]
pub fn format_merge_outcome(outcome: &MergeOutcome, files: usize, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format_merge_outcome_text(outcome, files),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct IngestResult<'a> {
                files: usize,
                #[serde(flatten)]
                outcome: &'a MergeOutcome,
            }
            format_json(&IngestResult { files, outcome })
        }
    }
}

fn format_merge_outcome_text(outcome: &MergeOutcome, files: usize) -> String {
    let mut output = String::new();
    let _ = writeln!(
        output,
        "Ingested {files} file(s): {} new word(s), {} updated",
        outcome.inserted, outcome.updated
    );
    if !outcome.is_complete() {
        let _ = writeln!(output, "{} write(s) failed:", outcome.failed.len());
        for failure in &outcome.failed {
            let kind = match failure.kind {
                crate::storage::WriteKind::Insert => "insert",
                crate::storage::WriteKind::Update => "update",
            };
            let _ = writeln!(output, "  {kind} {}: {}", failure.word, failure.reason);
        }
    }
    output
}

/// Formats a token batch.
#[must_use]
pub fn format_batch(batch: &TokenBatch, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            let mut output = String::new();
            for (word, count) in batch.iter() {
                let _ = writeln!(output, "{word}\t{count}");
            }
            let _ = writeln!(
                output,
                "{} distinct, {} total",
                batch.len(),
                batch.total()
            );
            output
        }
        OutputFormat::Json => format_json(batch),
    }
}

/// Classification of a single word.
#[derive(Debug, Clone, Serialize)]
pub struct Classification {
    /// Word as given.
    pub word: String,
    /// Whether the active table contains the word.
    pub is_stopword: bool,
    /// Built-in class of the word, if any.
    pub class: Option<WordClass>,
}

/// Formats word classifications.
#[must_use]
pub fn format_classification(items: &[Classification], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            let mut output = String::new();
            for item in items {
                let verdict = if item.is_stopword { "stopword" } else { "word" };
                match (item.is_stopword, item.class) {
                    (true, Some(class)) => {
                        let _ = writeln!(output, "{}: {verdict} ({})", item.word, class.label());
                    }
                    _ => {
                        let _ = writeln!(output, "{}: {verdict}", item.word);
                    }
                }
            }
            output
        }
        OutputFormat::Json => format_json(&items),
    }
}

/// Formats the stopword table grouped by class.
#[must_use]
pub fn format_stopwords(groups: &[(Option<WordClass>, Vec<&str>)], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            let mut output = String::new();
            for (class, words) in groups.iter().filter(|(_, w)| !w.is_empty()) {
                let label = class.map_or("custom", WordClass::label);
                let _ = writeln!(output, "{label} ({}): {}", words.len(), words.join(" "));
            }
            output
        }
        OutputFormat::Json => {
            let map: serde_json::Map<String, serde_json::Value> = groups
                .iter()
                .filter(|(_, w)| !w.is_empty())
                .map(|(class, words)| {
                    (
                        class.map_or("custom", WordClass::label).to_string(),
                        serde_json::json!(words),
                    )
                })
                .collect();
            format_json(&map)
        }
    }
}

/// Formats an error for display.
#[must_use]
pub fn format_error(error: &Error, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => error.to_string(),
        OutputFormat::Json => {
            let value = serde_json::json!({ "error": error.to_string() });
            format_json(&value)
        }
    }
}

/// Formats a value as JSON.
fn format_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

/// Formats a byte size as human-readable.
#[allow(clippy::cast_precision_loss)]
fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{bytes} B")
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

/// Truncates a string to max characters with ellipsis.
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{head}...")
    }
}
