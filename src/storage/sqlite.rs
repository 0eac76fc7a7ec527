//! `SQLite` storage implementation.
//!
//! Provides persistent vocabulary storage using `SQLite` with migration
//! support and an exclusive write window for merges.

// SQLite stores all integers as i64. Counts are validated to be >= 1 before
// they are turned into u64.
#![allow(clippy::cast_sign_loss)]

use crate::core::FrequencyRecord;
use crate::error::{Result, StorageError};
use crate::storage::schema::{
    CHECK_SCHEMA_SQL, CURRENT_SCHEMA_VERSION, GET_VERSION_SQL, SCHEMA_SQL, SET_VERSION_SQL,
};
use crate::storage::traits::{VocabularyStats, VocabularyStore, WriteFailure, WriteKind};
use rusqlite::types::Value;
use rusqlite::{Connection, OptionalExtension, params};
use std::path::{Path, PathBuf};

const SELECT_RECORD: &str = "SELECT word, count, is_stopword, learning FROM vocabulary";

const ROLLED_BACK: &str =
    "merge transaction was rolled back after a failed write; no words from this merge were stored";

/// State of the transaction opened by `begin_write`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WriteWindow {
    Closed,
    Open,
    /// `SQLite` ended the transaction itself after a failed statement
    /// (full disk, I/O error, out of memory).
    RolledBack,
}

/// Marks the window rolled back if `SQLite` has left the transaction.
fn track_rollback(conn: &Connection, window: &mut WriteWindow) {
    if *window == WriteWindow::Open && conn.is_autocommit() {
        tracing::warn!("merge transaction rolled back by SQLite, refusing further writes");
        *window = WriteWindow::RolledBack;
    }
}

/// SQLite-based vocabulary storage.
///
/// # Examples
///
/// ```no_run
/// use vocab_rs::storage::{SqliteStorage, VocabularyStore};
///
/// let mut storage = SqliteStorage::open("vocab.db").unwrap();
/// storage.init().unwrap();
/// ```
pub struct SqliteStorage {
    /// `SQLite` connection.
    conn: Connection,
    /// Path to the database file (None for in-memory).
    path: Option<PathBuf>,
    /// Merge transaction state.
    window: WriteWindow,
}

impl SqliteStorage {
    /// Opens or creates a `SQLite` database at the given path.
    ///
    /// Missing parent directories are created.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| StorageError::Database(e.to_string()))?;
        }

        let conn = Connection::open(&path).map_err(StorageError::from)?;

        // journal_mode returns the resulting mode, so it needs query_row
        let _: String = conn
            .query_row("PRAGMA journal_mode = WAL;", [], |row| row.get(0))
            .map_err(StorageError::from)?;

        tracing::debug!(path = %path.display(), "opened vocabulary database");

        Ok(Self {
            conn,
            path: Some(path),
            window: WriteWindow::Closed,
        })
    }

    /// Creates an in-memory `SQLite` database.
    ///
    /// Useful for testing.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be created.
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(StorageError::from)?;
        Ok(Self {
            conn,
            path: None,
            window: WriteWindow::Closed,
        })
    }

    /// Returns the database path (None for in-memory).
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Returns the underlying connection.
    #[must_use]
    pub const fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Gets the current schema version.
    fn get_schema_version(&self) -> Result<Option<u32>> {
        let version: Option<String> = self
            .conn
            .query_row(GET_VERSION_SQL, [], |row| row.get(0))
            .optional()
            .map_err(StorageError::from)?;

        Ok(version.and_then(|v| v.parse().ok()))
    }

    /// Sets the schema version.
    fn set_schema_version(&self, version: u32) -> Result<()> {
        self.conn
            .execute(SET_VERSION_SQL, params![version.to_string()])
            .map_err(StorageError::from)?;
        Ok(())
    }

    /// Returns current Unix timestamp.
    #[allow(clippy::cast_possible_wrap)]
    fn now() -> i64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or(0)
    }

    fn query_records(&self, sql: &str, threshold: Option<i64>) -> Result<Vec<FrequencyRecord>> {
        let mut stmt = self.conn.prepare(sql).map_err(StorageError::from)?;

        let rows = match threshold {
            Some(t) => stmt.query_map(params![t], RawRecord::from_row),
            None => stmt.query_map([], RawRecord::from_row),
        }
        .map_err(StorageError::from)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(StorageError::from)?;

        rows.into_iter()
            .map(|raw| raw.into_record().map_err(Into::into))
            .collect()
    }
}

/// A row as stored, before type coercion.
struct RawRecord {
    word: String,
    count: Value,
    is_stopword: Value,
    learning: Value,
}

impl RawRecord {
    fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            word: row.get(0)?,
            count: row.get(1)?,
            is_stopword: row.get(2)?,
            learning: row.get(3)?,
        })
    }

    fn into_record(self) -> std::result::Result<FrequencyRecord, StorageError> {
        let count = count_from_value(&self.word, &self.count)?;
        let is_stopword = flag_from_value(&self.word, &self.is_stopword)?;
        let learning = flag_from_value(&self.word, &self.learning)?;
        Ok(FrequencyRecord {
            word: self.word,
            count,
            is_stopword,
            learning,
        })
    }
}

/// Reads a count stored as an integer, an integral real, or numeric text.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::float_cmp
)]
fn count_from_value(word: &str, value: &Value) -> std::result::Result<u64, StorageError> {
    let invalid = |reason: String| StorageError::InvalidValue {
        word: word.to_string(),
        reason,
    };

    let count = match value {
        Value::Integer(i) => *i,
        Value::Real(f) if f.fract() == 0.0 && *f >= 0.0 && *f <= i64::MAX as f64 => *f as i64,
        Value::Text(t) => {
            let t = t.trim();
            match t.parse::<i64>() {
                Ok(i) => i,
                Err(_) => match t.parse::<f64>() {
                    Ok(f) if f.fract() == 0.0 && f >= 0.0 && f <= i64::MAX as f64 => f as i64,
                    _ => return Err(invalid(format!("count is not numeric: {t:?}"))),
                },
            }
        }
        other => return Err(invalid(format!("count has unsupported type: {other:?}"))),
    };

    if count < 1 {
        return Err(invalid(format!("count must be at least 1, got {count}")));
    }
    Ok(count as u64)
}

/// Reads a flag stored as an integer or as "true"/"false" text.
fn flag_from_value(word: &str, value: &Value) -> std::result::Result<bool, StorageError> {
    match value {
        Value::Null => Ok(false),
        Value::Integer(i) => Ok(*i != 0),
        Value::Real(f) => Ok(*f != 0.0),
        Value::Text(t) => match t.trim().to_ascii_lowercase().as_str() {
            "true" | "1" => Ok(true),
            "false" | "0" | "" => Ok(false),
            other => Err(StorageError::InvalidValue {
                word: word.to_string(),
                reason: format!("flag is not boolean: {other:?}"),
            }),
        },
        Value::Blob(_) => Err(StorageError::InvalidValue {
            word: word.to_string(),
            reason: "flag is a blob".to_string(),
        }),
    }
}

fn count_to_sql(word: &str, count: u64) -> std::result::Result<i64, StorageError> {
    i64::try_from(count).map_err(|_| StorageError::InvalidValue {
        word: word.to_string(),
        reason: format!("count {count} does not fit in an SQLite integer"),
    })
}

impl VocabularyStore for SqliteStorage {
    fn init(&mut self) -> Result<()> {
        let is_init: i64 = self
            .conn
            .query_row(CHECK_SCHEMA_SQL, [], |row| row.get(0))
            .map_err(StorageError::from)?;

        if is_init == 0 {
            self.conn
                .execute_batch(SCHEMA_SQL)
                .map_err(StorageError::from)?;
            self.set_schema_version(CURRENT_SCHEMA_VERSION)?;
            tracing::info!(version = CURRENT_SCHEMA_VERSION, "created vocabulary schema");
        } else if let Some(current) = self.get_schema_version()?
            && current < CURRENT_SCHEMA_VERSION
        {
            let migrations = crate::storage::schema::get_migrations_from(current);
            for migration in migrations {
                tracing::info!(
                    from = migration.from_version,
                    to = migration.to_version,
                    "running schema migration"
                );
                self.conn
                    .execute_batch(migration.sql)
                    .map_err(|e| StorageError::Migration(e.to_string()))?;
            }
            self.set_schema_version(CURRENT_SCHEMA_VERSION)?;
        }

        Ok(())
    }

    fn is_initialized(&self) -> Result<bool> {
        let count: i64 = self
            .conn
            .query_row(CHECK_SCHEMA_SQL, [], |row| row.get(0))
            .map_err(StorageError::from)?;
        Ok(count > 0)
    }

    fn reset(&mut self) -> Result<()> {
        self.conn
            .execute("DELETE FROM vocabulary", [])
            .map_err(StorageError::from)?;
        Ok(())
    }

    fn load_all(&self) -> Result<Vec<FrequencyRecord>> {
        self.query_records(&format!("{SELECT_RECORD} ORDER BY word"), None)
    }

    fn load_above(&self, threshold: u64) -> Result<Vec<FrequencyRecord>> {
        // Saturate: nothing can exceed a threshold beyond i64::MAX anyway
        let threshold = i64::try_from(threshold).unwrap_or(i64::MAX);
        self.query_records(
            &format!("{SELECT_RECORD} WHERE count > ? ORDER BY count DESC, word DESC"),
            Some(threshold),
        )
    }

    fn get(&self, word: &str) -> Result<Option<FrequencyRecord>> {
        let raw = self
            .conn
            .query_row(
                &format!("{SELECT_RECORD} WHERE word = ?"),
                params![word],
                RawRecord::from_row,
            )
            .optional()
            .map_err(StorageError::from)?;

        raw.map(RawRecord::into_record)
            .transpose()
            .map_err(Into::into)
    }

    fn insert_batch(&mut self, records: &[FrequencyRecord]) -> Vec<WriteFailure> {
        let fail_all = |reason: &str| -> Vec<WriteFailure> {
            records
                .iter()
                .map(|r| WriteFailure {
                    word: r.word.clone(),
                    kind: WriteKind::Insert,
                    reason: reason.to_string(),
                })
                .collect()
        };

        let now = Self::now();
        let mut stmt = match self.conn.prepare_cached(
            r"
            INSERT INTO vocabulary (word, count, is_stopword, learning, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
        ",
        ) {
            Ok(stmt) => stmt,
            Err(e) => return fail_all(&e.to_string()),
        };

        let mut failures = Vec::new();
        for record in records {
            if self.window == WriteWindow::RolledBack {
                failures.push(WriteFailure {
                    word: record.word.clone(),
                    kind: WriteKind::Insert,
                    reason: ROLLED_BACK.to_string(),
                });
                continue;
            }

            let result = count_to_sql(&record.word, record.count)
                .map_err(|e| e.to_string())
                .and_then(|count| {
                    stmt.execute(params![
                        record.word,
                        count,
                        i64::from(record.is_stopword),
                        i64::from(record.learning),
                        now,
                        now,
                    ])
                    .map_err(|e| e.to_string())
                });

            if let Err(reason) = result {
                track_rollback(&self.conn, &mut self.window);
                failures.push(WriteFailure {
                    word: record.word.clone(),
                    kind: WriteKind::Insert,
                    reason,
                });
            }
        }

        failures
    }

    fn update_count(&mut self, word: &str, count: u64) -> Result<()> {
        if self.window == WriteWindow::RolledBack {
            return Err(StorageError::Transaction(ROLLED_BACK.to_string()).into());
        }

        let count = count_to_sql(word, count)?;
        let result = self
            .conn
            .prepare_cached("UPDATE vocabulary SET count = ?, updated_at = ? WHERE word = ?")
            .and_then(|mut stmt| stmt.execute(params![count, Self::now(), word]));
        if result.is_err() {
            track_rollback(&self.conn, &mut self.window);
        }
        let changed = result.map_err(StorageError::from)?;

        if changed == 0 {
            return Err(StorageError::WordNotFound {
                word: word.to_string(),
            }
            .into());
        }
        Ok(())
    }

    fn set_learning(&mut self, word: &str, learning: bool) -> Result<()> {
        let changed = self
            .conn
            .execute(
                "UPDATE vocabulary SET learning = ?, updated_at = ? WHERE word = ?",
                params![i64::from(learning), Self::now(), word],
            )
            .map_err(StorageError::from)?;

        if changed == 0 {
            return Err(StorageError::WordNotFound {
                word: word.to_string(),
            }
            .into());
        }
        Ok(())
    }

    fn begin_write(&mut self) -> Result<()> {
        // IMMEDIATE takes the write lock up front, so a second process
        // cannot read the same snapshot and lose our increments.
        self.conn
            .execute_batch("BEGIN IMMEDIATE")
            .map_err(|e| StorageError::Transaction(e.to_string()))?;
        self.window = WriteWindow::Open;
        Ok(())
    }

    fn end_write(&mut self) -> Result<()> {
        match std::mem::replace(&mut self.window, WriteWindow::Closed) {
            WriteWindow::Closed => Ok(()),
            WriteWindow::Open if !self.conn.is_autocommit() => {
                self.conn
                    .execute_batch("COMMIT")
                    .map_err(|e| StorageError::Transaction(e.to_string()))?;
                Ok(())
            }
            // Open but in autocommit: the transaction ended without a
            // failed statement being seen, so nothing can be trusted either.
            WriteWindow::Open | WriteWindow::RolledBack => {
                Err(StorageError::Transaction(ROLLED_BACK.to_string()).into())
            }
        }
    }

    fn abort_write(&mut self) {
        self.window = WriteWindow::Closed;
        if !self.conn.is_autocommit()
            && let Err(e) = self.conn.execute_batch("ROLLBACK")
        {
            tracing::warn!(error = %e, "rollback of aborted merge failed");
        }
    }

    fn stats(&self) -> Result<VocabularyStats> {
        let records = self.load_all()?;
        let schema_version = self.get_schema_version()?.unwrap_or(0);
        let db_size = self
            .path
            .as_ref()
            .and_then(|p| std::fs::metadata(p).ok().map(|m| m.len()));

        Ok(VocabularyStats {
            word_count: records.len(),
            total_occurrences: records.iter().map(|r| r.count).sum(),
            stopword_count: records.iter().filter(|r| r.is_stopword).count(),
            learning_count: records.iter().filter(|r| r.learning).count(),
            schema_version,
            db_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn setup() -> SqliteStorage {
        let mut storage = SqliteStorage::in_memory().unwrap();
        storage.init().unwrap();
        storage
    }

    fn insert_raw(storage: &SqliteStorage, word: &str, count: &str, is_stopword: &str) {
        storage
            .conn
            .execute(
                &format!(
                    "INSERT INTO vocabulary (word, count, is_stopword, learning, created_at, updated_at)
                     VALUES (?, {count}, {is_stopword}, 0, 0, 0)"
                ),
                params![word],
            )
            .unwrap();
    }

    #[test]
    fn test_init() {
        let mut storage = SqliteStorage::in_memory().unwrap();
        assert!(!storage.is_initialized().unwrap());
        assert!(storage.init().is_ok());
        assert!(storage.is_initialized().unwrap());
    }

    #[test]
    fn test_init_idempotent() {
        let mut storage = SqliteStorage::in_memory().unwrap();
        assert!(storage.init().is_ok());
        assert!(storage.init().is_ok());
    }

    #[test]
    fn test_migration_from_v1() {
        let mut storage = SqliteStorage::in_memory().unwrap();
        storage
            .conn
            .execute_batch(
                r"
                CREATE TABLE schema_info (key TEXT PRIMARY KEY, value TEXT NOT NULL);
                INSERT INTO schema_info VALUES ('version', '1');
                CREATE TABLE vocabulary (
                    word TEXT PRIMARY KEY NOT NULL,
                    count INTEGER NOT NULL,
                    is_stopword INTEGER NOT NULL DEFAULT 0,
                    created_at INTEGER NOT NULL,
                    updated_at INTEGER NOT NULL
                );
                INSERT INTO vocabulary VALUES ('cat', 4, 0, 0, 0);
            ",
            )
            .unwrap();

        storage.init().unwrap();

        let record = storage.get("cat").unwrap().unwrap();
        assert_eq!(record.count, 4);
        assert!(!record.learning);
        assert_eq!(storage.stats().unwrap().schema_version, CURRENT_SCHEMA_VERSION);
    }

    #[test]
    fn test_insert_and_load() {
        let mut storage = setup();
        let failures = storage.insert_batch(&[
            FrequencyRecord::new("dog", 1, false),
            FrequencyRecord::new("cat", 2, false),
            FrequencyRecord::new("the", 9, true),
        ]);
        assert!(failures.is_empty());

        let all = storage.load_all().unwrap();
        let words: Vec<&str> = all.iter().map(|r| r.word.as_str()).collect();
        assert_eq!(words, ["cat", "dog", "the"]);
        assert!(all[2].is_stopword);
    }

    #[test]
    fn test_insert_duplicate_fails_per_record() {
        let mut storage = setup();
        storage.insert_batch(&[FrequencyRecord::new("cat", 1, false)]);

        let failures = storage.insert_batch(&[
            FrequencyRecord::new("cat", 5, false),
            FrequencyRecord::new("dog", 1, false),
        ]);
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].word, "cat");
        assert_eq!(failures[0].kind, WriteKind::Insert);

        assert_eq!(storage.get("cat").unwrap().unwrap().count, 1);
        assert_eq!(storage.get("dog").unwrap().unwrap().count, 1);
    }

    #[test]
    fn test_update_count() {
        let mut storage = setup();
        storage.insert_batch(&[FrequencyRecord::new("cat", 2, false)]);
        storage.set_learning("cat", true).unwrap();

        storage.update_count("cat", 5).unwrap();

        let record = storage.get("cat").unwrap().unwrap();
        assert_eq!(record.count, 5);
        assert!(record.learning, "update must not touch other fields");
    }

    #[test]
    fn test_update_missing_word() {
        let mut storage = setup();
        let err = storage.update_count("ghost", 3).unwrap_err();
        assert!(err.to_string().contains("ghost"));
        assert!(storage.set_learning("ghost", true).is_err());
    }

    #[test]
    fn test_load_above_orders_descending() {
        let mut storage = setup();
        storage.insert_batch(&[
            FrequencyRecord::new("walk", 2, false),
            FrequencyRecord::new("run", 5, false),
            FrequencyRecord::new("jump", 3, false),
            FrequencyRecord::new("hop", 3, false),
        ]);

        let words: Vec<String> = storage
            .load_above(2)
            .unwrap()
            .into_iter()
            .map(|r| r.word)
            .collect();
        assert_eq!(words, ["run", "jump", "hop"]);
    }

    #[test_case("7", "0", 7, false ; "integer")]
    #[test_case("'12'", "'false'", 12, false ; "numeric text")]
    #[test_case("3.0", "'true'", 3, true ; "integral real")]
    #[test_case("' 4 '", "1", 4, true ; "padded text")]
    fn test_tolerant_reads(count: &str, flag: &str, expected_count: u64, expected_flag: bool) {
        let storage = setup();
        insert_raw(&storage, "legacy", count, flag);

        let record = storage.get("legacy").unwrap().unwrap();
        assert_eq!(record.count, expected_count);
        assert_eq!(record.is_stopword, expected_flag);
    }

    #[test]
    fn test_non_numeric_count_is_read_error() {
        let storage = setup();
        insert_raw(&storage, "broken", "'many'", "0");

        assert!(storage.load_all().is_err());
    }

    #[test]
    fn test_write_window_commits() {
        let mut storage = setup();
        storage.begin_write().unwrap();
        storage.insert_batch(&[FrequencyRecord::new("cat", 1, false)]);
        storage.end_write().unwrap();

        assert!(storage.conn.is_autocommit());
        assert!(storage.get("cat").unwrap().is_some());
    }

    #[test]
    fn test_write_window_abort_rolls_back() {
        let mut storage = setup();
        storage.begin_write().unwrap();
        storage.insert_batch(&[FrequencyRecord::new("cat", 1, false)]);
        storage.abort_write();

        assert!(storage.get("cat").unwrap().is_none());
    }

    #[test]
    fn test_failed_statement_keeps_window_open() {
        let mut storage = setup();
        storage.insert_batch(&[FrequencyRecord::new("cat", 1, false)]);

        storage.begin_write().unwrap();
        let failures = storage.insert_batch(&[
            FrequencyRecord::new("cat", 1, false),
            FrequencyRecord::new("dog", 1, false),
        ]);
        storage.end_write().unwrap();

        assert_eq!(failures.len(), 1);
        assert!(storage.get("dog").unwrap().is_some());
    }

    #[test]
    fn test_rolled_back_window_refuses_writes() {
        let mut storage = setup();
        storage.insert_batch(&[FrequencyRecord::new("cat", 1, false)]);

        storage.begin_write().unwrap();
        storage.insert_batch(&[FrequencyRecord::new("dog", 1, false)]);
        // Simulate SQLite abandoning the transaction on its own.
        storage.conn.execute_batch("ROLLBACK").unwrap();

        let failures = storage.insert_batch(&[
            FrequencyRecord::new("cat", 1, false),
            FrequencyRecord::new("fox", 1, false),
        ]);
        assert_eq!(failures.len(), 2);
        assert_eq!(failures[1].reason, ROLLED_BACK);
        assert!(storage.update_count("cat", 4).is_err());

        let result = storage.end_write();
        assert!(matches!(
            result,
            Err(crate::Error::Storage(StorageError::Transaction(_)))
        ));
        assert!(storage.get("dog").unwrap().is_none());
        assert!(storage.get("fox").unwrap().is_none());
        assert_eq!(storage.get("cat").unwrap().unwrap().count, 1);

        // The next window starts clean.
        storage.begin_write().unwrap();
        storage.insert_batch(&[FrequencyRecord::new("fox", 1, false)]);
        storage.end_write().unwrap();
        assert!(storage.get("fox").unwrap().is_some());
    }

    #[test]
    fn test_window_lost_without_failed_statement_is_reported() {
        let mut storage = setup();
        storage.begin_write().unwrap();
        storage.insert_batch(&[FrequencyRecord::new("dog", 1, false)]);
        storage.conn.execute_batch("ROLLBACK").unwrap();

        assert!(storage.end_write().is_err());
    }

    #[test]
    fn test_full_database_never_reports_lost_inserts() {
        let mut storage = setup();
        let pages: i64 = storage
            .conn
            .query_row("PRAGMA page_count", [], |row| row.get(0))
            .unwrap();
        let _: i64 = storage
            .conn
            .query_row(&format!("PRAGMA max_page_count = {}", pages + 3), [], |row| {
                row.get(0)
            })
            .unwrap();

        let records: Vec<FrequencyRecord> = (0..200)
            .map(|i| FrequencyRecord::new(format!("{i:03}{}", "x".repeat(300)), 1, false))
            .collect();

        storage.begin_write().unwrap();
        let failures = storage.insert_batch(&records);
        let committed = storage.end_write();
        let stored = storage.load_all().unwrap().len();

        assert!(!failures.is_empty());
        match committed {
            Ok(()) => assert_eq!(stored, records.len() - failures.len()),
            Err(_) => assert_eq!(stored, 0),
        }
    }

    #[test]
    fn test_reset() {
        let mut storage = setup();
        storage.insert_batch(&[FrequencyRecord::new("cat", 1, false)]);
        storage.reset().unwrap();
        assert!(storage.load_all().unwrap().is_empty());
        assert!(storage.is_initialized().unwrap());
    }

    #[test]
    fn test_stats() {
        let mut storage = setup();

        let stats = storage.stats().unwrap();
        assert_eq!(stats.word_count, 0);
        assert_eq!(stats.total_occurrences, 0);

        storage.insert_batch(&[
            FrequencyRecord::new("the", 10, true),
            FrequencyRecord::new("run", 5, false),
        ]);
        storage.set_learning("run", true).unwrap();

        let stats = storage.stats().unwrap();
        assert_eq!(stats.word_count, 2);
        assert_eq!(stats.total_occurrences, 15);
        assert_eq!(stats.stopword_count, 1);
        assert_eq!(stats.learning_count, 1);
        assert!(stats.db_size.is_none());
    }
}
