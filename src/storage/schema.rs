//! Database schema definitions.
//!
//! Contains SQL schema and migration logic for the vocabulary `SQLite`
//! database.

/// Current schema version.
pub const CURRENT_SCHEMA_VERSION: u32 = 2;

/// SQL schema for initial database setup.
pub const SCHEMA_SQL: &str = r"
-- Schema version tracking
CREATE TABLE IF NOT EXISTS schema_info (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
);

-- Aggregated word frequencies
CREATE TABLE IF NOT EXISTS vocabulary (
    word TEXT PRIMARY KEY NOT NULL,
    count INTEGER NOT NULL CHECK (count >= 1),
    is_stopword INTEGER NOT NULL DEFAULT 0,
    learning INTEGER NOT NULL DEFAULT 0,
    created_at INTEGER NOT NULL,
    updated_at INTEGER NOT NULL
);

-- Index for threshold queries
CREATE INDEX IF NOT EXISTS idx_vocabulary_count ON vocabulary(count, word);

-- Index for the learning list
CREATE INDEX IF NOT EXISTS idx_vocabulary_learning ON vocabulary(learning);
";

/// SQL to check if schema is initialized.
pub const CHECK_SCHEMA_SQL: &str = r"
SELECT COUNT(*) FROM sqlite_master
WHERE type='table' AND name='schema_info';
";

/// SQL to get schema version.
pub const GET_VERSION_SQL: &str = r"
SELECT value FROM schema_info WHERE key = 'version';
";

/// SQL to set schema version.
pub const SET_VERSION_SQL: &str = r"
INSERT OR REPLACE INTO schema_info (key, value) VALUES ('version', ?);
";

/// Migrations from older schema versions.
pub struct Migration {
    /// Version this migration upgrades from.
    pub from_version: u32,
    /// Version this migration upgrades to.
    pub to_version: u32,
    /// SQL statements to execute.
    pub sql: &'static str,
}

/// SQL for v1 to v2 migration (adds the learning flag and query indexes).
const MIGRATION_V1_TO_V2: &str = r"
ALTER TABLE vocabulary ADD COLUMN learning INTEGER NOT NULL DEFAULT 0;
CREATE INDEX IF NOT EXISTS idx_vocabulary_count ON vocabulary(count, word);
CREATE INDEX IF NOT EXISTS idx_vocabulary_learning ON vocabulary(learning);
";

/// Available migrations.
pub const MIGRATIONS: &[Migration] = &[Migration {
    from_version: 1,
    to_version: 2,
    sql: MIGRATION_V1_TO_V2,
}];

/// Gets migrations needed to upgrade from a version.
#[must_use]
pub fn get_migrations_from(current_version: u32) -> Vec<&'static Migration> {
    MIGRATIONS
        .iter()
        .filter(|m| m.from_version >= current_version && m.to_version <= CURRENT_SCHEMA_VERSION)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_sql_not_empty() {
        assert!(SCHEMA_SQL.contains("CREATE TABLE IF NOT EXISTS vocabulary"));
    }

    #[test]
    fn test_migrations_ordered() {
        for migration in MIGRATIONS {
            assert!(migration.to_version > migration.from_version);
            assert!(migration.to_version <= CURRENT_SCHEMA_VERSION);
        }
    }

    #[test]
    fn test_get_migrations_from() {
        assert_eq!(get_migrations_from(1).len(), 1);
        assert!(get_migrations_from(CURRENT_SCHEMA_VERSION).is_empty());
    }
}
