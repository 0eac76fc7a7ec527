//! Binary tests for the `vocab-rs` command.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Builds a command pointed at a database inside `dir`.
fn vocab(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("vocab-rs").expect("binary built");
    cmd.env("VOCAB_DB_PATH", dir.join("vocab.db"))
        .env_remove("VOCAB_STOPWORDS")
        .current_dir(dir);
    cmd
}

fn init(dir: &Path) {
    vocab(dir).arg("init").assert().success();
}

fn article(dir: &Path, name: &str, text: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, text).expect("write article");
    path
}

#[test]
fn test_init_then_status() {
    let temp = TempDir::new().expect("temp dir");
    vocab(temp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized vocabulary database"));

    vocab(temp.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Words:         0"));
}

#[test]
fn test_status_before_init_fails() {
    let temp = TempDir::new().expect("temp dir");
    vocab(temp.path())
        .arg("status")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not initialized"));
}

#[test]
fn test_json_error_on_stdout() {
    let temp = TempDir::new().expect("temp dir");
    vocab(temp.path())
        .args(["--format", "json", "status"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"error\""));
}

#[test]
fn test_unknown_format_fails() {
    let temp = TempDir::new().expect("temp dir");
    init(temp.path());
    vocab(temp.path())
        .args(["--format", "yaml", "status"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown output format"));
}

#[test]
fn test_ingest_and_query() {
    let temp = TempDir::new().expect("temp dir");
    init(temp.path());
    let file = article(
        temp.path(),
        "post.md",
        "# Rivers\n\nThe river flows. The river floods.\nRiver banks, river mouths.",
    );

    vocab(temp.path())
        .arg("ingest")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Ingested 1 file(s)"));

    vocab(temp.path())
        .args(["query", "--threshold", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("river"))
        .stdout(predicate::str::contains("the ").not());
}

#[test]
fn test_ingest_missing_file_fails() {
    let temp = TempDir::new().expect("temp dir");
    init(temp.path());
    vocab(temp.path())
        .args(["ingest", "missing.md"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.md"));
}

#[test]
fn test_tokenize_prints_counts() {
    let temp = TempDir::new().expect("temp dir");
    let file = article(temp.path(), "post.md", "Cat **cat** dog 42");
    vocab(temp.path())
        .arg("tokenize")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("cat\t2\ndog\t1\n"));
}

#[test]
fn test_classify_with_overrides_from_env() {
    let temp = TempDir::new().expect("temp dir");
    let overrides = article(temp.path(), "stop.txt", "rust\n!github\n");
    vocab(temp.path())
        .env("VOCAB_STOPWORDS", &overrides)
        .args(["classify", "rust", "github"])
        .assert()
        .success()
        .stdout("rust: stopword\ngithub: word\n");
}

#[test]
fn test_reset_requires_yes() {
    let temp = TempDir::new().expect("temp dir");
    init(temp.path());
    vocab(temp.path()).arg("reset").assert().failure();
    vocab(temp.path())
        .args(["reset", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("reset successfully"));
}

#[test]
fn test_verbose_logs_to_stderr() {
    let temp = TempDir::new().expect("temp dir");
    vocab(temp.path())
        .args(["--verbose", "init"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty().not());
}
