//! E2E tests for the `relgraph` binary's offline commands:
//! `relgraph report`, `relgraph help`.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Test harness helpers
// ---------------------------------------------------------------------------

fn relgraph_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_relgraph"));
    cmd.env("RUST_LOG", "error");
    cmd.env_remove("PORT");
    cmd.env_remove("RELGRAPH_CENTRAL_NODES");
    cmd.env_remove("RELGRAPH_INCLUDE_DESCRIPTIONS");
    cmd.env_remove("RELGRAPH_MAX_RELATIONSHIPS");
    cmd
}

fn write_input(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("relationships.json");
    std::fs::write(&path, contents).expect("write input");
    path
}

fn stdout_lines(output: &std::process::Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

// ---------------------------------------------------------------------------
// report
// ---------------------------------------------------------------------------

#[test]
fn report_prints_statistics_block() {
    let dir = TempDir::new().unwrap();
    let path = write_input(
        dir.path(),
        r#"{"relationships": [["A","knows","B"],["B","knows","C"],["C","knows","A"]]}"#,
    );

    let output = relgraph_cmd()
        .arg("report")
        .arg(&path)
        .output()
        .expect("report should not crash");
    assert!(
        output.status.success(),
        "report failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let lines = stdout_lines(&output);
    assert!(lines.contains(&"== Graph Statistics ==".to_string()));
    assert!(lines.contains(&"Number of nodes: 3".to_string()));
    assert!(lines.contains(&"Number of edges: 3".to_string()));
    assert!(lines.contains(&"Number of connected components: 1".to_string()));
    assert!(lines.contains(&"  A: 0.5000".to_string()));
}

#[test]
fn report_without_descriptions() {
    let dir = TempDir::new().unwrap();
    let path = write_input(
        dir.path(),
        r#"{"relationships": [["A","rel","B"]], "descriptions": {"A": "root node"}}"#,
    );

    relgraph_cmd()
        .arg("report")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Description: root node"));

    relgraph_cmd()
        .arg("report")
        .arg(&path)
        .arg("--no-descriptions")
        .assert()
        .success()
        .stdout(predicate::str::contains("Description").not());
}

#[test]
fn report_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    relgraph_cmd()
        .arg("report")
        .arg(dir.path().join("nope.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("IO error"));
}

#[test]
fn report_without_path_prints_usage() {
    relgraph_cmd()
        .arg("report")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage: relgraph report"));
}

// ---------------------------------------------------------------------------
// help / unknown
// ---------------------------------------------------------------------------

#[test]
fn help_lists_commands() {
    relgraph_cmd()
        .arg("help")
        .assert()
        .success()
        .stdout(predicate::str::contains("report <file.json>"));
}

#[test]
fn unknown_command_fails() {
    relgraph_cmd()
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown command"));
}

#[test]
fn help_ignores_invalid_config() {
    relgraph_cmd()
        .env("PORT", "not-a-port")
        .arg("help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: relgraph"));
}

#[test]
fn report_rejects_invalid_config() {
    let dir = TempDir::new().unwrap();
    let path = write_input(dir.path(), r#"[["A","rel","B"]]"#);
    relgraph_cmd()
        .env("RELGRAPH_CENTRAL_NODES", "many")
        .arg("report")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("RELGRAPH_CENTRAL_NODES"));
}
