//! Integration tests for the wordladder CLI
//!
//! These tests run the wordladder binary against small word lists.

mod common;

use common::{wordladder, write_word_list};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

const CAT_DOG: &[&str] = &["cat", "cot", "cog", "dog", "dot"];

// ============================================================================
// Help and usage
// ============================================================================

#[test]
fn test_help_flag() {
    let dir = tempdir().unwrap();
    wordladder(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: wordladder"))
        .stdout(predicate::str::contains("ladder"))
        .stdout(predicate::str::contains("interactive"))
        .stdout(predicate::str::contains("stats"));
}

#[test]
fn test_unknown_command_exit_code_2() {
    let dir = tempdir().unwrap();
    wordladder(dir.path()).arg("nonexistent").assert().code(2);
}

#[test]
fn test_unknown_command_json_usage_error() {
    let dir = tempdir().unwrap();
    wordladder(dir.path())
        .args(["--format", "json", "nonexistent"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"usage_error\""));
}

#[test]
fn test_bad_ladder_args_json_usage_error() {
    let dir = tempdir().unwrap();
    wordladder(dir.path())
        .args(["--format=json", "ladder", "cat"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("\"code\":2"));
}

#[test]
fn test_latin1_word_list_still_loads() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("latin1.txt");
    fs::write(&path, b"hot caf\xe9 dot dog\n").unwrap();

    wordladder(dir.path())
        .args(["--format", "json", "--word-list"])
        .arg(&path)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"words\": 4"));
}

#[test]
fn test_missing_word_list_exit_code_3() {
    let dir = tempdir().unwrap();
    wordladder(dir.path())
        .current_dir(dir.path())
        .args(["ladder", "cat", "dog"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("word list not found"));
}

#[test]
fn test_missing_word_list_json_error() {
    let dir = tempdir().unwrap();
    wordladder(dir.path())
        .current_dir(dir.path())
        .args(["--format", "json", "ladder", "cat", "dog"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"type\":\"word_list_not_found\""));
}

// ============================================================================
// Ladder command
// ============================================================================

#[test]
fn test_ladder_success() {
    let dir = tempdir().unwrap();
    let list = write_word_list(dir.path(), CAT_DOG);

    wordladder(dir.path())
        .arg("--word-list")
        .arg(&list)
        .args(["ladder", "cat", "dog"])
        .assert()
        .success()
        .stdout("Successfully built ladder:\n- cat\n- cot\n- dot\n- dog\n");
}

#[test]
fn test_ladder_statuses() {
    let dir = tempdir().unwrap();
    let list = write_word_list(dir.path(), &["cat", "dog", "pig"]);

    let cases = [
        ("cat", "dog", "Cannot build a ladder with this word list!"),
        ("cat", "CAT", "They are the same word!"),
        ("emu", "dog", "START word not found in word list"),
        ("cat", "emu", "END word not found in word list!"),
    ];

    for (start, end, message) in cases {
        wordladder(dir.path())
            .arg("--word-list")
            .arg(&list)
            .args(["ladder", start, end])
            .assert()
            .success()
            .stdout(predicate::str::contains(message));
    }
}

#[test]
fn test_ladder_json() {
    let dir = tempdir().unwrap();
    let list = write_word_list(dir.path(), CAT_DOG);

    let output = wordladder(dir.path())
        .arg("--word-list")
        .arg(&list)
        .args(["--format", "json", "ladder", "Cat!", "dog"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["start"], "cat");
    assert_eq!(json["status"], "success");
    assert_eq!(json["code"], 0);
    assert_eq!(
        json["words"],
        serde_json::json!(["cat", "cot", "dot", "dog"])
    );
    assert_eq!(json["steps"].as_array().unwrap().len(), 3);
}

#[test]
fn test_word_list_from_env() {
    let dir = tempdir().unwrap();
    let list = write_word_list(dir.path(), CAT_DOG);

    wordladder(dir.path())
        .env("WORDLADDER_WORD_LIST", &list)
        .args(["ladder", "dog", "cat"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- dog"))
        .stdout(predicate::str::contains("- cat"));
}

#[test]
fn test_word_list_from_config() {
    let dir = tempdir().unwrap();
    let list = write_word_list(dir.path(), CAT_DOG);
    let config = dir.path().join("custom.toml");
    fs::write(
        &config,
        format!("word_list = {:?}\n", list.display().to_string()),
    )
    .unwrap();

    wordladder(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["ladder", "cat", "cog"])
        .assert()
        .success()
        .stdout("Successfully built ladder:\n- cat\n- cot\n- cog\n");
}

#[test]
fn test_default_word_list_in_working_directory() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("wordlist.txt"), "hot dot dog\n").unwrap();

    wordladder(dir.path())
        .current_dir(dir.path())
        .args(["ladder", "hot", "dog"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- hot\n- dot\n- dog"));
}

#[test]
fn test_invalid_config_exit_code_3() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("bad.toml");
    fs::write(&config, "dedupe_edges = [\n").unwrap();

    wordladder(dir.path())
        .arg("--config")
        .arg(&config)
        .arg("stats")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid config"));
}

// ============================================================================
// Interactive mode
// ============================================================================

#[test]
fn test_interactive_session() {
    let dir = tempdir().unwrap();
    let list = write_word_list(dir.path(), CAT_DOG);

    wordladder(dir.path())
        .arg("--word-list")
        .arg(&list)
        .arg("interactive")
        .write_stdin("cat\ndog\ncat\ncat\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter START word: "))
        .stdout(predicate::str::contains("- cat\n- cot\n- dot\n- dog"))
        .stdout(predicate::str::contains("They are the same word!"));
}

#[test]
fn test_no_command_runs_interactive() {
    let dir = tempdir().unwrap();
    let list = write_word_list(dir.path(), CAT_DOG);

    wordladder(dir.path())
        .arg("--word-list")
        .arg(&list)
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter nothing to exit."));
}

// ============================================================================
// Stats command
// ============================================================================

#[test]
fn test_stats_json() {
    let dir = tempdir().unwrap();
    let list = write_word_list(dir.path(), &["Cat", "cat", "cot", "1234"]);

    let output = wordladder(dir.path())
        .arg("--word-list")
        .arg(&list)
        .args(["--format", "json", "stats"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["words"], 2);
    assert_eq!(json["edges"], 2);
    assert_eq!(json["dedupe_edges"], true);
}

#[test]
fn test_stats_human() {
    let dir = tempdir().unwrap();
    let list = write_word_list(dir.path(), CAT_DOG);

    wordladder(dir.path())
        .arg("--word-list")
        .arg(&list)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Words: 5"))
        .stdout(predicate::str::contains("Edges: 10"));
}
