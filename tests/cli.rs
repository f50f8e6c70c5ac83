//! CLI behavior tests: exit codes, output formats, export.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

const FIXTURE: &str = "tests/fixtures/responses.csv";
const INVALID: &str = "tests/fixtures/invalid.csv";
const EMPTY: &str = "tests/fixtures/empty.csv";

fn sus_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_sus_scorer"));
    cmd.env_remove("SUS_CONFIG").env_remove("LOG_FILE_PATH");
    cmd
}

#[test]
fn no_args_returns_usage_error() {
    sus_cmd().assert().failure().code(2);
}

#[test]
fn score_prints_users_and_interpretation() {
    sus_cmd()
        .arg("score")
        .arg(FIXTURE)
        .assert()
        .success()
        .stdout(predicate::str::contains("User 1\t55.00"))
        .stdout(predicate::str::contains("User 4\t75.00"))
        .stdout(predicate::str::contains("SUS Score: 70.00"))
        .stdout(predicate::str::contains("Grade: B"));
}

#[test]
fn score_single_user() {
    sus_cmd()
        .args(["score", FIXTURE, "--user", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("User 1\t100.00"))
        .stdout(predicate::str::contains("Adjective Rating: Excellent"));
}

#[test]
fn invalid_row_aborts_by_default() {
    sus_cmd()
        .args(["score", INVALID])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("row 2, field Q2"));
}

#[test]
fn invalid_row_skip_policy() {
    sus_cmd()
        .args(["report", INVALID, "--on-invalid-row", "skip"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SUS Score: 75.00"))
        .stdout(predicate::str::contains("Skipped rows: 1"));
}

#[test]
fn empty_upload_fails() {
    sus_cmd()
        .args(["report", EMPTY])
        .assert()
        .failure()
        .stderr(predicate::str::contains("empty score set"));
}

#[test]
fn report_json_output_valid() {
    let output = sus_cmd()
        .args(["report", FIXTURE, "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let s = String::from_utf8_lossy(&output.stdout);
    let value: serde_json::Value = serde_json::from_str(s.trim()).expect("valid JSON");
    assert_eq!(value["summary"]["median"], 65.0);
    assert_eq!(value["questions"].as_array().unwrap().len(), 10);
}

#[test]
fn report_include_median() {
    sus_cmd()
        .args(["report", FIXTURE, "--include-median"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Median Scores:"));
}

#[test]
fn compact_preset_changes_labels() {
    sus_cmd()
        .args(["report", FIXTURE, "--preset", "compact", "--user", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Adjective Rating: Okay"));
}

#[test]
fn config_file_sets_policy() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("sus.json");
    fs::write(&config, r#"{"on_invalid_row": "coerce"}"#).unwrap();

    sus_cmd()
        .args(["score", INVALID, "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("User 2\t72.50"));
}

#[test]
fn export_writes_table() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("SUS_Data.csv");

    sus_cmd()
        .args(["export", FIXTURE, "-o"])
        .arg(&out)
        .assert()
        .success();

    let content = fs::read_to_string(&out).unwrap();
    let lines: Vec<_> = content.lines().collect();
    assert_eq!(lines.len(), 6);
    assert!(lines[5].starts_with("Average,"));
    assert!(lines[5].ends_with(",70.00"));
}

#[test]
fn missing_file_fails() {
    sus_cmd()
        .args(["score", "tests/fixtures/nope.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open"));
}

#[test]
fn rust_log_controls_stderr_level() {
    sus_cmd()
        .env("RUST_LOG", "error")
        .args(["score", FIXTURE])
        .assert()
        .success()
        .stderr(predicate::str::contains("Scored responses").not());

    sus_cmd()
        .env("RUST_LOG", "debug")
        .args(["score", FIXTURE])
        .assert()
        .success()
        .stderr(predicate::str::contains("Computed SUS scores"));
}

#[test]
fn single_user_keeps_skipped_rows_note() {
    sus_cmd()
        .args(["report", INVALID, "--on-invalid-row", "skip", "--user", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SUS Score: 50.00"))
        .stdout(predicate::str::contains("Skipped rows: 1"));
}

#[test]
fn export_gzip_writes_compressed_table() {
    use flate2::read::GzDecoder;
    use std::io::Read;

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("SUS_Data.csv");

    sus_cmd()
        .args(["export", FIXTURE, "--gzip", "-o"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("SUS_Data.csv.gz"));

    let gz = dir.path().join("SUS_Data.csv.gz");
    assert!(!out.exists());
    let mut content = String::new();
    GzDecoder::new(fs::File::open(&gz).unwrap())
        .read_to_string(&mut content)
        .unwrap();
    assert!(content.starts_with("User,Q1"));
    assert!(content.lines().last().unwrap().ends_with(",70.00"));
}

#[test]
fn report_text_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("report.txt");

    sus_cmd()
        .args(["report", FIXTURE, "--include-median", "-o"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.starts_with("SUS Analysis Report"));
    assert!(content.contains("SUS Score: 70.00"));
    assert!(content.contains("Median Scores:"));
}

#[test]
fn report_json_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("report.json");

    sus_cmd()
        .args(["report", FIXTURE, "--json", "-o"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).expect("valid JSON");
    assert_eq!(value["respondents"], 4);
    assert_eq!(value["summary"]["rating"]["adjective"], "Good");
}
