//! CLI binary smoke tests using assert_cmd.
//!
//! These tests run the compiled `discrim` binary to check argument parsing,
//! output routing and exit codes end-to-end.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

const LABELLED: &str = "\
label,noise,signal,flat
a,0.3,1.0,2.0
a,0.9,1.1,2.0
a,0.5,0.9,2.0
b,0.4,3.0,2.0
b,0.8,3.2,2.0
b,0.2,2.9,2.0
";

const UNLABELLED: &str = "\
noise,signal,flat
0.3,1.0,2.0
0.9,1.1,2.0
0.5,0.9,2.0
0.4,3.0,2.0
0.8,3.2,2.0
0.2,2.9,2.0
";

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("discrim").unwrap();
    cmd.env_remove("DISCRIM_LOG");
    cmd
}

fn write_table(dir: &Path, name: &str, content: &str) -> String {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path.to_str().unwrap().to_string()
}

// ---------------------------------------------------------------------------
// Top-level
// ---------------------------------------------------------------------------

#[test]
fn no_args_shows_help() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn help_flag() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("select"))
        .stdout(predicate::str::contains("rank"));
}

#[test]
fn version_flag() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("discrim"));
}

// ---------------------------------------------------------------------------
// select
// ---------------------------------------------------------------------------

#[test]
fn select_to_stdout_with_label_column() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_table(dir.path(), "data.csv", LABELLED);

    cmd()
        .args(["select", "-d", &data, "-l", "label", "-k", "1"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("signal\n1\n"))
        .stdout(predicate::str::contains("noise").not());
}

#[test]
fn select_splits_class_sizes_on_comma() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_table(dir.path(), "data.csv", UNLABELLED);

    cmd()
        .args(["select", "-d", &data, "--class-sizes", "3,3", "-k", "2"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("signal,noise\n"));
}

#[test]
fn select_writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_table(dir.path(), "data.csv", LABELLED);
    let out = dir.path().join("reduced.tsv");

    cmd()
        .args(["select", "-d", &data, "-l", "label", "-k", "2"])
        .args(["-o", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = std::fs::read_to_string(&out).unwrap();
    assert!(written.starts_with("signal\tnoise\n"));
    assert_eq!(written.lines().count(), 7);
}

#[test]
fn select_accepts_every_method_spelling() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_table(dir.path(), "data.csv", LABELLED);

    for method in ["fisher", "correlation", "correlation_with_class", "t_test", "t-test", "ttest"] {
        cmd()
            .args(["select", "-d", &data, "-l", "label", "-k", "1", "-m", method])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("signal\n"));
    }
}

#[test]
fn select_unknown_method_errors() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_table(dir.path(), "data.csv", LABELLED);

    cmd()
        .args(["select", "-d", &data, "-l", "label", "-m", "anova"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown scoring method"));
}

#[test]
fn select_compare_reports_on_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_table(dir.path(), "data.csv", LABELLED);

    cmd()
        .args(["select", "-d", &data, "-l", "label", "-k", "1", "--compare"])
        .assert()
        .success()
        .stderr(predicate::str::contains("correlation_with_class"))
        .stderr(predicate::str::contains("signal="))
        .stdout(predicate::str::contains("signal=").not());
}

#[test]
fn select_zero_features_prints_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_table(dir.path(), "data.csv", LABELLED);

    cmd()
        .args(["select", "-d", &data, "-l", "label", "-k", "0"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn select_negative_k_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_table(dir.path(), "data.csv", LABELLED);

    cmd()
        .args(["select", "-d", &data, "-l", "label", "-k", "-1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("non-negative"));
}

#[test]
fn select_size_mismatch_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_table(dir.path(), "data.csv", UNLABELLED);

    cmd()
        .args(["select", "-d", &data, "-c", "2,2"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Selection failed"));
}

#[test]
fn select_without_sizes_or_labels_errors() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_table(dir.path(), "data.csv", UNLABELLED);

    cmd()
        .args(["select", "-d", &data])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--class-sizes"));
}

#[test]
fn select_nonexistent_data_errors() {
    cmd()
        .args(["select", "-d", "/nonexistent/data.csv", "-c", "3,3"])
        .assert()
        .failure();
}

#[test]
fn select_reads_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_table(dir.path(), "data.csv", UNLABELLED);
    let config = dir.path().join("select.json");
    let json = serde_json::json!({
        "data": data,
        "class_sizes": [3, 3],
        "method": "t_test",
        "num_features": 1
    });
    std::fs::write(&config, json.to_string()).unwrap();

    cmd()
        .args(["select", config.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("signal\n"));
}

// ---------------------------------------------------------------------------
// rank
// ---------------------------------------------------------------------------

#[test]
fn rank_lists_every_feature() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_table(dir.path(), "data.csv", LABELLED);

    cmd()
        .args(["rank", "-d", &data, "-l", "label", "-m", "correlation_with_class"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("rank,index,feature,score\n1,1,signal,"))
        .stdout(predicate::str::contains("3,2,flat,NaN"));
}
