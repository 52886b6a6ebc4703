//! CLI integration tests
//!
//! These tests run the built `hardrules` binary and verify:
//! - filter: TSV/JSONL output, annotations, column selection, exit codes
//! - list: Output formats and configuration overrides
//! - init: Creates hardrules.toml, --force behavior
//!
//! Language identification is disabled in filter runs so verdicts do not
//! depend on the detector.

#[macro_use]
mod common;

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const CLEAN: &str = "The cat sat on the mat.\tEl gato se sentó en la alfombra.";

fn hardrules() -> Command {
    let mut cmd = Command::cargo_bin("hardrules").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

fn filter(dir: &TempDir) -> Command {
    let mut cmd = hardrules();
    cmd.current_dir(dir.path()).args([
        "-q",
        "filter",
        "-s",
        "en",
        "-t",
        "es",
        "--disable-lang-ident",
    ]);
    cmd
}

// ============================================================================
// FILTER COMMAND TESTS
// ============================================================================

#[test]
fn test_filter_stdin_to_stdout() {
    let dir = TempDir::new().unwrap();
    filter(&dir)
        .write_stdin(format!("{}\n\thola\n", CLEAN))
        .assert()
        .success()
        .stdout(format!("{}\t1\n\thola\t0\n", CLEAN));
}

#[test]
fn test_filter_annotated_output() {
    let dir = TempDir::new().unwrap();
    filter(&dir)
        .arg("--annotated-output")
        .write_stdin(format!("{}\n\thola\n", CLEAN))
        .assert()
        .success()
        .stdout(format!("{}\t1\tkeep\n\thola\t0\tno_empty(left)\n", CLEAN));
}

#[test]
fn test_filter_score_only_run_all_rules() {
    let dir = TempDir::new().unwrap();
    filter(&dir)
        .args(["--score-only", "--annotated-output", "--run-all-rules"])
        .write_stdin("Hello\tHello\n")
        .assert()
        .success()
        .stdout("0\tnot_too_short(left);not_too_short(right);no_identical(left,right)\n");
}

#[test]
fn test_filter_wrong_columns_exit_code() {
    let dir = TempDir::new().unwrap();
    filter(&dir)
        .arg("--annotated-output")
        .write_stdin(format!("only one column\n{}\n", CLEAN))
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("only one column\t0\tc_wrong_cols\n"))
        .stdout(predicate::str::contains(format!("{}\t1\tkeep", CLEAN)));
}

#[test]
fn test_filter_custom_columns() {
    let dir = TempDir::new().unwrap();
    filter(&dir)
        .args(["--scol", "2", "--tcol", "3", "--score-only"])
        .write_stdin(format!("id-1\t{}\n", CLEAN))
        .assert()
        .success()
        .stdout("1\n");
}

#[test]
fn test_filter_files_and_jsonl() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("corpus.tsv");
    let output = dir.path().join("scored.jsonl");
    fs::write(&input, format!("{}\n\thola\n", CLEAN)).unwrap();

    filter(&dir)
        .arg(&input)
        .arg(&output)
        .args(["-f", "jsonl", "-p", "2", "-b", "1"])
        .assert()
        .success();

    let content = fs::read_to_string(&output).unwrap();
    let lines: Vec<serde_json::Value> = content
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["keep"], true);
    assert_eq!(lines[1]["keep"], false);
    assert_eq!(lines[1]["reasons"][0], "no_empty(left)");
    assert_eq!(lines[1]["target"], "hola");
}

#[test]
fn test_filter_reads_config_from_directory() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("hardrules.toml"),
        "[hardrules]\nsource_lang = \"en\"\ntarget_lang = \"es\"\ndisable_lang_ident = true\n\n[rules]\nno_urls = true\n",
    )
    .unwrap();

    hardrules()
        .current_dir(dir.path())
        .args(["-q", "filter", "--score-only", "--annotated-output"])
        .write_stdin("Visit https://example.com for all the details.\tVisite https://example.com para todos los detalles.\n")
        .assert()
        .success()
        .stdout("0\tno_urls(left)\n");
}

#[test]
fn test_filter_missing_languages() {
    let dir = TempDir::new().unwrap();
    hardrules()
        .current_dir(dir.path())
        .args(["filter", "-s", "en"])
        .write_stdin(format!("{}\n", CLEAN))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("hardrules.target_lang"));
}

#[test]
fn test_filter_unknown_rule_in_config() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("hardrules.toml"), "[rules]\nno_emoji = true\n").unwrap();
    filter(&dir)
        .write_stdin(format!("{}\n", CLEAN))
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("no_emoji"));
}

#[test]
fn test_filter_toml_parse_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("hardrules.toml"), "[hardrules\n").unwrap();
    filter(&dir)
        .write_stdin(format!("{}\n", CLEAN))
        .assert()
        .code(3);
}

#[test]
fn test_filter_logfile() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("run.log");
    hardrules()
        .current_dir(dir.path())
        .arg("--logfile")
        .arg(&log)
        .args(["filter", "-s", "en", "-t", "es", "--disable-lang-ident"])
        .write_stdin(format!("{}\n", CLEAN))
        .assert()
        .success();

    let content = fs::read_to_string(&log).unwrap();
    assert!(content.contains("Scored 1 records"));
}

// ============================================================================
// LIST COMMAND TESTS
// ============================================================================

#[test]
fn test_list_human() {
    let dir = TempDir::new().unwrap();
    hardrules()
        .current_dir(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Rules (20 of 23 enabled):"))
        .stdout(predicate::str::contains(" 1. ✓ no_empty (per_side)"))
        .stdout(predicate::str::contains("23. ✓ lm_filter (paired)"));
}

#[test]
fn test_list_jsonl_with_config() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("custom.toml");
    fs::write(&config, "[rules]\nno_urls = true\nnot_too_long = 300\n").unwrap();

    let output = hardrules()
        .current_dir(dir.path())
        .args(["list", "-f", "jsonl", "--config"])
        .arg(&config)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let statuses: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(statuses.len(), 23);
    let urls = assert_some!(statuses.iter().find(|s| s["rule"] == "no_urls"));
    assert_eq!(urls["enabled"], true);
    let long = assert_some!(statuses.iter().find(|s| s["rule"] == "not_too_long"));
    assert_eq!(long["parameter"], 300);
}

// ============================================================================
// INIT COMMAND TESTS
// ============================================================================

#[test]
fn test_init_creates_config() {
    let dir = TempDir::new().unwrap();
    hardrules()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created hardrules.toml"));
    assert!(dir.path().join("hardrules.toml").exists());
}

#[test]
fn test_init_refuses_overwrite_without_force() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("hardrules.toml");
    fs::write(&path, "# mine\n").unwrap();

    hardrules()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--force"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "# mine\n");

    hardrules()
        .current_dir(dir.path())
        .args(["init", "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&path).unwrap().contains("[hardrules]"));
}
