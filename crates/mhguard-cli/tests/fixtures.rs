//! End-to-end CLI runs over the questionnaire fixtures.
//!
//! Each fixture directory in `tests/fixtures/` holds a `questionnaire.json`
//! or `questionnaire.toml` and, unless the run is expected to fail, an
//! `expected.json` with the exit code and a summary of the report.

use assert_cmd::Command;
use mhguard_test_util::{fixtures_dir, normalize_nondeterministic, summarize_report};
use predicates::prelude::*;
use serde_json::Value;
use std::path::PathBuf;
use tempfile::TempDir;

#[allow(deprecated)]
fn mhguard_cmd() -> Command {
    Command::cargo_bin("mhguard").expect("mhguard binary not found - run `cargo build` first")
}

fn questionnaire_path(fixture: &str) -> PathBuf {
    let dir = fixtures_dir().join(fixture);
    let json = dir.join("questionnaire.json");
    if json.exists() {
        json
    } else {
        dir.join("questionnaire.toml")
    }
}

fn run_fixture(fixture: &str) -> (i32, Value) {
    let temp_dir = TempDir::new().expect("create temp dir");
    let report_path = temp_dir.path().join("report.json");

    let output = mhguard_cmd()
        .arg("check")
        .arg(questionnaire_path(fixture))
        .arg("--report-out")
        .arg(&report_path)
        .arg("--quiet")
        .output()
        .expect("run mhguard");

    let exit_code = output.status.code().unwrap_or(-1);
    let text = std::fs::read_to_string(&report_path).expect("read report");
    let report: Value = serde_json::from_str(&text).expect("report json");
    (exit_code, report)
}

fn assert_fixture(fixture: &str) {
    let expected_text = std::fs::read_to_string(fixtures_dir().join(fixture).join("expected.json"))
        .expect("read expected.json");
    let mut expected: Value = serde_json::from_str(&expected_text).expect("expected json");
    let expected_code = expected["exit_code"].as_i64().expect("exit_code") as i32;
    expected
        .as_object_mut()
        .expect("expected.json is an object")
        .remove("exit_code");

    let (exit_code, report) = run_fixture(fixture);
    assert_eq!(exit_code, expected_code, "exit code for {fixture}");
    assert_eq!(summarize_report(&report), expected, "summary for {fixture}");
}

#[test]
fn fixture_no_health_info() {
    assert_fixture("no_health_info");
}

#[test]
fn fixture_consumer_tracker() {
    assert_fixture("consumer_tracker");
}

#[test]
fn fixture_provider_portal_toml() {
    assert_fixture("provider_portal");
}

#[test]
fn fixture_kids_recovery_device() {
    assert_fixture("kids_recovery_device");
}

#[test]
fn repeated_runs_are_identical_after_normalization() {
    let (_, first) = run_fixture("kids_recovery_device");
    let (_, second) = run_fixture("kids_recovery_device");
    assert_eq!(
        normalize_nondeterministic(first),
        normalize_nondeterministic(second)
    );
}

#[test]
fn missing_field_is_a_runtime_error() {
    mhguard_cmd()
        .arg("check")
        .arg(questionnaire_path("missing_field"))
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("mhguard error:"))
        .stderr(predicate::str::contains(
            "missing required questionnaire field: has_identifiable_health_info",
        ));
}

#[test]
fn unreadable_file_is_a_runtime_error() {
    mhguard_cmd()
        .arg("check")
        .arg(fixtures_dir().join("does_not_exist.json"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("read questionnaire"));
}

#[test]
fn set_overrides_the_file() {
    mhguard_cmd()
        .arg("check")
        .arg(questionnaire_path("no_health_info"))
        .args(["--set", "collects_health_info=true"])
        .args(["--set", "offers_substance_use_treatment=true"])
        .arg("--no-icons")
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "  - Opioid Addiction Recovery Fraud Prevention Act (OARFPA)",
        ));
}

#[test]
fn unknown_set_key_is_rejected() {
    mhguard_cmd()
        .arg("check")
        .arg(questionnaire_path("no_health_info"))
        .args(["--set", "is_teapot=true"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("is_teapot"));
}

#[test]
fn text_report_lists_laws_and_disclaimer() {
    mhguard_cmd()
        .arg("check")
        .arg(questionnaire_path("provider_portal"))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "MOBILE HEALTH APP COMPLIANCE ASSESSMENT REPORT",
        ))
        .stdout(predicate::str::contains("✓ HIPAA Rules"))
        .stdout(predicate::str::contains("    • "))
        .stdout(predicate::str::contains("DISCLAIMER:"))
        .stdout(predicate::str::contains("CRITICAL WARNINGS").not());
}

#[test]
fn gate_only_report_uses_fallback_line() {
    mhguard_cmd()
        .arg("check")
        .arg(questionnaire_path("no_health_info"))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No specific health regulations identified",
        ));
}

#[test]
fn md_and_annotations_read_a_written_report() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let report_path = temp_dir.path().join("out").join("report.json");
    let md_path = temp_dir.path().join("comment.md");

    mhguard_cmd()
        .arg("check")
        .arg(questionnaire_path("kids_recovery_device"))
        .arg("--report-out")
        .arg(&report_path)
        .arg("--quiet")
        .assert()
        .code(1);

    mhguard_cmd()
        .arg("md")
        .arg("--report")
        .arg(&report_path)
        .arg("--output")
        .arg(&md_path)
        .assert()
        .success();
    let md = std::fs::read_to_string(&md_path).expect("read markdown");
    assert!(md.contains("Verdict: **ATTENTION**"));
    assert!(md.contains("## Critical warnings"));

    let output = mhguard_cmd()
        .arg("annotations")
        .arg("--report")
        .arg(&report_path)
        .args(["--max", "2"])
        .output()
        .expect("run mhguard annotations");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines.iter().all(|l| l.starts_with("::warning title=mhguard::")));
}

#[test]
fn md_rejects_non_report_json() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let bogus = temp_dir.path().join("bogus.json");
    std::fs::write(&bogus, r#"{ "schema": "something.else" }"#).expect("write");

    mhguard_cmd()
        .arg("md")
        .arg("--report")
        .arg(&bogus)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown report schema"));
}
