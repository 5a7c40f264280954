//! Integration test: `harness` binary end to end.
//!
//! Run: cargo test -p eztest-harness --test cli_run_test

use std::path::PathBuf;
use std::process::{Command, Output};

use eztest_harness::structured_log::validate_log_file;

fn harness(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_harness"))
        .args(args)
        .env_remove("EZTEST_CAPACITY")
        .env_remove("EZTEST_LOG")
        .env_remove("EZTEST_REPORT")
        .output()
        .expect("harness binary should execute")
}

fn scratch(name: &str) -> PathBuf {
    let dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("cli_run_test");
    std::fs::create_dir_all(&dir).expect("scratch dir");
    dir.join(name)
}

#[test]
fn run_prints_running_and_outcome_lines_in_order() {
    let output = harness(&["run"]);
    assert!(output.status.success(), "{output:?}");
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 10, "two lines per test:\n{stdout}");
    assert_eq!(lines[0], "Running test deg2rad_thirty...");
    assert_eq!(lines[1], "Test deg2rad_thirty passed!");
    assert_eq!(lines[8], "Running test pythagorean_identity...");
    assert_eq!(lines[9], "Test pythagorean_identity passed!");
}

#[test]
fn default_run_leaves_stderr_empty() {
    let output = harness(&["run"]);
    assert!(output.status.success());
    assert!(
        output.stderr.is_empty(),
        "unexpected stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn quiet_run_keeps_stdout_empty() {
    let output = harness(&["run", "--quiet"]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(output.stderr.is_empty());
}

#[test]
fn summary_flag_prints_totals_to_stderr() {
    let output = harness(&["run", "--quiet", "--summary"]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("total=5, passed=5, failed=0"), "{stderr}");
}

#[test]
fn capacity_limit_drops_late_registrations() {
    let output = harness(&["run", "--capacity", "2"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 4);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("Could not register test").count(), 3);
}

#[test]
fn bad_capacity_is_rejected_by_the_parser() {
    let output = harness(&["run", "--capacity", "plenty"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn list_honors_filter() {
    let output = harness(&["list", "--filter", "deg2rad"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.lines().collect::<Vec<_>>(),
        ["deg2rad_thirty", "deg2rad_sixty"]
    );
}

#[test]
fn log_and_report_are_written() {
    let log = scratch("run.jsonl");
    let report = scratch("report.md");
    let output = harness(&[
        "run",
        "--quiet",
        "--log",
        log.to_str().unwrap(),
        "--report",
        report.to_str().unwrap(),
    ]);
    assert!(output.status.success(), "{output:?}");

    let (valid, errors) = validate_log_file(&log).expect("log readable");
    assert!(errors.is_empty(), "{errors:?}");
    // run_start + 2 per test + run_complete
    assert_eq!(valid, 12);

    let markdown = std::fs::read_to_string(&report).expect("markdown report");
    assert!(markdown.contains("| 2 | sin_thirty_equals_cos_sixty | PASS |"));

    let json: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(report.with_extension("json")).expect("json report"),
    )
    .expect("valid json report");
    assert_eq!(json["summary"]["campaign"], "l2math");
    assert_eq!(json["summary"]["failed"], 0);
    assert_eq!(json["summary"]["results"].as_array().map(Vec::len), Some(5));
}

#[test]
fn env_supplies_log_path() {
    let log = scratch("env.jsonl");
    let _ = std::fs::remove_file(&log);
    let output = Command::new(env!("CARGO_BIN_EXE_harness"))
        .args(["run", "--quiet", "--filter", "sixty"])
        .env("EZTEST_LOG", &log)
        .env_remove("EZTEST_CAPACITY")
        .env_remove("EZTEST_REPORT")
        .output()
        .expect("harness binary should execute");
    assert!(output.status.success());

    let content = std::fs::read_to_string(&log).expect("log written via env");
    let names: Vec<String> = content
        .lines()
        .filter_map(|l| serde_json::from_str::<serde_json::Value>(l).ok())
        .filter(|v| v["event"] == "test_start")
        .filter_map(|v| v["test_name"].as_str().map(str::to_string))
        .collect();
    assert_eq!(names, ["deg2rad_sixty", "sin_thirty_equals_cos_sixty"]);
}

#[test]
fn json_named_report_keeps_markdown_and_json_apart() {
    let report = scratch("named.json");
    let twin = scratch("named.json.json");
    let _ = std::fs::remove_file(&twin);
    let output = harness(&["run", "--quiet", "--report", report.to_str().unwrap()]);
    assert!(output.status.success(), "{output:?}");

    let markdown = std::fs::read_to_string(&report).expect("markdown report");
    assert!(markdown.starts_with("# "), "{markdown}");

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&twin).expect("json twin"))
            .expect("valid json report");
    assert_eq!(json["summary"]["total"], 5);
}
