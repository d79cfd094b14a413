//! CLI integration tests for all subcommands.
//!
//! Uses `assert_cmd` to spawn the `lineboard` binary and verify
//! exit codes, stdout content, and stderr content.
//!
//! Most tests set `current_dir` to the workspace root so that relative
//! paths to the JSON fixtures resolve correctly.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Locate the workspace root by walking up from CARGO_MANIFEST_DIR.
fn workspace_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    // crates/cli -> workspace root is two levels up
    manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .expect("workspace root")
        .to_path_buf()
}

fn fixture(name: &str) -> PathBuf {
    workspace_root().join("fixtures").join(name)
}

/// Helper: create a Command for the `lineboard` binary, rooted at workspace.
fn lineboard() -> Command {
    let mut cmd = cargo_bin_cmd!("lineboard");
    cmd.current_dir(workspace_root());
    cmd.env_remove("LINEBOARD_LOG");
    cmd
}

/// Run with `--output json` and parse stdout.
fn json_output(args: &[&str]) -> serde_json::Value {
    let out = lineboard()
        .args(["--output", "json"])
        .args(args)
        .output()
        .expect("run lineboard");
    assert!(
        out.status.success(),
        "lineboard {:?} failed: {}",
        args,
        String::from_utf8_lossy(&out.stderr)
    );
    serde_json::from_slice(&out.stdout).expect("stdout is JSON")
}

// ──────────────────────────────────────────────
// 1. Help and version
// ──────────────────────────────────────────────

#[test]
fn help_exits_0_with_description() {
    lineboard()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Service-line health and touchpoint attribution reporting",
        ));
}

#[test]
fn version_exits_0() {
    lineboard()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("lineboard"));
}

// ──────────────────────────────────────────────
// 2. Rollup and health
// ──────────────────────────────────────────────

#[test]
fn rollup_text() {
    lineboard()
        .args(["rollup", "fixtures/service_line.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Customer Onboarding"))
        .stdout(predicate::str::contains("Actual hours:   57.50"))
        .stdout(predicate::str::contains("(15.00%)"))
        .stdout(predicate::str::contains("Overall status: AMBER"));
}

#[test]
fn rollup_json() {
    let rollup = json_output(&["rollup", "fixtures/service_line.json"]);
    assert_eq!(rollup["overall_rag"], "amber");
    assert_eq!(rollup["total_stations"], 4);
    assert_eq!(rollup["stations_at_standard"], 4);
    assert_eq!(rollup["avg_qa_score"], 7.5);
}

#[test]
fn health_json_marks_override() {
    let stations = json_output(&["health", "fixtures/service_line.json"]);
    let stations = stations.as_array().expect("array");
    assert_eq!(stations.len(), 4);
    let review = &stations[2];
    assert_eq!(review["station_id"], "review");
    assert_eq!(review["overridden"], true);
    assert_eq!(review["computed_rag"], "red");
    assert_eq!(review["effective_rag"], "amber");
}

#[test]
fn health_text_notes_manual_status() {
    lineboard()
        .args(["health", "fixtures/service_line.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(set manually; metrics compute red)"));
}

// ──────────────────────────────────────────────
// 3. Scenario
// ──────────────────────────────────────────────

#[test]
fn scenario_text_lists_status_changes() {
    lineboard()
        .args([
            "scenario",
            "fixtures/service_line.json",
            "--scenario",
            "fixtures/scenario.json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("With scenario:"))
        .stdout(predicate::str::contains("triage: AMBER -> GREEN"));
}

#[test]
fn scenario_json_has_both_rollups() {
    let value = json_output(&[
        "scenario",
        "fixtures/service_line.json",
        "--scenario",
        "fixtures/scenario.json",
    ]);
    assert_eq!(value["baseline_rollup"]["total_actual_hrs"], 57.5);
    assert_eq!(value["rollup"]["total_actual_hrs"], 50.5);
    let triage = &value["service_line"]["nodes"][1]["metrics"]["fair_pricing"];
    assert_eq!(triage["actual_hrs"], 20.0);
    assert_eq!(triage["labor_variance"], 0.0);
}

// ──────────────────────────────────────────────
// 4. Paths
// ──────────────────────────────────────────────

#[test]
fn paths_text_ranked() {
    lineboard()
        .args([
            "paths",
            "fixtures/service_line.json",
            "--from",
            "intake",
            "--to",
            "ship",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("(3 found)"))
        .stdout(predicate::str::contains(
            "1. intake -> review -> ship  (weight 3.50)",
        ));
}

#[test]
fn paths_json_capped() {
    let search = json_output(&[
        "paths",
        "fixtures/service_line.json",
        "--from",
        "intake",
        "--to",
        "ship",
        "--max-paths",
        "1",
    ]);
    assert_eq!(search["truncated"], true);
    assert_eq!(search["paths"].as_array().map(Vec::len), Some(1));
    // first arrival in discovery order, not the cheapest route overall
    assert_eq!(search["paths"][0]["total_weight"], 5.0);
    assert_eq!(
        search["paths"][0]["path"],
        serde_json::json!(["intake", "triage", "ship"])
    );
}

#[test]
fn paths_text_capped_marks_partial_ranking() {
    lineboard()
        .args([
            "paths",
            "fixtures/service_line.json",
            "--from",
            "intake",
            "--to",
            "ship",
            "--max-paths",
            "1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. intake -> triage -> ship"))
        .stdout(predicate::str::contains(
            "(truncated at 1 paths; ranking covers found paths only)",
        ));
}

#[test]
fn paths_without_route_succeed() {
    lineboard()
        .args([
            "paths",
            "fixtures/service_line.json",
            "--from",
            "ship",
            "--to",
            "intake",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No path from ship to intake"));
}

#[test]
fn paths_unknown_station_exits_1() {
    lineboard()
        .args([
            "paths",
            "fixtures/service_line.json",
            "--from",
            "intake",
            "--to",
            "nowhere",
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("has no station 'nowhere'"));
}

// ──────────────────────────────────────────────
// 5. Report
// ──────────────────────────────────────────────

#[test]
fn report_text_lists_findings() {
    lineboard()
        .args(["report", "fixtures/service_line.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Findings:"))
        .stdout(predicate::str::contains(
            "[INFO] Station 'review' is set to amber but its metrics compute red",
        ));
}

#[test]
fn report_with_scenario_and_route() {
    let report = json_output(&[
        "report",
        "fixtures/service_line.json",
        "--scenario",
        "fixtures/scenario.json",
        "--from",
        "intake",
        "--to",
        "ship",
    ]);
    assert_eq!(report["scenario_applied"], true);
    assert_eq!(report["baseline_rollup"]["total_actual_hrs"], 57.5);
    assert_eq!(report["route"]["paths"].as_array().map(Vec::len), Some(3));
}

#[test]
fn report_unknown_station_exits_1() {
    lineboard()
        .args([
            "report",
            "fixtures/service_line.json",
            "--from",
            "intake",
            "--to",
            "warehouse",
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("analysis error"));
}

// ──────────────────────────────────────────────
// 6. Attribution
// ──────────────────────────────────────────────

#[test]
fn insights_text() {
    lineboard()
        .args(["insights", "fixtures/attribution_edges.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Best path:     search -> listing -> cart -> checkout",
        ))
        .stdout(predicate::str::contains("Bridge:        listing"));
}

#[test]
fn insights_json_with_gaps() {
    let insights = json_output(&[
        "insights",
        "fixtures/attribution_edges.json",
        "--gaps",
        "fixtures/gaps.json",
        "--max-depth",
        "1",
    ]);
    assert_eq!(
        insights["highest_click_through_path"],
        serde_json::json!(["search", "listing"])
    );
    let gaps = insights["gap_opportunities"].as_array().expect("gaps");
    assert_eq!(gaps.len(), 3);
    assert_eq!(gaps[0]["touchpoint_id"], "tp-desks");
    assert_eq!(gaps[1]["gap_score"], 0.85);
    assert_eq!(gaps[1]["category"], "lighting");
}

#[test]
fn trends_json() {
    let trends = json_output(&["trends", "fixtures/snapshots.json"]);
    let trends = trends.as_array().expect("array");
    let keys: Vec<&str> = trends.iter().filter_map(|t| t["key"].as_str()).collect();
    assert_eq!(keys, vec!["listing→cart", "search→listing", "social→listing"]);
    assert_eq!(
        trends[1]["periods"],
        serde_json::json!(["2024-05", "2024-06"])
    );
    assert_eq!(trends[1]["average_click_through_rate"], 0.31);
    assert_eq!(trends[1]["total_users_flowed"], 750.0);
}

// ──────────────────────────────────────────────
// 7. Errors and output modes
// ──────────────────────────────────────────────

#[test]
fn missing_input_exits_1() {
    lineboard()
        .args(["rollup", "fixtures/does_not_exist.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "could not read service line file 'fixtures/does_not_exist.json'",
        ));
}

#[test]
fn directory_input_reports_io_error() {
    let dir = TempDir::new().unwrap();
    lineboard()
        .args(["rollup", dir.path().to_str().unwrap()])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("could not read service line file"))
        .stderr(predicate::str::contains("not found").not());
}

#[test]
fn invalid_json_exits_1() {
    let dir = TempDir::new().expect("temp dir");
    let bad = dir.path().join("line.json");
    fs::write(&bad, "{ \"id\": ").expect("write");

    lineboard()
        .args(["rollup", bad.to_str().expect("utf-8 path")])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid JSON"));
}

#[test]
fn json_errors_are_objects() {
    let out = lineboard()
        .args(["--output", "json", "rollup", "fixtures/does_not_exist.json"])
        .output()
        .expect("run lineboard");
    assert_eq!(out.status.code(), Some(1));
    let err: serde_json::Value = serde_json::from_slice(&out.stderr).expect("stderr is JSON");
    assert!(err["error"]
        .as_str()
        .is_some_and(|m| m.contains("not found")));
}

#[test]
fn quiet_suppresses_output() {
    lineboard()
        .args(["--quiet", "rollup", "fixtures/service_line.json"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    lineboard()
        .args(["--quiet", "rollup", "fixtures/does_not_exist.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::is_empty());
}

#[test]
fn verbose_logs_to_stderr_only() {
    let out = lineboard()
        .args(["--verbose", "--output", "json", "rollup", "fixtures/service_line.json"])
        .output()
        .expect("run lineboard");
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("computed service line rollup"));
    let _: serde_json::Value = serde_json::from_slice(&out.stdout).expect("stdout is JSON");
}

// ──────────────────────────────────────────────
// 8. Config file
// ──────────────────────────────────────────────

#[test]
fn config_sets_output_and_cap() {
    let dir = TempDir::new().expect("temp dir");
    let config = dir.path().join("custom.toml");
    fs::write(&config, "[output]\nformat = \"json\"\n\n[paths]\nmax_paths = 2\n").expect("write");

    let out = lineboard()
        .args(["--config", config.to_str().expect("utf-8 path")])
        .args([
            "paths",
            "fixtures/service_line.json",
            "--from",
            "intake",
            "--to",
            "ship",
        ])
        .output()
        .expect("run lineboard");
    assert!(out.status.success());
    let search: serde_json::Value = serde_json::from_slice(&out.stdout).expect("JSON");
    assert_eq!(search["truncated"], true);
    assert_eq!(search["paths"].as_array().map(Vec::len), Some(2));
}

#[test]
fn flags_override_config() {
    let dir = TempDir::new().expect("temp dir");
    let config = dir.path().join("custom.toml");
    fs::write(&config, "[output]\nformat = \"json\"\n").expect("write");

    lineboard()
        .args(["--config", config.to_str().expect("utf-8 path")])
        .args(["--output", "text", "rollup", "fixtures/service_line.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Overall status: AMBER"));
}

#[test]
fn config_found_in_working_directory() {
    let dir = TempDir::new().expect("temp dir");
    fs::write(dir.path().join("lineboard.toml"), "[attribution]\nmax_depth = 1\n")
        .expect("write");
    let edges = fixture("attribution_edges.json");

    let out = cargo_bin_cmd!("lineboard")
        .current_dir(dir.path())
        .args(["--output", "json", "insights"])
        .arg(&edges)
        .output()
        .expect("run lineboard");
    assert!(out.status.success());
    let insights: serde_json::Value = serde_json::from_slice(&out.stdout).expect("JSON");
    assert_eq!(
        insights["highest_click_through_path"],
        serde_json::json!(["search", "listing"])
    );
}

#[test]
fn malformed_config_exits_1() {
    let dir = TempDir::new().expect("temp dir");
    let config = dir.path().join("bad.toml");
    fs::write(&config, "[paths]\nmax_paths = \"many\"\n").expect("write");

    lineboard()
        .args(["--config", config.to_str().expect("utf-8 path")])
        .args(["rollup", "fixtures/service_line.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("could not parse"));
}
