//! CLI integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use surebet::testkit::config::{NATIVE_SNAPSHOT, ODDS_API_SNAPSHOT};

fn surebet() -> Command {
    cargo_bin_cmd!("surebet")
}

/// Temp dir holding `odds.json`; `-c` points at a config that does not exist,
/// so every run uses defaults regardless of the home directory.
struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn with_snapshot(content: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("odds.json"), content).unwrap();
        Self { dir }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn snapshot(&self) -> PathBuf {
        self.path("odds.json")
    }

    fn config(&self) -> PathBuf {
        self.path("absent.toml")
    }
}

fn arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn test_help() {
    surebet()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("surebet"))
        .stdout(predicate::str::contains("scan"))
        .stdout(predicate::str::contains("watch"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_version() {
    surebet()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("surebet"));
}

#[test]
fn test_scan_requires_snapshot() {
    surebet().arg("scan").assert().failure();
}

#[test]
fn test_scan_prints_table() {
    let ws = Workspace::with_snapshot(NATIVE_SNAPSHOT);

    surebet()
        .args(["scan", arg(&ws.snapshot()), "-c", arg(&ws.config())])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 1 opportunities"))
        .stdout(predicate::str::contains("TeamA vs TeamB"))
        .stdout(predicate::str::contains("49.40"))
        .stdout(predicate::str::contains("50.60"))
        .stdout(predicate::str::contains("3.73"));
}

#[test]
fn test_scan_json() {
    let ws = Workspace::with_snapshot(NATIVE_SNAPSHOT);

    let output = surebet()
        .args(["--json", "scan", arg(&ws.snapshot()), "-c", arg(&ws.config())])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["command"], "scan");
    assert_eq!(value["total_stake"], "100");
    let opportunities = value["opportunities"].as_array().unwrap();
    assert_eq!(opportunities.len(), 1);
    assert_eq!(opportunities[0]["profit_margin_percent"], "3.60");
    assert_eq!(opportunities[0]["legs"][1]["stake"], "50.60");
    assert_eq!(value["tally"]["no_arbitrage"], 1);
}

#[test]
fn test_scan_overrides() {
    let ws = Workspace::with_snapshot(NATIVE_SNAPSHOT);

    let output = surebet()
        .args(["--json", "scan", arg(&ws.snapshot()), "-c", arg(&ws.config())])
        .args(["--stake", "1000", "--min-margin", "5"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["total_stake"], "1000");
    assert!(value["opportunities"].as_array().unwrap().is_empty());
    assert_eq!(value["tally"]["sub_threshold"], 1);
}

#[test]
fn test_scan_rejects_bad_override() {
    let ws = Workspace::with_snapshot(NATIVE_SNAPSHOT);

    surebet()
        .args(["scan", arg(&ws.snapshot()), "-c", arg(&ws.config())])
        .args(["--stake", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("total_stake"));
}

#[test]
fn test_scan_multiple_snapshots_with_csv() {
    let ws = Workspace::with_snapshot(NATIVE_SNAPSHOT);
    let second = ws.path("api.json");
    fs::write(&second, ODDS_API_SNAPSHOT).unwrap();
    let csv = ws.path("out.csv");

    surebet()
        .args(["scan", arg(&ws.snapshot()), arg(&second)])
        .args(["-c", arg(&ws.config()), "--csv", arg(&csv)])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 opportunities"));

    let written = fs::read_to_string(&csv).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("sport,event,market"));
    assert!(lines[1].starts_with("EPL,Arsenal vs Chelsea,totals:2.5,Over 2.5|Under 2.5,One|Two"));
    assert!(lines[2].starts_with("Test League,TeamA vs TeamB,h2h"));
}

#[test]
fn test_scan_sport_filter() {
    let ws = Workspace::with_snapshot(NATIVE_SNAPSHOT);
    let second = ws.path("api.json");
    fs::write(&second, ODDS_API_SNAPSHOT).unwrap();

    let output = surebet()
        .args(["--json", "scan", arg(&ws.snapshot()), arg(&second)])
        .args(["-c", arg(&ws.config()), "--sport", "epl"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let opportunities = value["opportunities"].as_array().unwrap();
    assert_eq!(opportunities.len(), 1);
    assert_eq!(opportunities[0]["sport"], "EPL");
    assert_eq!(value["tally"]["events_skipped"], 2);
}

#[test]
fn test_scan_without_opportunities() {
    let ws = Workspace::with_snapshot("[]");

    surebet()
        .args(["scan", arg(&ws.snapshot()), "-c", arg(&ws.config())])
        .assert()
        .success()
        .stdout(predicate::str::contains("No arbitrage opportunities found"));
}

#[test]
fn test_scan_missing_snapshot_fails() {
    let ws = Workspace::with_snapshot("[]");

    surebet()
        .args(["scan", arg(&ws.path("missing.json")), "-c", arg(&ws.config())])
        .assert()
        .failure()
        .stderr(predicate::str::contains("IO error"));
}

#[test]
fn test_scan_non_array_snapshot_fails() {
    let ws = Workspace::with_snapshot(r#"{"events": []}"#);

    surebet()
        .args(["scan", arg(&ws.snapshot()), "-c", arg(&ws.config())])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected a JSON array"));
}

#[test]
fn test_config_init_then_validate() {
    let ws = Workspace::with_snapshot("[]");
    let config = ws.path("config.toml");

    surebet()
        .args(["config", "init", arg(&config)])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file"));

    surebet()
        .args(["config", "init", arg(&config)])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    surebet()
        .args(["config", "validate", "-c", arg(&config)])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config file is valid"));
}

#[test]
fn test_config_validate_reports_bad_value() {
    let ws = Workspace::with_snapshot("[]");
    let config = ws.path("config.toml");
    fs::write(&config, "[scan]\nmin_margin_percent = 150\n").unwrap();

    surebet()
        .args(["config", "validate", "-c", arg(&config)])
        .assert()
        .failure()
        .stderr(predicate::str::contains("min_margin_percent"));
}

#[test]
fn test_config_show_json_uses_defaults() {
    let ws = Workspace::with_snapshot("[]");

    let output = surebet()
        .args(["--json", "config", "show", "-c", arg(&ws.config())])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["from_file"], false);
    assert_eq!(value["scan"]["min_margin_percent"], "2");
    assert_eq!(value["history"]["capacity"], 500);
}

#[test]
fn test_watch_single_cycle() {
    let ws = Workspace::with_snapshot(NATIVE_SNAPSHOT);

    surebet()
        .args(["watch", arg(&ws.snapshot()), "-c", arg(&ws.config())])
        .args(["--interval", "1", "--cycles", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("opportunity"))
        .stdout(predicate::str::contains("TeamA vs TeamB"))
        .stdout(predicate::str::contains("Cycles"))
        .stdout(predicate::str::contains("Recorded"));
}

#[test]
fn test_watch_json_lines() {
    let ws = Workspace::with_snapshot(NATIVE_SNAPSHOT);

    let output = surebet()
        .args(["--json", "watch", arg(&ws.snapshot()), "-c", arg(&ws.config())])
        .args(["--interval", "1", "--cycles", "1"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let opportunities: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str::<serde_json::Value>(line).unwrap())
        .filter(|value| value["type"] == "opportunity")
        .collect();
    assert_eq!(opportunities.len(), 1);
    assert_eq!(opportunities[0]["payload"]["event"], "TeamA vs TeamB");
}

#[test]
fn test_watch_survives_missing_snapshot() {
    let ws = Workspace::with_snapshot("[]");

    surebet()
        .args(["watch", arg(&ws.path("missing.json")), "-c", arg(&ws.config())])
        .args(["--interval", "1", "--cycles", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("missing.json"));
}
