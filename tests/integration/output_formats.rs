// tests/integration/output_formats.rs
use std::fs;

use assert_cmd::Command;
use serde_json::Value;

use crate::common::TempWorkspace;

#[test]
fn json_report_lists_rows_in_file_order() {
    let ws = TempWorkspace::new();
    ws.create_file("docs/b.txt", "beta beta");
    ws.create_file("docs/a.txt", "alpha, beta.");
    ws.create_file("terms.txt", "alpha\nbeta\n");

    let output = Command::new(env!("CARGO_BIN_EXE_termscan"))
        .current_dir(ws.path())
        .args(["docs", "terms.txt", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report = String::from_utf8(output.stdout).unwrap();
    assert!(report.trim().ends_with(".json"));
    let json: Value = serde_json::from_slice(&fs::read(ws.path().join(report.trim())).unwrap()).unwrap();

    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["filename"], "a.txt");
    assert_eq!(rows[0]["counts"][0]["label"], "alpha");
    assert_eq!(rows[0]["counts"][0]["count"], 1);
    assert_eq!(rows[0]["counts"][1]["count"], 1);
    assert_eq!(rows[1]["filename"], "b.txt");
    assert_eq!(rows[1]["counts"][1]["count"], 2);
}

#[test]
fn csv_is_the_default() {
    let ws = TempWorkspace::new();
    ws.create_file("docs/a.txt", "x");
    ws.create_file("terms.txt", "x");

    Command::new(env!("CARGO_BIN_EXE_termscan"))
        .current_dir(ws.path())
        .args(["docs", "terms.txt"])
        .assert()
        .success();

    let reports = ws.list("results");
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].extension().unwrap(), "csv");
}
