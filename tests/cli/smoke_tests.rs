use assert_cmd::Command;
use predicates::prelude::*;

use crate::common::TempWorkspace;

fn termscan() -> Command {
    Command::new(env!("CARGO_BIN_EXE_termscan"))
}

fn pdf2text() -> Command {
    Command::new(env!("CARGO_BIN_EXE_pdf2text"))
}

#[test]
fn shows_help() {
    termscan().arg("--help").assert().success().stdout(predicate::str::contains("termscan"));
    pdf2text().arg("--help").assert().success().stdout(predicate::str::contains("manifest"));
}

#[test]
fn shows_version() {
    termscan()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn wrong_argument_count_exits_with_one() {
    termscan().assert().code(1).stderr(predicate::str::contains("Usage"));
    termscan().arg("only-one").assert().code(1);
    termscan().args(["a", "b", "c"]).assert().code(1);
    pdf2text().assert().code(1);
}

#[test]
fn unknown_format_exits_with_one() {
    termscan().args(["a", "b", "--format", "yaml"]).assert().code(1);
}

#[test]
fn missing_terms_file_exits_with_one() {
    let ws = TempWorkspace::new();
    ws.create_file("docs/a.txt", "cat");

    termscan()
        .current_dir(ws.path())
        .args(["docs", "missing.txt"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("missing.txt"));
    assert!(!ws.path().join("results").exists());
}

#[test]
fn missing_input_path_exits_with_one() {
    let ws = TempWorkspace::new();
    ws.create_file("terms.txt", "cat");

    termscan().current_dir(ws.path()).args(["nowhere", "terms.txt"]).assert().code(1);
    assert!(!ws.path().join("results").exists());
}

#[test]
fn empty_directory_exits_with_one() {
    let ws = TempWorkspace::new();
    ws.create_dir("docs");
    ws.create_file("terms.txt", "cat");

    termscan()
        .current_dir(ws.path())
        .args(["docs", "terms.txt"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No files found"));
}

#[test]
fn empty_alternative_in_terms_exits_with_one() {
    let ws = TempWorkspace::new();
    ws.create_file("docs/a.txt", "cat");
    ws.create_file("terms.txt", "cat\ndog//hound\n");

    termscan()
        .current_dir(ws.path())
        .args(["docs", "terms.txt"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn success_prints_report_path() {
    let ws = TempWorkspace::new();
    ws.create_file("docs/a.txt", "cat");
    ws.create_file("terms.txt", "cat");

    termscan()
        .current_dir(ws.path())
        .args(["docs", "terms.txt"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"results[/\\]search_results_\d{8}_\d{6}\.csv").unwrap());
}

#[test]
fn pdf2text_missing_manifest_exits_with_one() {
    let ws = TempWorkspace::new();
    pdf2text().current_dir(ws.path()).arg("list.txt").assert().code(1);
}

#[test]
fn pdf2text_all_failed_exits_with_one() {
    let ws = TempWorkspace::new();
    ws.create_file("broken.pdf", "definitely not a pdf");
    ws.create_file("list.txt", "broken.pdf\n");

    pdf2text()
        .current_dir(ws.path())
        .env_remove("RUST_LOG")
        .arg("list.txt")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("broken.pdf"));
}
