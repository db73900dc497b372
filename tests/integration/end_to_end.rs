// tests/integration/end_to_end.rs
use std::fs;

use assert_cmd::Command;

use crate::common::TempWorkspace;

fn run_termscan(ws: &TempWorkspace, args: &[&str]) -> String {
    let output = Command::new(env!("CARGO_BIN_EXE_termscan"))
        .current_dir(ws.path())
        .args(args)
        .output()
        .unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    String::from_utf8(output.stdout).unwrap().trim().to_string()
}

#[test]
fn directory_scan_writes_one_row_per_file() {
    let ws = TempWorkspace::new();
    ws.create_file("docs/b.txt", "The Cat sat. The cat ran! cats everywhere.");
    ws.create_file("docs/a.txt", "C++ is fast; c++ works, mostly.");
    ws.create_file("docs/nested/skipped.txt", "cat cat cat");
    ws.create_file("terms.txt", "cat\ncat/cats\n\nc++\nc\nworks\n");

    let report = run_termscan(&ws, &["docs", "terms.txt"]);
    let csv = fs::read_to_string(ws.path().join(report)).unwrap();

    assert_eq!(
        csv,
        "Filename,cat,cat/cats,c++,c,works\n\
         a.txt,0,0,2,0,1\n\
         b.txt,2,3,0,0,0\n"
    );
}

#[test]
fn single_file_input() {
    let ws = TempWorkspace::new();
    ws.create_file("note.txt", "dog (dog) \"dog\" hotdog dogs");
    ws.create_file("terms.txt", "dog");

    let report = run_termscan(&ws, &["note.txt", "terms.txt", "--output-dir", "out"]);
    let csv = fs::read_to_string(ws.path().join(&report)).unwrap();

    assert!(report.starts_with("out"));
    assert_eq!(csv, "Filename,dog\nnote.txt,1\n");
}

#[test]
fn label_with_comma_is_quoted() {
    let ws = TempWorkspace::new();
    ws.create_file("docs/a.txt", "yes and no");
    ws.create_file("terms.txt", "yes, no/no\n");

    let report = run_termscan(&ws, &["docs", "terms.txt"]);
    let csv = fs::read_to_string(ws.path().join(report)).unwrap();

    assert_eq!(csv, "Filename,\"yes, no/no\"\na.txt,1\n");
}

#[test]
fn two_runs_do_not_touch_inputs() {
    let ws = TempWorkspace::new();
    let input = ws.create_file("docs/a.txt", "alpha beta");
    ws.create_file("terms.txt", "alpha");

    run_termscan(&ws, &["docs", "terms.txt"]);
    assert_eq!(fs::read_to_string(input).unwrap(), "alpha beta");
    assert_eq!(ws.list("docs").len(), 1);
}

#[cfg(target_os = "linux")]
#[test]
fn unreadable_file_is_named_on_stderr_and_left_out_of_the_report() {
    for extra in [&[][..], &["-q"][..]] {
        let ws = TempWorkspace::new();
        ws.create_file("docs/a.txt", "cat and cat");
        // Reading /proc/self/mem from offset 0 fails with EIO.
        std::os::unix::fs::symlink("/proc/self/mem", ws.path().join("docs/b_bad.txt")).unwrap();
        ws.create_file("terms.txt", "cat");

        let output = Command::new(env!("CARGO_BIN_EXE_termscan"))
            .current_dir(ws.path())
            .env_remove("RUST_LOG")
            .args(["docs", "terms.txt"])
            .args(extra)
            .output()
            .unwrap();

        let stderr = String::from_utf8_lossy(&output.stderr);
        assert_eq!(output.status.code(), Some(0), "stderr: {stderr}");
        assert!(stderr.contains("b_bad.txt"), "failed file not named with {extra:?}: {stderr}");
        assert!(stderr.contains("1 file(s) processed, 1 failed"), "stderr: {stderr}");

        let report = String::from_utf8(output.stdout).unwrap();
        let csv = fs::read_to_string(ws.path().join(report.trim())).unwrap();
        assert_eq!(csv, "Filename,cat\na.txt,2\n");
    }
}
