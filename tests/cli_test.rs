//! Command-line interface tests.
//!
//! These run the compiled `pagesim` binary and inspect its output.

use std::io::Write;
use std::process::{Command, Output};

use tempfile::NamedTempFile;

fn pagesim(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pagesim"))
        .args(args)
        .env_remove("PAGESIM_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_cli_fifo_run() {
    let output = pagesim(&["-f", "3", "1", "2", "3", "4", "1", "2", "5", "1", "2", "3", "4", "5"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("== FIFO (First-In, First-Out) =="));
    assert!(stdout.contains("== Solution (Shifting Visualization) =="));
    assert!(stdout.contains("Page Hits            3  25.00%"));
    assert!(stdout.contains("Page Faults          9  75.00%"));
}

#[test]
fn test_cli_lru_quoted_reference_string() {
    let output = pagesim(&["-a", "lru", "7 0 1 2 0 3 0 4 2 3 0 3 2"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("== LRU (Least Recently Used) =="));
    assert!(stdout.contains("== Solution (LRU Recency Visualization) =="));
    assert!(stdout.contains("Total References    13"));
}

#[test]
fn test_cli_default_frame_count() {
    let output = pagesim(&["1", "2", "3", "4"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("4 references, 3 frames"));
}

#[test]
fn test_cli_reads_file_and_explains() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "1 2 1").unwrap();
    writeln!(file, "3").unwrap();

    let path = file.path().to_str().unwrap();
    let output = pagesim(&["--input", path, "-f", "2", "--explain", "ratio"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Hit/Fault Ratio Calculation"));
    assert!(stdout.contains("1 Hits / 3 Faults = 0.33"));
}

#[test]
fn test_cli_highlight_faults() {
    let output = pagesim(&["-f", "2", "--highlight", "fault", "1", "1"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Status  | Fault | ·"));
}

#[test]
fn test_cli_rejects_bad_reference_string() {
    let output = pagesim(&["1", "x", "3"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Please enter a valid, space-separated string of numbers"));
}

#[test]
fn test_cli_rejects_zero_frames() {
    let output = pagesim(&["-f", "0", "1", "2"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Frame count must be a positive integer"));
}

#[test]
fn test_cli_rejects_frame_count_over_limit() {
    let output = pagesim(&["-f", "1000000000000000000", "1", "2"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("no greater than 1024, got '1000000000000000000'"));
    assert!(!stderr.contains("panicked"));
}

#[test]
fn test_cli_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.txt");

    let output = pagesim(&["--input", missing.to_str().unwrap()]);
    assert!(!output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Failed to load reference string"));
}
