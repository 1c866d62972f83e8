use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_aoc2021"))
        .args(args)
        .arg("--input-dir")
        .arg(dir)
        .env_remove("RUST_LOG")
        .env_remove("AOC_INPUT_DIR")
        .output()
        .expect("failed to run aoc2021")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn inputs() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("day1.in"), "199\n200\n208\n210\n200\n207\n240\n269\n260\n263\n").unwrap();
    fs::write(dir.path().join("day6.in"), "3,4,3,1,2\n").unwrap();
    fs::write(dir.path().join("day1test1.in"), "1\n2\n3\n").unwrap();
    dir
}

#[test]
fn single_answer_prints_bare() {
    let dir = inputs();
    let output = run(dir.path(), &["1", "2"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "5\n");
}

#[test]
fn every_day_skips_missing_inputs() {
    let dir = inputs();
    let output = run(dir.path(), &[]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "\
day 1 part 1: 7
day 1 part 2: 5
day 6 part 1: 5934
day 6 part 2: 26984457539
");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("skipping day 8"));
}

#[test]
fn test_input_file() {
    let dir = inputs();
    let output = run(dir.path(), &["1", "1", "-t", "1"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "2\n");
}

#[test]
fn expected_answer_matches() {
    let dir = inputs();
    assert!(run(dir.path(), &["1", "1", "--expect", "7"]).status.success());
}

#[test]
fn expected_answer_mismatch_fails() {
    let dir = inputs();
    let output = run(dir.path(), &["1", "2", "--expect", "6"]);
    assert!(!output.status.success());
    assert_eq!(stdout(&output), "5\n");
    assert!(String::from_utf8_lossy(&output.stderr).contains("got 5, expected 6"));
}

#[test]
fn missing_named_day_fails() {
    let dir = inputs();
    let output = run(dir.path(), &["2", "1"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("day2.in"));
}
