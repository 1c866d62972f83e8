use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_aoc2023"))
        .args(args)
        .arg("--input-dir")
        .arg(dir)
        .env_remove("RUST_LOG")
        .env_remove("AOC_INPUT_DIR")
        .output()
        .expect("failed to run aoc2023")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn inputs() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("day9.in"), "0 3 6 9 12 15\n1 3 6 10 15 21\n10 13 16 21 30 45\n").unwrap();
    fs::write(dir.path().join("day1test2.in"), "two1nine\neightwothree\n").unwrap();
    dir
}

#[test]
fn every_day_skips_missing_inputs() {
    let dir = inputs();
    let output = run(dir.path(), &[]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "day 9 part 1: 114\nday 9 part 2: 2\n");
    assert!(String::from_utf8_lossy(&output.stderr).contains("skipping day 1"));
}

#[test]
fn both_parts_of_one_day_are_labelled() {
    let dir = inputs();
    let output = run(dir.path(), &["9"]);
    assert_eq!(stdout(&output), "day 9 part 1: 114\nday 9 part 2: 2\n");
}

#[test]
fn test_input_file() {
    let dir = inputs();
    let output = run(dir.path(), &["1", "2", "--test", "2"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "112\n");
}

#[test]
fn expected_answer_mismatch_fails() {
    let dir = inputs();
    assert!(run(dir.path(), &["9", "1", "--expect", "114"]).status.success());
    let output = run(dir.path(), &["9", "1", "--expect", "115"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("got 114, expected 115"));
}
