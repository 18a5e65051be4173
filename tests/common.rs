#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn tt() -> Command {
    cargo_bin_cmd!("tasktally")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_tasktally.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    tt().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    tt().args([
        "--db",
        db_path,
        "add",
        "Alice",
        "Bio Profiling",
        "--time",
        "09:00 AM",
        "--total",
        "10",
        "--completed",
        "4",
        "--tally",
        "2",
        "--date",
        "2024-01-01",
    ])
    .assert()
    .success();

    tt().args([
        "--db",
        db_path,
        "add",
        "Bob",
        "Bio Profiling",
        "--time",
        "10:00 AM",
        "--total",
        "8",
        "--completed",
        "8",
        "--tally",
        "1",
        "--date",
        "2024-01-02",
    ])
    .assert()
    .success();

    tt().args([
        "--db",
        db_path,
        "add",
        "Alice",
        "Guidelines",
        "--time",
        "02:30 PM",
        "--total",
        "12",
        "--completed",
        "6",
        "--tally",
        "0",
        "--date",
        "2024-01-03",
    ])
    .assert()
    .success();
}
