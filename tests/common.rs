#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rms() -> Command {
    cargo_bin_cmd!("ramostamp")
}

/// A one-week configuration (Monday 2023-01-02 to Sunday 2023-01-08).
pub fn week_config() -> String {
    r#"{
        "startid": 1,
        "pauseMinutes": 30,
        "userid": "42",
        "clientId": "7",
        "from": "2023-01-02",
        "until": "2023-01-08",
        "dailyBegin": "08:00.00",
        "dailyEnd": "16:30.00",
        "beginDeltaS": 600,
        "endDeltaS": 900
    }"#
    .to_string()
}

/// Write `content` to a unique config path inside the system temp dir
pub fn write_config(name: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_ramostamp.json", name));
    let p = path.to_string_lossy().to_string();
    fs::write(&p, content).expect("write config");
    p
}

/// Create a temporary path inside the system temp dir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Split a generated VALUES line into its fields and its terminator.
pub fn split_row(line: &str) -> (Vec<String>, char) {
    let terminator = line.chars().last().expect("empty row");
    let inner = line
        .trim_end_matches([';', ','])
        .trim_start_matches('(')
        .trim_end_matches(')');
    (
        inner.split(", ").map(|s| s.to_string()).collect(),
        terminator,
    )
}

/// Lines of a generated statement that hold VALUES tuples.
pub fn value_lines(sql: &str) -> Vec<&str> {
    sql.lines().filter(|l| l.starts_with('(')).collect()
}
