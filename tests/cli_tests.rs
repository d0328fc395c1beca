use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{rms, temp_out, value_lines, week_config, write_config};

#[test]
fn test_generate_to_stdout() {
    let cfg = write_config("generate_to_stdout", &week_config());

    let out = rms()
        .args(["--config", &cfg, "generate", "--utc", "--seed", "5"])
        .assert()
        .success()
        .stdout(contains("INSERT INTO `user_times`"))
        .get_output()
        .stdout
        .clone();

    let sql = String::from_utf8(out).unwrap();
    assert_eq!(value_lines(&sql).len(), 5);
}

#[test]
fn test_generate_is_reproducible_with_seed() {
    let cfg = write_config("generate_reproducible", &week_config());
    let args = ["--config", &cfg, "-q", "generate", "--utc", "--seed", "99"];

    let a = rms().args(args).output().unwrap();
    let b = rms().args(args).output().unwrap();
    assert!(a.status.success());
    assert_eq!(a.stdout, b.stdout);
}

#[test]
fn test_generate_to_file_with_comments() {
    let cfg = write_config("generate_to_file", &week_config());
    let out = temp_out("generate_to_file", "sql");

    rms()
        .args([
            "--config",
            &cfg,
            "generate",
            "--utc",
            "--comment",
            "--out",
            &out,
            "--force",
        ])
        .assert()
        .success()
        .stdout(predicates::str::is_empty())
        .stderr(contains("Output wrote to"));

    let content = fs::read_to_string(&out).expect("read generated sql");
    assert!(content.starts_with("INSERT INTO"));
    assert_eq!(content.lines().filter(|l| l.starts_with("--Day:")).count(), 5);
    assert!(content.trim_end().ends_with(';'));
}

#[test]
fn test_invalid_range_fails_without_output() {
    let bad = week_config().replace("\"2023-01-08\"", "\"2022-12-01\"");
    let cfg = write_config("invalid_range", &bad);
    let out = temp_out("invalid_range", "sql");

    rms()
        .args(["--config", &cfg, "generate", "--out", &out])
        .assert()
        .failure()
        .stderr(contains("Error code 0"));

    assert!(!std::path::Path::new(&out).exists());

    rms()
        .args(["--config", &cfg, "generate"])
        .assert()
        .failure()
        .stdout(predicates::str::is_empty());
}

#[test]
fn test_missing_config_file() {
    let cfg = temp_out("missing_config", "json");

    rms()
        .args(["--config", &cfg, "generate"])
        .assert()
        .failure()
        .stderr(contains("Configuration file not found"));
}

#[test]
fn test_init_then_check() {
    let cfg = temp_out("init_then_check", "json");

    rms()
        .args(["--config", &cfg, "init"])
        .assert()
        .success();

    rms()
        .args(["--config", &cfg, "config", "--check"])
        .assert()
        .success()
        .stderr(contains("Configuration is valid").and(contains("2023-01-31")));

    rms()
        .args(["--config", &cfg, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("\"startid\"").and(contains("\"workingDays\"")));
}

#[test]
fn test_init_refuses_overwrite_without_confirmation() {
    let cfg = write_config("init_refuses_overwrite", &week_config());

    rms()
        .args(["--config", &cfg, "init"])
        .write_stdin("n\n")
        .assert()
        .failure();

    assert_eq!(fs::read_to_string(&cfg).unwrap(), week_config());
}

#[test]
fn test_quiet_hides_status_messages() {
    let cfg = write_config("quiet_status", &week_config());

    rms()
        .args(["--config", &cfg, "--quiet", "generate", "--utc"])
        .assert()
        .success()
        .stderr(predicates::str::is_empty());
}
