mod common;
use common::week_config;

use ramostamp::config::Configuration;
use ramostamp::errors::AppError;
use std::env;

#[test]
fn test_json_roundtrip_keeps_values() {
    let cfg = Configuration::sample();
    let json = cfg.to_json().unwrap();
    let back = Configuration::from_json(&json).unwrap();
    assert_eq!(cfg, back);

    let cfg = Configuration::from_json(&week_config()).unwrap();
    let back = Configuration::from_json(&cfg.to_json_pretty().unwrap()).unwrap();
    assert_eq!(cfg, back);
}

#[test]
fn test_defaults_for_optional_fields() {
    let cfg = Configuration::from_json(
        r#"{"startid": 0, "userid": "1", "from": "2023-01-02", "until": "2023-01-02",
            "dailyBegin": "08:00.00", "dailyEnd": "16:00.00"}"#,
    )
    .unwrap();

    assert_eq!(cfg.pause_minutes, 0);
    assert_eq!(cfg.client_id, "0");
    assert_eq!(cfg.begin_delta_s, 0);
    assert!(cfg.working_days.is_none());
    assert!(cfg.day_windows.is_empty());
}

#[test]
fn test_start_id_alias() {
    let cfg = Configuration::from_json(
        r#"{"startId": 9, "userid": "1", "from": "2023-01-02", "until": "2023-01-02",
            "dailyBegin": "08:00", "dailyEnd": "16:00"}"#,
    )
    .unwrap();
    assert_eq!(cfg.start_id, 9);
}

#[test]
fn test_save_then_load() {
    let mut path = env::temp_dir();
    path.push("save_then_load_ramostamp.json");
    std::fs::remove_file(&path).ok();

    let cfg = Configuration::sample();
    cfg.save(&path).unwrap();
    assert_eq!(Configuration::load(&path).unwrap(), cfg);
}

#[test]
fn test_missing_file() {
    let mut path = env::temp_dir();
    path.push("definitely_missing_ramostamp.json");
    std::fs::remove_file(&path).ok();

    let err = Configuration::load(&path).unwrap_err();
    assert!(matches!(err, AppError::ConfigNotFound(_)));
}

#[test]
fn test_malformed_json() {
    let err = Configuration::from_json("{ not json").unwrap_err();
    assert!(matches!(err, AppError::Json(_)));
}
