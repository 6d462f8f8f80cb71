//! Tests for settings files

use std::fs;
use serde_json::json;

use crate::config::load_settings;
use crate::errors::MapError;

#[test]
fn test_load_toml_settings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    fs::write(
        &path,
        r#"
sitename = "beach"
dates = ["2018-12-01", "2019-03-01"]
cloud_thresh = 0.5
output_epsg = 3857

[extra]
day = 2019-01-01
"#,
    )
    .unwrap();

    let settings = load_settings(&path).unwrap();
    assert_eq!(settings["sitename"], json!("beach"));
    assert_eq!(settings["dates"], json!(["2018-12-01", "2019-03-01"]));
    assert_eq!(settings["cloud_thresh"], json!(0.5));
    assert_eq!(settings["output_epsg"], json!(3857));
    assert_eq!(settings["extra"]["day"], json!("2019-01-01"));
}

#[test]
fn test_load_json_settings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{"sitename": "beach", "dates": ["2018-12-01", "2019-03-01"]}"#).unwrap();
    assert_eq!(load_settings(&path).unwrap()["sitename"], json!("beach"));
}

#[test]
fn test_load_settings_errors() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        load_settings(&dir.path().join("missing.toml")),
        Err(MapError::FileNotFound(_))
    ));

    let yaml = dir.path().join("settings.yaml");
    fs::write(&yaml, "sitename: beach").unwrap();
    assert!(matches!(load_settings(&yaml), Err(MapError::InvalidArgument(_))));

    let broken = dir.path().join("broken.toml");
    fs::write(&broken, "sitename = ").unwrap();
    assert!(matches!(load_settings(&broken), Err(MapError::TomlError(_))));
}
