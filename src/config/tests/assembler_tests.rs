//! Tests for ROI settings and config assembly

use serde_json::{json, Value};

use crate::config::{build_config, build_roi_settings, RoiSettings};
use crate::errors::MapError;
use crate::io::json::JsonMap;
use super::test_utils::{map_settings, three_rois};

fn object(value: Value) -> JsonMap {
    match value {
        Value::Object(map) => map,
        _ => panic!("expected an object"),
    }
}

#[test]
fn test_roi_settings_per_feature() {
    let roi_settings = build_roi_settings(&map_settings(), &three_rois(), "/data").unwrap();

    assert_eq!(roi_settings.keys().collect::<Vec<_>>(), vec!["1", "2", "3"]);
    let record: RoiSettings = serde_json::from_value(roi_settings["2"].clone()).unwrap();
    assert_eq!(
        record,
        RoiSettings {
            dates: json!(["2018-12-01", "2019-03-01"]),
            sitename: "sitename1".to_string(),
            filepath: "/data".to_string(),
            roi_id: "2".to_string(),
        }
    );
}

#[test]
fn test_roi_settings_missing_sitename() {
    let mut settings = map_settings();
    settings.remove("sitename");
    let result = build_roi_settings(&settings, &three_rois(), "/data");
    assert!(matches!(result, Err(MapError::MissingField(field)) if field == "sitename"));
}

#[test]
fn test_roi_settings_missing_dates() {
    let mut settings = map_settings();
    settings.remove("dates");
    let result = build_roi_settings(&settings, &three_rois(), "/data");
    assert!(matches!(result, Err(MapError::MissingField(field)) if field == "dates"));
}

#[test]
fn test_roi_settings_feature_without_id() {
    let mut rois = three_rois();
    rois.features[1].properties = None;
    let result = build_roi_settings(&map_settings(), &rois, "/data");
    assert!(matches!(result, Err(MapError::MissingField(_))));
}

#[test]
fn test_roi_settings_copy_dates_unchanged() {
    let mut settings = map_settings();
    settings.insert("dates".to_string(), json!(["2019-03-01", "2018-12-01"]));
    let roi_settings = build_roi_settings(&settings, &three_rois(), "/data").unwrap();
    assert_eq!(roi_settings["1"]["dates"], json!(["2019-03-01", "2018-12-01"]));

    settings.insert("dates".to_string(), json!("2018-12"));
    let roi_settings = build_roi_settings(&settings, &three_rois(), "/data").unwrap();
    assert_eq!(roi_settings["3"]["dates"], json!("2018-12"));

    settings.insert("dates".to_string(), Value::Null);
    assert!(matches!(
        build_roi_settings(&settings, &three_rois(), "/data"),
        Err(MapError::MissingField(field)) if field == "dates"
    ));
}

#[test]
fn test_build_config_keys() {
    let inputs = object(json!({"1": {"sitename": "a"}, "2": {"sitename": "b"}}));
    let settings = object(json!({"cloud_thresh": 0.5}));

    let config = build_config(inputs, settings);
    assert_eq!(config["roi_ids"], json!(["1", "2"]));
    assert_eq!(config["settings"]["cloud_thresh"], json!(0.5));
    assert_eq!(config["1"], json!({"sitename": "a"}));
    assert_eq!(config.keys().collect::<Vec<_>>(), vec!["1", "2", "roi_ids", "settings"]);
}

#[test]
fn test_build_config_keeps_insertion_order() {
    let inputs = object(json!({"20": {}, "17": {}}));
    let config = build_config(inputs, JsonMap::new());
    assert_eq!(config["roi_ids"], json!(["20", "17"]));
}
