//! Integration tests for the roikit facade

use std::fs;
use std::path::Path;

use roikit::api::RoiKit;
use roikit::config::{CONFIG_GEOJSON_FILE, CONFIG_JSON_FILE};
use roikit::io::json::{read_geojson, read_json};
use roikit::utils::logger::Logger;
use roikit::{CoordinateSystem, LabelMatrix, MapError};

const ROIS: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {"type": "Feature", "properties": {"id": 17},
     "geometry": {"type": "Polygon", "coordinates": [[[-122.5,37.7],[-122.4,37.7],[-122.4,37.8],[-122.5,37.8],[-122.5,37.7]]]}},
    {"type": "Feature", "properties": {"id": "20"},
     "geometry": {"type": "Polygon", "coordinates": [[[2.3,48.8],[2.4,48.8],[2.4,48.9],[2.3,48.9],[2.3,48.8]]]}}
  ]
}"#;

const SETTINGS: &str = r#"
sitename = "bay"
dates = ["2018-12-01", "2019-03-01"]
cloud_thresh = 0.5
"#;

fn write_inputs(dir: &Path) {
    fs::write(dir.join("rois.geojson"), ROIS).unwrap();
    fs::write(dir.join("settings.toml"), SETTINGS).unwrap();
}

#[test]
fn test_complete_config_workflow() {
    let dir = tempfile::tempdir().unwrap();
    write_inputs(dir.path());
    let out = dir.path().join("session");
    fs::create_dir(&out).unwrap();

    let kit = RoiKit::with_logger(Logger::in_memory());
    let saved = kit
        .create_config(
            &dir.path().join("rois.geojson"),
            &dir.path().join("settings.toml"),
            &out,
            "/data/bay",
            None,
        )
        .unwrap();

    assert_eq!(saved.roi_ids, vec!["17", "20"]);
    assert_eq!(saved.json_path, out.join(CONFIG_JSON_FILE));
    assert_eq!(saved.geojson_path, out.join(CONFIG_GEOJSON_FILE));

    let config = read_json(&saved.json_path).unwrap();
    assert_eq!(config["roi_ids"], serde_json::json!(["17", "20"]));
    assert_eq!(config["settings"]["cloud_thresh"], serde_json::json!(0.5));
    assert_eq!(config["17"]["roi_id"], serde_json::json!("17"));
    assert_eq!(config["20"]["filepath"], serde_json::json!("/data/bay"));
    assert_eq!(config["20"]["dates"], serde_json::json!(["2018-12-01", "2019-03-01"]));

    let geometry = read_geojson(&saved.geojson_path).unwrap();
    assert_eq!(geometry.features.len(), 2);
    assert!(geometry
        .features
        .iter()
        .all(|f| f.property("type") == Some(&serde_json::json!("roi"))));
}

#[test]
fn test_config_for_single_roi() {
    let dir = tempfile::tempdir().unwrap();
    write_inputs(dir.path());
    let kit = RoiKit::with_logger(Logger::in_memory());

    let saved = kit
        .create_config(
            &dir.path().join("rois.geojson"),
            &dir.path().join("settings.toml"),
            dir.path(),
            "/data",
            Some("20"),
        )
        .unwrap();
    assert_eq!(saved.roi_ids, vec!["20"]);

    let missing = kit.create_config(
        &dir.path().join("rois.geojson"),
        &dir.path().join("settings.toml"),
        dir.path(),
        "/data",
        Some("99"),
    );
    assert!(matches!(missing, Err(MapError::IdNotFound(_))));
}

#[test]
fn test_summarize_rois() {
    let dir = tempfile::tempdir().unwrap();
    write_inputs(dir.path());
    let kit = RoiKit::with_logger(Logger::in_memory());

    let summaries = kit.summarize_rois(&dir.path().join("rois.geojson")).unwrap();
    let codes: Vec<(String, u32)> = summaries.iter().map(|s| (s.id.clone(), s.epsg())).collect();
    assert_eq!(codes, vec![("17".to_string(), 32610), ("20".to_string(), 32631)]);
    assert_eq!(summaries[0].crs, CoordinateSystem::UTM(10, true));
    assert_eq!(summaries[1].crs.description(), "UTM Zone 31N (EPSG:32631)");
    assert!(summaries.iter().all(|s| s.area_m2 > 0.0));
    assert!(kit.logger().contains("Summarized 2 ROIs"));
}

#[test]
fn test_resize_and_directory_housekeeping() {
    let dir = tempfile::tempdir().unwrap();
    let kit = RoiKit::with_logger(Logger::in_memory());

    let labels = LabelMatrix::from_rows(vec![vec![0u8, 1], vec![2, 3]]).unwrap();
    let input = dir.path().join("labels.png");
    let output = dir.path().join("labels_4x6.png");
    labels.write_png(&input).unwrap();

    assert_eq!(kit.resize_labels(&input, 4, 6, &output).unwrap(), (2, 2));
    let resized = LabelMatrix::read_png(&output).unwrap();
    assert_eq!(resized.shape(), (4, 6));
    assert_eq!(resized.get(3, 5), Some(3));

    let years = kit.prepare_years(&dir.path().join("downloads"), 2019, 2021).unwrap();
    assert_eq!(years.len(), 3);
    fs::write(years[1].join("scene.tif"), "x").unwrap();

    let removed = kit.clean(&dir.path().join("downloads")).unwrap();
    assert_eq!(removed, vec![years[0].clone(), years[2].clone()]);
    assert!(years[1].exists());
}

#[test]
fn test_facade_logs_to_requested_file() {
    let dir = tempfile::tempdir().unwrap();
    write_inputs(dir.path());
    let log_path = dir.path().join("run.log");
    fs::write(&log_path, "earlier run\n").unwrap();

    let kit = RoiKit::new(log_path.to_str()).unwrap();
    kit.summarize_rois(&dir.path().join("rois.geojson")).unwrap();

    let log = fs::read_to_string(&log_path).unwrap();
    assert!(log.starts_with("earlier run\n"));
    assert!(log.contains("Summarized 2 ROIs"));
}
