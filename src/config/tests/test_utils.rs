use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};
use serde_json::json;

use crate::io::json::JsonMap;

/// Square polygon feature with the given id property
pub fn roi_feature(id: serde_json::Value, lon: f64, lat: f64) -> Feature {
    let ring = vec![
        vec![lon, lat],
        vec![lon + 0.1, lat],
        vec![lon + 0.1, lat + 0.1],
        vec![lon, lat + 0.1],
        vec![lon, lat],
    ];
    let mut properties = JsonObject::new();
    properties.insert("id".to_string(), id);
    Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::Polygon(vec![ring]))),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

/// Collection of three ROIs with ids "1", "2" and "3"
pub fn three_rois() -> FeatureCollection {
    FeatureCollection {
        bbox: None,
        features: vec![
            roi_feature(json!("1"), -122.5, 37.7),
            roi_feature(json!(2), -122.4, 37.7),
            roi_feature(json!("3"), -122.3, 37.7),
        ],
        foreign_members: None,
    }
}

/// Settings with a site name and a valid date pair
pub fn map_settings() -> JsonMap {
    match json!({
        "sitename": "sitename1",
        "dates": ["2018-12-01", "2019-03-01"],
        "cloud_thresh": 0.5,
    }) {
        serde_json::Value::Object(map) => map,
        _ => unreachable!(),
    }
}
