//! ROI feature collections

use geojson::{feature::Id, Feature, FeatureCollection};
use log::{error, info};
use serde_json::Value;

use crate::errors::{MapError, MapResult};

/// Property holding the ROI id
pub const ID_PROPERTY: &str = "id";
/// Property tagging the kind of config feature
pub const TYPE_PROPERTY: &str = "type";
/// Value of the type property for ROI features
pub const ROI_TYPE: &str = "roi";

/// Id of a feature as a string
///
/// The `id` property is preferred; the feature's own id is used when the
/// property is absent. Numbers are rendered as they appear in JSON.
pub fn feature_id(feature: &Feature) -> Option<String> {
    let from_property = feature
        .properties
        .as_ref()
        .and_then(|props| props.get(ID_PROPERTY))
        .and_then(value_as_id);
    from_property.or_else(|| match &feature.id {
        Some(Id::String(s)) => Some(s.clone()),
        Some(Id::Number(n)) => Some(n.to_string()),
        None => None,
    })
}

fn value_as_id(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Ids of every feature, in order; fails on the first feature without one
pub fn roi_ids(collection: &FeatureCollection) -> MapResult<Vec<String>> {
    collection
        .features
        .iter()
        .enumerate()
        .map(|(index, feature)| {
            feature_id(feature).ok_or_else(|| {
                MapError::MissingField(format!("{} (feature {})", ID_PROPERTY, index))
            })
        })
        .collect()
}

/// Keep only the ROI whose id matches `roi_id`
///
/// Ids are compared as strings. With `roi_id` of `None` every feature is kept.
///
/// # Returns
/// The filtered collection, or `IdNotFound` if it holds no features
pub fn extract_roi_by_id(collection: &FeatureCollection, roi_id: Option<&str>) -> MapResult<FeatureCollection> {
    let selected = match roi_id {
        None => collection.clone(),
        Some(id) => FeatureCollection {
            bbox: None,
            features: collection
                .features
                .iter()
                .filter(|feature| feature_id(feature).as_deref() == Some(id))
                .cloned()
                .collect(),
            foreign_members: collection.foreign_members.clone(),
        },
    };

    let wanted = roi_id.unwrap_or("<any>");
    if selected.features.is_empty() {
        error!("Id: {} was not found in {} ROIs", wanted, collection.features.len());
        return Err(MapError::IdNotFound(wanted.to_string()));
    }
    info!("Selected {} ROI(s) with id {}", selected.features.len(), wanted);
    Ok(selected)
}

/// Tag every feature with `"type": "roi"` for the geometry config file
pub fn tag_roi_features(mut collection: FeatureCollection) -> FeatureCollection {
    for feature in &mut collection.features {
        feature.set_property(TYPE_PROPERTY, ROI_TYPE);
    }
    collection
}
