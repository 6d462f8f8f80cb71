//! Assembly of per-ROI settings and the combined config object

use geojson::FeatureCollection;
use log::debug;
use serde_json::Value;

use crate::errors::{MapError, MapResult};
use crate::io::json::JsonMap;
use super::roi_collection::{feature_id, ID_PROPERTY};
use super::settings::{dates_from, sitename_from, RoiSettings};

/// Key listing the ROI ids in a config
pub const ROI_IDS_KEY: &str = "roi_ids";
/// Key holding the shared settings in a config
pub const SETTINGS_KEY: &str = "settings";

/// Build one settings record per selected ROI, keyed by ROI id
///
/// Every record shares the `dates` and `sitename` of `settings` and the
/// given `filepath`. Keys follow the order of the features.
///
/// # Arguments
/// * `settings` - Currently loaded map settings
/// * `selected_rois` - Selected ROI features, each with an id
/// * `filepath` - Full path to the data directory
///
/// # Returns
/// The records, or `MissingField` when settings lack `sitename`/`dates` or a
/// feature has no id
pub fn build_roi_settings(
    settings: &JsonMap,
    selected_rois: &FeatureCollection,
    filepath: &str,
) -> MapResult<JsonMap> {
    let sitename = sitename_from(settings)?;
    let dates = dates_from(settings)?;

    let mut roi_settings = JsonMap::new();
    for (index, roi) in selected_rois.features.iter().enumerate() {
        let roi_id = feature_id(roi)
            .ok_or_else(|| MapError::MissingField(format!("{} (feature {})", ID_PROPERTY, index)))?;
        let record = RoiSettings {
            dates: dates.clone(),
            sitename: sitename.clone(),
            filepath: filepath.to_string(),
            roi_id: roi_id.clone(),
        };
        roi_settings.insert(roi_id, serde_json::to_value(record)?);
    }

    debug!("Built settings for {} ROIs", roi_settings.len());
    Ok(roi_settings)
}

/// Combine per-ROI inputs with the shared settings
///
/// The result holds every entry of `inputs`, then `roi_ids` (the input keys
/// in order) and `settings`.
pub fn build_config(inputs: JsonMap, settings: JsonMap) -> JsonMap {
    let roi_ids: Vec<Value> = inputs.keys().cloned().map(Value::String).collect();
    let mut config = inputs;
    config.insert(ROI_IDS_KEY.to_string(), Value::Array(roi_ids));
    config.insert(SETTINGS_KEY.to_string(), Value::Object(settings));
    config
}
