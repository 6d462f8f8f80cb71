//! ROI configuration
//!
//! Building per-ROI settings and the combined config object, filtering ROI
//! collections, and saving configs to disk.

mod settings;
mod roi_collection;
mod assembler;
mod store;
#[cfg(test)]
mod tests;

pub use self::settings::{dates_from, load_settings, sitename_from, RoiSettings, DATES_KEY, SITENAME_KEY};
pub use self::roi_collection::{
    extract_roi_by_id, feature_id, roi_ids, tag_roi_features, ID_PROPERTY, ROI_TYPE, TYPE_PROPERTY,
};
pub use self::assembler::{build_config, build_roi_settings, ROI_IDS_KEY, SETTINGS_KEY};
pub use self::store::{ConfigObject, ConfigStore, LoadedConfig, CONFIG_GEOJSON_FILE, CONFIG_JSON_FILE};
