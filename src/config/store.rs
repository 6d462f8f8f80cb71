//! Persistence of config objects
//!
//! A config is either a plain JSON object (ids, settings and per-ROI records)
//! or a collection of ROI geometries. Which one is decided when the
//! `ConfigObject` is built, and each kind has its own file name.

use std::fs;
use std::path::{Path, PathBuf};
use geojson::{FeatureCollection, GeoJson};
use log::info;

use crate::errors::{MapError, MapResult};
use crate::io::fs::{find_config_file, CONFIG_GEOJSON_PATTERN, CONFIG_JSON_EXACT_PATTERN};
use crate::io::json::{read_geojson, read_json, save_geojson, write_json, JsonMap};
use crate::utils::logger::Logger;
use super::roi_collection::tag_roi_features;

/// File name of the plain config
pub const CONFIG_JSON_FILE: &str = "config.json";
/// File name of the geometry config
pub const CONFIG_GEOJSON_FILE: &str = "config_gdf.geojson";

/// A config ready to be saved
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigObject {
    /// ROI ids, settings and per-ROI records
    Plain(JsonMap),
    /// ROI geometries tagged with their feature type
    Geometry(FeatureCollection),
}

impl ConfigObject {
    /// Wrap a plain JSON config
    pub fn plain(config: JsonMap) -> Self {
        ConfigObject::Plain(config)
    }

    /// Wrap ROI geometries, tagging each feature as an ROI
    pub fn geometry(rois: FeatureCollection) -> Self {
        ConfigObject::Geometry(tag_roi_features(rois))
    }

    /// File name this kind of config is saved under
    pub fn file_name(&self) -> &'static str {
        match self {
            ConfigObject::Plain(_) => CONFIG_JSON_FILE,
            ConfigObject::Geometry(_) => CONFIG_GEOJSON_FILE,
        }
    }
}

/// Configs found in a directory
#[derive(Debug, Default)]
pub struct LoadedConfig {
    /// Contents of the plain config, if present
    pub plain: Option<JsonMap>,
    /// Contents of the geometry config, if present
    pub geometry: Option<FeatureCollection>,
}

/// Saves and loads config files
pub struct ConfigStore<'a> {
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> ConfigStore<'a> {
    /// Create a new config store
    ///
    /// # Arguments
    /// * `logger` - Logger for recording operations
    pub fn new(logger: &'a Logger) -> Self {
        ConfigStore { logger }
    }

    /// Save a config into `directory`
    ///
    /// # Arguments
    /// * `config` - Config to save
    /// * `directory` - Existing directory to save into
    ///
    /// # Returns
    /// Full path of the written file
    pub fn persist(&self, config: &ConfigObject, directory: &Path) -> MapResult<PathBuf> {
        if !directory.is_dir() {
            return Err(MapError::FileNotFound(directory.to_path_buf()));
        }
        let save_path = directory.join(config.file_name());

        match config {
            ConfigObject::Plain(map) => {
                write_json(&save_path, map)?;
                info!("Saved config json: {}", save_path.display());
            }
            ConfigObject::Geometry(collection) => {
                save_geojson(&save_path, &GeoJson::FeatureCollection(collection.clone()))?;
                info!("Saved config geojson with {} features: {}", collection.features.len(), save_path.display());
            }
        }

        self.logger.log(&format!("Saved {} to {}", config.file_name(), save_path.display()))?;
        Ok(save_path)
    }

    /// Load whichever config files exist in `directory`
    pub fn load(&self, directory: &Path) -> MapResult<LoadedConfig> {
        if !directory.is_dir() {
            return Err(MapError::FileNotFound(directory.to_path_buf()));
        }

        let json_path = directory.join(CONFIG_JSON_FILE);
        let geojson_path = directory.join(CONFIG_GEOJSON_FILE);
        let loaded = LoadedConfig {
            plain: if json_path.exists() { Some(read_json(&json_path)?) } else { None },
            geometry: if geojson_path.exists() { Some(read_geojson(&geojson_path)?) } else { None },
        };

        self.logger.log(&format!(
            "Loaded config from {} (json: {}, geojson: {})",
            directory.display(),
            loaded.plain.is_some(),
            loaded.geometry.is_some()
        ))?;
        Ok(loaded)
    }

    /// Copy both config files from `src` into `dst`
    ///
    /// The geometry config is located by pattern, so dated variants such as
    /// `config_gdf_2022.geojson` are found too. The JSON config must be named
    /// exactly `config.json`. Both land in `dst` under their canonical names.
    ///
    /// # Returns
    /// The copied destination paths
    pub fn copy_configs(&self, src: &Path, dst: &Path) -> MapResult<Vec<PathBuf>> {
        if !dst.is_dir() {
            return Err(MapError::FileNotFound(dst.to_path_buf()));
        }

        let mut copied = Vec::new();
        let sources = [
            (&*CONFIG_GEOJSON_PATTERN, CONFIG_GEOJSON_FILE),
            (&*CONFIG_JSON_EXACT_PATTERN, CONFIG_JSON_FILE),
        ];
        for (pattern, canonical) in sources {
            let name = find_config_file(src, Some(pattern))?;
            let target = dst.join(canonical);
            fs::copy(src.join(&name), &target)?;
            info!("Copied {} to {}", name, target.display());
            copied.push(target);
        }

        self.logger.log(&format!("Copied configs from {} to {}", src.display(), dst.display()))?;
        Ok(copied)
    }
}
