use std::path::{Path, PathBuf};
use std::time::Duration;
use log::info;

use crate::config::{
    build_config, build_roi_settings, extract_roi_by_id, feature_id, load_settings, ConfigObject, ConfigStore,
};
use crate::coordinate::{geodesic_area, utm_crs_from_geometry, CoordinateSystem};
use crate::errors::{MapError, MapResult};
use crate::io::fs::{delete_empty_subdirectories, ensure_year_directories};
use crate::io::json::read_geojson;
use crate::raster::{resize_nearest, LabelMatrix};
use crate::utils::download::{Downloader, HttpSource};
use crate::utils::logger::Logger;

/// Default log file for the library facade
pub const DEFAULT_LOG_FILE: &str = "roikit.log";
/// Timeout applied to HTTP downloads
pub const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(600);

/// Projection and size of one ROI
#[derive(Debug, Clone, PartialEq)]
pub struct RoiSummary {
    /// ROI id
    pub id: String,
    /// UTM projection picked for the ROI
    pub crs: CoordinateSystem,
    /// Spherical area in square metres
    pub area_m2: f64,
}

/// Paths written when a config is created
#[derive(Debug, Clone, PartialEq)]
pub struct SavedConfig {
    /// Path of `config.json`
    pub json_path: PathBuf,
    /// Path of `config_gdf.geojson`
    pub geojson_path: PathBuf,
    /// Ids of the ROIs in the config
    pub roi_ids: Vec<String>,
}

impl RoiSummary {
    /// EPSG code of the picked projection
    pub fn epsg(&self) -> u32 {
        self.crs.epsg_code()
    }
}

/// Main interface to the roikit library
pub struct RoiKit {
    logger: Logger,
}

impl RoiKit {
    /// Create a new RoiKit instance
    ///
    /// # Arguments
    /// * `log_file` - Optional path to log file, defaults to "roikit.log"
    ///
    /// # Returns
    /// A RoiKit instance or an error if initialization fails
    pub fn new(log_file: Option<&str>) -> MapResult<Self> {
        let log_path = log_file.unwrap_or(DEFAULT_LOG_FILE);
        let logger = Logger::new(log_path)?;
        Ok(RoiKit { logger })
    }

    /// Create a RoiKit instance around an existing logger
    pub fn with_logger(logger: Logger) -> Self {
        RoiKit { logger }
    }

    /// Logger used for recording operations
    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// Pick a UTM projection for every ROI in a GeoJSON file
    ///
    /// # Arguments
    /// * `rois_path` - GeoJSON file of ROI polygons in EPSG:4326
    ///
    /// # Returns
    /// One summary per ROI, in file order
    pub fn summarize_rois(&self, rois_path: &Path) -> MapResult<Vec<RoiSummary>> {
        let rois = read_geojson(rois_path)?;
        let mut summaries = Vec::with_capacity(rois.features.len());

        for (index, feature) in rois.features.iter().enumerate() {
            let id = feature_id(feature).unwrap_or_else(|| index.to_string());
            let geometry = feature
                .geometry
                .as_ref()
                .ok_or_else(|| MapError::MissingField(format!("geometry (ROI {})", id)))?;
            let crs = utm_crs_from_geometry(geometry)?;
            let area_m2 = geodesic_area(geometry)?;
            info!("ROI {}: {} ({:.3} m²)", id, crs, area_m2);
            summaries.push(RoiSummary { id, crs, area_m2 });
        }

        self.logger.log(&format!("Summarized {} ROIs from {}", summaries.len(), rois_path.display()))?;
        Ok(summaries)
    }

    /// Build and save `config.json` and `config_gdf.geojson` for selected ROIs
    ///
    /// # Arguments
    /// * `rois_path` - GeoJSON file of ROI features
    /// * `settings_path` - JSON or TOML settings file
    /// * `output_dir` - Existing directory receiving both config files
    /// * `filepath` - Data directory recorded in every ROI's settings
    /// * `roi_id` - Restrict the config to a single ROI
    pub fn create_config(
        &self,
        rois_path: &Path,
        settings_path: &Path,
        output_dir: &Path,
        filepath: &str,
        roi_id: Option<&str>,
    ) -> MapResult<SavedConfig> {
        let rois = read_geojson(rois_path)?;
        let selected = extract_roi_by_id(&rois, roi_id)?;
        let settings = load_settings(settings_path)?;

        let roi_settings = build_roi_settings(&settings, &selected, filepath)?;
        let roi_ids = roi_settings.keys().cloned().collect();
        let config = build_config(roi_settings, settings);

        let store = ConfigStore::new(&self.logger);
        let json_path = store.persist(&ConfigObject::plain(config), output_dir)?;
        let geojson_path = store.persist(&ConfigObject::geometry(selected), output_dir)?;

        Ok(SavedConfig {
            json_path,
            geojson_path,
            roi_ids,
        })
    }

    /// Resize a grey-label PNG with nearest-neighbour sampling
    ///
    /// # Returns
    /// The source shape as (rows, cols)
    pub fn resize_labels(&self, input: &Path, rows: usize, cols: usize, output: &Path) -> MapResult<(usize, usize)> {
        let labels = LabelMatrix::read_png(input)?;
        let resized = resize_nearest(&labels, rows, cols)?;
        resized.write_png(output)?;

        let (src_rows, src_cols) = labels.shape();
        self.logger.log(&format!(
            "Resized {} from {}x{} to {}x{}",
            input.display(),
            src_rows,
            src_cols,
            rows,
            cols
        ))?;
        Ok(labels.shape())
    }

    /// Create year directories under `base`
    pub fn prepare_years(&self, base: &Path, start_year: i32, end_year: i32) -> MapResult<Vec<PathBuf>> {
        let dirs = ensure_year_directories(start_year, end_year, base)?;
        self.logger.log(&format!("Prepared {} year directories in {}", dirs.len(), base.display()))?;
        Ok(dirs)
    }

    /// Remove empty directories under `root`
    pub fn clean(&self, root: &Path) -> MapResult<Vec<PathBuf>> {
        let removed = delete_empty_subdirectories(root)?;
        self.logger.log(&format!("Removed {} empty directories in {}", removed.len(), root.display()))?;
        Ok(removed)
    }

    /// Download `url` into `output` over HTTP with a progress bar
    ///
    /// # Returns
    /// The number of bytes written
    pub fn download(&self, url: &str, output: &Path) -> MapResult<u64> {
        let source = HttpSource::new(DOWNLOAD_TIMEOUT)?;
        Downloader::new(source, &self.logger).download(url, output, None)
    }
}
