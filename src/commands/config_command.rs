//! Config creation command
//!
//! Builds `config.json` and `config_gdf.geojson` from an ROI GeoJSON file
//! and a settings file.

use std::path::PathBuf;
use clap::ArgMatches;
use log::info;

use crate::api::RoiKit;
use crate::commands::command_traits::Command;
use crate::commands::required_arg;
use crate::errors::MapResult;

/// Command for creating ROI configs
pub struct ConfigCommand<'a> {
    /// GeoJSON file of ROI features
    rois_file: PathBuf,
    /// JSON or TOML settings file
    settings_file: PathBuf,
    /// Directory receiving the config files
    output_dir: PathBuf,
    /// Data directory recorded for each ROI
    filepath: String,
    /// Restrict the config to one ROI
    roi_id: Option<String>,
    /// Library facade
    kit: &'a RoiKit,
}

impl<'a> ConfigCommand<'a> {
    /// Create a new config command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `kit` - Library facade
    ///
    /// # Returns
    /// A new ConfigCommand instance or an error
    pub fn new(args: &ArgMatches, kit: &'a RoiKit) -> MapResult<Self> {
        let rois_file = PathBuf::from(required_arg(args, "input")?);
        let settings_file = PathBuf::from(required_arg(args, "settings")?);
        let output_dir = PathBuf::from(required_arg(args, "output")?);

        // Default the recorded data directory to the output directory
        let filepath = args
            .get_one::<String>("filepath")
            .cloned()
            .unwrap_or_else(|| output_dir.display().to_string());
        let roi_id = args.get_one::<String>("roi-id").cloned();

        Ok(ConfigCommand {
            rois_file,
            settings_file,
            output_dir,
            filepath,
            roi_id,
            kit,
        })
    }
}

impl<'a> Command for ConfigCommand<'a> {
    fn execute(&self) -> MapResult<()> {
        info!("Creating config from {} and {}", self.rois_file.display(), self.settings_file.display());

        let saved = self.kit.create_config(
            &self.rois_file,
            &self.settings_file,
            &self.output_dir,
            &self.filepath,
            self.roi_id.as_deref(),
        )?;

        println!("ROIs: {}", saved.roi_ids.join(", "));
        println!("Saved {}", saved.json_path.display());
        println!("Saved {}", saved.geojson_path.display());
        Ok(())
    }
}
