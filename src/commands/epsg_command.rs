//! UTM projection lookup command
//!
//! Reports the UTM EPSG code and area of every ROI in a GeoJSON file.

use std::path::PathBuf;
use clap::ArgMatches;
use log::info;

use crate::api::RoiKit;
use crate::commands::command_traits::Command;
use crate::commands::required_arg;
use crate::errors::MapResult;

/// Command for resolving ROI projections
pub struct EpsgCommand<'a> {
    /// GeoJSON file of ROI polygons
    input_file: PathBuf,
    /// Library facade
    kit: &'a RoiKit,
}

impl<'a> EpsgCommand<'a> {
    /// Create a new EPSG command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `kit` - Library facade
    ///
    /// # Returns
    /// A new EpsgCommand instance or an error
    pub fn new(args: &ArgMatches, kit: &'a RoiKit) -> MapResult<Self> {
        let input_file = PathBuf::from(required_arg(args, "input")?);
        Ok(EpsgCommand { input_file, kit })
    }
}

impl<'a> Command for EpsgCommand<'a> {
    fn execute(&self) -> MapResult<()> {
        info!("Resolving UTM zones for {}", self.input_file.display());
        let summaries = self.kit.summarize_rois(&self.input_file)?;

        for summary in &summaries {
            println!("{}\t{}\t{:.3} m²", summary.id, summary.crs.description(), summary.area_m2);
        }
        info!("Resolved {} ROIs", summaries.len());
        Ok(())
    }
}
