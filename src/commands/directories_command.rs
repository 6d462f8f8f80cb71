//! Directory layout commands
//!
//! Creating per-year download folders and pruning empty directories.

use std::path::PathBuf;
use clap::ArgMatches;
use log::info;

use crate::api::RoiKit;
use crate::commands::command_traits::Command;
use crate::commands::{required_arg, required_value};
use crate::errors::{MapError, MapResult};

/// Command creating one directory per year
pub struct YearsCommand<'a> {
    base_dir: PathBuf,
    start_year: i32,
    end_year: i32,
    kit: &'a RoiKit,
}

impl<'a> YearsCommand<'a> {
    /// Create a new years command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `kit` - Library facade
    ///
    /// # Returns
    /// A new YearsCommand instance, or an error if the range is reversed
    pub fn new(args: &ArgMatches, kit: &'a RoiKit) -> MapResult<Self> {
        let base_dir = PathBuf::from(required_arg(args, "base")?);
        let start_year = required_value::<i32>(args, "start")?;
        let end_year = required_value::<i32>(args, "end")?;
        if start_year > end_year {
            return Err(MapError::InvalidArgument(format!(
                "Start year {} is after end year {}",
                start_year, end_year
            )));
        }

        Ok(YearsCommand {
            base_dir,
            start_year,
            end_year,
            kit,
        })
    }
}

impl<'a> Command for YearsCommand<'a> {
    fn execute(&self) -> MapResult<()> {
        let dirs = self.kit.prepare_years(&self.base_dir, self.start_year, self.end_year)?;
        for dir in &dirs {
            println!("{}", dir.display());
        }
        info!("{} year directories ready", dirs.len());
        Ok(())
    }
}

/// Command removing empty directories
pub struct CleanCommand<'a> {
    root: PathBuf,
    kit: &'a RoiKit,
}

impl<'a> CleanCommand<'a> {
    pub fn new(args: &ArgMatches, kit: &'a RoiKit) -> MapResult<Self> {
        Ok(CleanCommand {
            root: PathBuf::from(required_arg(args, "root")?),
            kit,
        })
    }
}

impl<'a> Command for CleanCommand<'a> {
    fn execute(&self) -> MapResult<()> {
        let removed = self.kit.clean(&self.root)?;
        for dir in &removed {
            println!("removed {}", dir.display());
        }
        info!("Removed {} empty directories", removed.len());
        Ok(())
    }
}
