//! CLI command implementations
//!
//! This module contains implementations of various commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod epsg_command;
pub mod config_command;
pub mod resize_command;
pub mod directories_command;
pub mod download_command;

pub use command_traits::{Command, CommandFactory};
pub use epsg_command::EpsgCommand;
pub use config_command::ConfigCommand;
pub use resize_command::ResizeCommand;
pub use directories_command::{CleanCommand, YearsCommand};
pub use download_command::DownloadCommand;

use clap::ArgMatches;
use crate::api::RoiKit;
use crate::errors::{MapError, MapResult};

/// Fetch a required string argument
pub(crate) fn required_arg(args: &ArgMatches, name: &str) -> MapResult<String> {
    args.get_one::<String>(name)
        .cloned()
        .ok_or_else(|| MapError::InvalidArgument(format!("Missing argument: {}", name)))
}

/// Fetch a required typed argument parsed by clap
pub(crate) fn required_value<T: Clone + Send + Sync + 'static>(args: &ArgMatches, name: &str) -> MapResult<T> {
    args.get_one::<T>(name)
        .cloned()
        .ok_or_else(|| MapError::InvalidArgument(format!("Missing argument: {}", name)))
}

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the selected subcommand and creates
/// the appropriate command instance for execution.
pub struct RoikitCommandFactory;

impl RoikitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        RoikitCommandFactory
    }
}

impl Default for RoikitCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for RoikitCommandFactory {
    fn create_command(&self, args: &ArgMatches, kit: &'a RoiKit) -> MapResult<Box<dyn Command + 'a>> {
        match args.subcommand() {
            Some(("epsg", sub)) => Ok(Box::new(EpsgCommand::new(sub, kit)?)),
            Some(("config", sub)) => Ok(Box::new(ConfigCommand::new(sub, kit)?)),
            Some(("resize", sub)) => Ok(Box::new(ResizeCommand::new(sub, kit)?)),
            Some(("years", sub)) => Ok(Box::new(YearsCommand::new(sub, kit)?)),
            Some(("clean", sub)) => Ok(Box::new(CleanCommand::new(sub, kit)?)),
            Some(("download", sub)) => Ok(Box::new(DownloadCommand::new(sub, kit)?)),
            Some((other, _)) => Err(MapError::InvalidArgument(format!("Unknown command: {}", other))),
            None => Err(MapError::InvalidArgument("No command given; see --help".to_string())),
        }
    }
}
