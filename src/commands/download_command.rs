//! Download command

use std::path::PathBuf;
use clap::ArgMatches;
use log::info;

use crate::api::RoiKit;
use crate::commands::command_traits::Command;
use crate::commands::required_arg;
use crate::errors::MapResult;

/// Command downloading a remote file with a progress bar
pub struct DownloadCommand<'a> {
    url: String,
    output_file: PathBuf,
    kit: &'a RoiKit,
}

impl<'a> DownloadCommand<'a> {
    pub fn new(args: &ArgMatches, kit: &'a RoiKit) -> MapResult<Self> {
        Ok(DownloadCommand {
            url: required_arg(args, "url")?,
            output_file: PathBuf::from(required_arg(args, "output")?),
            kit,
        })
    }
}

impl<'a> Command for DownloadCommand<'a> {
    fn execute(&self) -> MapResult<()> {
        let bytes = self.kit.download(&self.url, &self.output_file)?;
        info!("Saved {} bytes to {}", bytes, self.output_file.display());
        Ok(())
    }
}
