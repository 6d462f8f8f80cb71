//! Label image resize command

use std::path::PathBuf;
use clap::ArgMatches;
use log::info;

use crate::api::RoiKit;
use crate::commands::command_traits::Command;
use crate::commands::{required_arg, required_value};
use crate::errors::MapResult;

/// Command for nearest-neighbour resizing of grey-label PNGs
pub struct ResizeCommand<'a> {
    input_file: PathBuf,
    output_file: PathBuf,
    rows: usize,
    cols: usize,
    kit: &'a RoiKit,
}

impl<'a> ResizeCommand<'a> {
    pub fn new(args: &ArgMatches, kit: &'a RoiKit) -> MapResult<Self> {
        Ok(ResizeCommand {
            input_file: PathBuf::from(required_arg(args, "input")?),
            output_file: PathBuf::from(required_arg(args, "output")?),
            rows: required_value::<usize>(args, "rows")?,
            cols: required_value::<usize>(args, "cols")?,
            kit,
        })
    }
}

impl<'a> Command for ResizeCommand<'a> {
    fn execute(&self) -> MapResult<()> {
        let (src_rows, src_cols) =
            self.kit.resize_labels(&self.input_file, self.rows, self.cols, &self.output_file)?;
        info!(
            "Resized {}x{} -> {}x{}, saved to {}",
            src_rows,
            src_cols,
            self.rows,
            self.cols,
            self.output_file.display()
        );
        Ok(())
    }
}
