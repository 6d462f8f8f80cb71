//! Label raster post-processing
//!
//! Nearest-neighbour resizing of label matrices and linear rescaling of values.

mod label_matrix;
mod rescale;
#[cfg(test)]
mod tests;

pub use self::label_matrix::{resize_nearest, LabelMatrix};
pub use self::rescale::rescale_linear;
