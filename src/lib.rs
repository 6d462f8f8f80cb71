pub mod errors;
pub mod io;
pub mod utils;
pub mod coordinate;
pub mod raster;
pub mod config;
pub mod commands;
pub mod api;

pub use crate::api::RoiKit;

pub use errors::{MapError, MapResult};
pub use coordinate::{resolve_utm_epsg, CoordinateSystem, Point, Rectangle};
pub use raster::{rescale_linear, resize_nearest, LabelMatrix};
pub use config::{build_config, build_roi_settings, extract_roi_by_id, ConfigObject, ConfigStore};
