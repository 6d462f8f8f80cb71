//! Coordinate handling for geographic extents
//!
//! This module provides structures for ROI rectangles, coordinate
//! reference systems and the UTM zone lookup used to pick a projection.

mod point;
mod rectangle;
mod crs;
mod utm;
mod area;
#[cfg(test)]
mod tests;

// Re-export key types
pub use self::point::Point;
pub use self::rectangle::{Rectangle, MIN_RECTANGLE_VERTICES};
pub use self::crs::CoordinateSystem;
pub use self::utm::{
    convert_wgs_to_utm, epsg_from_geometry, resolve_utm_crs, resolve_utm_epsg, utm_crs_from_geometry, utm_zone_number,
};
pub use self::area::geodesic_area;
