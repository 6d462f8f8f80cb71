//! UTM zone and EPSG code derivation for geographic extents

use geojson::Geometry;
use log::debug;

use crate::errors::MapResult;
use super::crs::CoordinateSystem;
use super::rectangle::Rectangle;

/// Width of a UTM zone in degrees of longitude
pub const UTM_ZONE_WIDTH: f64 = 6.0;
/// Number of UTM zones around the globe
pub const UTM_ZONE_COUNT: i64 = 60;

/// UTM zone number (1..=60) containing a longitude
///
/// Longitudes outside [-180, 180) wrap around the globe.
pub fn utm_zone_number(lon: f64) -> u8 {
    let band = ((lon + 180.0) / UTM_ZONE_WIDTH).floor() as i64;
    (band.rem_euclid(UTM_ZONE_COUNT) + 1) as u8
}

/// Most accurate WGS 84 / UTM coordinate system for a lon/lat position
///
/// # Arguments
/// * `lon` - Longitude in degrees
/// * `lat` - Latitude in degrees; zero counts as northern hemisphere
pub fn convert_wgs_to_utm(lon: f64, lat: f64) -> CoordinateSystem {
    CoordinateSystem::UTM(utm_zone_number(lon), lat >= 0.0)
}

/// UTM coordinate system for a rectangle, picked at the centre of its corners
pub fn resolve_utm_crs(rectangle: &Rectangle) -> CoordinateSystem {
    let center = rectangle.center();
    let crs = convert_wgs_to_utm(center.lon(), center.lat());
    debug!(
        "{} center ({}, {}) -> {}",
        CoordinateSystem::WGS84,
        center.lon(),
        center.lat(),
        crs
    );
    crs
}

/// Resolve the UTM EPSG code for a rectangle from the centre of its corners
///
/// The zone is always zero-padded, so the result lies in 32601..=32660 or
/// 32701..=32760.
pub fn resolve_utm_epsg(rectangle: &Rectangle) -> u32 {
    resolve_utm_crs(rectangle).epsg_code()
}

/// UTM coordinate system for a GeoJSON polygon in EPSG:4326
pub fn utm_crs_from_geometry(geometry: &Geometry) -> MapResult<CoordinateSystem> {
    let rectangle = Rectangle::from_geometry(geometry)?;
    Ok(resolve_utm_crs(&rectangle))
}

/// Resolve the UTM EPSG code for a GeoJSON polygon in EPSG:4326
pub fn epsg_from_geometry(geometry: &Geometry) -> MapResult<u32> {
    Ok(utm_crs_from_geometry(geometry)?.epsg_code())
}
