//! Tests for coordinate system codes and names

use crate::coordinate::CoordinateSystem;

#[test]
fn test_epsg_codes() {
    assert_eq!(CoordinateSystem::WGS84.epsg_code(), 4326);
    assert_eq!(CoordinateSystem::UTM(10, true).epsg_code(), 32610);
    assert_eq!(CoordinateSystem::UTM(55, false).epsg_code(), 32755);
    assert_eq!(CoordinateSystem::UTM(1, true).epsg_code(), 32601);
}

#[test]
fn test_utm_description_is_padded() {
    let crs = CoordinateSystem::UTM(5, false);
    assert_eq!(crs.epsg_code(), 32705);
    assert_eq!(crs.description(), "UTM Zone 05S (EPSG:32705)");
    assert_eq!(crs.to_string(), crs.description());
    assert_eq!(CoordinateSystem::WGS84.description(), "WGS 84 (EPSG:4326)");
}
