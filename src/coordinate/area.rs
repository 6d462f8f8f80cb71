//! Spherical area of GeoJSON polygons

use geo::ChamberlainDuquetteArea;
use geojson::Geometry;

use crate::errors::{MapError, MapResult};

/// Area in square metres of a polygon or multi-polygon in EPSG:4326
///
/// Uses the Chamberlain-Duquette spherical approximation, the same method
/// geojson.io reports, rounded to three decimals.
pub fn geodesic_area(geometry: &Geometry) -> MapResult<f64> {
    let shape: geo::Geometry<f64> = geo::Geometry::try_from(geometry.clone())?;
    let area = match shape {
        geo::Geometry::Polygon(polygon) => polygon.chamberlain_duquette_unsigned_area(),
        geo::Geometry::MultiPolygon(polygons) => polygons.chamberlain_duquette_unsigned_area(),
        geo::Geometry::Rect(rect) => rect.to_polygon().chamberlain_duquette_unsigned_area(),
        _ => {
            return Err(MapError::InvalidArgument(
                "Area is only defined for polygon geometries".to_string(),
            ))
        }
    };
    Ok((area * 1000.0).round() / 1000.0)
}
