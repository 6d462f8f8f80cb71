//! Rectangular ring in geographic coordinates

use geojson::{Geometry, Value};

use crate::errors::{MapError, MapResult};
use super::point::Point;

/// Minimum number of vertices accepted for a rectangle ring
pub const MIN_RECTANGLE_VERTICES: usize = 4;

/// A ring of (longitude, latitude) vertices in EPSG:4326
///
/// Vertices 1 and 3 are taken as opposing corners. The ring is not
/// otherwise checked for being rectangular.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    vertices: Vec<Point>,
}

impl Rectangle {
    /// Create a rectangle from its ring vertices
    ///
    /// # Arguments
    /// * `vertices` - Ring vertices, at least four
    ///
    /// # Returns
    /// The rectangle, or `InvalidArgument` when fewer than four vertices are given
    pub fn new(vertices: Vec<Point>) -> MapResult<Self> {
        if vertices.len() < MIN_RECTANGLE_VERTICES {
            return Err(MapError::InvalidArgument(format!(
                "Rectangle needs at least {} vertices, got {}",
                MIN_RECTANGLE_VERTICES,
                vertices.len()
            )));
        }
        if vertices.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
            return Err(MapError::InvalidArgument("Rectangle has non-finite coordinates".to_string()));
        }
        Ok(Rectangle { vertices })
    }

    /// Build an axis-aligned rectangle ring from bounds
    pub fn from_bounds(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> MapResult<Self> {
        Rectangle::new(vec![
            Point::new(min_x, min_y),
            Point::new(max_x, min_y),
            Point::new(max_x, max_y),
            Point::new(min_x, max_y),
            Point::new(min_x, min_y),
        ])
    }

    /// Build a rectangle from the exterior ring of a GeoJSON polygon
    ///
    /// Multi-polygons use their first polygon.
    pub fn from_geometry(geometry: &Geometry) -> MapResult<Self> {
        let rings = match &geometry.value {
            Value::Polygon(rings) => rings,
            Value::MultiPolygon(polygons) => polygons.first().ok_or_else(|| {
                MapError::InvalidArgument("MultiPolygon has no polygons".to_string())
            })?,
            other => {
                return Err(MapError::InvalidArgument(format!(
                    "Expected a Polygon geometry, got {}",
                    geometry_kind(other)
                )))
            }
        };

        let exterior = rings
            .first()
            .ok_or_else(|| MapError::InvalidArgument("Polygon has no exterior ring".to_string()))?;

        let vertices = exterior
            .iter()
            .map(|position| match position.as_slice() {
                [x, y, ..] => Ok(Point::new(*x, *y)),
                _ => Err(MapError::InvalidArgument("Position needs two coordinates".to_string())),
            })
            .collect::<MapResult<Vec<_>>>()?;

        Rectangle::new(vertices)
    }

    /// Ring vertices
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Midpoint of the first and third vertices
    pub fn center(&self) -> Point {
        self.vertices[0].midpoint(&self.vertices[2])
    }
}

fn geometry_kind(value: &Value) -> &'static str {
    match value {
        Value::Point(_) => "Point",
        Value::MultiPoint(_) => "MultiPoint",
        Value::LineString(_) => "LineString",
        Value::MultiLineString(_) => "MultiLineString",
        Value::Polygon(_) => "Polygon",
        Value::MultiPolygon(_) => "MultiPolygon",
        Value::GeometryCollection(_) => "GeometryCollection",
    }
}
