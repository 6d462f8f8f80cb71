//! JSON and GeoJSON file readers and writers

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use geojson::{FeatureCollection, GeoJson};
use log::{debug, info};
use serde_json::Value;

use crate::errors::{MapError, MapResult};

/// JSON object with insertion-ordered keys
pub type JsonMap = serde_json::Map<String, Value>;

fn require_file(path: &Path) -> MapResult<()> {
    if !path.exists() {
        return Err(MapError::FileNotFound(path.to_path_buf()));
    }
    Ok(())
}

/// Read a JSON object from a file
///
/// # Returns
/// The object, `FileNotFound` if the path does not exist, or
/// `InvalidArgument` when the top level is not an object
pub fn read_json(path: &Path) -> MapResult<JsonMap> {
    require_file(path)?;
    let reader = BufReader::new(File::open(path)?);
    let value: Value = serde_json::from_reader(reader)?;
    match value {
        Value::Object(map) => Ok(map),
        other => Err(MapError::InvalidArgument(format!(
            "{} holds a JSON {} instead of an object",
            path.display(),
            json_kind(&other)
        ))),
    }
}

/// Write a JSON object to a file, replacing any existing content
pub fn write_json(path: &Path, map: &JsonMap) -> MapResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer(&mut writer, map)?;
    writer.flush()?;
    debug!("Wrote JSON to {}", path.display());
    Ok(())
}

/// Read a GeoJSON file as a feature collection
///
/// A lone Feature is wrapped in a one-element collection; a bare geometry is rejected.
pub fn read_geojson(path: &Path) -> MapResult<FeatureCollection> {
    require_file(path)?;
    info!("Opening {}", path.display());
    let content = fs::read_to_string(path)?;
    match content.parse::<GeoJson>()? {
        GeoJson::FeatureCollection(collection) => Ok(collection),
        GeoJson::Feature(feature) => Ok(FeatureCollection {
            bbox: None,
            features: vec![feature],
            foreign_members: None,
        }),
        GeoJson::Geometry(_) => Err(MapError::InvalidArgument(format!(
            "{} holds a bare geometry, expected features",
            path.display()
        ))),
    }
}

/// Save GeoJSON to `out_file`, forcing a `.geojson` extension
///
/// # Returns
/// The path actually written
pub fn save_geojson(out_file: &Path, geojson: &GeoJson) -> MapResult<PathBuf> {
    let is_geojson = out_file
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("geojson"))
        .unwrap_or(false);
    let out_path = if is_geojson {
        out_file.to_path_buf()
    } else {
        out_file.with_extension("geojson")
    };

    let mut writer = BufWriter::new(File::create(&out_path)?);
    serde_json::to_writer(&mut writer, geojson)?;
    writer.flush()?;
    debug!("Wrote GeoJSON to {}", out_path.display());
    Ok(out_path)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
