//! Map settings and per-ROI settings records

use std::fs;
use std::path::Path;
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{MapError, MapResult};
use crate::io::json::{read_json, JsonMap};

/// Settings key holding the site name
pub const SITENAME_KEY: &str = "sitename";
/// Settings key holding the `[start, end]` date pair
pub const DATES_KEY: &str = "dates";

/// Settings record for a single ROI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoiSettings {
    /// Date range exactly as given in the settings, usually `[start, end]`
    pub dates: Value,
    /// Site name shared by all ROIs of a run
    pub sitename: String,
    /// Data directory shared by all ROIs of a run
    pub filepath: String,
    /// Id of the ROI
    pub roi_id: String,
}

/// Read the site name from settings
pub fn sitename_from(settings: &JsonMap) -> MapResult<String> {
    match settings.get(SITENAME_KEY) {
        None | Some(Value::Null) => Err(MapError::MissingField(SITENAME_KEY.to_string())),
        Some(Value::String(name)) => Ok(name.clone()),
        Some(other) => Err(MapError::InvalidArgument(format!("sitename must be a string, got {}", other))),
    }
}

/// Read the date range from settings
///
/// The value is copied as is; only a missing or null entry is an error.
pub fn dates_from(settings: &JsonMap) -> MapResult<Value> {
    match settings.get(DATES_KEY) {
        None | Some(Value::Null) => Err(MapError::MissingField(DATES_KEY.to_string())),
        Some(dates) => Ok(dates.clone()),
    }
}

/// Load map settings from a `.json` or `.toml` file
///
/// TOML tables are converted to JSON objects; TOML dates become strings.
pub fn load_settings(path: &Path) -> MapResult<JsonMap> {
    if !path.exists() {
        return Err(MapError::FileNotFound(path.to_path_buf()));
    }

    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "json" => read_json(path),
        "toml" => {
            let content = fs::read_to_string(path)?;
            let table: toml::Table = toml::from_str(&content)?;
            debug!("Loaded {} settings keys from {}", table.len(), path.display());
            Ok(table
                .into_iter()
                .map(|(key, value)| (key, toml_to_json(value)))
                .collect())
        }
        _ => Err(MapError::InvalidArgument(format!(
            "Unsupported settings file {}; expected .json or .toml",
            path.display()
        ))),
    }
}

fn toml_to_json(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::from(i),
        toml::Value::Float(f) => Value::from(f),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Array(items.into_iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => Value::Object(
            table
                .into_iter()
                .map(|(key, value)| (key, toml_to_json(value)))
                .collect(),
        ),
    }
}
