//! Custom error types for ROI, raster and configuration processing

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Error kinds raised by roikit operations
#[derive(Debug)]
pub enum MapError {
    /// I/O error
    IoError(io::Error),
    /// Input file or directory does not exist
    FileNotFound(PathBuf),
    /// Settings or feature lacks a required key
    MissingField(String),
    /// Filtering by id produced no rows
    IdNotFound(String),
    /// Argument outside the accepted domain
    InvalidArgument(String),
    /// Input has no usable value range
    DegenerateInput(String),
    /// Remote resource could not be downloaded (carries the target file name)
    DownloadFailed(String),
    /// JSON (de)serialization error
    JsonError(serde_json::Error),
    /// GeoJSON parsing or conversion error
    GeoJsonError(geojson::Error),
    /// TOML parsing error
    TomlError(toml::de::Error),
    /// Image decoding or encoding error
    ImageError(image::ImageError),
    /// HTTP transport error
    HttpError(reqwest::Error),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapError::IoError(e) => write!(f, "I/O error: {}", e),
            MapError::FileNotFound(path) => write!(f, "File not found: {}", path.display()),
            MapError::MissingField(field) => write!(f, "Missing required field: {}", field),
            MapError::IdNotFound(id) => write!(f, "ROI id not found: {}", id),
            MapError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            MapError::DegenerateInput(msg) => write!(f, "Degenerate input: {}", msg),
            MapError::DownloadFailed(name) => write!(f, "Download failed: {}", name),
            MapError::JsonError(e) => write!(f, "JSON error: {}", e),
            MapError::GeoJsonError(e) => write!(f, "GeoJSON error: {}", e),
            MapError::TomlError(e) => write!(f, "TOML error: {}", e),
            MapError::ImageError(e) => write!(f, "Image error: {}", e),
            MapError::HttpError(e) => write!(f, "HTTP error: {}", e),
            MapError::GenericError(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for MapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MapError::IoError(e) => Some(e),
            MapError::JsonError(e) => Some(e),
            MapError::GeoJsonError(e) => Some(e),
            MapError::TomlError(e) => Some(e),
            MapError::ImageError(e) => Some(e),
            MapError::HttpError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for MapError {
    fn from(error: io::Error) -> Self {
        MapError::IoError(error)
    }
}

impl From<serde_json::Error> for MapError {
    fn from(error: serde_json::Error) -> Self {
        MapError::JsonError(error)
    }
}

impl From<geojson::Error> for MapError {
    fn from(error: geojson::Error) -> Self {
        MapError::GeoJsonError(error)
    }
}

impl From<toml::de::Error> for MapError {
    fn from(error: toml::de::Error) -> Self {
        MapError::TomlError(error)
    }
}

impl From<image::ImageError> for MapError {
    fn from(error: image::ImageError) -> Self {
        MapError::ImageError(error)
    }
}

impl From<reqwest::Error> for MapError {
    fn from(error: reqwest::Error) -> Self {
        MapError::HttpError(error)
    }
}

impl From<String> for MapError {
    fn from(msg: String) -> Self {
        MapError::GenericError(msg)
    }
}

/// Result type for roikit operations
pub type MapResult<T> = Result<T, MapError>;
