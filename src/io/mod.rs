//! I/O utilities for file handling
//!
//! This module provides JSON/GeoJSON readers and writers and the directory
//! helpers used to lay out and clean up processing folders.

pub mod json;
pub mod fs;

pub use json::{read_geojson, read_json, save_geojson, write_json, JsonMap};
pub use fs::{delete_empty_subdirectories, ensure_year_directories};
