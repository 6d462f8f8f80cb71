//! Directory management helpers
//!
//! Helpers for laying out per-year download folders, cleaning up empty
//! directories after processing, and locating configuration files. Missing
//! paths are reported as errors rather than skipped.

use std::fs;
use std::path::{Path, PathBuf};
use chrono::Local;
use lazy_static::lazy_static;
use log::{debug, info};
use regex::Regex;

use crate::errors::{MapError, MapResult};

lazy_static! {
    /// Default pattern for configuration JSON files
    pub static ref CONFIG_JSON_PATTERN: Regex =
        Regex::new(r"(?i)^config.*\.json").expect("config pattern is valid");
    /// Pattern matching only the canonical `config.json`
    pub static ref CONFIG_JSON_EXACT_PATTERN: Regex =
        Regex::new(r"^config\.json$").expect("config.json pattern is valid");
    /// Pattern for the geometry configuration file
    pub static ref CONFIG_GEOJSON_PATTERN: Regex =
        Regex::new(r"(?i)^config_gdf.*\.geojson$").expect("config_gdf pattern is valid");
}

/// Name of the directory holding RGB imagery
pub const RGB_DIR_NAME: &str = "RGB";

fn require_dir(path: &Path) -> MapResult<()> {
    if !path.is_dir() {
        return Err(MapError::FileNotFound(path.to_path_buf()));
    }
    Ok(())
}

/// Create one subdirectory per year in `start_year..=end_year` under `base_path`
///
/// Existing directories are left alone, so calling this twice is harmless.
///
/// # Returns
/// Paths of every year directory in the range
pub fn ensure_year_directories(start_year: i32, end_year: i32, base_path: &Path) -> MapResult<Vec<PathBuf>> {
    let mut year_dirs = Vec::new();
    for year in start_year..=end_year {
        let year_path = base_path.join(year.to_string());
        if !year_path.exists() {
            fs::create_dir_all(&year_path)?;
            debug!("Created {}", year_path.display());
        }
        year_dirs.push(year_path);
    }
    Ok(year_dirs)
}

/// Remove every empty directory below `root`, deepest first
///
/// A directory that only becomes empty once its empty children are gone is
/// removed as well. `root` itself is never removed, and symbolic links are
/// not followed.
///
/// # Returns
/// The removed directories in removal order
pub fn delete_empty_subdirectories(root: &Path) -> MapResult<Vec<PathBuf>> {
    require_dir(root)?;
    let mut removed = Vec::new();
    prune_empty_children(root, &mut removed)?;
    if !removed.is_empty() {
        info!("Removed {} empty directories under {}", removed.len(), root.display());
    }
    Ok(removed)
}

fn prune_empty_children(dir: &Path, removed: &mut Vec<PathBuf>) -> MapResult<()> {
    let mut children = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            children.push(entry.path());
        }
    }
    children.sort();

    for child in children {
        prune_empty_children(&child, removed)?;
        if fs::read_dir(&child)?.next().is_none() {
            fs::remove_dir(&child)?;
            debug!("Removed empty directory {}", child.display());
            removed.push(child);
        }
    }
    Ok(())
}

/// Create `name` inside `parent_dir` (current directory when `None`) if absent
///
/// # Returns
/// Full path to the directory
pub fn create_subdirectory(name: &str, parent_dir: Option<&Path>) -> MapResult<PathBuf> {
    let parent = match parent_dir {
        Some(dir) => dir.to_path_buf(),
        None => std::env::current_dir()?,
    };
    require_dir(&parent)?;
    let new_dir = parent.join(name);
    if !new_dir.exists() {
        fs::create_dir(&new_dir)?;
    }
    Ok(new_dir)
}

/// Timestamp used in generated directory names, e.g. `01-31-22__12_19_45`
pub fn generate_datestring() -> String {
    Local::now().format("%m-%d-%y__%I_%M_%S").to_string()
}

/// Create `<location>/<name>_<timestamp>`
pub fn make_timestamped_dir(name: &str, location: &Path) -> MapResult<PathBuf> {
    require_dir(location)?;
    let new_folder = location.join(format!("{}_{}", name, generate_datestring()));
    fs::create_dir(&new_folder)?;
    info!("Created {}", new_folder.display());
    Ok(new_folder)
}

/// Find the first file in `search_path` whose name matches `pattern`
///
/// Entries are checked in name order. Without a pattern, any `config*.json`
/// file matches.
///
/// # Returns
/// The matching file name (not the full path)
pub fn find_config_file(search_path: &Path, pattern: Option<&Regex>) -> MapResult<String> {
    require_dir(search_path)?;
    let pattern = pattern.unwrap_or(&*CONFIG_JSON_PATTERN);
    info!("Searching {} for {}", search_path.display(), pattern.as_str());

    let mut names: Vec<String> = fs::read_dir(search_path)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();

    names
        .into_iter()
        .find(|name| pattern.is_match(name))
        .ok_or_else(|| MapError::FileNotFound(search_path.join(pattern.as_str())))
}

/// Locate the RGB imagery directory relative to `current_path`
///
/// `current_path` itself qualifies when it contains an entry with "RGB" in its
/// name; otherwise a sibling directory called `RGB` is used.
pub fn find_rgb_directory(current_path: &Path) -> MapResult<PathBuf> {
    require_dir(current_path)?;
    let has_rgb = fs::read_dir(current_path)?
        .filter_map(|entry| entry.ok())
        .any(|entry| entry.file_name().to_string_lossy().contains(RGB_DIR_NAME));
    if has_rgb {
        return Ok(current_path.to_path_buf());
    }

    let parent = current_path
        .parent()
        .ok_or_else(|| MapError::InvalidArgument(format!("{} has no parent", current_path.display())))?;
    let rgb_path = parent.join(RGB_DIR_NAME);
    if rgb_path.is_dir() {
        debug!("Using sibling RGB directory {}", rgb_path.display());
        Ok(rgb_path)
    } else {
        Err(MapError::InvalidArgument(
            "Invalid directory to run model in. Please select RGB directory".to_string(),
        ))
    }
}

/// Copy files in `src` whose names match `pattern` into `dst`
///
/// # Returns
/// Number of files copied
pub fn copy_matching_files(src: &Path, dst: &Path, pattern: &Regex) -> MapResult<usize> {
    require_dir(src)?;
    require_dir(dst)?;

    let mut copied = 0;
    for path in sorted_entries(src)? {
        let matches = path
            .file_name()
            .map(|name| pattern.is_match(&name.to_string_lossy()))
            .unwrap_or(false);
        if matches && path.is_file() {
            if let Some(name) = path.file_name() {
                fs::copy(&path, dst.join(name))?;
                copied += 1;
            }
        }
    }
    info!("Copied {} files matching {} to {}", copied, pattern.as_str(), dst.display());
    Ok(copied)
}

/// Files in `dir` with the given extension (case-insensitive), sorted by name
pub fn sorted_files_with_extension(dir: &Path, extension: &str) -> MapResult<Vec<PathBuf>> {
    require_dir(dir)?;
    let wanted = extension.trim_start_matches('.');
    Ok(sorted_entries(dir)?
        .into_iter()
        .filter(|path| path.is_file())
        .filter(|path| {
            path.extension()
                .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case(wanted))
                .unwrap_or(false)
        })
        .collect())
}

fn sorted_entries(dir: &Path) -> MapResult<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        paths.push(entry?.path());
    }
    paths.sort();
    Ok(paths)
}
