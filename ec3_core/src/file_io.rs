//! # File I/O Module
//!
//! Structure files are JSON documents holding a schema version and a
//! [`StructureDesign`]:
//!
//! ```json
//! { "version": "0.1.0", "structure": { "name": "Frame A", "members": [] } }
//! ```
//!
//! - **Atomic saves**: write to `<file>.tmp`, sync, rename over the target
//! - **Version validation**: files from a newer schema are rejected
//!
//! ## Example
//!
//! ```rust,no_run
//! use ec3_core::file_io::{load_structure, save_structure};
//! use ec3_core::structure::StructureDesign;
//! use std::path::Path;
//!
//! let structure = StructureDesign::new("Frame A");
//! save_structure(&structure, Path::new("frame.json"))?;
//! let loaded = load_structure(Path::new("frame.json"))?;
//! assert_eq!(loaded.name, "Frame A");
//! # Ok::<(), ec3_core::errors::CalcError>(())
//! ```

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::structure::{StructureDesign, StructureDesignResults};

/// Current schema version for structure files
pub const SCHEMA_VERSION: &str = "0.1.0";

fn default_version() -> String {
    SCHEMA_VERSION.to_string()
}

/// On-disk layout of a structure file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructureFile {
    #[serde(default = "default_version")]
    pub version: String,

    pub structure: StructureDesign,
}

impl StructureFile {
    pub fn new(structure: StructureDesign) -> Self {
        StructureFile {
            version: default_version(),
            structure,
        }
    }
}

/// `<path>.tmp`, next to the target so the rename stays on one filesystem
fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}

/// Write `contents` to `path` atomically.
///
/// 1. Write to a temporary file (`.tmp`)
/// 2. Sync to disk (fsync)
/// 3. Rename over `path` (atomic on most filesystems)
fn write_atomic(path: &Path, contents: &str) -> CalcResult<()> {
    let tmp_path = tmp_path_for(path);

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(contents.as_bytes()).map_err(|e| {
        CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    log::debug!("saved {}", path.display());
    Ok(())
}

fn read_to_string(path: &Path) -> CalcResult<String> {
    let mut file = File::open(path).map_err(|e| CalcError::file_error("open", path.display().to_string(), e.to_string()))?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;
    Ok(contents)
}

/// Save a structure with atomic write semantics.
pub fn save_structure(structure: &StructureDesign, path: &Path) -> CalcResult<()> {
    let json = serde_json::to_string_pretty(&StructureFile::new(structure.clone()))
        .map_err(|e| CalcError::serialization(e.to_string()))?;
    write_atomic(path, &json)
}

/// Load a structure file.
///
/// # Returns
///
/// * `Ok(StructureDesign)` - Successfully loaded
/// * `Err(CalcError::VersionMismatch)` - File version is incompatible
/// * `Err(CalcError::SerializationError)` - Invalid JSON
/// * `Err(CalcError::FileError)` - I/O error
pub fn load_structure(path: &Path) -> CalcResult<StructureDesign> {
    let contents = read_to_string(path)?;

    let file: StructureFile = serde_json::from_str(&contents)
        .map_err(|e| CalcError::serialization(format!("Invalid JSON in {}: {}", path.display(), e)))?;

    validate_version(&file.version)?;

    Ok(file.structure)
}

/// Save design results as pretty JSON, atomically.
pub fn save_results(results: &StructureDesignResults, path: &Path) -> CalcResult<()> {
    let json = serde_json::to_string_pretty(results).map_err(|e| CalcError::serialization(e.to_string()))?;
    write_atomic(path, &json)
}

fn version_parts(version: &str) -> Vec<u32> {
    version.split('.').filter_map(|p| p.trim().parse().ok()).collect()
}

/// Validate that a file version is compatible with the current schema.
///
/// The major version must match; while in 0.x, a newer minor version is
/// rejected as well.
fn validate_version(file_version: &str) -> CalcResult<()> {
    let mismatch = || CalcError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let file_parts = version_parts(file_version);
    let current_parts = version_parts(SCHEMA_VERSION);

    match (file_parts.as_slice(), current_parts.as_slice()) {
        ([], _) | (_, []) => Err(mismatch()),
        ([file_major, ..], [current_major, ..]) if file_major != current_major => Err(mismatch()),
        ([0, file_minor, ..], [0, current_minor, ..]) if file_minor > current_minor => Err(mismatch()),
        _ => Ok(()),
    }
}
