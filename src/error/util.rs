//! Utility functions for error handling
//!
//! File-system helpers that attach the path and the purpose of the
//! operation to any failure.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{EdSynthError, Result};

/// Safely open a file for reading with rich error information
///
/// # Arguments
/// * `path` - The path to the file to open
/// * `purpose` - Why the file is being opened (for error context)
pub fn safe_open_file(path: &Path, purpose: &str) -> Result<fs::File> {
    if !path.exists() {
        return Err(EdSynthError::io(
            format!("File not found, needed for: {purpose}"),
            path,
            io::Error::from(io::ErrorKind::NotFound),
        ));
    }

    if !path.is_file() {
        return Err(EdSynthError::io(
            format!("Path is not a file, expected a file for: {purpose}"),
            path,
            io::Error::from(io::ErrorKind::InvalidInput),
        ));
    }

    fs::File::open(path).map_err(|e| {
        let context = match e.kind() {
            io::ErrorKind::PermissionDenied => {
                "Permission denied - check file permissions".to_string()
            }
            _ => format!("Failed to open file for: {purpose}"),
        };
        EdSynthError::io(context, path, e)
    })
}

/// Create (or truncate) a file for writing with rich error information
pub fn safe_create_file(path: &Path, purpose: &str) -> Result<fs::File> {
    fs::File::create(path).map_err(|e| {
        let context = match e.kind() {
            io::ErrorKind::PermissionDenied => {
                "Permission denied - check directory permissions".to_string()
            }
            _ => format!("Failed to create file for: {purpose}"),
        };
        EdSynthError::io(context, path, e)
    })
}

/// Make sure an output directory exists, creating it (and parents) if needed
pub fn ensure_output_dir(path: &Path) -> Result<()> {
    if path.exists() && !path.is_dir() {
        return Err(EdSynthError::io(
            "Output path exists but is not a directory",
            path,
            io::Error::from(io::ErrorKind::AlreadyExists),
        ));
    }

    fs::create_dir_all(path)
        .map_err(|e| EdSynthError::io("Failed to create output directory", path, e))
}
