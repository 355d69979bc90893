//! Reading declaration files from disk.

use std::fs;
use std::path::{Path, PathBuf};

use super::error::LoadError;
use crate::base::constants::DECLARATION_EXTENSION;

/// Extension of `path` without the dot, if any.
pub fn get_extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}

/// Reject paths that are not declaration sources.
pub fn validate_extension(path: &Path) -> Result<(), LoadError> {
    match get_extension(path) {
        Some(DECLARATION_EXTENSION) => Ok(()),
        _ => Err(LoadError::UnsupportedExtension(path.to_path_buf())),
    }
}

/// Read one declaration file.
pub fn load_file(path: &Path) -> Result<String, LoadError> {
    if !path.is_file() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }
    validate_extension(path)?;
    fs::read_to_string(path).map_err(|e| LoadError::io(path, e))
}

/// Every declaration file under `dir`, recursively, in sorted path order.
pub fn collect_file_paths(dir: &Path) -> Result<Vec<PathBuf>, LoadError> {
    if !dir.is_dir() {
        return Err(LoadError::DirectoryNotFound(dir.to_path_buf()));
    }
    let mut paths = Vec::new();
    collect_recursive(dir, &mut paths)?;
    paths.sort();
    Ok(paths)
}

fn collect_recursive(dir: &Path, paths: &mut Vec<PathBuf>) -> Result<(), LoadError> {
    let entries = fs::read_dir(dir).map_err(|e| LoadError::io(dir, e))?;
    for entry in entries {
        let path = entry.map_err(|e| LoadError::io(dir, e))?.path();
        if path.is_dir() {
            collect_recursive(&path, paths)?;
        } else if path.is_file() && get_extension(&path) == Some(DECLARATION_EXTENSION) {
            paths.push(path);
        }
    }
    Ok(())
}
