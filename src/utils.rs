//! Shared utility functions used across the application

use std::fs;
use std::io;
use std::path::Path;

/// Check whether a path exists.
///
/// Unlike `Path::exists`, permission and other I/O failures are reported
/// instead of being folded into `false`.
pub fn path_exists(path: &Path) -> io::Result<bool> {
    path.try_exists()
}

/// Create a directory if it is not already there
pub fn create_dir_if_missing(path: &Path) -> io::Result<bool> {
    if path_exists(path)? {
        return Ok(false);
    }
    fs::create_dir_all(path)?;
    Ok(true)
}

/// Whether two existing paths resolve to the same file
pub fn same_file(a: &Path, b: &Path) -> io::Result<bool> {
    Ok(a.canonicalize()? == b.canonicalize()?)
}

/// Last component of a `/` or `\` separated name.
///
/// Archive entries and user input can use either separator regardless of
/// the host platform.
pub fn base_name(name: &str) -> &str {
    name.rsplit(['/', '\\']).next().unwrap_or(name)
}

/// Lowercased extension of a name, without the dot
pub fn extension_lower(name: &str) -> Option<String> {
    let base = base_name(name);
    let (stem, ext) = base.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Names of the entries in a directory, in the order the OS returns them
pub fn list_dir_names(path: &Path) -> io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(path)? {
        let entry = entry?;
        names.push(entry.file_name().to_string_lossy().to_string());
    }
    Ok(names)
}

/// Names of the regular files in a directory (subdirectories skipped)
pub fn list_file_names(path: &Path) -> io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(path)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            names.push(entry.file_name().to_string_lossy().to_string());
        }
    }
    Ok(names)
}
