//! Path utilities for splitting and validating the paths handed to the engine.
//!
//! The decomposition core only ever sees a file name; these helpers separate it
//! from its directory, convert paths to text without failing on invalid UTF-8,
//! and reject source paths that would cause trouble on common filesystems.

use crate::error::{Error, Result};

use std::path::Path;

/// Maximum path length for Windows without long path support
const WINDOWS_MAX_PATH: usize = 260;

/// Windows long path prefix
const WINDOWS_LONG_PATH_PREFIX: &str = r"\\?\";

/// Converts a path to a string with fallback to lossy conversion.
pub fn path_to_string_lossy(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

/// Gets the file name from a path with fallback to lossy conversion.
///
/// Returns an empty string when the path has no file name (`""`, `".."`, `"/"`).
pub fn get_file_name_lossy(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// Splits a path into its directory and file name, both as text.
///
/// # Examples
///
/// ```
/// use seiri::path_utils::split_file_name;
/// use std::path::Path;
///
/// let (directory, name) = split_file_name(Path::new("XIII/XIII 01 - Le jour.cbr"));
/// assert_eq!(directory, "XIII");
/// assert_eq!(name, "XIII 01 - Le jour.cbr");
/// ```
pub fn split_file_name(path: &Path) -> (String, String) {
    let directory = path
        .parent()
        .map(path_to_string_lossy)
        .unwrap_or_default();
    (directory, get_file_name_lossy(path))
}

/// Checks if a file name starts with a dot (hidden file).
pub fn is_hidden_file(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().starts_with('.'))
        .unwrap_or(false)
}

/// Checks if a path is potentially problematic due to length or special characters.
pub fn validate_path(path: &Path) -> Result<()> {
    let path_str = path_to_string_lossy(path);

    if cfg!(windows)
        && path_str.len() > WINDOWS_MAX_PATH
        && !path_str.starts_with(WINDOWS_LONG_PATH_PREFIX)
    {
        return Err(Error::InvalidPath(
            path.to_path_buf(),
            "Path is too long".to_string(),
        ));
    }

    // The long path prefix itself contains a question mark
    let path_to_check = path_str
        .strip_prefix(WINDOWS_LONG_PATH_PREFIX)
        .unwrap_or(&path_str);

    if path_to_check
        .chars()
        .any(|c| matches!(c, '<' | '>' | '"' | '|' | '?' | '*'))
    {
        return Err(Error::InvalidPath(
            path.to_path_buf(),
            "Path contains invalid characters".to_string(),
        ));
    }

    Ok(())
}
