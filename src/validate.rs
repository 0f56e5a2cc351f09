//! Relative-path validation utilities
//!
//! Guard and predicate functions for relative-path strings.

use crate::error::{PathError, Result};

/// Validate that a string is eligible for relative-path processing
///
/// This is a pure guard: it rejects input that can never denote a relative
/// path and otherwise leaves the string untouched. The `context` label names
/// the calling operation and is embedded in any error produced.
///
/// # Examples
/// ```
/// use relpath::validate_rel_path;
///
/// assert!(validate_rel_path("src/main.rs", "install").is_ok());
/// assert!(validate_rel_path("", "install").is_err());
/// assert!(validate_rel_path("/etc/passwd", "install").is_err());
/// ```
pub fn validate_rel_path(path: &str, context: &str) -> Result<()> {
    if path.is_empty() {
        return Err(PathError::EmptyPath {
            context: context.to_string(),
        });
    }

    if path.starts_with('/') {
        return Err(PathError::AbsolutePath {
            context: context.to_string(),
            path: path.to_string(),
        });
    }

    Ok(())
}

/// Check whether a string is already in canonical relative-path form
///
/// Canonical form starts with `./`, contains no repeated `/`, no `.` or `..`
/// components, and no trailing `/`; the current directory is exactly `"./."`.
/// A string in canonical form normalizes to itself.
///
/// # Examples
/// ```
/// use relpath::is_normalized_rel_path;
///
/// assert!(is_normalized_rel_path("./foo/bar"));
/// assert!(is_normalized_rel_path("./."));
/// assert!(!is_normalized_rel_path("foo/bar"));
/// assert!(!is_normalized_rel_path("./foo//bar"));
/// assert!(!is_normalized_rel_path("./foo/"));
/// ```
pub fn is_normalized_rel_path(path: &str) -> bool {
    if path == "./." {
        return true;
    }

    match path.strip_prefix("./") {
        Some(rest) if !rest.is_empty() => rest
            .split('/')
            .all(|component| !component.is_empty() && component != "." && component != ".."),
        _ => false,
    }
}
