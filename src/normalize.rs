//! Relative-path normalization functions
//!
//! This module provides the splitter/joiner pair behind [`normalize_rel_path`]
//! and helpers built on top of them. Everything here is pure string
//! transformation over path syntax: no filesystem access, no symlink
//! resolution, no I/O.

use crate::error::{PathError, Result};
use crate::validate::validate_rel_path;
use std::ffi::OsStr;

/// Split a relative-path string into its ordered components
///
/// Separator noise is normalized away during the split: runs of `/`, `.`
/// segments (including a leading `./` and a trailing `/.`), and trailing
/// slashes all disappear. The bare input `"."` yields the empty sequence,
/// which denotes the current directory.
///
/// Components are borrowed from the input and never contain `/`; `.` and
/// `..` never appear in the result. A surviving `..` segment is an error
/// rather than a component: resolving it correctly would require
/// symlink-aware filesystem access this routine deliberately does not have.
///
/// # Examples
/// ```
/// use relpath::split_rel_path;
///
/// assert_eq!(split_rel_path("foo//./bar/", "load").unwrap(), vec!["foo", "bar"]);
/// assert_eq!(split_rel_path(".", "load").unwrap(), Vec::<&str>::new());
/// assert!(split_rel_path("foo/../bar", "load").is_err());
/// ```
pub fn split_rel_path<'a>(path: &'a str, context: &str) -> Result<Vec<&'a str>> {
    validate_rel_path(path, context)?;

    let mut components = Vec::new();
    for segment in path.split('/') {
        if segment.is_empty() || segment == "." {
            continue;
        }
        if segment == ".." {
            return Err(PathError::ParentComponent {
                context: context.to_string(),
                path: path.to_string(),
            });
        }
        components.push(segment);
    }

    Ok(components)
}

/// Render a component sequence in canonical relative-path form
///
/// The empty sequence renders as `"./."` (the current directory); a nonempty
/// sequence renders as `"./"` followed by the components joined with single
/// `/` separators.
///
/// Callers must uphold the splitter's component invariant: nonempty,
/// slash-free, and not `.` or `..`. Sequences produced by
/// [`split_rel_path`] always satisfy it.
///
/// # Examples
/// ```
/// use relpath::join_components;
///
/// assert_eq!(join_components(&["foo", "bar"]), "./foo/bar");
/// assert_eq!(join_components(&[]), "./.");
/// ```
pub fn join_components(components: &[&str]) -> String {
    if components.is_empty() {
        "./.".to_string()
    } else {
        format!("./{}", components.join("/"))
    }
}

/// Normalize a relative-path string to canonical form
///
/// This is the canonical entry point: it validates the input, splits it into
/// components, and joins them back. The result always starts with `./`,
/// contains no repeated `/`, no `.` or `..` components, and no trailing `/`;
/// the current directory is `"./."`. Normalization is idempotent, and two
/// inputs normalize to the same string exactly when they denote the same
/// path in a symlink-free world.
///
/// The `context` label names the calling operation and is carried in every
/// error, so diagnostics point at the real call site.
///
/// # Examples
/// ```
/// use relpath::normalize_rel_path;
///
/// assert_eq!(normalize_rel_path("foo//bar", "install").unwrap(), "./foo/bar");
/// assert_eq!(normalize_rel_path("foo/./bar/", "install").unwrap(), "./foo/bar");
/// assert_eq!(normalize_rel_path(".", "install").unwrap(), "./.");
///
/// assert!(normalize_rel_path("/foo", "install").is_err());
/// assert!(normalize_rel_path("foo/../bar", "install").is_err());
/// ```
pub fn normalize_rel_path(path: &str, context: &str) -> Result<String> {
    let components = split_rel_path(path, context)?;
    Ok(join_components(&components))
}

/// Normalize a relative path handed over as a platform string
///
/// Accepts anything `AsRef<OsStr>` (so `OsString`, `Path`, and `PathBuf`
/// work directly). Input that is not valid Unicode is rejected with
/// [`PathError::NotUnicode`] carrying a lossy rendering of the offending
/// value; valid Unicode is normalized exactly as by [`normalize_rel_path`].
///
/// # Examples
/// ```
/// use relpath::normalize_rel_path_os;
/// use std::path::Path;
///
/// let path = Path::new("foo/./bar");
/// assert_eq!(normalize_rel_path_os(path, "unpack").unwrap(), "./foo/bar");
/// ```
pub fn normalize_rel_path_os<P: AsRef<OsStr>>(path: P, context: &str) -> Result<String> {
    let os = path.as_ref();
    let utf8 = os.to_str().ok_or_else(|| PathError::NotUnicode {
        context: context.to_string(),
        input: os.to_string_lossy().into_owned(),
    })?;
    normalize_rel_path(utf8, context)
}

/// Join two relative paths and normalize the result
///
/// Both operands are split independently and their component sequences are
/// concatenated, so separator noise in either operand disappears and an
/// error in either operand propagates. Joining with `"."` on either side is
/// an identity.
///
/// # Examples
/// ```
/// use relpath::join_rel_paths;
///
/// assert_eq!(join_rel_paths("src/", "main.rs", "layout").unwrap(), "./src/main.rs");
/// assert_eq!(join_rel_paths(".", "main.rs", "layout").unwrap(), "./main.rs");
/// assert!(join_rel_paths("src", "../main.rs", "layout").is_err());
/// ```
pub fn join_rel_paths(base: &str, path: &str, context: &str) -> Result<String> {
    let mut components = split_rel_path(base, context)?;
    components.extend(split_rel_path(path, context)?);
    Ok(join_components(&components))
}
