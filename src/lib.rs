//! # relpath
//!
//! Pure relative-path normalization and validation utilities.
//!
//! This crate canonicalizes the *syntax* of relative paths without ever
//! touching a filesystem. Given an arbitrary string intended to denote a
//! relative path, it either produces the unique canonical form or rejects
//! the input with a typed error naming the calling operation. It is the
//! relative-path companion to a host-provided absolute-path type that is
//! assumed to be normalized already.
//!
//! ## Features
//!
//! - **Canonical form**: every output starts with `./`, has single `/`
//!   separators, no `.` or `..` components, and no trailing slash; the
//!   current directory is exactly `"./."`
//! - **Typed rejection**: empty strings, absolute paths, non-Unicode input,
//!   and `..` components each fail with their own error variant
//! - **Call-site diagnostics**: every error carries the offending input and
//!   a caller-supplied context label
//! - **No I/O**: pure string transformation; symlinks, existence checks, and
//!   `..` resolution are deliberately out of scope
//!
//! ## Examples
//!
//! ### Normalization
//!
//! ```rust
//! use relpath::normalize_rel_path;
//!
//! // Separator and dot-segment noise collapses to one canonical spelling
//! assert_eq!(normalize_rel_path("foo//bar", "demo").unwrap(), "./foo/bar");
//! assert_eq!(normalize_rel_path("foo/./bar/", "demo").unwrap(), "./foo/bar");
//! assert_eq!(normalize_rel_path(".", "demo").unwrap(), "./.");
//! ```
//!
//! ### Rejection with call-site context
//!
//! ```rust
//! use relpath::{normalize_rel_path, PathError};
//!
//! let err = normalize_rel_path("foo/../bar", "unpack recipe").unwrap_err();
//! assert!(matches!(err, PathError::ParentComponent { .. }));
//! assert!(err.to_string().starts_with("unpack recipe:"));
//!
//! assert!(normalize_rel_path("/etc/passwd", "unpack recipe").is_err());
//! assert!(normalize_rel_path("", "unpack recipe").is_err());
//! ```
//!
//! ### Checking for canonical form
//!
//! ```rust
//! use relpath::is_normalized_rel_path;
//!
//! assert!(is_normalized_rel_path("./foo/bar"));
//! assert!(!is_normalized_rel_path("foo//bar"));
//! ```

mod error;
mod normalize;
mod validate;


// Re-export main public API
pub use error::{PathError, Result};
pub use normalize::{
    join_components, join_rel_paths, normalize_rel_path, normalize_rel_path_os, split_rel_path,
};
pub use validate::{is_normalized_rel_path, validate_rel_path};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
