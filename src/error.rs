//! Error types for relative-path operations

use thiserror::Error;

/// The error type for relative-path normalization and validation
///
/// Every variant carries the caller-supplied `context` label naming the
/// operation that invoked normalization, so diagnostics point at the real
/// call site rather than at the shared routine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathError {
    /// Input is not valid Unicode
    #[error("{context}: path is not valid Unicode: {input}")]
    NotUnicode { context: String, input: String },

    /// Empty path
    #[error("{context}: empty paths are not allowed")]
    EmptyPath { context: String },

    /// Absolute path where a relative path is required
    #[error("{context}: absolute paths are not allowed: {path}")]
    AbsolutePath { context: String, path: String },

    /// Parent-directory component detected (contains a `..` segment)
    #[error("{context}: path traversal detected: {path} - relative paths with '..' are not allowed")]
    ParentComponent { context: String, path: String },
}

/// Result type for relative-path operations
pub type Result<T> = std::result::Result<T, PathError>;
