//! # Validation Errors
//!
//! A [`ValidationFailure`] names what was wrong and where. Its display form
//! is the caller-visible text: `"<message> on <path>"`.

use thiserror::Error;

/// A structural defect in a request, found before any store access.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message} on {path}")]
pub struct ValidationFailure {
    /// Human-readable description of the defect.
    pub message: String,
    /// Location within the input, segments joined by `/`, no leading separator.
    pub path: String,
}

impl ValidationFailure {
    /// Build a failure at `path`. A leading `/` or `.` is stripped.
    pub fn new(message: impl Into<String>, path: impl AsRef<str>) -> Self {
        let path = path.as_ref();
        let path = path
            .strip_prefix('/')
            .or_else(|| path.strip_prefix('.'))
            .unwrap_or(path);
        Self {
            message: message.into(),
            path: path.to_string(),
        }
    }

    /// A required property was absent.
    pub fn required(path: impl AsRef<str>) -> Self {
        Self::new("Required property", path)
    }

    /// A value had the wrong JSON type.
    pub fn expected(kind: &str, path: impl AsRef<str>) -> Self {
        Self::new(format!("Expected {kind}"), path)
    }

    /// A string was shorter than allowed.
    pub fn too_short(min_len: usize, path: impl AsRef<str>) -> Self {
        Self::new(
            format!("Expected string length greater or equal to {min_len}"),
            path,
        )
    }
}
