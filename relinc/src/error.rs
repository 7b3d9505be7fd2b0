//! Error types for the relinc library.
//!
//! This module provides the error hierarchy for all operations in the
//! relinc library, using `thiserror` for ergonomic error handling.
//!
//! Everything here is fatal: a raised error aborts the run before (or
//! while) files are processed. Per-line conditions such as an include
//! token that cannot be found in any search root are deliberately *not*
//! errors; the line is passed through unchanged.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a relinc error.
///
/// # Examples
///
/// ```
/// use relinc::{Error, Result};
///
/// fn example_operation() -> Result<u32> {
///     Ok(42)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the relinc library.
#[derive(Debug, Error)]
pub enum Error {
    /// The configured library path does not exist.
    #[error("library path not found: {}", path.display())]
    LibraryPathMissing {
        /// The library path that was not found.
        path: PathBuf,
    },

    /// The output directory already exists and overwriting is disabled.
    #[error("output directory {} already exists, delete it or enable out.overwrite", path.display())]
    OutputDirExists {
        /// The pre-existing output directory.
        path: PathBuf,
    },

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// The configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_json::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Check if error indicates a missing library path.
    ///
    /// # Examples
    ///
    /// ```
    /// use relinc::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::LibraryPathMissing { path: PathBuf::from("/nonexistent") };
    /// assert!(err.is_missing_library());
    /// ```
    #[must_use]
    pub fn is_missing_library(&self) -> bool {
        matches!(self, Self::LibraryPathMissing { .. })
    }

    /// Check if error stems from configuration rather than processing.
    ///
    /// # Examples
    ///
    /// ```
    /// use relinc::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::OutputDirExists { path: PathBuf::from("/out") };
    /// assert!(err.is_configuration());
    /// ```
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::LibraryPathMissing { .. }
                | Self::OutputDirExists { .. }
                | Self::Configuration(_)
                | Self::Validation { .. }
                | Self::InvalidPath { .. }
        )
    }
}
