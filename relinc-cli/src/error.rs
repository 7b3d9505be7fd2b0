//! CLI-specific error types with exit codes.
//!
//! This module wraps library errors and maps them to process exit codes.
//! Argument errors never reach here; clap reports those itself.

use relinc::Error as LibError;
use std::fmt;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),

    /// I/O error.
    Io(std::io::Error),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: Processing error
    /// - 2: Configuration error (bad config file, missing library path,
    ///   output directory collision)
    /// - 3: I/O error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Library(lib_err) => {
                if lib_err.is_configuration() {
                    2
                } else {
                    1
                }
            }
            CliError::Io(_) => 3,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) => Some(e),
            CliError::Io(e) => Some(e),
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        // Plain I/O failures get their own exit code; everything else keeps
        // its library classification.
        if let LibError::Io(io_err) = e {
            CliError::Io(io_err)
        } else {
            CliError::Library(e)
        }
    }
}
