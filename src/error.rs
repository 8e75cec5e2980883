//! Unified error types for chatcleanse.
//!
//! This module provides a single [`ChatcleanseError`] enum that covers every
//! failure the pipeline and its shell can report.
//!
//! # Error Handling Philosophy
//!
//! - **Library users** get typed errors they can match on
//! - **Application users** get clear, actionable error messages
//! - **Developers** get source error chains for debugging
//!
//! Lines that don't look like chat messages are *not* errors: the filter
//! treats them as continuation lines or drops them.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatcleanse operations.
///
/// # Example
///
/// ```rust
/// use chatcleanse::error::Result;
///
/// fn my_function() -> Result<Vec<String>> {
///     // ... operations that may fail
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatcleanseError>;

/// The error type for all chatcleanse operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatcleanseError {
    /// Required input was not provided.
    ///
    /// Raised when no input file is given or the allow-set is empty.
    /// Nothing is written and settings are not saved.
    #[error("No {what} provided")]
    MissingInput {
        /// What was missing (e.g. "input file", "usernames")
        what: &'static str,
    },

    /// Reading or writing a specific file failed.
    #[error("IO error on {}: {source}", path.display())]
    FileIo {
        /// The file being read or written
        path: PathBuf,
        /// The underlying IO error
        #[source]
        source: io::Error,
    },

    /// The input file is not valid UTF-8.
    #[error("UTF-8 encoding error in {}: {source}", path.display())]
    Utf8 {
        /// The offending file
        path: PathBuf,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// The settings file could not be parsed or serialized.
    #[cfg(feature = "settings")]
    #[error("Invalid settings file {}: {source}", path.display())]
    Settings {
        /// The settings file path
        path: PathBuf,
        /// The underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// Unknown reduce mode string.
    #[error("Invalid reduce mode '{input}'. Expected one of: {expected}")]
    InvalidReduceMode {
        /// The string that was provided
        input: String,
        /// Accepted values
        expected: &'static str,
    },
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatcleanseError {
    /// Creates a missing input error.
    pub fn missing_input(what: &'static str) -> Self {
        ChatcleanseError::MissingInput { what }
    }

    /// Creates a path-aware IO error.
    pub fn file_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ChatcleanseError::FileIo {
            path: path.into(),
            source,
        }
    }

    /// Creates a UTF-8 decoding error for the given file.
    pub fn utf8(path: impl Into<PathBuf>, source: std::string::FromUtf8Error) -> Self {
        ChatcleanseError::Utf8 {
            path: path.into(),
            source,
        }
    }

    /// Creates a settings error.
    #[cfg(feature = "settings")]
    pub fn settings(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        ChatcleanseError::Settings {
            path: path.into(),
            source,
        }
    }

    /// Creates an invalid reduce mode error.
    pub fn invalid_reduce_mode(input: impl Into<String>) -> Self {
        ChatcleanseError::InvalidReduceMode {
            input: input.into(),
            expected: "none, recent, oldest",
        }
    }

    /// Returns `true` if required input was missing.
    pub fn is_missing_input(&self) -> bool {
        matches!(self, ChatcleanseError::MissingInput { .. })
    }

    /// Returns `true` if reading or writing a file failed.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatcleanseError::FileIo { .. })
    }

    /// Returns `true` if this is a settings error.
    pub fn is_settings(&self) -> bool {
        #[cfg(feature = "settings")]
        {
            matches!(self, ChatcleanseError::Settings { .. })
        }
        #[cfg(not(feature = "settings"))]
        {
            false
        }
    }
}
