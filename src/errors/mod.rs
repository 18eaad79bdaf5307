//! Error handling utilities for the diarium application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.
//!
//! Invalid form submissions are deliberately absent from this taxonomy: intake
//! treats them as a no-op, not as an error.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Represents errors that can occur when writing the durable storage slot.
///
/// Reading the slot never produces one of these past the persistence gateway;
/// read and parse failures are absorbed there and replaced by empty collections.
///
/// # Examples
///
/// ```
/// use diarium::errors::StorageError;
/// use std::path::PathBuf;
///
/// let error = StorageError::Busy {
///     path: PathBuf::from("/data/diaryPracticeData.lock"),
/// };
///
/// assert!(format!("{}", error).contains("another process"));
/// ```
#[derive(Debug, Error)]
pub enum StorageError {
    /// The slot is locked by another process.
    #[error("Storage slot is being written by another process: {path}. Please retry once the other diarium process has finished.")]
    Busy {
        /// Path of the lock file that is held
        path: PathBuf,
    },

    /// The in-memory state could not be serialized.
    #[error("Failed to serialize journal state: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The serialized state could not be written.
    #[error("Failed to write storage slot {path}: {source}. Please check file permissions and available disk space.")]
    Write {
        /// Path of the slot being written
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Represents errors that can occur while producing an exported document.
///
/// # Examples
///
/// ```
/// use diarium::errors::ExportError;
///
/// let error = ExportError::Render("font table missing".to_string());
/// assert!(format!("{}", error).contains("font table missing"));
/// ```
#[derive(Debug, Error)]
pub enum ExportError {
    /// The backend failed to turn the document description into bytes.
    #[error("Failed to render document: {0}")]
    Render(String),

    /// The rendered artifact could not be written to the export directory.
    #[error("Failed to write exported document {path}: {source}")]
    Write {
        /// Target path of the artifact
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Represents all possible errors that can occur in the diarium application.
///
/// This enum is the central error type used across the application, with variants
/// for different error categories. It uses `thiserror` for deriving the `Error` trait
/// implementation and formatted error messages.
///
/// # Examples
///
/// Creating a configuration error:
/// ```
/// use diarium::errors::AppError;
///
/// let error = AppError::Config("Missing data directory".to_string());
/// assert_eq!(format!("{}", error), "Configuration error: Missing data directory");
/// ```
///
/// Converting from an IO error:
/// ```
/// use diarium::errors::AppError;
/// use std::io::{self, ErrorKind};
///
/// let io_error = io::Error::new(ErrorKind::NotFound, "file not found");
/// let app_error: AppError = io_error.into();
///
/// match app_error {
///     AppError::Io(inner) => assert_eq!(inner.kind(), ErrorKind::NotFound),
///     _ => panic!("Expected Io variant"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors from filesystem or terminal operations.
    ///
    /// This variant automatically converts from `std::io::Error` through the `From` trait.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors raised while saving the journal state.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Errors raised while exporting the journal.
    #[error("Export error: {0}")]
    Export(#[from] ExportError),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
///
/// # Examples
///
/// ```
/// use diarium::errors::{AppResult, AppError};
///
/// fn might_fail() -> AppResult<String> {
///     if false {
///         return Err(AppError::Config("Something went wrong".to_string()));
///     }
///     Ok("Operation succeeded".to_string())
/// }
/// ```
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_app_error_from_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");

        let app_error: AppError = io_error.into();

        match app_error {
            AppError::Io(inner) => {
                assert_eq!(inner.kind(), io::ErrorKind::NotFound);
            }
            _ => panic!("Expected AppError::Io variant"),
        }
    }

    #[test]
    fn test_app_error_display() {
        let config_error = AppError::Config("Invalid configuration".to_string());
        assert_eq!(
            format!("{}", config_error),
            "Configuration error: Invalid configuration"
        );

        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "permission denied");
        let app_io_error = AppError::Io(io_error);
        assert_eq!(format!("{}", app_io_error), "I/O error: permission denied");

        let export_error = AppError::Export(ExportError::Render("bad block".to_string()));
        assert_eq!(
            format!("{}", export_error),
            "Export error: Failed to render document: bad block"
        );
    }

    #[test]
    fn test_storage_error_wraps_into_app_error() {
        let storage_error = StorageError::Busy {
            path: PathBuf::from("/tmp/slot.lock"),
        };
        let app_error: AppError = storage_error.into();

        match &app_error {
            AppError::Storage(StorageError::Busy { path }) => {
                assert_eq!(path, &PathBuf::from("/tmp/slot.lock"));
            }
            _ => panic!("Expected AppError::Storage(Busy) variant"),
        }
        assert!(format!("{}", app_error).starts_with("Storage error:"));
    }

    #[test]
    fn test_write_error_keeps_source() {
        use std::error::Error as _;

        let error = StorageError::Write {
            path: PathBuf::from("/tmp/slot.json"),
            source: io::Error::new(io::ErrorKind::Other, "disk full"),
        };

        let source = error.source().expect("write error should carry its source");
        assert_eq!(source.to_string(), "disk full");
    }
}
