//! Configuration management for the diarium application.
//!
//! This module handles loading and validating configuration settings from environment
//! variables, with sensible defaults.
//!
//! # Environment Variables
//!
//! - `DIARIUM_DIR`: Directory holding the storage slot (defaults to ~/.local/share/diarium)
//! - `DIARIUM_EXPORT_DIR`: Directory exported documents are written to (defaults to the
//!   current working directory)
//! - `HOME`: Used for expanding the default data directory path

use crate::constants::{
    DEFAULT_DATA_SUBDIR, ENV_VAR_DIARIUM_DIR, ENV_VAR_DIARIUM_EXPORT_DIR, ENV_VAR_HOME,
    REDACTED_PLACEHOLDER,
};
use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Configuration for the diarium application.
///
/// # Examples
///
/// ```
/// use diarium::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     data_dir: PathBuf::from("/path/to/data"),
///     export_dir: PathBuf::from("/path/to/exports"),
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory where the journal state is stored.
    pub data_dir: PathBuf,

    /// Directory where exported documents are written.
    pub export_dir: PathBuf,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("data_dir", &REDACTED_PLACEHOLDER)
            .field("export_dir", &REDACTED_PLACEHOLDER)
            .finish()
    }
}

impl Config {
    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// Both directories are expanded with `shellexpand`, so `~` and `$VAR`
    /// references are resolved.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if path expansion fails or a path ends up empty.
    pub fn load() -> AppResult<Self> {
        let data_dir_str = env::var(ENV_VAR_DIARIUM_DIR).unwrap_or_else(|_| {
            let home = env::var(ENV_VAR_HOME).unwrap_or_default();
            format!("{}/{}", home, DEFAULT_DATA_SUBDIR)
        });
        let data_dir = expand_path(&data_dir_str)?;

        let export_dir = match env::var(ENV_VAR_DIARIUM_EXPORT_DIR) {
            Ok(raw) => expand_path(&raw)?,
            Err(_) => env::current_dir()?,
        };

        if data_dir.as_os_str().is_empty() {
            return Err(AppError::Config("Data directory path is empty".to_string()));
        }

        Ok(Config {
            data_dir,
            export_dir,
        })
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` when either directory is empty or relative.
    ///
    /// ```
    /// use diarium::Config;
    /// use std::path::PathBuf;
    ///
    /// let config = Config {
    ///     data_dir: PathBuf::from("relative/data"),
    ///     export_dir: PathBuf::from("/exports"),
    /// };
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> AppResult<()> {
        for (label, path) in [("Data", &self.data_dir), ("Export", &self.export_dir)] {
            if path.as_os_str().is_empty() {
                return Err(AppError::Config(format!("{} directory path is empty", label)));
            }
            if !path.is_absolute() {
                return Err(AppError::Config(format!(
                    "{} directory must be an absolute path",
                    label
                )));
            }
        }
        Ok(())
    }
}

fn expand_path(raw: &str) -> AppResult<PathBuf> {
    let expanded = shellexpand::full(raw)
        .map_err(|e| AppError::Config(format!("Failed to expand path: {}", e)))?;
    Ok(PathBuf::from(expanded.into_owned()))
}
