//! Data-directory resolution for the application.
//!
//! This module resolves the filesystem locations of BatchFlow's own state
//! (settings file, local catalog) and the two external, read-only catalog
//! sources. All locations live under the user's home directory by default
//! and can be overridden through environment variables for scripting and
//! tests.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::constants::{
    DATA_DIR_NAME, LIBRARY_FILE_NAME, LITE_DIR_NAME, MONITOR_DIR_NAME, SETTINGS_FILE_NAME,
};

/// Environment variable overriding the BatchFlow data directory.
pub const ENV_DATA_DIR: &str = "BATCHFLOW_DATA_DIR";

/// Environment variable overriding the "lite" source directory.
pub const ENV_LITE_DIR: &str = "BATCHFLOW_LITE_DIR";

/// Environment variable overriding the "monitor" source directory.
pub const ENV_MONITOR_DIR: &str = "BATCHFLOW_MONITOR_DIR";

/// Resolved filesystem locations for all state BatchFlow reads or writes.
///
/// Constructed once at startup and passed to the components that need it;
/// nothing else in the crate touches the environment or the home directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    /// BatchFlow's own data directory (settings + local catalog).
    pub data_dir: PathBuf,
    /// Directory of the external "lite" catalog source.
    pub lite_dir: PathBuf,
    /// Directory of the external "monitor" catalog source.
    pub monitor_dir: PathBuf,
}

impl DataPaths {
    /// Resolves all directories from the environment and home directory.
    ///
    /// Precedence per directory: explicit override argument, then the
    /// corresponding environment variable, then `~/<well-known-name>`.
    /// The data directory is created if it does not exist; the external
    /// directories are never created.
    pub fn resolve(data_dir_override: Option<PathBuf>) -> Result<Self> {
        let home = dirs::home_dir().context("Failed to determine home directory")?;

        let data_dir = data_dir_override
            .or_else(|| std::env::var_os(ENV_DATA_DIR).map(PathBuf::from))
            .unwrap_or_else(|| home.join(DATA_DIR_NAME));

        let lite_dir = std::env::var_os(ENV_LITE_DIR)
            .map(PathBuf::from)
            .unwrap_or_else(|| home.join(LITE_DIR_NAME));

        let monitor_dir = std::env::var_os(ENV_MONITOR_DIR)
            .map(PathBuf::from)
            .unwrap_or_else(|| home.join(MONITOR_DIR_NAME));

        let paths = Self {
            data_dir,
            lite_dir,
            monitor_dir,
        };
        paths.ensure_data_dir()?;
        Ok(paths)
    }

    /// Builds paths rooted at explicit directories (used by tests).
    #[must_use]
    pub fn with_roots(data_dir: PathBuf, lite_dir: PathBuf, monitor_dir: PathBuf) -> Self {
        Self {
            data_dir,
            lite_dir,
            monitor_dir,
        }
    }

    /// Creates the data directory if missing.
    pub fn ensure_data_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.data_dir).context(format!(
            "Failed to create data directory: {}",
            self.data_dir.display()
        ))
    }

    /// Full path to the shared settings file.
    #[must_use]
    pub fn settings_file(&self) -> PathBuf {
        self.data_dir.join(SETTINGS_FILE_NAME)
    }

    /// Full path to the writable local catalog file.
    #[must_use]
    pub fn local_library(&self) -> PathBuf {
        self.data_dir.join(LIBRARY_FILE_NAME)
    }

    /// Full path to the read-only "lite" catalog file.
    #[must_use]
    pub fn lite_library(&self) -> PathBuf {
        self.lite_dir.join(LIBRARY_FILE_NAME)
    }

    /// Full path to the read-only "monitor" catalog file.
    #[must_use]
    pub fn monitor_library(&self) -> PathBuf {
        self.monitor_dir.join(LIBRARY_FILE_NAME)
    }

    /// Candidate style-catalog files, in probe order.
    #[must_use]
    pub fn style_catalog_candidates(&self) -> Vec<PathBuf> {
        vec![
            self.data_dir.join("styles.json"),
            self.data_dir.join("bjcp_styles.json"),
            self.monitor_dir.join("bjcp_styles.json"),
        ]
    }
}
