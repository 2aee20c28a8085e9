//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including file names, default window geometry, and display limits.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "BatchFlow";

/// The binary name of the application (used in command examples, lowercase).
pub const APP_BINARY_NAME: &str = "batchflow";

/// File name of the shared settings file (workflow state + window geometry).
pub const SETTINGS_FILE_NAME: &str = "batchflow_settings.json";

/// File name of a beverage catalog file (same name in every source directory).
pub const LIBRARY_FILE_NAME: &str = "beverages_library.json";

/// Directory (under the home directory) holding BatchFlow's own state.
pub const DATA_DIR_NAME: &str = "batchflow-data";

/// Directory (under the home directory) of the external "lite" catalog source.
pub const LITE_DIR_NAME: &str = "keglevel_lite-data";

/// Directory (under the home directory) of the external "monitor" catalog source.
pub const MONITOR_DIR_NAME: &str = "keglevel-data";

/// Maximum length of a user-supplied column title.
pub const MAX_COLUMN_TITLE_LEN: usize = 24;

/// Minimum persisted window width; smaller stored values are clamped up.
pub const MIN_WINDOW_WIDTH: u32 = 800;

/// Minimum persisted window height; smaller stored values are clamped up.
pub const MIN_WINDOW_HEIGHT: u32 = 418;
