//! Window geometry persistence.
//!
//! The GUI shell is the consumer here: it loads the last window geometry
//! before creating its window and saves it on shutdown. Geometry shares the
//! settings file with the workflow state, so both sides use the same
//! read-merge-write discipline.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

use crate::constants::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use crate::services::persist;

/// Last-known window size and position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowGeometry {
    /// Window width in pixels; never below [`MIN_WINDOW_WIDTH`].
    pub width: u32,
    /// Window height in pixels; never below [`MIN_WINDOW_HEIGHT`].
    pub height: u32,
    /// Left screen coordinate; `None` lets the shell pick a position.
    pub left: Option<i32>,
    /// Top screen coordinate; `None` lets the shell pick a position.
    pub top: Option<i32>,
}

impl Default for WindowGeometry {
    fn default() -> Self {
        Self {
            width: MIN_WINDOW_WIDTH,
            height: MIN_WINDOW_HEIGHT,
            left: None,
            top: None,
        }
    }
}

impl WindowGeometry {
    /// Loads geometry from the settings file, clamping stored sizes up to
    /// the minimums. Any read failure or missing section yields defaults.
    #[must_use]
    pub fn load(settings_path: &Path) -> Self {
        let data = persist::read_object(settings_path);
        let Some(window) = data.get("window").and_then(Value::as_object) else {
            return Self::default();
        };

        let width = window
            .get("width")
            .and_then(Value::as_u64)
            .and_then(|w| u32::try_from(w).ok())
            .unwrap_or(MIN_WINDOW_WIDTH)
            .max(MIN_WINDOW_WIDTH);
        let height = window
            .get("height")
            .and_then(Value::as_u64)
            .and_then(|h| u32::try_from(h).ok())
            .unwrap_or(MIN_WINDOW_HEIGHT)
            .max(MIN_WINDOW_HEIGHT);
        let left = window
            .get("left")
            .and_then(Value::as_i64)
            .and_then(|v| i32::try_from(v).ok());
        let top = window
            .get("top")
            .and_then(Value::as_i64)
            .and_then(|v| i32::try_from(v).ok());

        Self {
            width,
            height,
            left,
            top,
        }
    }

    /// Writes the `window` section of the settings file, preserving every
    /// other key. Returns `false` on write failure (logged once).
    pub fn save(&self, settings_path: &Path) -> bool {
        let mut data = persist::read_object(settings_path);

        let clamped = Self {
            width: self.width.max(MIN_WINDOW_WIDTH),
            height: self.height.max(MIN_WINDOW_HEIGHT),
            ..*self
        };
        match serde_json::to_value(clamped) {
            Ok(value) => {
                data.insert("window".to_string(), value);
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to encode window geometry");
                return false;
            }
        }

        match persist::write_object_atomic(settings_path, &data) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(
                    path = %settings_path.display(),
                    error = %e,
                    "failed to save window geometry"
                );
                false
            }
        }
    }
}
