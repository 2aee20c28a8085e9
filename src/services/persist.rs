//! Shared JSON persistence helpers for the settings file.
//!
//! The settings file has two logical owners (workflow state and window
//! geometry). Both go through these helpers: read the whole object back,
//! replace only the keys you own, write the merged object atomically. That
//! discipline is what keeps one owner's save from clobbering the other's
//! last-written section.

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Reads the settings file as a JSON object.
///
/// A missing, unreadable, or malformed file yields an empty object; the
/// failure is logged at debug level since it is routine on first run.
pub fn read_object(path: &Path) -> Map<String, Value> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "settings file not readable");
            return Map::new();
        }
    };

    match serde_json::from_str::<Value>(&content) {
        Ok(Value::Object(map)) => map,
        Ok(_) => {
            tracing::warn!(path = %path.display(), "settings file is not a JSON object");
            Map::new()
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "settings file is malformed");
            Map::new()
        }
    }
}

/// Writes a JSON object to `path` using the temp file + rename pattern.
pub fn write_object_atomic(path: &Path, object: &Map<String, Value>) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context(format!(
            "Failed to create directory: {}",
            parent.display()
        ))?;
    }

    let content = serde_json::to_string_pretty(&Value::Object(object.clone()))
        .context("Failed to serialize settings")?;

    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, content).context(format!(
        "Failed to write temp settings file: {}",
        temp_path.display()
    ))?;
    fs::rename(&temp_path, path).context(format!(
        "Failed to rename temp settings file to: {}",
        path.display()
    ))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_missing_file_yields_empty_object() {
        let temp_dir = TempDir::new().unwrap();
        let map = read_object(&temp_dir.path().join("absent.json"));
        assert!(map.is_empty());
    }

    #[test]
    fn test_read_malformed_file_yields_empty_object() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        fs::write(&path, "{not json").unwrap();

        assert!(read_object(&path).is_empty());
    }

    #[test]
    fn test_read_non_object_yields_empty_object() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        assert!(read_object(&path).is_empty());
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");

        let mut map = Map::new();
        map.insert("answer".to_string(), serde_json::json!(42));
        write_object_atomic(&path, &map).unwrap();

        let loaded = read_object(&path);
        assert_eq!(loaded.get("answer"), Some(&serde_json::json!(42)));
        // No temp file left behind.
        assert!(!path.with_extension("json.tmp").exists());
    }
}
