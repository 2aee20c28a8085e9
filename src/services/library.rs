//! Multi-source beverage catalog aggregation.
//!
//! Up to three catalog files contribute records: `local` (BatchFlow's own,
//! the only one this service writes), `lite`, and `monitor` (external,
//! read-only). Enabled sources are merged in that fixed order into a single
//! ID-keyed table, with later sources overwriting earlier ones on an ID
//! collision. That precedence is deliberate: the monitoring install is the
//! most authoritative copy of a shared recipe.

use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::config::DataPaths;
use crate::models::{BeverageRecord, SourceFlags, SourceTag};
use crate::services::persist;

/// Merged view over the enabled catalog sources.
///
/// Holds the ID-keyed lookup table, a name-sorted display list, and the
/// availability flags for the two external sources. `load` rebuilds all of
/// it; nothing here raises on a bad or missing file.
#[derive(Debug)]
pub struct LibraryAggregator {
    paths: DataPaths,
    flags: SourceFlags,
    map: BTreeMap<String, BeverageRecord>,
    sorted: Vec<BeverageRecord>,
    has_lite: bool,
    has_monitor: bool,
}

impl LibraryAggregator {
    /// Creates an empty aggregator; call [`Self::load`] to populate it.
    #[must_use]
    pub fn new(paths: DataPaths) -> Self {
        Self {
            paths,
            flags: SourceFlags::default(),
            map: BTreeMap::new(),
            sorted: Vec::new(),
            has_lite: false,
            has_monitor: false,
        }
    }

    /// Rebuilds the merged table from the enabled, available sources.
    ///
    /// Probes the external files for existence, then merges in fixed order
    /// local -> lite -> monitor. A missing or malformed file contributes
    /// zero records (warn-logged); a record without an `id` is skipped
    /// individually. Never fails.
    pub fn load(&mut self, flags: SourceFlags) {
        self.flags = flags;
        self.has_lite = self.paths.lite_library().exists();
        self.has_monitor = self.paths.monitor_library().exists();

        let mut map = BTreeMap::new();

        if flags.use_local {
            merge_file(&mut map, &self.paths.local_library(), SourceTag::Local);
        }
        if flags.use_lite && self.has_lite {
            merge_file(&mut map, &self.paths.lite_library(), SourceTag::Lite);
        }
        if flags.use_monitor && self.has_monitor {
            merge_file(&mut map, &self.paths.monitor_library(), SourceTag::Monitor);
        }

        let mut sorted: Vec<BeverageRecord> = map.values().cloned().collect();
        sorted.sort_by(|a, b| a.name.cmp(&b.name));

        self.map = map;
        self.sorted = sorted;
        tracing::debug!(count = self.sorted.len(), "library merged");
    }

    /// Looks up a record by ID.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&BeverageRecord> {
        self.map.get(id)
    }

    /// All merged records, sorted ascending by name (case-sensitive).
    #[must_use]
    pub fn sorted(&self) -> &[BeverageRecord] {
        &self.sorted
    }

    /// First record (in sorted order) whose name matches exactly.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&BeverageRecord> {
        self.sorted.iter().find(|record| record.name == name)
    }

    /// Whether the "lite" catalog file existed at last load.
    #[must_use]
    pub fn has_lite(&self) -> bool {
        self.has_lite
    }

    /// Whether the "monitor" catalog file existed at last load.
    #[must_use]
    pub fn has_monitor(&self) -> bool {
        self.has_monitor
    }

    /// Upserts a record into the local catalog file by ID.
    ///
    /// Replaces the matching entry in place, or appends when the ID is new,
    /// then reloads the merge so the in-memory view reflects the change.
    /// Returns `false` on any I/O failure, leaving the in-memory view as it
    /// was before the call.
    pub fn save_local(&mut self, record: &BeverageRecord) -> bool {
        let path = self.paths.local_library();
        let mut file = persist::read_object(&path);
        let mut beverages = take_beverage_array(&mut file);

        let encoded = match serde_json::to_value(record) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(id = %record.id, error = %e, "failed to encode beverage");
                return false;
            }
        };

        let existing = beverages
            .iter()
            .position(|entry| entry.get("id").and_then(Value::as_str) == Some(record.id.as_str()));
        match existing {
            Some(index) => beverages[index] = encoded,
            None => beverages.push(encoded),
        }

        file.insert("beverages".to_string(), Value::Array(beverages));
        if let Err(e) = persist::write_object_atomic(&path, &file) {
            tracing::warn!(path = %path.display(), error = %e, "failed to write local catalog");
            return false;
        }

        self.load(self.flags);
        true
    }

    /// Removes the record with the given ID from the local catalog file.
    ///
    /// Returns `false` when the file does not exist, no record matched, or
    /// the rewrite failed. Workflow columns are untouched; the caller
    /// decides whether to also strip the ID from the board.
    pub fn delete_local(&mut self, id: &str) -> bool {
        let path = self.paths.local_library();
        if !path.exists() {
            return false;
        }

        let mut file = persist::read_object(&path);
        let mut beverages = take_beverage_array(&mut file);
        let before = beverages.len();
        beverages.retain(|entry| entry.get("id").and_then(Value::as_str) != Some(id));
        if beverages.len() == before {
            return false;
        }

        file.insert("beverages".to_string(), Value::Array(beverages));
        if let Err(e) = persist::write_object_atomic(&path, &file) {
            tracing::warn!(path = %path.display(), error = %e, "failed to write local catalog");
            return false;
        }

        self.load(self.flags);
        true
    }
}

/// Removes and returns the `beverages` array from a catalog object; a
/// missing or non-array value yields an empty array.
fn take_beverage_array(file: &mut serde_json::Map<String, Value>) -> Vec<Value> {
    match file.remove("beverages") {
        Some(Value::Array(entries)) => entries,
        _ => Vec::new(),
    }
}

/// Merges one catalog file into the ID-keyed map, tagging each record with
/// its source. Any failure means that source contributes zero records.
fn merge_file(map: &mut BTreeMap<String, BeverageRecord>, path: &Path, source: SourceTag) {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!(source = %source, path = %path.display(), error = %e, "catalog unreadable");
            return;
        }
    };

    let parsed: Value = match serde_json::from_str(&content) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(source = %source, path = %path.display(), error = %e, "catalog malformed");
            return;
        }
    };

    let Some(entries) = parsed.get("beverages").and_then(Value::as_array) else {
        tracing::warn!(source = %source, path = %path.display(), "catalog has no beverages array");
        return;
    };

    for entry in entries {
        // Records without an id cannot participate in the merge.
        match serde_json::from_value::<BeverageRecord>(entry.clone()) {
            Ok(mut record) => {
                record.source = source;
                map.insert(record.id.clone(), record);
            }
            Err(e) => {
                tracing::debug!(source = %source, error = %e, "skipping catalog entry");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_catalog(dir: &Path, entries: &str) {
        fs::create_dir_all(dir).unwrap();
        fs::write(
            dir.join("beverages_library.json"),
            format!(r#"{{"beverages": {entries}}}"#),
        )
        .unwrap();
    }

    fn aggregator(temp_dir: &TempDir) -> LibraryAggregator {
        LibraryAggregator::new(DataPaths::with_roots(
            temp_dir.path().join("data"),
            temp_dir.path().join("lite"),
            temp_dir.path().join("monitor"),
        ))
    }

    #[test]
    fn test_merge_precedence_monitor_wins() {
        let temp_dir = TempDir::new().unwrap();
        write_catalog(
            &temp_dir.path().join("data"),
            r#"[{"id": "x", "name": "Local Ale", "abv": "4.0"}]"#,
        );
        write_catalog(
            &temp_dir.path().join("lite"),
            r#"[{"id": "x", "name": "Lite Ale", "abv": "5.0"}]"#,
        );
        write_catalog(
            &temp_dir.path().join("monitor"),
            r#"[{"id": "x", "name": "Monitor Ale", "abv": "6.0"}]"#,
        );

        let mut lib = aggregator(&temp_dir);
        lib.load(SourceFlags::default());

        let record = lib.get("x").unwrap();
        assert_eq!(record.source, SourceTag::Monitor);
        assert_eq!(record.name, "Monitor Ale");
        assert_eq!(record.abv.as_deref(), Some("6.0"));
        assert_eq!(lib.sorted().len(), 1);
    }

    #[test]
    fn test_disabling_a_source_removes_only_its_unique_records() {
        let temp_dir = TempDir::new().unwrap();
        write_catalog(
            &temp_dir.path().join("data"),
            r#"[{"id": "a", "name": "Alpha"}]"#,
        );
        write_catalog(
            &temp_dir.path().join("lite"),
            r#"[{"id": "b", "name": "Beta"}]"#,
        );
        write_catalog(
            &temp_dir.path().join("monitor"),
            r#"[{"id": "c", "name": "Gamma"}]"#,
        );

        let mut lib = aggregator(&temp_dir);
        lib.load(SourceFlags {
            use_lite: false,
            ..SourceFlags::default()
        });

        assert!(lib.get("a").is_some());
        assert!(lib.get("b").is_none());
        assert!(lib.get("c").is_some());
        assert_eq!(lib.sorted().len(), 2);
    }

    #[test]
    fn test_disabling_local_excludes_the_writable_source() {
        let temp_dir = TempDir::new().unwrap();
        write_catalog(
            &temp_dir.path().join("data"),
            r#"[{"id": "a", "name": "Alpha"}]"#,
        );

        let mut lib = aggregator(&temp_dir);
        lib.load(SourceFlags {
            use_local: false,
            ..SourceFlags::default()
        });

        assert!(lib.get("a").is_none());
        assert!(lib.sorted().is_empty());
    }

    #[test]
    fn test_availability_flags_track_file_presence() {
        let temp_dir = TempDir::new().unwrap();
        write_catalog(&temp_dir.path().join("lite"), "[]");

        let mut lib = aggregator(&temp_dir);
        lib.load(SourceFlags::default());

        assert!(lib.has_lite());
        assert!(!lib.has_monitor());
    }

    #[test]
    fn test_malformed_file_contributes_zero_records() {
        let temp_dir = TempDir::new().unwrap();
        let data_dir = temp_dir.path().join("data");
        fs::create_dir_all(&data_dir).unwrap();
        fs::write(data_dir.join("beverages_library.json"), "{broken").unwrap();
        write_catalog(
            &temp_dir.path().join("lite"),
            r#"[{"id": "b", "name": "Beta"}]"#,
        );

        let mut lib = aggregator(&temp_dir);
        lib.load(SourceFlags::default());

        assert_eq!(lib.sorted().len(), 1);
        assert!(lib.get("b").is_some());
    }

    #[test]
    fn test_records_without_id_are_skipped_individually() {
        let temp_dir = TempDir::new().unwrap();
        write_catalog(
            &temp_dir.path().join("data"),
            r#"[{"name": "No Identity"}, {"id": "ok", "name": "Fine"}]"#,
        );

        let mut lib = aggregator(&temp_dir);
        lib.load(SourceFlags::default());

        assert_eq!(lib.sorted().len(), 1);
        assert!(lib.get("ok").is_some());
    }

    #[test]
    fn test_sorted_list_orders_by_name_case_sensitive() {
        let temp_dir = TempDir::new().unwrap();
        write_catalog(
            &temp_dir.path().join("data"),
            r#"[
                {"id": "1", "name": "amber"},
                {"id": "2", "name": "Zwickel"},
                {"id": "3", "name": "Alt"}
            ]"#,
        );

        let mut lib = aggregator(&temp_dir);
        lib.load(SourceFlags::default());

        let names: Vec<&str> = lib.sorted().iter().map(|r| r.name.as_str()).collect();
        // Uppercase sorts before lowercase in a case-sensitive ordering.
        assert_eq!(names, vec!["Alt", "Zwickel", "amber"]);
    }

    #[test]
    fn test_save_local_upserts_and_reloads() {
        let temp_dir = TempDir::new().unwrap();
        write_catalog(
            &temp_dir.path().join("data"),
            r#"[{"id": "a", "name": "Alpha", "abv": "4.0"}]"#,
        );

        let mut lib = aggregator(&temp_dir);
        lib.load(SourceFlags::default());

        // Replace in place.
        let mut updated = BeverageRecord::new("a", "Alpha Mk2");
        updated.abv = Some("4.5".to_string());
        assert!(lib.save_local(&updated));
        assert_eq!(lib.get("a").unwrap().name, "Alpha Mk2");

        // Append a new ID.
        assert!(lib.save_local(&BeverageRecord::new("b", "Beta")));
        assert_eq!(lib.sorted().len(), 2);

        // The file itself has both records.
        let content =
            fs::read_to_string(temp_dir.path().join("data").join("beverages_library.json"))
                .unwrap();
        let parsed: Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed["beverages"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_save_local_preserves_foreign_record_fields() {
        let temp_dir = TempDir::new().unwrap();
        write_catalog(
            &temp_dir.path().join("data"),
            r#"[{"id": "a", "name": "Alpha", "og": 1.050}]"#,
        );

        let mut lib = aggregator(&temp_dir);
        lib.load(SourceFlags::default());
        assert!(lib.save_local(&BeverageRecord::new("b", "Beta")));

        let content =
            fs::read_to_string(temp_dir.path().join("data").join("beverages_library.json"))
                .unwrap();
        let parsed: Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed["beverages"][0]["og"], serde_json::json!(1.050));
    }

    #[test]
    fn test_delete_local_removes_only_matching_record() {
        let temp_dir = TempDir::new().unwrap();
        write_catalog(
            &temp_dir.path().join("data"),
            r#"[{"id": "a", "name": "Alpha"}, {"id": "b", "name": "Beta"}]"#,
        );

        let mut lib = aggregator(&temp_dir);
        lib.load(SourceFlags::default());

        assert!(lib.delete_local("a"));
        assert!(lib.get("a").is_none());
        assert!(lib.get("b").is_some());

        // Second delete finds nothing.
        assert!(!lib.delete_local("a"));
    }

    #[test]
    fn test_delete_local_without_file_is_a_noop() {
        let temp_dir = TempDir::new().unwrap();
        let mut lib = aggregator(&temp_dir);
        lib.load(SourceFlags::default());

        assert!(!lib.delete_local("ghost"));
    }

    #[test]
    fn test_delete_local_does_not_touch_external_copies() {
        let temp_dir = TempDir::new().unwrap();
        write_catalog(
            &temp_dir.path().join("data"),
            r#"[{"id": "a", "name": "Alpha"}]"#,
        );
        write_catalog(
            &temp_dir.path().join("monitor"),
            r#"[{"id": "a", "name": "Alpha (monitor)"}]"#,
        );

        let mut lib = aggregator(&temp_dir);
        lib.load(SourceFlags::default());

        assert!(lib.delete_local("a"));
        // The monitor copy still wins the merge.
        let record = lib.get("a").unwrap();
        assert_eq!(record.source, SourceTag::Monitor);
    }

    #[test]
    fn test_find_by_name_takes_first_exact_match() {
        let temp_dir = TempDir::new().unwrap();
        write_catalog(
            &temp_dir.path().join("data"),
            r#"[{"id": "1", "name": "Pils"}, {"id": "2", "name": "Pilsner"}]"#,
        );

        let mut lib = aggregator(&temp_dir);
        lib.load(SourceFlags::default());

        assert_eq!(lib.find_by_name("Pils").unwrap().id, "1");
        assert!(lib.find_by_name("pils").is_none());
    }
}
