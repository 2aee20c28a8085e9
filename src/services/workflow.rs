//! Workflow board state and persistence.
//!
//! The [`WorkflowStore`] owns the four ordered columns of batch IDs plus
//! per-column display metadata (title, collapsed flag) and the catalog
//! source-selection flags. Every mutation persists synchronously before the
//! call returns; loading never fails, falling back to defaults key by key.

use serde_json::{Map, Value};
use std::path::PathBuf;

use crate::constants::MAX_COLUMN_TITLE_LEN;
use crate::models::{SourceFlags, SourceTag, StageKey, ALL_STAGES};
use crate::services::persist;

/// In-memory workflow state bound to a settings file.
#[derive(Debug)]
pub struct WorkflowStore {
    settings_path: PathBuf,
    columns: [Vec<String>; 4],
    titles: [String; 4],
    collapsed: [bool; 4],
    sources: SourceFlags,
}

fn slot(stage: StageKey) -> usize {
    match stage {
        StageKey::Rotation => 0,
        StageKey::Deck => 1,
        StageKey::Fermenting => 2,
        StageKey::Finishing => 3,
    }
}

impl WorkflowStore {
    /// Loads workflow state from the settings file.
    ///
    /// A missing, unreadable, or malformed file yields full defaults; a
    /// readable file with missing keys yields per-key defaults. Never fails.
    #[must_use]
    pub fn load(settings_path: PathBuf) -> Self {
        let data = persist::read_object(&settings_path);

        let columns_obj = data.get("columns").and_then(Value::as_object);
        let columns = ALL_STAGES.map(|stage| {
            columns_obj
                .and_then(|obj| obj.get(stage.columns_key()))
                .and_then(Value::as_array)
                .map(|ids| {
                    ids.iter()
                        .filter_map(Value::as_str)
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default()
        });

        let titles_obj = data.get("titles").and_then(Value::as_object);
        let titles = ALL_STAGES.map(|stage| {
            titles_obj
                .and_then(|obj| obj.get(stage.as_str()))
                .and_then(Value::as_str)
                .map_or_else(|| stage.default_title().to_string(), str::to_string)
        });

        let states_obj = data.get("states").and_then(Value::as_object);
        let collapsed = ALL_STAGES.map(|stage| {
            states_obj
                .and_then(|obj| obj.get(stage.as_str()))
                .and_then(Value::as_bool)
                .unwrap_or(false)
        });

        let sources = data
            .get("library_sources")
            .cloned()
            .and_then(|value| serde_json::from_value(value).ok())
            .unwrap_or_default();

        Self {
            settings_path,
            columns,
            titles,
            collapsed,
            sources,
        }
    }

    /// Writes this store's sections of the settings file.
    ///
    /// Read-merge-write: the existing file is read back and only the keys
    /// owned by the workflow store are replaced, so co-owned sections (the
    /// window geometry) survive. Returns `false` on write failure; the
    /// in-memory state is kept and the next successful save persists it.
    pub fn save(&self) -> bool {
        let mut data = persist::read_object(&self.settings_path);

        let mut columns = Map::new();
        let mut titles = Map::new();
        let mut states = Map::new();
        for stage in ALL_STAGES {
            let i = slot(stage);
            columns.insert(
                stage.columns_key().to_string(),
                Value::Array(self.columns[i].iter().cloned().map(Value::String).collect()),
            );
            titles.insert(
                stage.as_str().to_string(),
                Value::String(self.titles[i].clone()),
            );
            states.insert(stage.as_str().to_string(), Value::Bool(self.collapsed[i]));
        }

        data.insert("columns".to_string(), Value::Object(columns));
        data.insert("titles".to_string(), Value::Object(titles));
        data.insert("states".to_string(), Value::Object(states));
        match serde_json::to_value(self.sources) {
            Ok(value) => {
                data.insert("library_sources".to_string(), value);
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to encode source flags");
            }
        }

        match persist::write_object_atomic(&self.settings_path, &data) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(
                    path = %self.settings_path.display(),
                    error = %e,
                    "failed to save workflow state"
                );
                false
            }
        }
    }

    /// Ordered batch IDs of a column.
    #[must_use]
    pub fn column(&self, stage: StageKey) -> &[String] {
        &self.columns[slot(stage)]
    }

    /// Display title of a column.
    #[must_use]
    pub fn title(&self, stage: StageKey) -> &str {
        &self.titles[slot(stage)]
    }

    /// Whether a column is collapsed.
    #[must_use]
    pub fn is_collapsed(&self, stage: StageKey) -> bool {
        self.collapsed[slot(stage)]
    }

    /// Current catalog source-selection flags.
    #[must_use]
    pub fn sources(&self) -> SourceFlags {
        self.sources
    }

    /// Moves a batch within or across columns to the given position.
    ///
    /// The target index is clamped to `[0, len]` of the destination after
    /// the removal, so a same-column call is a pure reorder and an oversize
    /// index appends. Returns `false` without mutation when the ID is not
    /// in the source column; this is the caller's snap-back signal.
    pub fn move_batch(
        &mut self,
        id: &str,
        from: StageKey,
        to: StageKey,
        target_index: isize,
    ) -> bool {
        let from_slot = slot(from);
        let Some(position) = self.columns[from_slot].iter().position(|b| b == id) else {
            return false;
        };
        self.columns[from_slot].remove(position);

        let to_slot = slot(to);
        let len = self.columns[to_slot].len();
        let index = usize::try_from(target_index.max(0)).unwrap_or(0).min(len);
        self.columns[to_slot].insert(index, id.to_string());

        self.save()
    }

    /// Inserts a batch at the front of a column (most recently added first).
    pub fn insert_front(&mut self, id: &str, stage: StageKey) -> bool {
        self.columns[slot(stage)].insert(0, id.to_string());
        self.save()
    }

    /// Removes the first occurrence of a batch from a column.
    ///
    /// A missing ID is a no-op and nothing is persisted.
    pub fn remove(&mut self, id: &str, stage: StageKey) -> bool {
        let column = &mut self.columns[slot(stage)];
        let Some(position) = column.iter().position(|b| b == id) else {
            return false;
        };
        column.remove(position);
        self.save()
    }

    /// Strips a batch ID from all four columns.
    ///
    /// Used when the underlying beverage record is deleted. Persists once
    /// if any column changed.
    pub fn remove_everywhere(&mut self, id: &str) -> bool {
        let mut changed = false;
        for column in &mut self.columns {
            let before = column.len();
            column.retain(|b| b != id);
            changed |= column.len() != before;
        }
        if !changed {
            return false;
        }
        self.save()
    }

    /// Renames a column, truncating to the display limit.
    pub fn rename_column(&mut self, stage: StageKey, new_title: &str) -> bool {
        let title: String = new_title.chars().take(MAX_COLUMN_TITLE_LEN).collect();
        self.titles[slot(stage)] = title;
        self.save()
    }

    /// Collapses or expands a column.
    pub fn set_collapsed(&mut self, stage: StageKey, collapsed: bool) -> bool {
        self.collapsed[slot(stage)] = collapsed;
        self.save()
    }

    /// Enables or disables a catalog source and persists the flags.
    ///
    /// The caller is expected to reload the library aggregator afterwards.
    pub fn set_source_enabled(&mut self, source: SourceTag, enabled: bool) -> bool {
        self.sources.set_enabled(source, enabled);
        self.save()
    }
}
