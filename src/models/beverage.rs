//! Beverage catalog records.
//!
//! A [`BeverageRecord`] is one entry in a catalog file's `beverages` array.
//! Catalog files come from three sources (local, lite, monitor); the source
//! tag is assigned when records are merged and is never written back to disk.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Which catalog file a merged record came from.
///
/// Assigned at merge time by the library aggregator; later sources overwrite
/// earlier ones on ID collision, so `Monitor` has ultimate precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceTag {
    /// BatchFlow's own writable catalog.
    #[default]
    Local,
    /// The external "lite" catalog (read-only).
    Lite,
    /// The external "monitor" catalog (read-only).
    Monitor,
}

impl SourceTag {
    /// Lowercase name as used in file paths and display.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SourceTag::Local => "local",
            SourceTag::Lite => "lite",
            SourceTag::Monitor => "monitor",
        }
    }
}

impl fmt::Display for SourceTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SourceTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "local" => Ok(SourceTag::Local),
            "lite" => Ok(SourceTag::Lite),
            "monitor" => Ok(SourceTag::Monitor),
            other => Err(format!(
                "Unknown source '{other}' (expected local, lite, or monitor)"
            )),
        }
    }
}

/// One beverage catalog entry.
///
/// Identity is `id` (an opaque string, stable across sources). Numeric-ish
/// fields (`abv`, `ibu`, `srm`) appear in the wild as JSON numbers, strings,
/// or null, and are normalized to strings on read. Unknown fields are kept
/// in `extra` so rewriting the local catalog never drops data written by
/// other tools.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeverageRecord {
    /// Stable identity; required for a record to participate in the merge.
    pub id: String,
    /// Display name, also used for lookup-by-name.
    #[serde(default)]
    pub name: String,
    /// BJCP style label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bjcp: Option<String>,
    /// Alcohol by volume, normalized to a string.
    #[serde(
        default,
        deserialize_with = "de_stringish",
        skip_serializing_if = "Option::is_none"
    )]
    pub abv: Option<String>,
    /// International bitterness units, normalized to a string.
    #[serde(
        default,
        deserialize_with = "de_stringish",
        skip_serializing_if = "Option::is_none"
    )]
    pub ibu: Option<String>,
    /// Color (SRM), normalized to a string.
    #[serde(
        default,
        deserialize_with = "de_stringish",
        skip_serializing_if = "Option::is_none"
    )]
    pub srm: Option<String>,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Merge-time origin tag; never persisted.
    #[serde(skip)]
    pub source: SourceTag,
    /// Fields this version of BatchFlow does not model, preserved verbatim.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl BeverageRecord {
    /// Creates a record with the given identity and name; all optional
    /// fields empty, source defaulting to local.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            bjcp: None,
            abv: None,
            ibu: None,
            srm: None,
            description: None,
            source: SourceTag::Local,
            extra: BTreeMap::new(),
        }
    }

    /// ABV for card display; `--` when absent or empty.
    #[must_use]
    pub fn abv_display(&self) -> &str {
        display_or_dashes(self.abv.as_deref())
    }

    /// IBU for card display; `--` when absent or empty.
    #[must_use]
    pub fn ibu_display(&self) -> &str {
        display_or_dashes(self.ibu.as_deref())
    }
}

fn display_or_dashes(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => "--",
    }
}

/// Accepts a JSON string, number, or null and yields an optional string.
fn de_stringish<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        Some(other) => Some(other.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_numeric_fields_as_numbers() {
        let record: BeverageRecord =
            serde_json::from_str(r#"{"id": "b1", "name": "Alt", "abv": 5.2, "ibu": 38}"#).unwrap();

        assert_eq!(record.abv.as_deref(), Some("5.2"));
        assert_eq!(record.ibu.as_deref(), Some("38"));
        assert_eq!(record.source, SourceTag::Local);
    }

    #[test]
    fn test_decode_numeric_fields_as_strings_or_null() {
        let record: BeverageRecord =
            serde_json::from_str(r#"{"id": "b1", "name": "Alt", "abv": "5.2%", "ibu": null}"#)
                .unwrap();

        assert_eq!(record.abv.as_deref(), Some("5.2%"));
        assert_eq!(record.ibu, None);
        assert_eq!(record.ibu_display(), "--");
    }

    #[test]
    fn test_unknown_fields_round_trip() {
        let json = r#"{"id": "b1", "name": "Alt", "og": 1.048, "keg": "left"}"#;
        let record: BeverageRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.extra.len(), 2);

        let out = serde_json::to_value(&record).unwrap();
        assert_eq!(out["og"], serde_json::json!(1.048));
        assert_eq!(out["keg"], serde_json::json!("left"));
        // The merge-time tag must never be written back.
        assert!(out.get("source").is_none());
    }

    #[test]
    fn test_missing_id_is_a_decode_error() {
        let result: Result<BeverageRecord, _> = serde_json::from_str(r#"{"name": "Alt"}"#);
        assert!(result.is_err());
    }
}
