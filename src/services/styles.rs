//! Style catalog loading.
//!
//! An independent, read-only taxonomy of beverage style names (BJCP-like)
//! used to populate style pickers. The catalog is probed from a fixed set
//! of candidate files, tolerates several container shapes found in the
//! wild, and falls back to a small built-in list when nothing usable is
//! found. It has no write path and no connection to the beverage merge.

use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::config::DataPaths;

/// Container keys under which a style list may be wrapped.
const WRAPPER_KEYS: [&str; 4] = ["styles", "beverages", "entries", "class"];

/// Keys scanned for a style code, in preference order.
const CODE_KEYS: [&str; 4] = ["code", "bjcp", "id", "num"];

/// Keys scanned for a style name, in preference order.
const NAME_KEYS: [&str; 4] = ["name", "style", "title", "label"];

/// Shipped fallback when no style catalog can be located or parsed.
const DEFAULT_STYLES: [&str; 8] = [
    "1A - American Light Lager",
    "4B - Festbier",
    "10A - Weissbier",
    "13B - British Brown Ale",
    "18B - American Pale Ale",
    "20B - American Stout",
    "21A - American IPA",
    "23A - Berliner Weisse",
];

/// Loads the style catalog from the first usable candidate file.
///
/// Candidates are probed in the order given by
/// [`DataPaths::style_catalog_candidates`]; the first one that parses into
/// a non-empty list wins. Entries are normalized to `"<code> - <name>"`
/// (or the bare name when no code is found) and sorted numerically by
/// code. On total failure the built-in default list is returned.
#[must_use]
pub fn load_style_catalog(paths: &DataPaths) -> Vec<String> {
    for candidate in paths.style_catalog_candidates() {
        if let Some(mut styles) = parse_catalog_file(&candidate) {
            if !styles.is_empty() {
                tracing::debug!(path = %candidate.display(), count = styles.len(), "style catalog loaded");
                sort_styles(&mut styles);
                return styles;
            }
        }
    }

    tracing::debug!("no style catalog found, using built-in defaults");
    let mut styles: Vec<String> = DEFAULT_STYLES.iter().map(ToString::to_string).collect();
    sort_styles(&mut styles);
    styles
}

/// Parses one candidate file into normalized display strings.
///
/// Returns `None` when the file is missing, unreadable, or not shaped like
/// a style list.
fn parse_catalog_file(path: &Path) -> Option<Vec<String>> {
    let content = fs::read_to_string(path).ok()?;
    let parsed: Value = match serde_json::from_str(&content) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "style catalog malformed");
            return None;
        }
    };

    let entries = style_entries(&parsed)?;
    Some(entries.iter().filter_map(normalize_entry).collect())
}

/// Accepts a bare list or an object wrapped under a known key.
fn style_entries(value: &Value) -> Option<&Vec<Value>> {
    match value {
        Value::Array(entries) => Some(entries),
        Value::Object(map) => WRAPPER_KEYS
            .iter()
            .find_map(|key| map.get(*key).and_then(Value::as_array)),
        _ => None,
    }
}

/// Normalizes one entry to `"<code> - <name>"` or a bare name.
fn normalize_entry(entry: &Value) -> Option<String> {
    match entry {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Object(map) => {
            let name = NAME_KEYS
                .iter()
                .find_map(|key| map.get(*key).and_then(Value::as_str))
                .filter(|s| !s.is_empty())?;

            let code = CODE_KEYS.iter().find_map(|key| {
                map.get(*key)
                    .and_then(Value::as_str)
                    .filter(|candidate| looks_like_style_code(candidate))
            });

            Some(match code {
                Some(code) => format!("{code} - {name}"),
                None => name.to_string(),
            })
        }
        _ => None,
    }
}

/// A style code is short, alphanumeric, and contains at least one digit.
fn looks_like_style_code(candidate: &str) -> bool {
    !candidate.is_empty()
        && candidate.len() < 6
        && candidate.chars().all(char::is_alphanumeric)
        && candidate.chars().any(|c| c.is_ascii_digit())
}

/// Sorts styles by leading code number ascending, then alphabetic suffix.
///
/// Entries without a parseable numeric code sort last, keeping their
/// original relative order (the sort is stable).
pub fn sort_styles(styles: &mut [String]) {
    styles.sort_by(|a, b| match (style_sort_key(a), style_sort_key(b)) {
        (Some(ka), Some(kb)) => ka.cmp(&kb),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
}

/// Parses `"21A - American IPA"` into `(21, "A")`; `None` when the leading
/// token has no numeric portion.
fn style_sort_key(style: &str) -> Option<(u64, String)> {
    let token: String = style
        .chars()
        .take_while(|c| c.is_alphanumeric())
        .collect();
    let digits: String = token.chars().take_while(char::is_ascii_digit).collect();
    let number: u64 = digits.parse().ok()?;
    let suffix: String = token.chars().skip(digits.len()).collect();
    Some((number, suffix))
}
