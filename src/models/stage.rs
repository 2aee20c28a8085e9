//! The four fixed workflow stages.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of one of the four fixed workflow columns.
///
/// The set is closed: every column-addressed operation takes a `StageKey`,
/// so an invalid column name is unrepresentable past the parsing edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageKey {
    /// Beverages currently on rotation (being served).
    Rotation,
    /// Queued up next.
    Deck,
    /// Actively fermenting.
    Fermenting,
    /// Lagering or otherwise finishing.
    Finishing,
}

/// All stages in display order (left to right on the board).
pub const ALL_STAGES: [StageKey; 4] = [
    StageKey::Rotation,
    StageKey::Deck,
    StageKey::Fermenting,
    StageKey::Finishing,
];

impl StageKey {
    /// Short lowercase key used in `titles` / `states` settings maps.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            StageKey::Rotation => "rotation",
            StageKey::Deck => "deck",
            StageKey::Fermenting => "fermenting",
            StageKey::Finishing => "finishing",
        }
    }

    /// Key of this column's ID list in the settings file's `columns` map.
    ///
    /// These differ from [`Self::as_str`] for historical reasons; the
    /// settings file predates the short keys.
    #[must_use]
    pub fn columns_key(self) -> &'static str {
        match self {
            StageKey::Rotation => "on_rotation",
            StageKey::Deck => "on_deck",
            StageKey::Fermenting => "fermenting",
            StageKey::Finishing => "lagering_or_finishing",
        }
    }

    /// Default display title before any user rename.
    #[must_use]
    pub fn default_title(self) -> &'static str {
        match self {
            StageKey::Rotation => "Rotation",
            StageKey::Deck => "On Deck",
            StageKey::Fermenting => "Fermenting",
            StageKey::Finishing => "Finishing",
        }
    }
}

impl fmt::Display for StageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StageKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rotation" => Ok(StageKey::Rotation),
            "deck" => Ok(StageKey::Deck),
            "fermenting" => Ok(StageKey::Fermenting),
            "finishing" => Ok(StageKey::Finishing),
            other => Err(format!(
                "Unknown column '{other}' (expected rotation, deck, fermenting, or finishing)"
            )),
        }
    }
}
