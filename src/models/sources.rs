//! Persisted catalog-source selection flags.

use serde::{Deserialize, Serialize};

use crate::models::beverage::SourceTag;

/// Which catalog sources participate in the library merge.
///
/// Persisted in the settings file under `library_sources`. Availability of
/// the external sources (whether their files exist on disk) is a separate,
/// derived concern owned by the aggregator and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFlags {
    /// Include BatchFlow's own writable catalog in the merge.
    #[serde(default = "default_true")]
    pub use_local: bool,
    /// Include the external "lite" catalog when present.
    #[serde(default = "default_true")]
    pub use_lite: bool,
    /// Include the external "monitor" catalog when present.
    #[serde(default = "default_true")]
    pub use_monitor: bool,
}

fn default_true() -> bool {
    true
}

impl Default for SourceFlags {
    fn default() -> Self {
        Self {
            use_local: true,
            use_lite: true,
            use_monitor: true,
        }
    }
}

impl SourceFlags {
    /// Whether the given source is enabled.
    #[must_use]
    pub fn is_enabled(&self, source: SourceTag) -> bool {
        match source {
            SourceTag::Local => self.use_local,
            SourceTag::Lite => self.use_lite,
            SourceTag::Monitor => self.use_monitor,
        }
    }

    /// Enables or disables the given source.
    pub fn set_enabled(&mut self, source: SourceTag, enabled: bool) {
        match source {
            SourceTag::Local => self.use_local = enabled,
            SourceTag::Lite => self.use_lite = enabled,
            SourceTag::Monitor => self.use_monitor = enabled,
        }
    }
}
