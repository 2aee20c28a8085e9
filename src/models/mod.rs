//! Data models for beverages, workflow stages, and source selection.
//!
//! This module contains the core data structures used throughout the
//! application. Models are independent of I/O and business logic.

pub mod beverage;
pub mod sources;
pub mod stage;

// Re-export all model types
pub use beverage::{BeverageRecord, SourceTag};
pub use sources::SourceFlags;
pub use stage::{StageKey, ALL_STAGES};
