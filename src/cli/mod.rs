//! CLI command handlers for BatchFlow.
//!
//! This module provides headless, scriptable access to the workflow board
//! and the beverage library for automation and testing; a GUI shell calls
//! the same service layer directly.

pub mod batch;
pub mod board;
pub mod column;
pub mod common;
pub mod library;
pub mod sources;
pub mod styles;

// Re-export types used by main.rs and tests
pub use batch::BatchArgs;
pub use board::BoardArgs;
pub use column::ColumnArgs;
pub use common::{AppContext, CliError, CliResult};
pub use library::LibraryArgs;
pub use sources::SourcesArgs;
pub use styles::StylesArgs;
