//! Shared CLI plumbing: typed errors, exit codes, and the application
//! context every command operates on.

use std::fmt;
use std::path::PathBuf;

use crate::config::DataPaths;
use crate::services::{LibraryAggregator, WorkflowStore};

/// Result type for CLI command handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Error raised by a CLI command, mapped to a process exit code.
#[derive(Debug)]
pub enum CliError {
    /// The invocation itself was wrong (bad arguments).
    Usage(String),
    /// The operation's preconditions failed (unknown ID, bad column, ...).
    Validation(String),
    /// A filesystem read or write failed.
    Io(String),
}

impl CliError {
    /// Builds a usage error.
    pub fn usage(message: impl Into<String>) -> Self {
        CliError::Usage(message.into())
    }

    /// Builds a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        CliError::Validation(message.into())
    }

    /// Builds an I/O error.
    pub fn io(message: impl Into<String>) -> Self {
        CliError::Io(message.into())
    }

    /// Process exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => 2,
            CliError::Validation(_) => 3,
            CliError::Io(_) => 4,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Usage(msg) | CliError::Validation(msg) | CliError::Io(msg) => {
                f.write_str(msg)
            }
        }
    }
}

impl std::error::Error for CliError {}

/// Everything a command needs: resolved paths, the workflow store, and the
/// library aggregator already merged per the stored source flags.
pub struct AppContext {
    /// Resolved data locations.
    pub paths: DataPaths,
    /// Workflow board state (loaded).
    pub workflow: WorkflowStore,
    /// Merged beverage library (loaded).
    pub library: LibraryAggregator,
}

impl AppContext {
    /// Opens the application state, mirroring GUI startup: settings first
    /// (for the source flags), then the library merge.
    pub fn open(data_dir: Option<PathBuf>) -> CliResult<Self> {
        let paths = DataPaths::resolve(data_dir)
            .map_err(|e| CliError::io(format!("Failed to resolve data directory: {e}")))?;
        let workflow = WorkflowStore::load(paths.settings_file());
        let mut library = LibraryAggregator::new(paths.clone());
        library.load(workflow.sources());

        Ok(Self {
            paths,
            workflow,
            library,
        })
    }
}
