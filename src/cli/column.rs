//! Column commands: rename, collapse, and expand workflow columns.

use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::common::{AppContext, CliError, CliResult};
use crate::constants::MAX_COLUMN_TITLE_LEN;
use crate::models::StageKey;

/// Manage workflow columns
#[derive(Debug, Clone, Args)]
pub struct ColumnArgs {
    /// Column subcommand
    #[command(subcommand)]
    pub command: ColumnCommand,
}

/// Column management subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum ColumnCommand {
    /// Rename a column
    Rename(RenameColumnArgs),
    /// Collapse a column
    Collapse(ToggleColumnArgs),
    /// Expand a column
    Expand(ToggleColumnArgs),
}

/// Rename a column
#[derive(Debug, Clone, Args)]
pub struct RenameColumnArgs {
    /// Column key (rotation, deck, fermenting, finishing)
    #[arg(value_name = "COLUMN")]
    pub key: StageKey,

    /// New title (truncated to 24 characters)
    #[arg(value_name = "TITLE")]
    pub title: String,
}

/// Collapse or expand a column
#[derive(Debug, Clone, Args)]
pub struct ToggleColumnArgs {
    /// Column key (rotation, deck, fermenting, finishing)
    #[arg(value_name = "COLUMN")]
    pub key: StageKey,
}

impl ColumnArgs {
    /// Execute the column command
    pub fn execute(&self, data_dir: Option<PathBuf>) -> CliResult<()> {
        match &self.command {
            ColumnCommand::Rename(args) => args.execute(data_dir),
            ColumnCommand::Collapse(args) => args.execute(data_dir, true),
            ColumnCommand::Expand(args) => args.execute(data_dir, false),
        }
    }
}

impl RenameColumnArgs {
    /// Execute the rename command
    pub fn execute(&self, data_dir: Option<PathBuf>) -> CliResult<()> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(CliError::usage("Column title must not be empty"));
        }
        if title.chars().count() > MAX_COLUMN_TITLE_LEN {
            tracing::warn!(limit = MAX_COLUMN_TITLE_LEN, "title truncated");
        }

        let mut ctx = AppContext::open(data_dir)?;
        if !ctx.workflow.rename_column(self.key, title) {
            return Err(CliError::io("Failed to save workflow state"));
        }
        println!("Renamed {} to '{}'", self.key, ctx.workflow.title(self.key));
        Ok(())
    }
}

impl ToggleColumnArgs {
    /// Execute the collapse/expand command
    pub fn execute(&self, data_dir: Option<PathBuf>, collapsed: bool) -> CliResult<()> {
        let mut ctx = AppContext::open(data_dir)?;
        if !ctx.workflow.set_collapsed(self.key, collapsed) {
            return Err(CliError::io("Failed to save workflow state"));
        }
        let state = if collapsed { "collapsed" } else { "expanded" };
        println!("Column {} is now {}", self.key, state);
        Ok(())
    }
}
