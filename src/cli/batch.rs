//! Batch commands: add, move, and remove batches on the workflow board.

use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::common::{AppContext, CliError, CliResult};
use crate::models::StageKey;

/// Manage batches on the workflow board
#[derive(Debug, Clone, Args)]
pub struct BatchArgs {
    /// Batch subcommand
    #[command(subcommand)]
    pub command: BatchCommand,
}

/// Batch management subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum BatchCommand {
    /// Add a batch to a column by exact beverage name
    Add(AddBatchArgs),
    /// Move a batch within or across columns
    Move(MoveBatchArgs),
    /// Remove a batch from a column
    Remove(RemoveBatchArgs),
}

/// Add a batch by beverage name (inserted at the front of the column)
#[derive(Debug, Clone, Args)]
pub struct AddBatchArgs {
    /// Exact beverage name as listed by `library list`
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Destination column (rotation, deck, fermenting, finishing)
    #[arg(long, value_name = "COLUMN")]
    pub to: StageKey,
}

/// Move a batch to a position in a column
#[derive(Debug, Clone, Args)]
pub struct MoveBatchArgs {
    /// Batch ID to move
    #[arg(value_name = "ID")]
    pub id: String,

    /// Source column
    #[arg(long, value_name = "COLUMN")]
    pub from: StageKey,

    /// Destination column (may equal the source for a reorder)
    #[arg(long, value_name = "COLUMN")]
    pub to: StageKey,

    /// Target position; clamped to the destination bounds
    #[arg(long, value_name = "N", default_value_t = 0, allow_negative_numbers = true)]
    pub index: isize,
}

/// Remove a batch from a column
#[derive(Debug, Clone, Args)]
pub struct RemoveBatchArgs {
    /// Batch ID to remove
    #[arg(value_name = "ID")]
    pub id: String,

    /// Column to remove it from
    #[arg(long, value_name = "COLUMN")]
    pub from: StageKey,
}

impl BatchArgs {
    /// Execute the batch command
    pub fn execute(&self, data_dir: Option<PathBuf>) -> CliResult<()> {
        match &self.command {
            BatchCommand::Add(args) => args.execute(data_dir),
            BatchCommand::Move(args) => args.execute(data_dir),
            BatchCommand::Remove(args) => args.execute(data_dir),
        }
    }
}

impl AddBatchArgs {
    /// Execute the add command
    pub fn execute(&self, data_dir: Option<PathBuf>) -> CliResult<()> {
        let mut ctx = AppContext::open(data_dir)?;

        let id = ctx
            .library
            .find_by_name(&self.name)
            .map(|record| record.id.clone())
            .ok_or_else(|| {
                CliError::validation(format!("No beverage named '{}' in the library", self.name))
            })?;

        if !ctx.workflow.insert_front(&id, self.to) {
            return Err(CliError::io("Failed to save workflow state"));
        }
        println!("Added {} ({}) to {}", self.name, id, self.to);
        Ok(())
    }
}

impl MoveBatchArgs {
    /// Execute the move command
    pub fn execute(&self, data_dir: Option<PathBuf>) -> CliResult<()> {
        let mut ctx = AppContext::open(data_dir)?;

        if !ctx
            .workflow
            .move_batch(&self.id, self.from, self.to, self.index)
        {
            return Err(CliError::validation(format!(
                "Batch {} is not in column {}",
                self.id, self.from
            )));
        }
        println!("Moved {} to {} (index {})", self.id, self.to, self.index);
        Ok(())
    }
}

impl RemoveBatchArgs {
    /// Execute the remove command
    pub fn execute(&self, data_dir: Option<PathBuf>) -> CliResult<()> {
        let mut ctx = AppContext::open(data_dir)?;

        if !ctx.workflow.remove(&self.id, self.from) {
            return Err(CliError::validation(format!(
                "Batch {} is not in column {}",
                self.id, self.from
            )));
        }
        println!("Removed {} from {}", self.id, self.from);
        Ok(())
    }
}
