//! Library commands: list the merged catalog and edit the local source.

use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use uuid::Uuid;

use crate::cli::common::{AppContext, CliError, CliResult};
use crate::models::BeverageRecord;

/// Manage the beverage library
#[derive(Debug, Clone, Args)]
pub struct LibraryArgs {
    /// Library subcommand
    #[command(subcommand)]
    pub command: LibraryCommand,
}

/// Library management subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum LibraryCommand {
    /// List the merged library (all enabled sources)
    List(ListLibraryArgs),
    /// Add or update a beverage in the local catalog
    Add(AddBeverageArgs),
    /// Delete a beverage from the local catalog
    Delete(DeleteBeverageArgs),
}

/// List the merged library
#[derive(Debug, Clone, Args)]
pub struct ListLibraryArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Add or update a local beverage
#[derive(Debug, Clone, Args)]
pub struct AddBeverageArgs {
    /// Beverage name
    #[arg(long, value_name = "NAME")]
    pub name: String,

    /// Beverage ID; generated when omitted, reuse to update in place
    #[arg(long, value_name = "ID")]
    pub id: Option<String>,

    /// BJCP style label
    #[arg(long, value_name = "STYLE")]
    pub bjcp: Option<String>,

    /// Alcohol by volume
    #[arg(long, value_name = "ABV")]
    pub abv: Option<String>,

    /// International bitterness units
    #[arg(long, value_name = "IBU")]
    pub ibu: Option<String>,

    /// Color (SRM)
    #[arg(long, value_name = "SRM")]
    pub srm: Option<String>,

    /// Free-form description
    #[arg(long, value_name = "TEXT")]
    pub description: Option<String>,
}

/// Delete a local beverage
#[derive(Debug, Clone, Args)]
pub struct DeleteBeverageArgs {
    /// Beverage ID to delete from the local catalog
    #[arg(value_name = "ID")]
    pub id: String,

    /// Also remove the ID from every workflow column
    #[arg(long)]
    pub everywhere: bool,
}

// JSON response types
#[derive(Debug, Serialize)]
struct LibraryItem {
    id: String,
    name: String,
    bjcp: Option<String>,
    abv: Option<String>,
    ibu: Option<String>,
    source: String,
}

#[derive(Debug, Serialize)]
struct ListLibraryResponse {
    beverages: Vec<LibraryItem>,
    count: usize,
    has_lite: bool,
    has_monitor: bool,
}

impl LibraryArgs {
    /// Execute the library command
    pub fn execute(&self, data_dir: Option<PathBuf>) -> CliResult<()> {
        match &self.command {
            LibraryCommand::List(args) => args.execute(data_dir),
            LibraryCommand::Add(args) => args.execute(data_dir),
            LibraryCommand::Delete(args) => args.execute(data_dir),
        }
    }
}

impl ListLibraryArgs {
    /// Execute the list command
    pub fn execute(&self, data_dir: Option<PathBuf>) -> CliResult<()> {
        let ctx = AppContext::open(data_dir)?;

        let beverages: Vec<LibraryItem> = ctx
            .library
            .sorted()
            .iter()
            .map(|record| LibraryItem {
                id: record.id.clone(),
                name: record.name.clone(),
                bjcp: record.bjcp.clone(),
                abv: record.abv.clone(),
                ibu: record.ibu.clone(),
                source: record.source.to_string(),
            })
            .collect();

        let response = ListLibraryResponse {
            count: beverages.len(),
            has_lite: ctx.library.has_lite(),
            has_monitor: ctx.library.has_monitor(),
            beverages,
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else if response.count == 0 {
            println!("Library is empty.");
        } else {
            println!("Beverages ({}):", response.count);
            println!();
            for item in response.beverages {
                println!(
                    "  {:<36}  {:<24} {:<16} [{}]",
                    item.id,
                    item.name,
                    item.bjcp.unwrap_or_default(),
                    item.source
                );
            }
        }
        Ok(())
    }
}

impl AddBeverageArgs {
    /// Execute the add command
    pub fn execute(&self, data_dir: Option<PathBuf>) -> CliResult<()> {
        if self.name.trim().is_empty() {
            return Err(CliError::usage("Beverage name must not be empty"));
        }

        let mut ctx = AppContext::open(data_dir)?;

        let id = self
            .id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        let mut record = BeverageRecord::new(id.clone(), self.name.trim());
        record.bjcp = self.bjcp.clone();
        record.abv = self.abv.clone();
        record.ibu = self.ibu.clone();
        record.srm = self.srm.clone();
        record.description = self.description.clone();

        if !ctx.library.save_local(&record) {
            return Err(CliError::io("Failed to write local catalog"));
        }
        println!("Saved {} ({})", self.name.trim(), id);
        Ok(())
    }
}

impl DeleteBeverageArgs {
    /// Execute the delete command
    pub fn execute(&self, data_dir: Option<PathBuf>) -> CliResult<()> {
        let mut ctx = AppContext::open(data_dir)?;

        if !ctx.library.delete_local(&self.id) {
            return Err(CliError::validation(format!(
                "No local beverage with id {}",
                self.id
            )));
        }

        // Deleting a record does not implicitly clear the board; the flag
        // makes that cleanup explicit.
        if self.everywhere {
            ctx.workflow.remove_everywhere(&self.id);
        }

        println!("Deleted {}", self.id);
        Ok(())
    }
}
