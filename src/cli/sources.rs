//! Source commands: show and toggle catalog source selection.

use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use std::str::FromStr;

use crate::cli::common::{AppContext, CliError, CliResult};
use crate::models::SourceTag;

/// Manage catalog sources
#[derive(Debug, Clone, Args)]
pub struct SourcesArgs {
    /// Sources subcommand
    #[command(subcommand)]
    pub command: SourcesCommand,
}

/// Source management subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum SourcesCommand {
    /// Show source flags and availability
    Show(ShowSourcesArgs),
    /// Enable or disable a source
    Set(SetSourceArgs),
}

/// Show source flags and availability
#[derive(Debug, Clone, Args)]
pub struct ShowSourcesArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Enable or disable a source
#[derive(Debug, Clone, Args)]
pub struct SetSourceArgs {
    /// Source to change (local, lite, monitor)
    #[arg(value_name = "SOURCE")]
    pub source: SourceTag,

    /// New state (on, off)
    #[arg(value_name = "STATE")]
    pub state: Toggle,
}

/// An on/off argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    /// Enable.
    On,
    /// Disable.
    Off,
}

impl FromStr for Toggle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "on" | "true" => Ok(Toggle::On),
            "off" | "false" => Ok(Toggle::Off),
            other => Err(format!("Expected 'on' or 'off', got '{other}'")),
        }
    }
}

// JSON response type
#[derive(Debug, Serialize)]
struct SourcesResponse {
    use_local: bool,
    use_lite: bool,
    use_monitor: bool,
    has_lite: bool,
    has_monitor: bool,
    merged_count: usize,
}

fn response(ctx: &AppContext) -> SourcesResponse {
    let flags = ctx.workflow.sources();
    SourcesResponse {
        use_local: flags.use_local,
        use_lite: flags.use_lite,
        use_monitor: flags.use_monitor,
        has_lite: ctx.library.has_lite(),
        has_monitor: ctx.library.has_monitor(),
        merged_count: ctx.library.sorted().len(),
    }
}

fn print_response(json: bool, response: &SourcesResponse) -> CliResult<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string(response)
                .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
        );
        return Ok(());
    }

    let flag = |enabled: bool| if enabled { "on" } else { "off" };
    let presence = |available: bool| if available { "present" } else { "absent" };
    println!("local    {}", flag(response.use_local));
    println!(
        "lite     {} ({})",
        flag(response.use_lite),
        presence(response.has_lite)
    );
    println!(
        "monitor  {} ({})",
        flag(response.use_monitor),
        presence(response.has_monitor)
    );
    println!("merged beverages: {}", response.merged_count);
    Ok(())
}

impl SourcesArgs {
    /// Execute the sources command
    pub fn execute(&self, data_dir: Option<PathBuf>) -> CliResult<()> {
        match &self.command {
            SourcesCommand::Show(args) => args.execute(data_dir),
            SourcesCommand::Set(args) => args.execute(data_dir),
        }
    }
}

impl ShowSourcesArgs {
    /// Execute the show command
    pub fn execute(&self, data_dir: Option<PathBuf>) -> CliResult<()> {
        let ctx = AppContext::open(data_dir)?;
        print_response(self.json, &response(&ctx))
    }
}

impl SetSourceArgs {
    /// Execute the set command
    pub fn execute(&self, data_dir: Option<PathBuf>) -> CliResult<()> {
        let mut ctx = AppContext::open(data_dir)?;

        let enabled = self.state == Toggle::On;
        if !ctx.workflow.set_source_enabled(self.source, enabled) {
            return Err(CliError::io("Failed to save workflow state"));
        }
        // Re-merge immediately so the reported count reflects the change.
        ctx.library.load(ctx.workflow.sources());

        print_response(false, &response(&ctx))
    }
}
