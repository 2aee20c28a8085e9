//! Styles command: print the normalized, sorted style catalog.

use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::common::{CliError, CliResult};
use crate::config::DataPaths;
use crate::services::load_style_catalog;

/// List the style catalog
#[derive(Debug, Clone, Args)]
pub struct StylesArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct StylesResponse {
    styles: Vec<String>,
    count: usize,
}

impl StylesArgs {
    /// Execute the styles command
    pub fn execute(&self, data_dir: Option<PathBuf>) -> CliResult<()> {
        let paths = DataPaths::resolve(data_dir)
            .map_err(|e| CliError::io(format!("Failed to resolve data directory: {e}")))?;
        let styles = load_style_catalog(&paths);

        let response = StylesResponse {
            count: styles.len(),
            styles,
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            for style in &response.styles {
                println!("{style}");
            }
        }
        Ok(())
    }
}
