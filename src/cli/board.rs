//! Board command: render all four workflow columns with resolved cards.

use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::common::{AppContext, CliError, CliResult};
use crate::models::{BeverageRecord, ALL_STAGES};
use crate::services::LibraryAggregator;

/// Show the workflow board
#[derive(Debug, Clone, Args)]
pub struct BoardArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// One rendered batch card.
#[derive(Debug, Serialize)]
struct CardView {
    id: String,
    name: String,
    style: String,
    abv: String,
    ibu: String,
    source: Option<String>,
    known: bool,
}

#[derive(Debug, Serialize)]
struct ColumnView {
    key: String,
    title: String,
    collapsed: bool,
    cards: Vec<CardView>,
}

#[derive(Debug, Serialize)]
struct BoardResponse {
    columns: Vec<ColumnView>,
}

impl CardView {
    /// Resolves a batch ID against the merged library; an unresolvable ID
    /// still renders (as an orphan card) rather than disappearing.
    fn resolve(id: &str, library: &LibraryAggregator) -> Self {
        match library.get(id) {
            Some(record) => Self::known(id, record),
            None => Self::orphan(id),
        }
    }

    fn known(id: &str, record: &BeverageRecord) -> Self {
        Self {
            id: id.to_string(),
            name: record.name.clone(),
            style: record.bjcp.clone().unwrap_or_default(),
            abv: record.abv_display().to_string(),
            ibu: record.ibu_display().to_string(),
            source: Some(record.source.to_string()),
            known: true,
        }
    }

    fn orphan(id: &str) -> Self {
        let short: String = id.chars().take(8).collect();
        Self {
            id: id.to_string(),
            name: "Unknown Beverage".to_string(),
            style: format!("ID: {short}..."),
            abv: "--".to_string(),
            ibu: "--".to_string(),
            source: None,
            known: false,
        }
    }
}

impl BoardArgs {
    /// Execute the board command
    pub fn execute(&self, data_dir: Option<PathBuf>) -> CliResult<()> {
        let ctx = AppContext::open(data_dir)?;

        let columns: Vec<ColumnView> = ALL_STAGES
            .iter()
            .map(|&stage| ColumnView {
                key: stage.as_str().to_string(),
                title: ctx.workflow.title(stage).to_string(),
                collapsed: ctx.workflow.is_collapsed(stage),
                cards: ctx
                    .workflow
                    .column(stage)
                    .iter()
                    .map(|id| CardView::resolve(id, &ctx.library))
                    .collect(),
            })
            .collect();

        let response = BoardResponse { columns };

        if self.json {
            println!(
                "{}",
                serde_json::to_string(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
            return Ok(());
        }

        for column in &response.columns {
            let marker = if column.collapsed { " [collapsed]" } else { "" };
            println!("{} ({}){}", column.title, column.key, marker);
            if column.cards.is_empty() {
                println!("  (empty)");
            }
            for card in &column.cards {
                let source = card.source.as_deref().unwrap_or("?");
                println!(
                    "  {:<36}  {:<24} {:<20} ABV {:<6} IBU {:<6} [{}]",
                    card.id, card.name, card.style, card.abv, card.ibu, source
                );
            }
            println!();
        }
        Ok(())
    }
}
