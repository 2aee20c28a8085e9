//! BatchFlow - beverage batch workflow tracker
//!
//! Tracks production batches across four workflow stages (rotation, on
//! deck, fermenting, finishing) with a beverage library merged from up to
//! three catalog sources.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use batchflow::cli::{BatchArgs, BoardArgs, ColumnArgs, LibraryArgs, SourcesArgs, StylesArgs};

/// BatchFlow - beverage batch workflow tracker
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Override the data directory (default: ~/batchflow-data)
    #[arg(long, value_name = "DIR", global = true)]
    data_dir: Option<PathBuf>,

    /// Command to run
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
enum Commands {
    /// Show the workflow board
    Board(BoardArgs),
    /// Manage batches on the board
    Batch(BatchArgs),
    /// Manage workflow columns
    Column(ColumnArgs),
    /// Manage the beverage library
    Library(LibraryArgs),
    /// Manage catalog sources
    Sources(SourcesArgs),
    /// List the style catalog
    Styles(StylesArgs),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let data_dir = cli.data_dir.clone();

    let result = match cli.command {
        Commands::Board(args) => args.execute(data_dir),
        Commands::Batch(args) => args.execute(data_dir),
        Commands::Column(args) => args.execute(data_dir),
        Commands::Library(args) => args.execute(data_dir),
        Commands::Sources(args) => args.execute(data_dir),
        Commands::Styles(args) => args.execute(data_dir),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}
