use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "versus",
    version,
    about = "Side-by-side attribute scoring for comparable products"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compare two specification records
    Compare(CompareCommand),
    /// Load and validate the scoring tables
    Validate(ValidateCommand),
}

#[derive(Args)]
pub struct CompareCommand {
    /// JSON record for the left-hand item
    pub left: PathBuf,
    /// JSON record for the right-hand item
    pub right: PathBuf,
    /// Scoring config to use instead of ./versus.toml
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    /// Restrict the comparison to these categories (repeatable)
    #[arg(long = "category")]
    pub categories: Vec<String>,
    /// Include per-value gradient styles (JSON output only)
    #[arg(long)]
    pub styles: bool,
}

#[derive(Args)]
pub struct ValidateCommand {
    /// Scoring config to use instead of ./versus.toml
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Also list every registered range
    #[arg(long)]
    pub list: bool,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
