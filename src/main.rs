mod cli;

use clap::Parser;
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use versus::error::VersusError;
use versus::types::config::validate_categories;
use versus::{config, records, report, scoring};

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const INVALID_CONFIG: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        Some("error")
    } else {
        match verbose {
            0 => None,
            1 => Some("info"),
            _ => Some("debug"),
        }
    };
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: cli::Cli) -> Result<i32, VersusError> {
    let cwd = Path::new(".");
    match cli.command {
        cli::Commands::Compare(cmd) => {
            let mut tables = config::load_config(cwd, cmd.config.as_deref())?;
            if !cmd.categories.is_empty() {
                validate_categories("--category", &cmd.categories)?;
                info!(categories = ?cmd.categories, "restricting comparison");
                tables = tables.with_categories(cmd.categories.iter().map(|c| c.trim().to_string()));
            }

            let left = records::load_record(&cmd.left)?;
            let right = records::load_record(&cmd.right)?;

            let output_format = match cmd.format {
                cli::ReportFormat::Json => report::OutputFormat::Json,
                cli::ReportFormat::Md => report::OutputFormat::Md,
            };
            if cmd.styles && matches!(output_format, report::OutputFormat::Md) {
                warn!("--styles only affects JSON output");
            }

            let comparison = scoring::compare(&left, &right, &tables, cmd.styles);
            let rendered = report::render(&comparison, output_format)?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Validate(cmd) => {
            let tables = config::load_config(cwd, cmd.config.as_deref())?;
            println!("config: ok");
            println!("ranges: {}", tables.range_count());
            println!("neutral: {}", tables.neutral_count());
            if tables.categories().is_empty() {
                println!("categories: (record order)");
            } else {
                println!("categories: {}", tables.categories().join(", "));
            }

            if cmd.list {
                for (key, range) in tables.sorted_ranges() {
                    let polarity = if range.lower_is_better {
                        "lower is better"
                    } else {
                        "higher is better"
                    };
                    let neutral = if tables.is_neutral(key) { " (neutral)" } else { "" };
                    println!("- {key}: {}..{} {polarity}{neutral}", range.min, range.max);
                }
            }
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            let code = match e {
                VersusError::ConfigParse(_) | VersusError::InvalidKey(_) | VersusError::Toml(_) => {
                    exit_code::INVALID_CONFIG
                }
                _ => exit_code::RUNTIME_FAILURE,
            };
            std::process::exit(code);
        }
    }
}
