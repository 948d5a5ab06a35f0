//! Agro Tables CLI
//!
//! Derives summary tables from an agricultural crop production
//! dataset: per-year production extremes and per-crop averages.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use agro_tables::commands::{
    display_schema, display_version, execute_summarize, validate_args, validate_report_file,
    SummarizeArgs,
};

/// Agro Tables - summary tables for crop production datasets
#[derive(Parser, Debug)]
#[command(name = "agro-tables")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Summarize a dataset into the two tables
    Summarize {
        /// Path to the dataset JSON file
        #[arg(short, long)]
        input: PathBuf,

        /// Output path for JSON report (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Suppress table output on stdout
        #[arg(short, long)]
        quiet: bool,
    },

    /// Validate a report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Summarize {
            input,
            output,
            quiet,
        } => {
            let args = SummarizeArgs {
                input,
                output_json: output,
                quiet,
            };

            // Validate args first
            validate_args(&args)?;

            // Execute summarize
            execute_summarize(args)?;
        }

        Commands::Validate { file } => {
            validate_report_file(file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
