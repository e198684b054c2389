//! Park Review Analyzer CLI
//!
//! Loads a theme-park review dataset and answers one query or
//! exports one park summary per invocation.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use park_review_analyzer::commands::{
    display_version, execute_export, load_store, run_query, validate_args, ExportArgs, Query,
};
use park_review_analyzer::utils::config::{
    DATA_PATH_ENV, DEFAULT_DATA_PATH, DEFAULT_POSITIVE_THRESHOLD, DEFAULT_TOP_N,
};

/// Park Review Analyzer - queries and exports over theme-park reviews
#[derive(Parser, Debug)]
#[command(name = "park-reviews")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Path to the review CSV file
    #[arg(short, long, global = true, env = DATA_PATH_ENV, default_value = DEFAULT_DATA_PATH)]
    data: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// View all reviews for a park
    Reviews {
        /// Park name (exact match)
        #[arg(short, long)]
        park: String,
    },

    /// Number of reviews for a park from a reviewer location
    Count {
        #[arg(short, long)]
        park: String,

        #[arg(short, long)]
        location: String,
    },

    /// Average score for a park in a year
    Average {
        #[arg(short, long)]
        park: String,

        /// Year, matched as a prefix of Year_Month
        #[arg(short, long)]
        year: String,
    },

    /// Average score per reviewer location
    ByLocation,

    /// Review count per park
    ParkCounts,

    /// Average score per park
    ParkAverages,

    /// Reviewer locations ranked by average score for a park
    TopLocations {
        #[arg(short, long)]
        park: String,

        /// Number of locations to show
        #[arg(long, default_value_t = DEFAULT_TOP_N)]
        top: usize,
    },

    /// Average score per month for a park
    Monthly {
        #[arg(short, long)]
        park: String,
    },

    /// Export a park summary to park_reviews.<format>
    Export {
        #[arg(short, long)]
        park: String,

        /// Output format: csv, txt or json
        #[arg(short, long, default_value = "csv")]
        format: String,

        /// Directory for the export file
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,

        /// Keep the previous export as a timestamped .bak file
        #[arg(long)]
        backup: bool,

        /// Minimum rating counted as positive
        #[arg(long, default_value_t = DEFAULT_POSITIVE_THRESHOLD)]
        threshold: i64,
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

    let query = match cli.command {
        Commands::Reviews { park } => Query::Reviews { park },
        Commands::Count { park, location } => Query::Count { park, location },
        Commands::Average { park, year } => Query::Average { park, year },
        Commands::ByLocation => Query::ByLocation,
        Commands::ParkCounts => Query::ParkCounts,
        Commands::ParkAverages => Query::ParkAverages,
        Commands::TopLocations { park, top } => Query::TopLocations { park, top },
        Commands::Monthly { park } => Query::Monthly { park },

        Commands::Export {
            park,
            format,
            output_dir,
            backup,
            threshold,
        } => {
            let args = ExportArgs {
                park,
                format,
                output_dir,
                backup,
                threshold,
            };

            // Reject bad arguments before touching the data file
            let format = validate_args(&args)?;

            let store = load_store(&cli.data)?;
            let path = execute_export(&store, &args, format)?;
            println!("Exported summary for {} to {}", args.park, path.display());
            return Ok(());
        }

        Commands::Version => {
            display_version();
            return Ok(());
        }
    };

    let store = load_store(&cli.data)?;
    println!("{}", run_query(&store, &query)?);

    Ok(())
}
