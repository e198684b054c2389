use std::path::PathBuf;

use crate::utils::config::DEFAULT_POSITIVE_THRESHOLD;

/// A single query selected by the caller, with its parameters
///
/// **Public** - built by main.rs from CLI args
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// List every review for a park
    Reviews { park: String },

    /// Count reviews for a park from one location
    Count { park: String, location: String },

    /// Average rating for a park in a year
    Average { park: String, year: String },

    /// Average rating per reviewer location
    ByLocation,

    /// Review count per park
    ParkCounts,

    /// Average rating per park
    ParkAverages,

    /// Best-rating reviewer locations for a park
    TopLocations { park: String, top: usize },

    /// Average rating per month for a park
    Monthly { park: String },
}

/// Arguments for the export command
#[derive(Debug, Clone)]
pub struct ExportArgs {
    /// Park to summarize
    pub park: String,

    /// Format tag: csv, txt or json
    pub format: String,

    /// Directory receiving the export file
    pub output_dir: PathBuf,

    /// Keep the previous export as a timestamped backup
    pub backup: bool,

    /// Minimum rating counted as positive
    pub threshold: i64,
}

impl Default for ExportArgs {
    fn default() -> Self {
        Self {
            park: String::new(),
            format: "csv".to_string(),
            output_dir: PathBuf::from("."),
            backup: false,
            threshold: DEFAULT_POSITIVE_THRESHOLD,
        }
    }
}
