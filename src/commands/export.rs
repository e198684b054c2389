//! Export command implementation.
//!
//! The export command:
//! 1. Validates the park and format arguments (before the store is loaded)
//! 2. Builds an exporter bound to the loaded store
//! 3. Derives the park summary
//! 4. Writes it to the format's fixed file name

use super::models::ExportArgs;
use crate::export::ParkExporter;
use crate::output::ExportFormat;
use crate::store::RecordStore;
use anyhow::{Context, Result};
use log::{info, warn};
use std::path::PathBuf;

/// Execute the export command
///
/// **Public** - main entry point called from main.rs
///
/// `format` is the tag already resolved by `validate_args`.
///
/// # Returns
/// Path of the written export file
pub fn execute_export(
    store: &RecordStore,
    args: &ExportArgs,
    format: ExportFormat,
) -> Result<PathBuf> {
    let exporter = ParkExporter::new(store)
        .with_positive_threshold(args.threshold)
        .with_output_dir(&args.output_dir)
        .with_backup(args.backup);

    if exporter.count_reviews(&args.park) == 0 {
        warn!("No reviews found for {}; exporting an empty summary", args.park);
    }

    let path = exporter
        .export_as(&args.park, format)
        .with_context(|| format!("Failed to export {} summary for {}", format, args.park))?;

    info!("✓ Summary written to: {}", path.display());

    Ok(path)
}

/// Validate export arguments and resolve the format tag
///
/// **Public** - can be called before execute_export for early validation
pub fn validate_args(args: &ExportArgs) -> Result<ExportFormat> {
    if args.park.is_empty() {
        anyhow::bail!("Park name cannot be empty");
    }

    let format = args.format.parse::<ExportFormat>()?;

    Ok(format)
}
