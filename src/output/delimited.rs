//! CSV summary writer.

use super::prepare_output_path;
use crate::export::ExportSummary;
use crate::utils::error::ExportError;
use log::info;
use std::path::Path;

/// Write a summary as a header row plus one data row
///
/// The header comes from the summary's serde field names.
pub fn write_csv(summary: &ExportSummary, output_path: &Path) -> Result<(), ExportError> {
    info!("Writing CSV summary to: {}", output_path.display());

    prepare_output_path(output_path)?;

    let mut writer = csv::Writer::from_path(output_path)?;
    writer.serialize(summary)?;
    writer.flush()?;

    Ok(())
}
