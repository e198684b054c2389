//! JSON summary writer.
//!
//! Writes one pretty-printed object with a 4-space indent.

use super::prepare_output_path;
use crate::export::ExportSummary;
use crate::utils::config::JSON_INDENT;
use crate::utils::error::ExportError;
use log::{debug, info};
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Write a summary to a JSON file, replacing any existing file
///
/// # Errors
/// * `ExportError::InvalidPath` - path is empty or a directory
/// * `ExportError::WriteFailed` - I/O error during write
/// * `ExportError::SerializationFailed` - JSON serialization error
///
/// # Example
/// ```ignore
/// let summary = exporter.summarize("Disneyland_Paris")?;
/// write_json(&summary, Path::new("park_reviews.json"))?;
/// ```
pub fn write_json(summary: &ExportSummary, output_path: &Path) -> Result<(), ExportError> {
    info!("Writing JSON summary to: {}", output_path.display());

    prepare_output_path(output_path)?;

    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);

    let formatter = serde_json::ser::PrettyFormatter::with_indent(JSON_INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
    summary.serialize(&mut serializer)?;

    writer.flush()?;

    debug!("JSON summary written for {}", summary.park);

    Ok(())
}

/// Read a summary back from a JSON file
///
/// **Public** - useful for validation and testing
pub fn read_json(input_path: &Path) -> Result<ExportSummary, ExportError> {
    let file = File::open(input_path)?;
    let summary = serde_json::from_reader(BufReader::new(file))?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn create_test_summary() -> ExportSummary {
        ExportSummary {
            park: "ParkA".to_string(),
            reviews: 2,
            positive_reviews: 1,
            average_score: 3.0,
            countries: 2,
        }
    }

    #[test]
    fn test_write_json_layout() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("park_reviews.json");

        write_json(&create_test_summary(), &path).unwrap();

        let expected = "{\n    \"Park\": \"ParkA\",\n    \"Number of Reviews\": 2,\n    \"Number of Positive Reviews\": 1,\n    \"Average Review Score\": 3.0,\n    \"Number of Countries That Reviewed\": 2\n}";
        assert_eq!(std::fs::read_to_string(&path).unwrap(), expected);
    }

    #[test]
    fn test_write_and_read_json() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("park_reviews.json");
        let summary = create_test_summary();

        write_json(&summary, &path).unwrap();

        assert_eq!(read_json(&path).unwrap(), summary);
    }

    #[test]
    fn test_write_json_to_directory_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = write_json(&create_test_summary(), temp_dir.path());
        assert!(matches!(result, Err(ExportError::InvalidPath(_))));
    }
}
