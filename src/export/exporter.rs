//! Per-park summary exporter.
//!
//! One exporter is built per export action. It borrows the store
//! read-only, derives four statistics for a park, and writes them to the
//! fixed file name of the requested format.

use super::summary::ExportSummary;
use crate::aggregator::{filter_by, mean_rating, Predicate};
use crate::output::{backup_existing, ExportFormat};
use crate::store::{Record, RecordStore};
use crate::utils::config::DEFAULT_POSITIVE_THRESHOLD;
use crate::utils::error::{ExportError, ParseError};
use log::{debug, info};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Derives and writes export summaries for single parks
#[derive(Debug, Clone)]
pub struct ParkExporter<'a> {
    store: &'a RecordStore,
    positive_threshold: i64,
    output_dir: PathBuf,
    backup: bool,
}

impl<'a> ParkExporter<'a> {
    /// Bind an exporter to the store, writing into the current directory
    pub fn new(store: &'a RecordStore) -> Self {
        Self {
            store,
            positive_threshold: DEFAULT_POSITIVE_THRESHOLD,
            output_dir: PathBuf::new(),
            backup: false,
        }
    }

    /// Minimum rating counted as positive
    pub fn with_positive_threshold(mut self, threshold: i64) -> Self {
        self.positive_threshold = threshold;
        self
    }

    /// Directory that receives the export files
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Rename an existing export to a timestamped `.bak` before overwriting
    pub fn with_backup(mut self, backup: bool) -> Self {
        self.backup = backup;
        self
    }

    /// Path an export in `format` is written to
    pub fn output_path(&self, format: ExportFormat) -> PathBuf {
        self.output_dir.join(format.file_name())
    }

    fn park_reviews(&self, park: &str) -> Vec<&'a Record> {
        filter_by(self.store, &Predicate::new().park(park))
    }

    /// Number of reviews for the park
    pub fn count_reviews(&self, park: &str) -> usize {
        self.park_reviews(park).len()
    }

    /// Number of reviews rated at or above the positive threshold
    pub fn count_positive_reviews(&self, park: &str) -> Result<usize, ParseError> {
        let mut positive = 0;
        for record in self.park_reviews(park) {
            if record.rating_value()? >= self.positive_threshold {
                positive += 1;
            }
        }
        Ok(positive)
    }

    /// Mean rating for the park
    ///
    /// Returns `0.0` when the park has no reviews. That value is also what a
    /// park whose ratings really average zero produces; callers that need
    /// to tell the two apart should check `count_reviews` first.
    pub fn average_review_score(&self, park: &str) -> Result<f64, ParseError> {
        Ok(mean_rating(self.park_reviews(park))?.unwrap_or(0.0))
    }

    /// Number of distinct reviewer locations for the park
    pub fn count_countries_reviewed(&self, park: &str) -> usize {
        self.park_reviews(park)
            .iter()
            .map(|r| r.reviewer_location.as_str())
            .collect::<HashSet<_>>()
            .len()
    }

    /// Compute the export summary for a park
    pub fn summarize(&self, park: &str) -> Result<ExportSummary, ParseError> {
        let summary = ExportSummary {
            park: park.to_string(),
            reviews: self.count_reviews(park),
            positive_reviews: self.count_positive_reviews(park)?,
            average_score: self.average_review_score(park)?,
            countries: self.count_countries_reviewed(park),
        };

        debug!("Summary for {}: {:?}", park, summary);

        Ok(summary)
    }

    /// Summarize a park and write it in the format named by `format_tag`
    ///
    /// The format is checked before anything is computed or written.
    /// The target file is replaced unconditionally unless backups are on.
    ///
    /// # Returns
    /// Path of the written file
    ///
    /// # Errors
    /// * `ExportError::UnsupportedFormat` - tag is not `csv`, `txt` or `json`; nothing written
    /// * `ExportError::Parse` - a review for the park has a non-integer rating
    /// * I/O, CSV and JSON errors from the format writer
    pub fn export(&self, park: &str, format_tag: &str) -> Result<PathBuf, ExportError> {
        let format: ExportFormat = format_tag.parse()?;
        self.export_as(park, format)
    }

    /// Summarize a park and write it in an already-parsed format
    pub fn export_as(&self, park: &str, format: ExportFormat) -> Result<PathBuf, ExportError> {
        let summary = self.summarize(park)?;
        let path = self.output_path(format);

        self.write_summary(&summary, format, &path)?;

        info!("Exported {} summary for {} to {}", format, park, path.display());

        Ok(path)
    }

    fn write_summary(
        &self,
        summary: &ExportSummary,
        format: ExportFormat,
        path: &Path,
    ) -> Result<(), ExportError> {
        if self.backup {
            backup_existing(path)?;
        }
        format.write(summary, path)
    }
}
