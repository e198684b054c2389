//! Output writers for export summaries.
//!
//! This module handles writing summaries to disk in three formats:
//! - CSV (header row plus one data row)
//! - TXT (`FieldName: value` lines)
//! - JSON (pretty-printed object, 4-space indent)
//!
//! Each format has one fixed file name. Writing truncates any previous
//! export at that path unless the caller backs it up first.

pub mod delimited;
pub mod json;
pub mod text;

pub use delimited::write_csv;
pub use json::{read_json, write_json};
pub use text::write_txt;

use crate::export::ExportSummary;
use crate::utils::config::{CSV_EXPORT_FILE, JSON_EXPORT_FILE, TXT_EXPORT_FILE};
use crate::utils::error::ExportError;
use log::{debug, info};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Txt,
    Json,
}

impl ExportFormat {
    /// Fixed output file name for this format
    pub fn file_name(self) -> &'static str {
        match self {
            ExportFormat::Csv => CSV_EXPORT_FILE,
            ExportFormat::Txt => TXT_EXPORT_FILE,
            ExportFormat::Json => JSON_EXPORT_FILE,
        }
    }

    /// Write a summary to `path` in this format
    pub fn write(self, summary: &ExportSummary, path: &Path) -> Result<(), ExportError> {
        match self {
            ExportFormat::Csv => write_csv(summary, path),
            ExportFormat::Txt => write_txt(summary, path),
            ExportFormat::Json => write_json(summary, path),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    /// Tags are matched exactly: `csv`, `txt`, `json`
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "csv" => Ok(ExportFormat::Csv),
            "txt" => Ok(ExportFormat::Txt),
            "json" => Ok(ExportFormat::Json),
            other => Err(ExportError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Txt => "txt",
            ExportFormat::Json => "json",
        };
        f.write_str(tag)
    }
}

/// Validate that an output path is writable and create missing parents
///
/// **Public** - shared by every format writer
pub fn prepare_output_path(path: &Path) -> Result<(), ExportError> {
    validate_path(path)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                ExportError::InvalidPath(format!("Cannot create directory {}: {}", parent.display(), e))
            })?;
        }
    }

    Ok(())
}

/// Reject empty paths and paths that name a directory
pub fn validate_path(path: &Path) -> Result<(), ExportError> {
    if path.as_os_str().is_empty() {
        return Err(ExportError::InvalidPath("Path is empty".to_string()));
    }

    if path.is_dir() {
        return Err(ExportError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Move an existing export aside before it is overwritten
///
/// The backup is named `<file>.<YYYYmmddHHMMSS>.bak` using local time.
///
/// # Returns
/// The backup path, or `None` when there was nothing to back up
pub fn backup_existing(path: &Path) -> Result<Option<PathBuf>, ExportError> {
    if !path.is_file() {
        return Ok(None);
    }

    let stamp = chrono::Local::now().format("%Y%m%d%H%M%S");
    let mut backup = path.as_os_str().to_os_string();
    backup.push(format!(".{}.bak", stamp));
    let backup = PathBuf::from(backup);

    std::fs::rename(path, &backup)?;
    info!("Backed up previous export to: {}", backup.display());

    Ok(Some(backup))
}
