//! CSV loader for the review dataset.
//!
//! Reads a header row plus one row per review. Rows whose field count
//! differs from the header are rejected; there is no partial-row handling.

use super::record::Record;
use super::RecordStore;
use crate::utils::config::{BRANCH_FIELD, LOCATION_FIELD, RATING_FIELD, REQUIRED_FIELDS, YEAR_MONTH_FIELD};
use crate::utils::error::LoadError;
use csv::ByteRecord;
use log::{debug, info, warn};
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Column positions of the recognized fields within the header
struct ColumnIndex {
    branch: usize,
    location: usize,
    rating: usize,
    year_month: usize,
    headers: Vec<String>,
}

impl ColumnIndex {
    fn resolve(headers: Vec<String>) -> Result<Self, LoadError> {
        let position = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| LoadError::MissingColumn(name.to_string()))
        };

        Ok(Self {
            branch: position(BRANCH_FIELD)?,
            location: position(LOCATION_FIELD)?,
            rating: position(RATING_FIELD)?,
            year_month: position(YEAR_MONTH_FIELD)?,
            headers,
        })
    }

    fn is_recognized(&self, column: usize) -> bool {
        column == self.branch
            || column == self.location
            || column == self.rating
            || column == self.year_month
    }

    fn build(&self, row: usize, values: Vec<String>) -> Record {
        let mut record = Record::new(
            values[self.branch].clone(),
            values[self.location].clone(),
            values[self.rating].clone(),
            values[self.year_month].clone(),
        );
        record.row = row;
        record.extra = values
            .into_iter()
            .enumerate()
            .filter(|(column, _)| !self.is_recognized(*column))
            .map(|(column, value)| (self.headers[column].clone(), value))
            .collect();
        record
    }
}

/// Load a record store from a CSV file on disk
///
/// **Public** - main entry point for loading
///
/// # Errors
/// * `LoadError::NotFound` - path does not exist
/// * `LoadError::Io` / `LoadError::Csv` - file unreadable or not CSV
/// * `LoadError::MissingColumn` - header lacks a recognized field
/// * `LoadError::MalformedRow` - a row's field count differs from the header
pub fn load_file(path: &Path) -> Result<RecordStore, LoadError> {
    info!("Loading reviews from: {}", path.display());

    if !path.exists() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }

    let file = File::open(path)?;
    let store = load_reader(BufReader::new(file))?;

    info!("Dataset loaded with {} rows", store.len());

    Ok(store)
}

/// Load a record store from any CSV byte stream
///
/// Non-UTF-8 bytes are replaced rather than rejected, since review
/// exports are frequently latin-1 encoded.
pub fn load_reader<R: Read>(reader: R) -> Result<RecordStore, LoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader
        .byte_headers()?
        .iter()
        .map(|field| decode_field(field, 0))
        .collect();

    debug!("Header columns: {:?}", headers);
    debug!("Required columns: {:?}", REQUIRED_FIELDS);

    let columns = ColumnIndex::resolve(headers)?;
    let expected = columns.headers.len();

    let mut records = Vec::new();
    let mut raw = ByteRecord::new();
    let mut row = 0;

    while csv_reader.read_byte_record(&mut raw)? {
        row += 1;

        if raw.len() != expected {
            return Err(LoadError::MalformedRow {
                row,
                expected,
                found: raw.len(),
            });
        }

        let values = raw.iter().map(|field| decode_field(field, row)).collect();
        records.push(columns.build(row, values));
    }

    debug!("Parsed {} records", records.len());

    Ok(RecordStore::from_records(records))
}

/// Decode a raw field, replacing invalid UTF-8 sequences
///
/// **Private** - internal helper for load_reader
fn decode_field(field: &[u8], row: usize) -> String {
    match String::from_utf8_lossy(field) {
        Cow::Borrowed(text) => text.to_string(),
        Cow::Owned(text) => {
            warn!("Row {} contains invalid UTF-8; replaced undecodable bytes", row);
            text
        }
    }
}
