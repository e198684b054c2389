//! In-memory review dataset.
//!
//! The store is loaded once and never mutated afterwards. Every query
//! builds new derived structures and leaves the records untouched.

pub mod loader;
pub mod record;

pub use record::Record;

use crate::utils::error::LoadError;
use std::io::Read;
use std::path::Path;

/// Ordered, read-only collection of review records (file row order)
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    /// Load the store from a CSV file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        loader::load_file(path.as_ref())
    }

    /// Load the store from an in-memory or streamed CSV source
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LoadError> {
        loader::load_reader(reader)
    }

    /// Build a store from records, numbering rows by position
    pub fn from_records(records: Vec<Record>) -> Self {
        let records = records
            .into_iter()
            .enumerate()
            .map(|(index, mut record)| {
                record.row = index + 1;
                record
            })
            .collect();

        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
