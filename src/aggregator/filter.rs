//! Record filtering shared by every query.
//!
//! Matching is exact: case-sensitive and without trimming. A park name
//! with different casing or trailing whitespace matches nothing.

use crate::store::{Record, RecordStore};

/// Conjunction of optional field tests
///
/// An empty predicate matches every record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Predicate {
    pub park: Option<String>,
    pub location: Option<String>,
    pub year_prefix: Option<String>,
}

impl Predicate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require `Branch` to equal `park`
    pub fn park(mut self, park: impl Into<String>) -> Self {
        self.park = Some(park.into());
        self
    }

    /// Require `Reviewer_Location` to equal `location`
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Require `Year_Month` to start with `prefix`
    pub fn year_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.year_prefix = Some(prefix.into());
        self
    }

    pub fn matches(&self, record: &Record) -> bool {
        self.park.as_deref().map_or(true, |p| record.branch == p)
            && self
                .location
                .as_deref()
                .map_or(true, |l| record.reviewer_location == l)
            && self
                .year_prefix
                .as_deref()
                .map_or(true, |y| record.year_month.starts_with(y))
    }
}

/// Select the records matching `predicate`, in store order
pub fn filter_by<'a>(store: &'a RecordStore, predicate: &Predicate) -> Vec<&'a Record> {
    store.iter().filter(|record| predicate.matches(record)).collect()
}
