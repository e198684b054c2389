//! A single review row.
//!
//! Fields stay as the strings read from the file; numeric and date fields
//! are interpreted on demand by the operations that consume them.

use crate::utils::config::{BRANCH_FIELD, LOCATION_FIELD, MONTH_KEY_LEN, RATING_FIELD, YEAR_MONTH_FIELD};
use crate::utils::error::ParseError;
use std::fmt;

/// One review, keyed by column name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// 1-based data row number (header excluded)
    pub row: usize,

    /// Park the review belongs to
    pub branch: String,

    /// Reviewer's home country or region
    pub reviewer_location: String,

    /// Integer-valued rating, unparsed
    pub rating: String,

    /// `YYYY-MM` date string
    pub year_month: String,

    /// Remaining columns in file order (e.g. `Review_ID`, `Review_Text`)
    pub extra: Vec<(String, String)>,
}

impl Record {
    /// Create a record with only the recognized fields set
    ///
    /// The row number is assigned when the record joins a store.
    pub fn new(
        branch: impl Into<String>,
        reviewer_location: impl Into<String>,
        rating: impl Into<String>,
        year_month: impl Into<String>,
    ) -> Self {
        Self {
            row: 0,
            branch: branch.into(),
            reviewer_location: reviewer_location.into(),
            rating: rating.into(),
            year_month: year_month.into(),
            extra: Vec::new(),
        }
    }

    /// Attach an additional column value
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.push((name.into(), value.into()));
        self
    }

    /// Look up any field by its column name
    pub fn get(&self, field: &str) -> Option<&str> {
        match field {
            BRANCH_FIELD => Some(&self.branch),
            LOCATION_FIELD => Some(&self.reviewer_location),
            RATING_FIELD => Some(&self.rating),
            YEAR_MONTH_FIELD => Some(&self.year_month),
            _ => self
                .extra
                .iter()
                .find(|(name, _)| name == field)
                .map(|(_, value)| value.as_str()),
        }
    }

    /// Parse the rating as an integer
    ///
    /// # Errors
    /// * `ParseError::InvalidRating` - value is not an integer; carries this record's row
    pub fn rating_value(&self) -> Result<i64, ParseError> {
        self.rating
            .trim()
            .parse::<i64>()
            .map_err(|_| ParseError::InvalidRating {
                row: self.row,
                value: self.rating.clone(),
            })
    }

    /// Month key (`YYYY-MM`) used for monthly grouping
    ///
    /// Shorter values are returned whole; no date validation happens here.
    pub fn month_key(&self) -> &str {
        match self.year_month.char_indices().nth(MONTH_KEY_LEN) {
            Some((end, _)) => &self.year_month[..end],
            None => &self.year_month,
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}, {}: {}, {}: {}, {}: {}",
            BRANCH_FIELD,
            self.branch,
            LOCATION_FIELD,
            self.reviewer_location,
            RATING_FIELD,
            self.rating,
            YEAR_MONTH_FIELD,
            self.year_month
        )?;
        for (name, value) in &self.extra {
            write!(f, ", {}: {}", name, value)?;
        }
        Ok(())
    }
}
