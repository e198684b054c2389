//! Configuration and constants for the analyzer.

// Column names recognized in the input header
pub const BRANCH_FIELD: &str = "Branch";
pub const LOCATION_FIELD: &str = "Reviewer_Location";
pub const RATING_FIELD: &str = "Rating";
pub const YEAR_MONTH_FIELD: &str = "Year_Month";

pub const REQUIRED_FIELDS: &[&str] = &[BRANCH_FIELD, LOCATION_FIELD, RATING_FIELD, YEAR_MONTH_FIELD];

/// Default dataset location, relative to the working directory
pub const DEFAULT_DATA_PATH: &str = "data/disneyland_reviews.csv";

/// Environment variable that overrides the dataset location
pub const DATA_PATH_ENV: &str = "PARK_REVIEWS_DATA";

/// Ratings at or above this count as positive
pub const DEFAULT_POSITIVE_THRESHOLD: i64 = 4;

/// Number of entries kept by ranked queries
pub const DEFAULT_TOP_N: usize = 10;

/// `Year_Month` prefix length that identifies a month (`YYYY-MM`)
pub const MONTH_KEY_LEN: usize = 7;

// Fixed export file names, overwritten on each export
pub const CSV_EXPORT_FILE: &str = "park_reviews.csv";
pub const TXT_EXPORT_FILE: &str = "park_reviews.txt";
pub const JSON_EXPORT_FILE: &str = "park_reviews.json";

pub const JSON_INDENT: &[u8] = b"    ";
