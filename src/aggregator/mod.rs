//! Aggregation of review records into scalars, groups and rankings.
//!
//! This module provides:
//! - Multi-field record filtering
//! - Group-by counting and averaging in encounter order
//! - Top-N ranking of grouped results

pub mod filter;
pub mod grouping;
pub mod queries;

// Re-export main types and functions
pub use filter::{filter_by, Predicate};
pub use grouping::{count_by, mean_rating, mean_rating_by, GroupedMapping, RatingStats};
pub use queries::{
    average_by_location, average_by_month_for_park, average_by_park, average_by_park_year,
    count_by_park_location, review_count_by_location, review_count_by_park, reviews_for_park,
    top_locations_for_park,
};
