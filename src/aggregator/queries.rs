//! Query operations over the record store.
//!
//! Every function here is pure: it reads the store and returns a new
//! scalar, grouped mapping, or ranked sequence. Empty matches are a
//! normal outcome and never an error; only an unparseable rating fails
//! a query.

use super::filter::{filter_by, Predicate};
use super::grouping::{count_by, mean_rating, mean_rating_by, GroupedMapping};
use crate::store::{Record, RecordStore};
use crate::utils::error::ParseError;
use log::debug;

/// All reviews for one park, in store order
///
/// An unknown park and a park without reviews both yield an empty vector.
pub fn reviews_for_park<'a>(store: &'a RecordStore, park: &str) -> Vec<&'a Record> {
    filter_by(store, &Predicate::new().park(park))
}

/// Number of reviews for a park from one reviewer location
pub fn count_by_park_location(store: &RecordStore, park: &str, location: &str) -> usize {
    filter_by(store, &Predicate::new().park(park).location(location)).len()
}

/// Mean rating of a park in a given year
///
/// `year` is matched as a prefix of `Year_Month`, not as an exact year.
///
/// # Returns
/// `None` when no review matches
///
/// # Errors
/// * `ParseError::InvalidRating` - a matching record has a non-integer rating
pub fn average_by_park_year(
    store: &RecordStore,
    park: &str,
    year: &str,
) -> Result<Option<f64>, ParseError> {
    let matches = filter_by(store, &Predicate::new().park(park).year_prefix(year));
    debug!("{} reviews for {} in {}", matches.len(), park, year);
    mean_rating(matches)
}

/// Mean rating per reviewer location across the whole store
pub fn average_by_location(store: &RecordStore) -> Result<GroupedMapping<f64>, ParseError> {
    mean_rating_by(store, |r| r.reviewer_location.as_str())
}

/// Review count per reviewer location across the whole store
pub fn review_count_by_location(store: &RecordStore) -> GroupedMapping<usize> {
    count_by(store, |r| r.reviewer_location.as_str())
}

/// Review count per park (pie chart feed)
pub fn review_count_by_park(store: &RecordStore) -> GroupedMapping<usize> {
    count_by(store, |r| r.branch.as_str())
}

/// Mean rating per park (bar chart feed)
pub fn average_by_park(store: &RecordStore) -> Result<GroupedMapping<f64>, ParseError> {
    mean_rating_by(store, |r| r.branch.as_str())
}

/// Reviewer locations that rate a park highest, best first
///
/// Locations with equal averages keep the order they first appear in.
pub fn top_locations_for_park(
    store: &RecordStore,
    park: &str,
    top_n: usize,
) -> Result<GroupedMapping<f64>, ParseError> {
    let matches = filter_by(store, &Predicate::new().park(park));
    let averages = mean_rating_by(matches, |r| r.reviewer_location.as_str())?;
    debug!("Ranking {} locations for {}", averages.len(), park);
    Ok(averages.top_k(top_n))
}

/// Mean rating per month (`YYYY-MM`) for one park, ordered by month
pub fn average_by_month_for_park(
    store: &RecordStore,
    park: &str,
) -> Result<GroupedMapping<f64>, ParseError> {
    let matches = filter_by(store, &Predicate::new().park(park));
    Ok(mean_rating_by(matches, Record::month_key)?.sorted_by_key())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_store() -> RecordStore {
        RecordStore::from_records(vec![
            Record::new("ParkA", "US", "4", "2022-05"),
            Record::new("ParkA", "UK", "2", "2022-06"),
            Record::new("ParkB", "US", "5", "2022-05"),
        ])
    }

    #[test]
    fn test_reviews_for_park() {
        let store = sample_store();
        let reviews = reviews_for_park(&store, "ParkA");

        assert_eq!(reviews.len(), 2);
        assert!(reviews.iter().all(|r| r.branch == "ParkA"));
    }

    #[test]
    fn test_reviews_for_unknown_park_is_empty() {
        let store = sample_store();
        assert!(reviews_for_park(&store, "ParkZ").is_empty());
    }

    #[test]
    fn test_count_by_park_location() {
        let store = sample_store();

        assert_eq!(count_by_park_location(&store, "ParkA", "US"), 1);
        assert_eq!(count_by_park_location(&store, "ParkA", "FR"), 0);
    }

    #[test]
    fn test_average_by_park_year() {
        let store = sample_store();

        assert_eq!(average_by_park_year(&store, "ParkA", "2022"), Ok(Some(3.0)));
        assert_eq!(average_by_park_year(&store, "ParkA", "2019"), Ok(None));
    }

    #[test]
    fn test_average_by_park_year_invalid_rating() {
        let store = RecordStore::from_records(vec![
            Record::new("ParkA", "US", "4", "2022-05"),
            Record::new("ParkA", "US", "", "2022-07"),
        ]);

        assert_eq!(
            average_by_park_year(&store, "ParkA", "2022"),
            Err(ParseError::InvalidRating {
                row: 2,
                value: String::new()
            })
        );
    }

    #[test]
    fn test_average_by_park_year_skips_bad_rows_outside_filter() {
        let store = RecordStore::from_records(vec![
            Record::new("ParkA", "US", "4", "2022-05"),
            Record::new("ParkB", "US", "bad", "2022-07"),
        ]);

        assert_eq!(average_by_park_year(&store, "ParkA", "2022"), Ok(Some(4.0)));
    }

    #[test]
    fn test_average_by_location() {
        let store = sample_store();
        let averages = average_by_location(&store).unwrap();

        assert_eq!(
            averages.into_entries(),
            vec![("US".to_string(), 4.5), ("UK".to_string(), 2.0)]
        );
    }

    #[test]
    fn test_review_count_by_park() {
        let store = sample_store();
        let counts = review_count_by_park(&store);

        assert_eq!(counts.get("ParkA"), Some(&2));
        assert_eq!(counts.get("ParkB"), Some(&1));
    }

    #[test]
    fn test_average_by_park() {
        let store = sample_store();
        let averages = average_by_park(&store).unwrap();

        assert_eq!(averages.get("ParkA"), Some(&3.0));
        assert_eq!(averages.get("ParkB"), Some(&5.0));
    }

    #[test]
    fn test_top_locations_for_park() {
        let store = RecordStore::from_records(vec![
            Record::new("ParkA", "UK", "3", "2022-05"),
            Record::new("ParkA", "US", "5", "2022-05"),
            Record::new("ParkA", "FR", "3", "2022-05"),
            Record::new("ParkA", "DE", "1", "2022-05"),
            Record::new("ParkB", "JP", "5", "2022-05"),
        ]);

        let ranked = top_locations_for_park(&store, "ParkA", 3).unwrap();

        assert_eq!(
            ranked.into_entries(),
            vec![
                ("US".to_string(), 5.0),
                ("UK".to_string(), 3.0),
                ("FR".to_string(), 3.0),
            ]
        );
    }

    #[test]
    fn test_average_by_month_for_park_sorted() {
        let store = RecordStore::from_records(vec![
            Record::new("ParkA", "US", "4", "2022-06"),
            Record::new("ParkA", "US", "2", "2021-12"),
            Record::new("ParkA", "UK", "5", "2022-06"),
            Record::new("ParkB", "UK", "1", "2020-01"),
        ]);

        let monthly = average_by_month_for_park(&store, "ParkA").unwrap();

        assert_eq!(
            monthly.into_entries(),
            vec![("2021-12".to_string(), 2.0), ("2022-06".to_string(), 4.5)]
        );
    }
}
