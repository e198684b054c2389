//! Group-by building blocks.
//!
//! Groups are formed from the distinct keys seen in the input and keep
//! first-encounter order, so presentation follows the data file.

use crate::store::Record;
use crate::utils::error::ParseError;
use std::collections::HashMap;

/// Ordered group key -> value mapping
///
/// **Public** - returned by grouped and ranked queries
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GroupedMapping<V> {
    entries: Vec<(String, V)>,
}

impl<V> GroupedMapping<V> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, v)| v)
    }

    pub fn into_entries(self) -> Vec<(String, V)> {
        self.entries
    }

    /// Reorder entries by key, ascending
    pub fn sorted_by_key(mut self) -> Self {
        self.entries.sort_by(|a, b| a.0.cmp(&b.0));
        self
    }
}

impl<V: PartialOrd> GroupedMapping<V> {
    /// Keep the `k` highest-valued entries, descending
    ///
    /// The sort is stable, so equal values keep encounter order.
    pub fn top_k(mut self, k: usize) -> Self {
        self.entries.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        self.entries.truncate(k);
        self
    }
}

impl<V> FromIterator<(String, V)> for GroupedMapping<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Running sum and count of integer ratings
///
/// The sum is widened to `i128` so any `i64` rating can be added
/// without overflow.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RatingStats {
    pub sum: i128,
    pub count: usize,
}

impl RatingStats {
    pub fn push(&mut self, rating: i64) {
        self.sum += i128::from(rating);
        self.count += 1;
    }

    /// Arithmetic mean, `None` when no ratings were pushed
    pub fn mean(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.sum as f64 / self.count as f64)
        }
    }
}

/// Accumulates per-key state while remembering first-encounter order
///
/// **Private to the crate** - query functions finish it into a `GroupedMapping`
pub(crate) struct GroupBuilder<A> {
    index: HashMap<String, usize>,
    groups: Vec<(String, A)>,
}

impl<A: Default> GroupBuilder<A> {
    pub(crate) fn new() -> Self {
        Self {
            index: HashMap::new(),
            groups: Vec::new(),
        }
    }

    pub(crate) fn entry(&mut self, key: &str) -> &mut A {
        let position = match self.index.get(key) {
            Some(&position) => position,
            None => {
                let position = self.groups.len();
                self.index.insert(key.to_string(), position);
                self.groups.push((key.to_string(), A::default()));
                position
            }
        };
        &mut self.groups[position].1
    }

    pub(crate) fn finish<V>(self, mut f: impl FnMut(A) -> V) -> GroupedMapping<V> {
        self.groups
            .into_iter()
            .map(|(key, acc)| (key, f(acc)))
            .collect()
    }
}

/// Count records per key
pub fn count_by<'a, I, K>(records: I, key: K) -> GroupedMapping<usize>
where
    I: IntoIterator<Item = &'a Record>,
    K: Fn(&'a Record) -> &'a str,
{
    let mut groups = GroupBuilder::<usize>::new();
    for record in records {
        *groups.entry(key(record)) += 1;
    }
    groups.finish(|count| count)
}

/// Mean rating per key
///
/// # Errors
/// * `ParseError::InvalidRating` - first record whose rating is not an integer
pub fn mean_rating_by<'a, I, K>(records: I, key: K) -> Result<GroupedMapping<f64>, ParseError>
where
    I: IntoIterator<Item = &'a Record>,
    K: Fn(&'a Record) -> &'a str,
{
    let mut groups = GroupBuilder::<RatingStats>::new();
    for record in records {
        let rating = record.rating_value()?;
        groups.entry(key(record)).push(rating);
    }
    // every group holds at least one rating
    Ok(groups.finish(|stats| stats.mean().unwrap_or_default()))
}

/// Mean rating over all records, `None` when there are none
pub fn mean_rating<'a, I>(records: I) -> Result<Option<f64>, ParseError>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut stats = RatingStats::default();
    for record in records {
        stats.push(record.rating_value()?);
    }
    Ok(stats.mean())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn mapping(entries: &[(&str, f64)]) -> GroupedMapping<f64> {
        entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_group_builder_keeps_encounter_order() {
        let mut groups = GroupBuilder::<usize>::new();
        for key in ["UK", "US", "UK", "FR", "US", "UK"] {
            *groups.entry(key) += 1;
        }
        let counts = groups.finish(|c| c);

        assert_eq!(
            counts.into_entries(),
            vec![
                ("UK".to_string(), 3),
                ("US".to_string(), 2),
                ("FR".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_top_k_descending() {
        let ranked = mapping(&[("a", 2.0), ("b", 4.5), ("c", 3.0)]).top_k(2);
        let keys: Vec<&str> = ranked.keys().collect();
        assert_eq!(keys, vec!["b", "c"]);
    }

    #[test]
    fn test_top_k_ties_keep_encounter_order() {
        let ranked = mapping(&[("x", 4.0), ("y", 5.0), ("z", 4.0), ("w", 4.0)]).top_k(3);
        let keys: Vec<&str> = ranked.keys().collect();
        assert_eq!(keys, vec!["y", "x", "z"]);
    }

    #[test]
    fn test_top_k_larger_than_len() {
        let ranked = mapping(&[("a", 1.0)]).top_k(10);
        assert_eq!(ranked.len(), 1);
    }

    #[test]
    fn test_sorted_by_key() {
        let sorted = mapping(&[("2019-04", 1.0), ("2018-12", 2.0), ("2019-01", 3.0)]).sorted_by_key();
        let keys: Vec<&str> = sorted.keys().collect();
        assert_eq!(keys, vec!["2018-12", "2019-01", "2019-04"]);
    }

    #[test]
    fn test_rating_stats_mean() {
        let mut stats = RatingStats::default();
        assert_eq!(stats.mean(), None);

        stats.push(4);
        stats.push(2);
        assert_eq!(stats.mean(), Some(3.0));
    }

    #[test]
    fn test_rating_stats_extreme_ratings_do_not_overflow() {
        let mut stats = RatingStats::default();
        stats.push(i64::MAX);
        stats.push(1);

        assert_eq!(stats.mean(), Some(2f64.powi(62)));

        let mut low = RatingStats::default();
        low.push(i64::MIN);
        low.push(i64::MIN);
        assert_eq!(low.mean(), Some(i64::MIN as f64));
    }

    #[test]
    fn test_mean_rating_with_max_rating() {
        let records = vec![
            Record::new("ParkA", "US", "9223372036854775807", "2022-05"),
            Record::new("ParkA", "US", "1", "2022-06"),
        ];

        let mean = mean_rating(records.iter()).unwrap().unwrap();

        assert!(mean > 0.0);
        assert_eq!(mean, 4.611686018427388e18);
    }

    #[test]
    fn test_mean_rating_by_propagates_parse_error() {
        let records = vec![
            Record::new("ParkA", "US", "4", "2022-05"),
            Record::new("ParkA", "UK", "n/a", "2022-06"),
        ];

        let result = mean_rating_by(records.iter(), |r| r.reviewer_location.as_str());

        assert!(matches!(result, Err(ParseError::InvalidRating { ref value, .. }) if value == "n/a"));
    }
}
