//! Query command implementation.
//!
//! Runs one aggregation query and renders the result as text. Rendering
//! lives here so the aggregation engine never prints.

use super::models::Query;
use super::utils::render_bars;
use crate::aggregator::{
    average_by_location, average_by_month_for_park, average_by_park, average_by_park_year,
    count_by_park_location, review_count_by_location, review_count_by_park, reviews_for_park,
    top_locations_for_park,
};
use crate::store::RecordStore;
use anyhow::{Context, Result};
use log::debug;
use std::fmt::Write;

/// Execute a query and return its printable report
///
/// # Errors
/// * A record touched by the query has a non-integer rating
pub fn run_query(store: &RecordStore, query: &Query) -> Result<String> {
    debug!("Running query: {:?}", query);

    let report = match query {
        Query::Reviews { park } => {
            let reviews = reviews_for_park(store, park);
            if reviews.is_empty() {
                format!("No reviews found for {}.", park)
            } else {
                let mut out = String::new();
                for review in reviews {
                    writeln!(out, "{}", review)?;
                }
                out.trim_end().to_string()
            }
        }

        Query::Count { park, location } => {
            let count = count_by_park_location(store, park, location);
            format!("{} has {} reviews from {}.", park, count, location)
        }

        Query::Average { park, year } => {
            let average = average_by_park_year(store, park, year)
                .with_context(|| format!("Failed to average ratings for {} in {}", park, year))?;
            match average {
                Some(avg) => format!("Average score for {} in {}: {:.2}", park, year, avg),
                None => format!("No reviews found for {} in {}.", park, year),
            }
        }

        Query::ByLocation => {
            let averages =
                average_by_location(store).context("Failed to average ratings by location")?;
            let counts = review_count_by_location(store);
            let mut out = String::new();
            for (location, avg) in averages.iter() {
                let n = counts.get(location).copied().unwrap_or_default();
                writeln!(out, "{}: {:.2} ({} reviews)", location, avg, n)?;
            }
            out.trim_end().to_string()
        }

        Query::ParkCounts => render_bars("Most Reviewed Parks", &review_count_by_park(store))?,

        Query::ParkAverages => {
            let averages = average_by_park(store).context("Failed to average ratings by park")?;
            render_bars("Average Scores by Park", &averages)?
        }

        Query::TopLocations { park, top } => {
            let ranked = top_locations_for_park(store, park, *top)
                .with_context(|| format!("Failed to rank locations for {}", park))?;
            if ranked.is_empty() {
                format!("No reviews found for {}.", park)
            } else {
                render_bars(
                    &format!("Top {} Locations for {} by Average Rating", top, park),
                    &ranked,
                )?
            }
        }

        Query::Monthly { park } => {
            let monthly = average_by_month_for_park(store, park)
                .with_context(|| format!("Failed to average monthly ratings for {}", park))?;
            if monthly.is_empty() {
                format!("No reviews found for {}.", park)
            } else {
                render_bars(&format!("Average Monthly Rating for {}", park), &monthly)?
            }
        }
    };

    Ok(report)
}
