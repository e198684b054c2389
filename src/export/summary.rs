//! Export summary schema.
//!
//! Serde renames give the five display names used as CSV headers,
//! TXT labels and JSON keys. Field order here is output order.

use serde::{Deserialize, Serialize};

/// Per-park derived statistics written by an export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportSummary {
    #[serde(rename = "Park")]
    pub park: String,

    #[serde(rename = "Number of Reviews")]
    pub reviews: usize,

    #[serde(rename = "Number of Positive Reviews")]
    pub positive_reviews: usize,

    /// `0.0` when the park has no reviews
    #[serde(rename = "Average Review Score")]
    pub average_score: f64,

    #[serde(rename = "Number of Countries That Reviewed")]
    pub countries: usize,
}

impl ExportSummary {
    pub const FIELD_NAMES: [&'static str; 5] = [
        "Park",
        "Number of Reviews",
        "Number of Positive Reviews",
        "Average Review Score",
        "Number of Countries That Reviewed",
    ];

    /// Field name / rendered value pairs in output order
    pub fn fields(&self) -> [(&'static str, String); 5] {
        let [park, reviews, positive, average, countries] = Self::FIELD_NAMES;
        [
            (park, self.park.clone()),
            (reviews, self.reviews.to_string()),
            (positive, self.positive_reviews.to_string()),
            (average, format_score(self.average_score)),
            (countries, self.countries.to_string()),
        ]
    }
}

/// Render a score so whole numbers keep one decimal (`3.0`, not `3`)
pub fn format_score(score: f64) -> String {
    if score.is_finite() && score.fract() == 0.0 {
        format!("{:.1}", score)
    } else {
        score.to_string()
    }
}
