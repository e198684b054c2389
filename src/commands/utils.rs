use anyhow::{Context, Result};
use std::fmt::{self, Write};
use std::path::Path;

use crate::aggregator::GroupedMapping;
use crate::store::RecordStore;

/// Width of the longest bar in text charts
const BAR_WIDTH: usize = 40;

/// Values that can be drawn as a bar
pub trait BarValue {
    fn magnitude(&self) -> f64;
    fn label(&self) -> String;
}

impl BarValue for usize {
    fn magnitude(&self) -> f64 {
        *self as f64
    }

    fn label(&self) -> String {
        self.to_string()
    }
}

impl BarValue for f64 {
    fn magnitude(&self) -> f64 {
        *self
    }

    fn label(&self) -> String {
        format!("{:.2}", self)
    }
}

/// Render a grouped mapping as a titled text bar chart
///
/// Bars are scaled so the largest value spans `BAR_WIDTH` characters.
pub fn render_bars<V: BarValue>(
    title: &str,
    mapping: &GroupedMapping<V>,
) -> Result<String, fmt::Error> {
    let key_width = mapping.keys().map(|k| k.chars().count()).max().unwrap_or(0);
    let max = mapping
        .values()
        .map(|v| v.magnitude())
        .fold(0.0_f64, f64::max);

    let mut out = String::new();
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", "=".repeat(title.chars().count()))?;

    for (key, value) in mapping.iter() {
        let len = if max > 0.0 {
            ((value.magnitude() / max) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        writeln!(
            out,
            "{:<width$}  {} {}",
            key,
            "#".repeat(len),
            value.label(),
            width = key_width
        )?;
    }

    Ok(out.trim_end().to_string())
}

/// Load the review dataset, attaching the path to any failure
pub fn load_store(path: &Path) -> Result<RecordStore> {
    RecordStore::load(path)
        .with_context(|| format!("Failed to load review data from {}", path.display()))
}

/// Display version information
pub fn display_version() {
    println!("Park Review Analyzer v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Aggregate queries and summary exports over theme-park review datasets.");
}
