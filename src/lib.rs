//! Park Review Analyzer
//!
//! Aggregate queries and per-park summary exports over a fixed-schema
//! dataset of theme-park reviews.
//!
//! This crate provides the core implementation for the
//! `park-reviews` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! park-reviews --data data/disneyland_reviews.csv average --park Disneyland_Paris --year 2019
//! park-reviews export --park Disneyland_Paris --format json
//! ```
//!
//! As a library:
//!
//! ```ignore
//! let store = RecordStore::load("data/disneyland_reviews.csv")?;
//! let avg = aggregator::average_by_park_year(&store, "Disneyland_Paris", "2019")?;
//! ParkExporter::new(&store).export("Disneyland_Paris", "json")?;
//! ```

pub mod aggregator;
pub mod commands;
pub mod export;
pub mod output;
pub mod store;
pub mod utils;

pub use aggregator::GroupedMapping;
pub use export::{ExportSummary, ParkExporter};
pub use output::ExportFormat;
pub use store::{Record, RecordStore};
pub use utils::error::{ExportError, LoadError, ParseError};
