//! Per-park summary export.
//!
//! The exporter derives review count, positive-review count, average
//! score and distinct reviewer countries for one park, then hands the
//! summary to a format writer in `output`.

pub mod exporter;
pub mod summary;

pub use exporter::ParkExporter;
pub use summary::{format_score, ExportSummary};
