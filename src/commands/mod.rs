//! CLI command implementations.
//!
//! Commands orchestrate the library components for one user action.
//! They return printable text or written paths; main.rs does the printing.

pub mod export;
pub mod models;
pub mod query;
pub mod utils;

// Re-export main command functions
pub use export::{execute_export, validate_args};
pub use models::{ExportArgs, Query};
pub use query::run_query;
pub use utils::{display_version, load_store, render_bars};
