//! Plain-text summary writer: one `FieldName: value` line per field.

use super::prepare_output_path;
use crate::export::ExportSummary;
use crate::utils::error::ExportError;
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub fn write_txt(summary: &ExportSummary, output_path: &Path) -> Result<(), ExportError> {
    info!("Writing text summary to: {}", output_path.display());

    prepare_output_path(output_path)?;

    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);

    for (name, value) in summary.fields() {
        writeln!(writer, "{}: {}", name, value)?;
    }

    writer.flush()?;

    Ok(())
}
