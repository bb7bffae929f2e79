//! JSON export for the statistics summary.
//!
//! Serialises the [`DescribeTable`] as pretty-printed JSON. Undefined
//! statistics (NaN) are written as `null`.

use crate::core::stats::DescribeTable;
use crate::util::error::PopDashError;
use std::path::Path;

/// Export the summary to a JSON file at `path`.
///
/// # Errors
/// Returns [`PopDashError::Export`] if the file cannot be created or written.
pub fn export_summary_json(summary: &DescribeTable, path: &Path) -> Result<(), PopDashError> {
    crate::export::csv_export::validate_export_path(path)?;

    let file = std::fs::File::create(path)
        .map_err(|e| PopDashError::Export(format!("Failed to create JSON file: {e}")))?;

    let mut writer = std::io::BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, summary)
        .map_err(|e| PopDashError::Export(format!("Failed to write JSON: {e}")))?;

    // Flush explicitly; BufWriter::drop swallows errors.
    use std::io::Write;
    writer
        .flush()
        .map_err(|e| PopDashError::Export(format!("Failed to flush JSON output: {e}")))?;

    tracing::info!(
        "Exported summary of {} columns to JSON: {}",
        summary.columns.len(),
        path.display()
    );
    Ok(())
}
