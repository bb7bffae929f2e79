//! CSV export for the filtered rows.
//!
//! Writes the selected countries with the same headers the loader reads,
//! so an export can be opened again as a data file.

use crate::core::country_record::CountryRecord;
use crate::util::error::PopDashError;
use std::path::Path;

/// Export the given rows to a CSV file at `path`.
///
/// # Errors
/// Returns [`PopDashError::Export`] if the file cannot be created or written.
pub fn export_csv(rows: &[CountryRecord], path: &Path) -> Result<(), PopDashError> {
    validate_export_path(path)?;

    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| PopDashError::Export(format!("Failed to create CSV file: {e}")))?;

    // Header row comes from the serde field names.
    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| PopDashError::Export(format!("Failed to write CSV row: {e}")))?;
    }

    writer
        .flush()
        .map_err(|e| PopDashError::Export(format!("Failed to flush CSV: {e}")))?;

    tracing::info!("Exported {} rows to CSV: {}", rows.len(), path.display());
    Ok(())
}

/// Pre-flight check that `path`'s parent directory exists.
///
/// A bare file name resolves against the working directory and passes.
pub fn validate_export_path(path: &Path) -> Result<(), PopDashError> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => return Ok(()),
    };
    if !parent.is_dir() {
        return Err(PopDashError::Export(format!(
            "Target directory does not exist: {}",
            parent.display()
        )));
    }
    Ok(())
}
