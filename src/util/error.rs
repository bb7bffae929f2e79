//! Unified error types for PopDash.
//!
//! All fallible operations throughout the codebase return `Result<T, PopDashError>`.
//! This keeps error reporting consistent and lets `?` do the propagation.

use std::path::{Path, PathBuf};

/// Unified error type used throughout PopDash.
///
/// Each variant carries enough context to produce an actionable message for
/// the error banner or for log output.
#[derive(Debug, thiserror::Error)]
pub enum PopDashError {
    /// The data file could not be opened or read.
    #[error("Cannot read data file {}: {source}", path.display())]
    DataFile {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The CSV content is malformed (bad header, unparsable field, ...).
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    /// Two rows share the same country name.
    #[error("Duplicate country in table: {0}")]
    DuplicateCountry(String),

    /// A numeric column holds a negative or non-finite value.
    #[error("Invalid value {value} in column '{column}' for {country}")]
    InvalidValue {
        country: String,
        column: String,
        value: f64,
    },

    /// A selected country has no entry in the geographic registry.
    #[error("Country not found in map registry: {0}")]
    UnknownCountry(String),

    /// Export (CSV or JSON) failed.
    #[error("Export failed: {0}")]
    Export(String),

    /// Catch-all for other I/O errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PopDashError>;

/// Wrap an I/O error with the data file path it relates to.
pub fn data_file_err(path: &Path, source: std::io::Error) -> PopDashError {
    PopDashError::DataFile {
        path: path.to_path_buf(),
        source,
    }
}
