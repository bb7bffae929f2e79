//! Export of the filtered rows (CSV) and the statistics summary (JSON).

pub mod csv_export;
pub mod json_export;
