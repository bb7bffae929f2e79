//! Application-wide constants for PopDash.
//!
//! Centralising paths, limits and layout sizes here keeps the rest of the
//! codebase free of magic numbers.

/// Application display name used in titles, dialogs, etc.
pub const APP_NAME: &str = "PopDash";

/// Application version string.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Main window / page title.
pub const DASHBOARD_TITLE: &str = "Country-wise Population Visualization";

/// Relative path of the population table loaded at startup.
pub const DEFAULT_DATA_PATH: &str = "data/countries-table.csv";

/// Environment variable that overrides [`DEFAULT_DATA_PATH`].
pub const DATA_PATH_ENV: &str = "POPDASH_DATA";

/// Size of the channel used by the loader thread to report back to the UI.
/// A load produces exactly one message, so a small bound suffices.
pub const LOADER_CHANNEL_BOUND: usize = 4;

/// Row height in the raw-data and statistics tables (logical pixels).
pub const TABLE_ROW_HEIGHT: f32 = 22.0;

/// Height of each chart in the central panel (logical pixels).
pub const CHART_HEIGHT: f32 = 320.0;

/// Height of the world map plot (logical pixels).
pub const MAP_HEIGHT: f32 = 380.0;

/// Smallest and largest map marker radius. Markers scale with the square
/// root of land area between these bounds.
pub const MAP_MARKER_MIN_RADIUS: f32 = 4.0;
pub const MAP_MARKER_MAX_RADIUS: f32 = 22.0;

/// Maximum height of the country checkbox list in the sidebar.
pub const COUNTRY_LIST_MAX_HEIGHT: f32 = 320.0;

/// How long export feedback stays in the status bar (seconds).
pub const EXPORT_MESSAGE_SECS: u64 = 4;

/// Maximum number of errors to retain in the error list.
pub const MAX_ERRORS: usize = 50;

/// Application data subdirectory name for logs.
pub const APP_DATA_DIR: &str = "PopDash";

/// Log subdirectory name under the app data directory.
pub const LOG_DIR: &str = "logs";

/// Log file name for persistent debug logging.
pub const LOG_FILE_NAME: &str = "popdash.log";

/// Maximum log file size in bytes before rotation (5 MB).
pub const MAX_LOG_FILE_SIZE: u64 = 5 * 1024 * 1024;
