//! Validates that compile-time constants are internally consistent.
#![allow(clippy::assertions_on_constants)]

use popdash::util::constants::*;

#[test]
fn loader_channel_bound_is_positive() {
    assert!(LOADER_CHANNEL_BOUND > 0, "LOADER_CHANNEL_BOUND must be > 0");
}

#[test]
fn max_errors_is_bounded() {
    assert!(MAX_ERRORS > 0, "MAX_ERRORS must be > 0");
    assert!(MAX_ERRORS <= 1000, "MAX_ERRORS should not exceed 1000");
}

#[test]
fn marker_radii_are_ordered() {
    assert!(MAP_MARKER_MIN_RADIUS > 0.0);
    assert!(
        MAP_MARKER_MIN_RADIUS < MAP_MARKER_MAX_RADIUS,
        "min marker radius must be below max"
    );
}

#[test]
fn layout_sizes_are_positive() {
    assert!(TABLE_ROW_HEIGHT > 0.0);
    assert!(CHART_HEIGHT > 0.0);
    assert!(MAP_HEIGHT > 0.0);
    assert!(COUNTRY_LIST_MAX_HEIGHT > 0.0);
}

#[test]
fn default_data_path_is_csv() {
    assert!(DEFAULT_DATA_PATH.ends_with(".csv"));
    assert!(!DATA_PATH_ENV.is_empty());
}

#[test]
fn log_rotation_size_is_reasonable() {
    assert!(MAX_LOG_FILE_SIZE >= 1024 * 1024, "at least 1 MB");
    assert!(MAX_LOG_FILE_SIZE <= 100 * 1024 * 1024, "at most 100 MB");
}

#[test]
fn app_version_is_set() {
    assert!(!APP_VERSION.is_empty());
    assert_eq!(DASHBOARD_TITLE, "Country-wise Population Visualization");
}
