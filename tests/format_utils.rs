//! Integration tests for the display formatting helpers.

use popdash::util::format::{format_compact, format_duration, format_population, format_stat};
use std::time::Duration;

#[test]
fn population_has_thousands_separators() {
    assert_eq!(format_population(1_428_627_663.0), "1,428,627,663");
    assert_eq!(format_population(18_278_568.0), "18,278,568");
    assert_eq!(format_population(12.0), "12");
}

#[test]
fn compact_axis_labels() {
    assert_eq!(format_compact(1_428_627_663.0), "1.43B");
    assert_eq!(format_compact(52_100_000.0), "52.1M");
    assert_eq!(format_compact(12_500.0), "12.5k");
    assert_eq!(format_compact(12.0), "12");
}

#[test]
fn stat_cells_show_nan_and_integer_counts() {
    assert_eq!(format_stat(f64::NAN, false), "NaN");
    assert_eq!(format_stat(3.0, true), "3");
    assert_eq!(format_stat(1234.5, false), "1,234.50");
}

#[test]
fn durations_pick_a_unit() {
    assert_eq!(format_duration(Duration::from_micros(4200)), "4.2ms");
    assert_eq!(format_duration(Duration::from_millis(1200)), "1.2s");
    assert_eq!(format_duration(Duration::from_secs(90)), "1.5m");
}
