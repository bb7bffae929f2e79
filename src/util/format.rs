//! Number and time formatting helpers for PopDash.
//!
//! Provides consistent display of populations, statistics and durations
//! across the entire UI and the exports.

use chrono::{DateTime, Local};

/// Format a population count with thousands separators.
///
/// Fractional parts are rounded away; `1428627663.0` becomes
/// `"1,428,627,663"`. Non-finite values render as `"NaN"`.
pub fn format_population(value: f64) -> String {
    if !value.is_finite() {
        return "NaN".into();
    }
    let rounded = value.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if negative {
        out.insert(0, '-');
    }
    out
}

/// Format a large number compactly for chart axes, e.g. `1.43B`, `52.1M`.
pub fn format_compact(value: f64) -> String {
    if !value.is_finite() {
        return "NaN".into();
    }
    let abs = value.abs();
    if abs >= 1e9 {
        format!("{:.2}B", value / 1e9)
    } else if abs >= 1e6 {
        format!("{:.1}M", value / 1e6)
    } else if abs >= 1e3 {
        format!("{:.1}k", value / 1e3)
    } else {
        format!("{value:.0}")
    }
}

/// Format one cell of the statistics summary.
///
/// Counts are shown as integers, everything else with two decimals and
/// thousands separators. NaN stays visible as `NaN`.
pub fn format_stat(value: f64, is_count: bool) -> String {
    if !value.is_finite() {
        return "NaN".into();
    }
    if is_count {
        return format!("{value:.0}");
    }
    let whole = format_population(value.trunc());
    let frac = (value.fract().abs() * 100.0).round() as u32;
    if frac >= 100 {
        // Rounding carried into the integer part.
        return format!("{}.00", format_population(value.round()));
    }
    format!("{whole}.{frac:02}")
}

/// Format a `std::time::Duration` into a human-readable string.
///
/// Used in the status bar to show how long the data load took.
/// Examples: `4.2ms`, `1.2s`, `1.5m`.
pub fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.01 {
        format!("{:.1}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.1}s")
    } else {
        let mins = secs / 60.0;
        format!("{mins:.1}m")
    }
}

/// Format the wall-clock time at which the data was loaded.
pub fn format_loaded_at(ts: &DateTime<Local>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}
