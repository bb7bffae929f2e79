//! Descriptive statistics over the filtered rows.
//!
//! Mirrors the usual "describe" summary: count, mean, sample standard
//! deviation, min, quartiles and max per numeric column. Undefined
//! statistics are NaN rather than errors.

use crate::core::country_record::{CountryRecord, PopColumn};

/// Row labels of the summary table, in display order.
pub const STAT_LABELS: [&str; 8] = ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];

/// Summary of a single numeric column.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct ColumnSummary {
    pub column: PopColumn,
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub q50: f64,
    pub q75: f64,
    pub max: f64,
}

impl ColumnSummary {
    /// Summarise raw values for `column`.
    pub fn from_values(column: PopColumn, values: &[f64]) -> Self {
        let count = values.len();
        if count == 0 {
            return Self {
                column,
                count,
                mean: f64::NAN,
                std: f64::NAN,
                min: f64::NAN,
                q25: f64::NAN,
                q50: f64::NAN,
                q75: f64::NAN,
                max: f64::NAN,
            };
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let n = count as f64;
        let mean = sorted.iter().sum::<f64>() / n;
        let std = if count < 2 {
            f64::NAN
        } else {
            let ss: f64 = sorted.iter().map(|v| (v - mean).powi(2)).sum();
            (ss / (n - 1.0)).sqrt()
        };

        Self {
            column,
            count,
            mean,
            std,
            min: sorted[0],
            q25: quantile(&sorted, 0.25),
            q50: quantile(&sorted, 0.50),
            q75: quantile(&sorted, 0.75),
            max: sorted[count - 1],
        }
    }

    /// Values in [`STAT_LABELS`] order.
    pub fn values(&self) -> [f64; 8] {
        [
            self.count as f64,
            self.mean,
            self.std,
            self.min,
            self.q25,
            self.q50,
            self.q75,
            self.max,
        ]
    }
}

/// Linear-interpolated quantile of an ascending, non-empty slice.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

/// The full summary table: one [`ColumnSummary`] per requested column.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct DescribeTable {
    pub columns: Vec<ColumnSummary>,
}

impl DescribeTable {
    /// `(label, one value per column)` in [`STAT_LABELS`] order.
    pub fn rows(&self) -> Vec<(&'static str, Vec<f64>)> {
        STAT_LABELS
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let cells = self.columns.iter().map(|c| c.values()[i]).collect();
                (*label, cells)
            })
            .collect()
    }

    pub fn column(&self, column: PopColumn) -> Option<&ColumnSummary> {
        self.columns.iter().find(|c| c.column == column)
    }
}

/// Describe `columns` across `rows`.
pub fn describe<'a, I>(rows: I, columns: &[PopColumn]) -> DescribeTable
where
    I: IntoIterator<Item = &'a CountryRecord>,
{
    let rows: Vec<&CountryRecord> = rows.into_iter().collect();
    let columns = columns
        .iter()
        .map(|&column| {
            let values: Vec<f64> = rows.iter().map(|r| column.value(r)).collect();
            ColumnSummary::from_values(column, &values)
        })
        .collect();
    DescribeTable { columns }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quartiles_interpolate() {
        let s = ColumnSummary::from_values(PopColumn::Pop1980, &[4.0, 1.0, 3.0, 2.0]);
        assert_eq!(s.count, 4);
        assert_eq!(s.min, 1.0);
        assert_eq!(s.max, 4.0);
        assert!((s.q25 - 1.75).abs() < 1e-12);
        assert!((s.q50 - 2.5).abs() < 1e-12);
        assert!((s.q75 - 3.25).abs() < 1e-12);
        assert!((s.mean - 2.5).abs() < 1e-12);
        // Sample std of 1..=4
        assert!((s.std - 1.2909944487358056).abs() < 1e-12);
    }

    #[test]
    fn test_single_value_std_is_nan() {
        let s = ColumnSummary::from_values(PopColumn::Pop2000, &[42.0]);
        assert_eq!(s.count, 1);
        assert!(s.std.is_nan());
        assert_eq!(s.q25, 42.0);
        assert_eq!(s.q75, 42.0);
    }

    #[test]
    fn test_empty_is_all_nan() {
        let s = ColumnSummary::from_values(PopColumn::Pop2010, &[]);
        assert_eq!(s.count, 0);
        assert!(s.mean.is_nan() && s.min.is_nan() && s.max.is_nan());
    }

    #[test]
    fn test_rows_layout() {
        let table = DescribeTable {
            columns: vec![
                ColumnSummary::from_values(PopColumn::Pop1980, &[1.0, 3.0]),
                ColumnSummary::from_values(PopColumn::Pop2000, &[2.0, 6.0]),
            ],
        };
        let rows = table.rows();
        assert_eq!(rows.len(), 8);
        assert_eq!(rows[0], ("count", vec![2.0, 2.0]));
        assert_eq!(rows[1], ("mean", vec![2.0, 4.0]));
        assert_eq!(rows[7].0, "max");
    }
}
