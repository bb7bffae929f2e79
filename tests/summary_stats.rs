//! Integration tests for the statistics summary.

use popdash::core::country_record::{CountryRecord, PopColumn, HISTORY_COLUMNS};
use popdash::core::loader::read_table;
use popdash::core::selection::Selection;
use popdash::core::stats::{describe, STAT_LABELS};

const CSV: &str = "\
country,place,pop1980,pop2000,pop2010,pop2022,pop2023,landAreaKm
A,1,10,100,1,1,1,1
B,2,20,200,2,2,2,2
C,3,30,300,3,3,3,3
D,4,40,400,4,4,4,4
";

#[test]
fn single_country_has_count_one_and_nan_std() {
    let table = read_table(CSV.as_bytes()).unwrap();
    let rows = Selection::from_names(["B"]).filter(&table);
    let summary = describe(rows.rows(&table), &HISTORY_COLUMNS);

    let col = summary.column(PopColumn::Pop1980).unwrap();
    assert_eq!(col.count, 1);
    assert!(col.std.is_nan());
    assert_eq!(col.mean, 20.0);
    assert_eq!(col.min, 20.0);
    assert_eq!(col.q50, 20.0);
    assert_eq!(col.max, 20.0);
}

#[test]
fn four_countries_match_describe_semantics() {
    let table = read_table(CSV.as_bytes()).unwrap();
    let summary = describe(table.rows(), &HISTORY_COLUMNS);
    let col = summary.column(PopColumn::Pop1980).unwrap();

    assert_eq!(col.count, 4);
    assert_eq!(col.mean, 25.0);
    // Sample standard deviation of 10, 20, 30, 40.
    assert!((col.std - 12.909_944_487_358_056).abs() < 1e-9);
    assert_eq!(col.q25, 17.5);
    assert_eq!(col.q50, 25.0);
    assert_eq!(col.q75, 32.5);
}

#[test]
fn rows_follow_stat_label_order() {
    let table = read_table(CSV.as_bytes()).unwrap();
    let summary = describe(table.rows(), &HISTORY_COLUMNS);
    let rows = summary.rows();

    let labels: Vec<&str> = rows.iter().map(|(l, _)| *l).collect();
    assert_eq!(labels, STAT_LABELS.to_vec());
    assert!(rows.iter().all(|(_, cells)| cells.len() == HISTORY_COLUMNS.len()));
    assert_eq!(rows[0].1[1], 4.0, "count row for pop2000");
}

#[test]
fn empty_input_is_count_zero_and_nan_elsewhere() {
    let summary = describe(std::iter::empty::<&CountryRecord>(), &[PopColumn::Pop2022]);
    let values = summary.columns[0].values();
    assert_eq!(values[0], 0.0);
    assert!(values[1..].iter().all(|v| v.is_nan()));
}
