//! Integration tests for export pre-flight validation and output files.

use popdash::core::country_record::HISTORY_COLUMNS;
use popdash::core::loader::{load_table, read_table};
use popdash::core::selection::Selection;
use popdash::core::stats::describe;
use popdash::export::csv_export::{export_csv, validate_export_path};
use popdash::export::json_export::export_summary_json;
use std::path::PathBuf;

const CSV: &str = "\
country,place,pop1980,pop2000,pop2010,pop2022,pop2023,landAreaKm
India,356,696828385,1059633675,1240613620,1417173173,1428627663,2973190
China,156,982372466,1264099069,1348191368,1425887337,1425671352,9424702.9
Chad,148,4408230,8259137,11894727,17723315,18278568,1259200
";

#[test]
fn validate_export_path_valid_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("popdash_test_export.csv");
    let result = validate_export_path(&path);
    assert!(result.is_ok(), "Temp dir should be writable: {result:?}");
}

#[test]
fn validate_export_path_nonexistent_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no_such_dir").join("output.csv");
    let result = validate_export_path(&path);
    assert!(result.is_err(), "Non-existent dir should fail");
    let msg = result.unwrap_err().to_string();
    assert!(
        msg.contains("does not exist"),
        "Should indicate dir missing: {msg}"
    );
}

#[test]
fn validate_export_path_bare_filename() {
    let path = PathBuf::from("just_a_filename.csv");
    assert!(validate_export_path(&path).is_ok());
}

#[test]
fn exported_csv_loads_back_as_a_table() {
    let table = read_table(CSV.as_bytes()).unwrap();
    let rows = Selection::from_names(["Chad", "India"])
        .filter(&table)
        .to_records(&table);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("selection.csv");
    export_csv(&rows, &path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(
        text.starts_with("country,place,pop1980,pop2000,pop2010,pop2022,pop2023,landAreaKm"),
        "Header should match the input format: {text}"
    );

    let reloaded = load_table(&path).unwrap();
    assert_eq!(reloaded.countries(), vec!["India", "Chad"]);
    assert_eq!(reloaded.rows(), &rows[..]);
}

#[test]
fn summary_json_has_one_entry_per_column() {
    let table = read_table(CSV.as_bytes()).unwrap();
    let summary = describe(table.rows(), &HISTORY_COLUMNS);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("summary.json");
    export_summary_json(&summary, &path).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let columns = value["columns"].as_array().unwrap();
    assert_eq!(columns.len(), HISTORY_COLUMNS.len());
    assert_eq!(columns[0]["count"], 3);
}

#[test]
fn export_into_missing_directory_fails() {
    let table = read_table(CSV.as_bytes()).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("out.csv");
    let err = export_csv(table.rows(), &path).unwrap_err();
    assert!(err.to_string().contains("does not exist"));
}
