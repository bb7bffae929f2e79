//! Integration tests for the cached loader: memoization, invalidation and
//! the background loader thread.

use popdash::core::loader::{
    load_table, resolve_data_path, spawn_loader_thread, LoaderMessage, TableCache,
};
use popdash::util::constants::DEFAULT_DATA_PATH;
use popdash::util::error::PopDashError;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

const CSV: &str = "\
country,place,pop1980,pop2000,pop2010,pop2022,pop2023,landAreaKm
India,356,696828385,1059633675,1240613620,1417173173,1428627663,2973190
China,156,982372466,1264099069,1348191368,1425887337,1425671352,9424702.9
";

fn write_csv(dir: &tempfile::TempDir, body: &str) -> PathBuf {
    let path = dir.path().join("countries-table.csv");
    std::fs::write(&path, body).unwrap();
    path
}

#[test]
fn second_load_is_served_from_cache() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, CSV);
    let mut cache = TableCache::new();

    let first = cache.get_or_load(&path).unwrap();
    let second = cache.get_or_load(&path).unwrap();

    assert_eq!(cache.load_count(), 1, "file should be parsed once");
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(*first, load_table(&path).unwrap());
}

#[test]
fn cached_table_survives_file_removal() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, CSV);
    let mut cache = TableCache::new();

    cache.get_or_load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    let table = cache.get_or_load(&path).unwrap();
    assert_eq!(table.len(), 2);
}

#[test]
fn invalidate_forces_a_fresh_read() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, CSV);
    let mut cache = TableCache::new();

    cache.get_or_load(&path).unwrap();
    cache.invalidate();
    assert!(cache.cached_path().is_none());

    std::fs::remove_file(&path).unwrap();
    let err = cache.get_or_load(&path).unwrap_err();
    assert!(matches!(err, PopDashError::DataFile { .. }), "got {err:?}");
    assert_eq!(cache.load_count(), 1, "failed reads are not counted");
}

#[test]
fn missing_file_is_a_data_file_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_table(&dir.path().join("nope.csv")).unwrap_err();
    assert!(matches!(err, PopDashError::DataFile { .. }));
    assert!(err.to_string().contains("nope.csv"));
}

#[test]
fn malformed_numeric_field_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(
        &dir,
        "country,place,pop1980,pop2000,pop2010,pop2022,pop2023,landAreaKm\nIndia,356,lots,1,1,1,1,1\n",
    );
    let err = load_table(&path).unwrap_err();
    assert!(matches!(err, PopDashError::CsvParse(_)), "got {err:?}");
}

#[test]
fn loader_thread_reports_loaded_then_cached() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, CSV);
    let cache = Arc::new(Mutex::new(TableCache::new()));

    for expect_cached in [false, true] {
        let (tx, rx) = crossbeam_channel::bounded(1);
        let handle = spawn_loader_thread(path.clone(), cache.clone(), tx).unwrap();
        handle.join().unwrap();
        match rx.recv().unwrap() {
            LoaderMessage::Loaded {
                table, from_cache, ..
            } => {
                assert_eq!(table.len(), 2);
                assert_eq!(from_cache, expect_cached);
            }
            LoaderMessage::Failed { error, .. } => panic!("load failed: {error}"),
        }
    }
}

#[test]
fn loader_thread_reports_failure() {
    let dir = tempfile::tempdir().unwrap();
    let cache = Arc::new(Mutex::new(TableCache::new()));
    let (tx, rx) = crossbeam_channel::bounded(1);
    spawn_loader_thread(dir.path().join("absent.csv"), cache, tx)
        .unwrap()
        .join()
        .unwrap();
    assert!(matches!(rx.recv().unwrap(), LoaderMessage::Failed { .. }));
}

#[test]
fn data_path_override_and_default() {
    assert_eq!(resolve_data_path(None), PathBuf::from(DEFAULT_DATA_PATH));
    assert_eq!(
        resolve_data_path(Some("   ".into())),
        PathBuf::from(DEFAULT_DATA_PATH)
    );
    assert_eq!(
        resolve_data_path(Some("/tmp/other.csv".into())),
        PathBuf::from("/tmp/other.csv")
    );
}

#[test]
fn bundled_data_file_loads() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_DATA_PATH);
    let table = load_table(&path).unwrap();
    assert!(table.len() >= 20);
    assert!(table.find("India").is_some());
}
