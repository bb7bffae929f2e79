//! CSV loading, memoization and the background loader thread.
//!
//! The table is parsed with `csv` + `serde` into [`CountryRecord`]s and
//! validated into a [`PopulationTable`]. [`TableCache`] keeps the parsed
//! table so repeated loads of the same path never touch the file again.
//! The UI drives loads through [`spawn_loader_thread`] and polls the
//! receiving end of the channel each frame with non-blocking `try_recv`.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use crossbeam_channel::Sender;

use crate::core::country_record::CountryRecord;
use crate::core::table::PopulationTable;
use crate::util::constants::{DATA_PATH_ENV, DEFAULT_DATA_PATH};
use crate::util::error::{data_file_err, PopDashError, Result};

/// Messages sent from the loader thread to the UI thread.
#[derive(Debug)]
pub enum LoaderMessage {
    /// The table is available.
    Loaded {
        path: PathBuf,
        table: Arc<PopulationTable>,
        elapsed: Duration,
        /// `true` when the cache answered without reading the file.
        from_cache: bool,
    },
    /// The file is missing or malformed.
    Failed { path: PathBuf, error: String },
}

/// Parse CSV content into a validated table.
///
/// Leading/trailing whitespace around fields is ignored. Any malformed row
/// fails the whole load.
pub fn read_table<R: Read>(reader: R) -> Result<PopulationTable> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for result in csv_reader.deserialize::<CountryRecord>() {
        let record = result.map_err(|e| PopDashError::CsvParse(e.to_string()))?;
        rows.push(record);
    }
    PopulationTable::from_records(rows)
}

/// Open and parse the CSV at `path`. The file handle is released before
/// this returns.
pub fn load_table(path: &Path) -> Result<PopulationTable> {
    let file = std::fs::File::open(path).map_err(|e| data_file_err(path, e))?;
    let table = read_table(file)?;
    tracing::debug!("Parsed {} rows from {}", table.len(), path.display());
    Ok(table)
}

/// Pick the data path: an explicit override if non-empty, else the default.
///
/// Callers pass `std::env::var(DATA_PATH_ENV).ok()`; see [`data_path_from_env`].
pub fn resolve_data_path(override_path: Option<String>) -> PathBuf {
    match override_path {
        Some(p) if !p.trim().is_empty() => PathBuf::from(p.trim()),
        _ => PathBuf::from(DEFAULT_DATA_PATH),
    }
}

/// Resolve the data path from the process environment.
pub fn data_path_from_env() -> PathBuf {
    resolve_data_path(std::env::var(DATA_PATH_ENV).ok())
}

// ── Cache ───────────────────────────────────────────────────────────────

/// Memoizes the most recently parsed table, keyed by its path.
#[derive(Debug, Default)]
pub struct TableCache {
    entry: Option<(PathBuf, Arc<PopulationTable>)>,
    /// Number of times a file was actually parsed.
    loads: usize,
}

impl TableCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached table for `path`, if any.
    pub fn get(&self, path: &Path) -> Option<Arc<PopulationTable>> {
        match &self.entry {
            Some((cached, table)) if cached == path => Some(Arc::clone(table)),
            _ => None,
        }
    }

    /// Return the cached table for `path`, parsing the file only on a miss.
    ///
    /// A failed load leaves any previous entry untouched.
    pub fn get_or_load(&mut self, path: &Path) -> Result<Arc<PopulationTable>> {
        if let Some(table) = self.get(path) {
            return Ok(table);
        }
        let table = Arc::new(load_table(path)?);
        self.loads += 1;
        self.entry = Some((path.to_path_buf(), Arc::clone(&table)));
        Ok(table)
    }

    /// Forget the cached table so the next load re-reads the file.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    pub fn cached_path(&self) -> Option<&Path> {
        self.entry.as_ref().map(|(p, _)| p.as_path())
    }

    pub fn load_count(&self) -> usize {
        self.loads
    }
}

// ── Loader thread ───────────────────────────────────────────────────────

/// Spawn a background thread that loads `path` through the shared cache
/// and reports the outcome on `sender`.
pub fn spawn_loader_thread(
    path: PathBuf,
    cache: Arc<Mutex<TableCache>>,
    sender: Sender<LoaderMessage>,
) -> std::io::Result<std::thread::JoinHandle<()>> {
    std::thread::Builder::new()
        .name("table-loader".into())
        .spawn(move || {
            let msg = load_through_cache(path, &cache);
            // The UI may have started another load and dropped this receiver.
            let _ = sender.send(msg);
        })
}

/// Run one cached load and package the result as a [`LoaderMessage`].
pub fn load_through_cache(path: PathBuf, cache: &Mutex<TableCache>) -> LoaderMessage {
    let start = Instant::now();
    let mut cache = cache.lock().unwrap_or_else(PoisonError::into_inner);
    let loads_before = cache.load_count();

    match cache.get_or_load(&path) {
        Ok(table) => {
            let from_cache = cache.load_count() == loads_before;
            let elapsed = start.elapsed();
            tracing::info!(
                "Loaded {} countries from {} ({})",
                table.len(),
                path.display(),
                if from_cache { "cached" } else { "parsed" }
            );
            LoaderMessage::Loaded {
                path,
                table,
                elapsed,
                from_cache,
            }
        }
        Err(e) => {
            tracing::error!("Failed to load {}: {}", path.display(), e);
            LoaderMessage::Failed {
                path,
                error: e.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
country,place,pop1980,pop2000,pop2010,pop2022,pop2023,landAreaKm,cca3
India,356,696828385,1059633675,1240613620,1417173173,1428627663,2973190,IND
China,156,982372466,1264099069,1348191368,1425887337,1425671352,9424702.9,CHN
";

    #[test]
    fn test_read_table_ignores_extra_columns() {
        let table = read_table(SAMPLE.as_bytes()).unwrap();
        assert_eq!(table.len(), 2);
        let china = table.find("China").unwrap();
        assert_eq!(china.place, "156");
        assert_eq!(china.land_area_km, 9424702.9);
    }

    #[test]
    fn test_read_table_missing_column_fails() {
        let csv = "country,place,pop1980\nIndia,356,1\n";
        let err = read_table(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, PopDashError::CsvParse(_)), "got {err}");
    }

    #[test]
    fn test_read_table_bad_number_fails() {
        let csv = "country,place,pop1980,pop2000,pop2010,pop2022,pop2023,landAreaKm\n\
                   India,356,lots,1,1,1,1,1\n";
        assert!(matches!(
            read_table(csv.as_bytes()),
            Err(PopDashError::CsvParse(_))
        ));
    }

    #[test]
    fn test_resolve_data_path() {
        assert_eq!(resolve_data_path(None), PathBuf::from(DEFAULT_DATA_PATH));
        assert_eq!(
            resolve_data_path(Some("  ".into())),
            PathBuf::from(DEFAULT_DATA_PATH)
        );
        assert_eq!(
            resolve_data_path(Some("/tmp/pop.csv".into())),
            PathBuf::from("/tmp/pop.csv")
        );
    }

    #[test]
    fn test_missing_file_is_data_file_error() {
        let err = load_table(Path::new("definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, PopDashError::DataFile { .. }));
        assert!(err.to_string().contains("not/here.csv"));
    }
}
