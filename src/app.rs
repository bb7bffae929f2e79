//! Top-level application state for PopDash.
//!
//! `PopDashApp` owns the cached table, the sidebar controls, the derived
//! [`DashboardView`] and the channels to background threads. The update
//! loop lives in `app_update.rs`; rendering is delegated to `ui/`.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use crossbeam_channel::Receiver;

use crate::core::loader::{LoaderMessage, TableCache};
use crate::core::selection::Selection;
use crate::core::table::PopulationTable;
use crate::core::view::{DashboardView, LineAxis};

/// Central application state for PopDash.
///
/// All fields are accessible to the UI rendering methods (defined in
/// `ui/*.rs` via `impl PopDashApp` blocks).
pub struct PopDashApp {
    // ── Data source ─────────────────────────────────────────────
    /// CSV file the dashboard is showing.
    pub data_path: PathBuf,
    /// Memoized parsed tables, shared with the loader thread.
    pub cache: Arc<Mutex<TableCache>>,
    /// The loaded table, if the last load succeeded.
    pub table: Option<Arc<PopulationTable>>,
    /// Receiver end of the channel from the loader thread.
    pub loader_rx: Option<Receiver<LoaderMessage>>,
    /// `true` while a loader thread is running.
    pub is_loading: bool,
    /// How long the last load took.
    pub load_elapsed: Option<Duration>,
    /// Wall-clock time of the last successful load.
    pub loaded_at: Option<DateTime<Local>>,
    /// Whether the last load was answered from the cache.
    pub load_from_cache: bool,
    /// Error from the last failed load.
    pub load_error: Option<String>,

    // ── Sidebar controls ────────────────────────────────────────
    pub show_raw_data: bool,
    pub selection: Selection,
    /// Search text for the country multi-select.
    pub country_search: String,
    pub line_axis: LineAxis,

    // ── Derived view ────────────────────────────────────────────
    /// Charts and statistics for the current selection. `None` when the
    /// selection is empty or the last rebuild failed.
    pub view: Option<DashboardView>,
    /// Error from the last failed rebuild.
    pub view_error: Option<String>,
    /// Flag: rebuild `view` on the next frame.
    pub needs_recompute: bool,

    // ── Status ──────────────────────────────────────────────────
    pub status_text: String,
    /// Recent errors, newest last, capped at `MAX_ERRORS`.
    pub errors: Vec<String>,

    // ── Dialogs ─────────────────────────────────────────────────
    pub show_about: bool,

    // ── Theme ───────────────────────────────────────────────────
    /// `true` = dark mode (default), `false` = light mode.
    pub dark_mode: bool,

    // ── Export feedback ─────────────────────────────────────────
    /// Receiver for export completion messages from background threads.
    pub export_rx: Option<Receiver<String>>,
    /// Transient status message for export results.
    pub export_message: Option<(String, Instant)>,

    // ── Open CSV dialog ─────────────────────────────────────────
    /// Receiver for a file path chosen in the open dialog.
    pub open_rx: Option<Receiver<PathBuf>>,
}

impl PopDashApp {
    /// Create the app, restore the theme preference and start loading
    /// `data_path` in the background.
    pub fn new(cc: &eframe::CreationContext<'_>, data_path: PathBuf) -> Self {
        let mut app = Self::with_data_path(data_path);

        if let Some(storage) = cc.storage {
            if let Some(dark) = eframe::get_value::<bool>(storage, "dark_mode") {
                app.dark_mode = dark;
            }
        }
        crate::ui::theme::apply_theme(&cc.egui_ctx, app.dark_mode);

        app.start_loading();
        app
    }

    /// Fresh state for `data_path` with nothing loaded yet.
    pub fn with_data_path(data_path: PathBuf) -> Self {
        Self {
            data_path,
            cache: Arc::new(Mutex::new(TableCache::new())),
            table: None,
            loader_rx: None,
            is_loading: false,
            load_elapsed: None,
            loaded_at: None,
            load_from_cache: false,
            load_error: None,

            show_raw_data: false,
            selection: Selection::new(),
            country_search: String::new(),
            line_axis: LineAxis::default(),

            view: None,
            view_error: None,
            needs_recompute: false,

            status_text: "Starting...".into(),
            errors: Vec::new(),

            show_about: false,

            dark_mode: true,

            export_rx: None,
            export_message: None,

            open_rx: None,
        }
    }
}
