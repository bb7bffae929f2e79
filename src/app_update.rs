//! Frame-by-frame update loop and core processing logic.
//!
//! Contains the [`eframe::App`] implementation for `PopDashApp`, plus the
//! loader-message processing and the event-driven view rebuild: widgets
//! record changes by setting `needs_recompute`, and the derived view is
//! rebuilt at most once per frame, only when something changed.

use std::path::PathBuf;
use std::sync::PoisonError;

use crate::app::PopDashApp;
use crate::core::loader::{self, LoaderMessage};
use crate::core::view::{DashboardView, LineAxis};
use crate::util::constants;

// ── Loading ─────────────────────────────────────────────────────────────

impl PopDashApp {
    /// Start loading `data_path` on a background thread.
    ///
    /// The loader goes through the shared cache, so this is cheap when the
    /// path is already loaded.
    pub fn start_loading(&mut self) {
        let (tx, rx) = crossbeam_channel::bounded::<LoaderMessage>(constants::LOADER_CHANNEL_BOUND);

        match loader::spawn_loader_thread(self.data_path.clone(), self.cache.clone(), tx) {
            Ok(_handle) => {
                self.loader_rx = Some(rx);
                self.is_loading = true;
                self.status_text = format!("Loading {}\u{2026}", self.data_path.display());
            }
            Err(e) => {
                tracing::error!("Failed to spawn loader thread: {}", e);
                self.fail_load(format!("Failed to start loader: {e}"));
            }
        }
    }

    /// Drop the cached table and load the file again.
    pub fn reload(&mut self) {
        self.cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .invalidate();
        tracing::info!("Cache invalidated, reloading {}", self.data_path.display());
        self.start_loading();
    }

    /// Switch to a different data file.
    pub fn open_data_file(&mut self, path: PathBuf) {
        tracing::info!("Opening data file {}", path.display());
        self.data_path = path;
        self.start_loading();
    }

    /// Poll the loader channel and apply its result.
    ///
    /// Called once per frame; non-blocking.
    pub(crate) fn process_loader_messages(&mut self) {
        let rx = match &self.loader_rx {
            Some(rx) => rx.clone(),
            None => return,
        };
        let msg = match rx.try_recv() {
            Ok(msg) => msg,
            Err(crossbeam_channel::TryRecvError::Empty) => return,
            Err(crossbeam_channel::TryRecvError::Disconnected) => {
                self.loader_rx = None;
                self.fail_load("Loader thread exited without a result".into());
                return;
            }
        };
        self.loader_rx = None;
        self.is_loading = false;

        match msg {
            LoaderMessage::Loaded {
                path,
                table,
                elapsed,
                from_cache,
            } => {
                let dropped = self.selection.retain_known(&table);
                if dropped > 0 {
                    tracing::info!("Dropped {} selected countries absent from {}", dropped, path.display());
                }
                self.status_text = format!("Loaded {} countries", table.len());
                self.table = Some(table);
                self.load_elapsed = Some(elapsed);
                self.load_from_cache = from_cache;
                self.loaded_at = Some(chrono::Local::now());
                self.load_error = None;
                self.needs_recompute = true;
            }
            LoaderMessage::Failed { path, error } => {
                tracing::warn!("Load of {} failed", path.display());
                self.fail_load(error);
            }
        }
    }

    /// Record a fatal load failure: nothing can render without a table.
    fn fail_load(&mut self, error: String) {
        self.is_loading = false;
        self.table = None;
        self.view = None;
        self.view_error = None;
        self.status_text = "Load failed".into();
        self.push_error(error.clone());
        self.load_error = Some(error);
    }

    pub(crate) fn push_error(&mut self, error: String) {
        if self.errors.len() >= constants::MAX_ERRORS {
            self.errors.remove(0);
        }
        self.errors.push(error);
    }
}

// ── Selection events ────────────────────────────────────────────────────

impl PopDashApp {
    /// Add or remove a country from the selection.
    pub fn toggle_country(&mut self, country: &str) {
        let selected = self.selection.toggle(country);
        tracing::debug!("{} {}", if selected { "Selected" } else { "Deselected" }, country);
        self.needs_recompute = true;
    }

    /// Select every country in the table.
    pub fn select_all_countries(&mut self) {
        if let Some(table) = &self.table {
            for country in table.countries() {
                self.selection.insert(country);
            }
            self.needs_recompute = true;
        }
    }

    pub fn clear_selection(&mut self) {
        if !self.selection.is_empty() {
            self.selection.clear();
            self.needs_recompute = true;
        }
    }

    pub fn set_line_axis(&mut self, axis: LineAxis) {
        if self.line_axis != axis {
            self.line_axis = axis;
            self.needs_recompute = true;
        }
    }

    /// Rebuild the derived view from the cached table and current controls.
    pub fn recompute_view(&mut self) {
        self.needs_recompute = false;

        let Some(table) = &self.table else {
            self.view = None;
            return;
        };

        match DashboardView::build(table, &self.selection, self.line_axis) {
            Ok(view) => {
                if let Some(v) = &view {
                    tracing::debug!("Rebuilt view for {} rows", v.filtered.len());
                }
                self.view = view;
                self.view_error = None;
            }
            Err(e) => {
                tracing::warn!("View rebuild failed: {}", e);
                self.view = None;
                self.push_error(e.to_string());
                self.view_error = Some(e.to_string());
            }
        }
    }
}

// ── eframe::App implementation ──────────────────────────────────────────

impl eframe::App for PopDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // 1. Background results
        self.process_loader_messages();
        self.process_export_messages();
        self.process_open_selection();

        // 2. Keyboard shortcuts may change the selection
        self.handle_keyboard_shortcuts(ctx);

        // 3. Keep repainting while loading (to poll the loader)
        if self.is_loading {
            ctx.request_repaint();
        }
        if self.export_rx.is_some() || self.export_message.is_some() || self.open_rx.is_some() {
            ctx.request_repaint_after(std::time::Duration::from_millis(250));
        }

        // ── Top toolbar ─────────────────────────────────────────────
        egui::TopBottomPanel::top("toolbar")
            .exact_height(36.0)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                self.render_toolbar(ui);
            });

        // ── Bottom status bar ───────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(26.0)
            .show(ctx, |ui| {
                self.render_status_bar(ui);
            });

        // ── Left sidebar ────────────────────────────────────────────
        egui::SidePanel::left("sidebar")
            .resizable(true)
            .default_width(240.0)
            .min_width(180.0)
            .max_width(380.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.render_sidebar(ui);
                });
            });

        // Widget changes this frame are folded in before the charts draw.
        if self.needs_recompute {
            self.recompute_view();
        }

        // ── Central dashboard ───────────────────────────────────────
        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_dashboard(ui);
        });

        // ── Floating popups ─────────────────────────────────────────
        self.render_about_dialog(ctx);
    }

    /// Persist the theme preference on shutdown. Selections are not kept.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, "dark_mode", &self.dark_mode);
    }
}
