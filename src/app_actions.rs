//! Extended actions for [`PopDashApp`]: export, the Open CSV dialog,
//! keyboard shortcuts and the About dialog.
//!
//! These are `impl` blocks on the app struct, split out from `app.rs`
//! to keep file sizes manageable.

use std::time::{Duration, Instant};

use crate::app::PopDashApp;
use crate::util::constants;

// ── Export actions ──────────────────────────────────────────────────────

impl PopDashApp {
    /// Export the selected rows to CSV via a native save dialog.
    ///
    /// Runs on a background thread and sends a completion message back
    /// via `export_rx` so the UI can display feedback.
    pub fn export_csv(&mut self) {
        if self.export_rx.is_some() {
            self.export_message = Some(("Export already in progress".into(), Instant::now()));
            return;
        }

        let rows = match (&self.table, &self.view) {
            (Some(table), Some(view)) => view.filtered.to_records(table),
            _ => Vec::new(),
        };
        if rows.is_empty() {
            self.export_message = Some(("No countries selected".into(), Instant::now()));
            return;
        }

        let (tx, rx) = crossbeam_channel::bounded::<String>(1);
        self.export_rx = Some(rx);

        std::thread::spawn(move || {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("CSV", &["csv"])
                .set_file_name("popdash_selection.csv")
                .save_file()
            {
                match crate::export::csv_export::export_csv(&rows, &path) {
                    Ok(()) => {
                        let _ = tx.send(format!("Exported {} countries to CSV", rows.len()));
                    }
                    Err(e) => {
                        tracing::error!("CSV export failed: {}", e);
                        let _ = tx.send(format!("CSV export failed: {e}"));
                    }
                }
            }
        });
    }

    /// Export the statistics summary to JSON via a native save dialog.
    pub fn export_summary(&mut self) {
        if self.export_rx.is_some() {
            self.export_message = Some(("Export already in progress".into(), Instant::now()));
            return;
        }

        let Some(summary) = self.view.as_ref().map(|v| v.summary.clone()) else {
            self.export_message = Some(("No statistics to export".into(), Instant::now()));
            return;
        };

        let (tx, rx) = crossbeam_channel::bounded::<String>(1);
        self.export_rx = Some(rx);

        std::thread::spawn(move || {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("JSON", &["json"])
                .set_file_name("popdash_summary.json")
                .save_file()
            {
                match crate::export::json_export::export_summary_json(&summary, &path) {
                    Ok(()) => {
                        let _ = tx.send("Exported statistics summary to JSON".to_string());
                    }
                    Err(e) => {
                        tracing::error!("JSON export failed: {}", e);
                        let _ = tx.send(format!("JSON export failed: {e}"));
                    }
                }
            }
        });
    }

    /// Process export completion messages from background threads.
    ///
    /// Called once per frame. Also expires stale export messages.
    pub fn process_export_messages(&mut self) {
        if let Some(rx) = &self.export_rx {
            match rx.try_recv() {
                Ok(msg) => {
                    self.export_message = Some((msg, Instant::now()));
                    self.export_rx = None;
                }
                Err(crossbeam_channel::TryRecvError::Disconnected) => {
                    // Save dialog cancelled: the sender was dropped unsent.
                    self.export_rx = None;
                }
                Err(crossbeam_channel::TryRecvError::Empty) => {}
            }
        }
        if let Some((_, instant)) = &self.export_message {
            if instant.elapsed() > Duration::from_secs(constants::EXPORT_MESSAGE_SECS) {
                self.export_message = None;
            }
        }
    }
}

// ── Open CSV ────────────────────────────────────────────────────────────

impl PopDashApp {
    /// Open a native file dialog (on a background thread) to pick a CSV.
    /// The chosen path arrives via `open_rx`.
    pub fn pick_data_file(&mut self) {
        if self.open_rx.is_some() {
            tracing::debug!("pick_data_file: dialog already open, ignoring duplicate call");
            return;
        }
        let (tx, rx) = crossbeam_channel::bounded(1);
        self.open_rx = Some(rx);

        std::thread::spawn(move || {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("CSV", &["csv"])
                .set_title("Open population table")
                .pick_file()
            {
                let _ = tx.send(path);
            }
        });
    }

    /// Poll the open-dialog channel for a user-chosen path.
    pub(crate) fn process_open_selection(&mut self) {
        let path = {
            let Some(rx) = &self.open_rx else {
                return;
            };
            match rx.try_recv() {
                Ok(p) => p,
                Err(crossbeam_channel::TryRecvError::Empty) => return,
                Err(crossbeam_channel::TryRecvError::Disconnected) => {
                    self.open_rx = None;
                    return;
                }
            }
        };
        self.open_rx = None;
        self.open_data_file(path);
    }
}

// ── Keyboard shortcuts ──────────────────────────────────────────────────

impl PopDashApp {
    /// Handle global keyboard shortcuts.
    ///
    /// - **F5 / Ctrl+R**: reload the data file
    /// - **Ctrl+Shift+X**: clear the country selection
    /// - **Escape**: close the About dialog
    pub fn handle_keyboard_shortcuts(&mut self, ctx: &egui::Context) {
        let (reload, clear, escape) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::F5) || (i.modifiers.ctrl && i.key_pressed(egui::Key::R)),
                i.modifiers.ctrl && i.modifiers.shift && i.key_pressed(egui::Key::X),
                i.key_pressed(egui::Key::Escape),
            )
        });

        if reload && !self.is_loading {
            self.reload();
        }
        if clear {
            self.clear_selection();
        }
        if escape {
            self.show_about = false;
        }
    }
}

// ── About dialog ────────────────────────────────────────────────────────

impl PopDashApp {
    /// Render the About dialog window.
    pub fn render_about_dialog(&mut self, ctx: &egui::Context) {
        if !self.show_about {
            return;
        }

        let dark = self.dark_mode;
        let mut open = true;
        egui::Window::new("About")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .fixed_size([320.0, 0.0])
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(8.0);
                    ui.label(
                        egui::RichText::new(constants::APP_NAME)
                            .color(crate::ui::theme::accent(dark))
                            .strong()
                            .size(20.0),
                    );
                    ui.label(
                        egui::RichText::new(format!("v{}", constants::APP_VERSION))
                            .color(crate::ui::theme::text_secondary(dark)),
                    );
                    ui.add_space(8.0);
                    ui.label(constants::DASHBOARD_TITLE);
                    ui.add_space(8.0);
                    ui.label(
                        egui::RichText::new(format!(
                            "{} countries known to the map",
                            crate::core::geo_registry::len()
                        ))
                        .color(crate::ui::theme::text_secondary(dark))
                        .small(),
                    );
                    ui.add_space(8.0);
                });
            });

        if !open {
            self.show_about = false;
        }
    }
}
