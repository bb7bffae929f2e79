//! Bottom status bar: selection count, load time, data source and
//! loading status.

use crate::app::PopDashApp;
use crate::ui::theme;
use crate::util::format::{format_duration, format_loaded_at};

impl PopDashApp {
    /// Render the status bar at the bottom of the window.
    pub fn render_status_bar(&self, ui: &mut egui::Ui) {
        let dark = self.dark_mode;
        ui.horizontal_centered(|ui| {
            // ── Selection count ─────────────────────────────────────
            let total = self.table.as_ref().map_or(0, |t| t.len());
            let count_text = format!("{} of {} countries selected", self.selection.len(), total);
            ui.label(egui::RichText::new(count_text).color(theme::text_secondary(dark)));

            ui.separator();

            // ── Load time ───────────────────────────────────────────
            if let Some(elapsed) = self.load_elapsed {
                let mut text = format!("Load: {}", format_duration(elapsed));
                if self.load_from_cache {
                    text.push_str(" (cached)");
                }
                if let Some(at) = &self.loaded_at {
                    text.push_str(&format!(" at {}", format_loaded_at(at)));
                }
                ui.label(egui::RichText::new(text).color(theme::text_dim(dark)));
                ui.separator();
            }

            ui.label(
                egui::RichText::new(self.data_path.display().to_string())
                    .color(theme::text_dim(dark))
                    .small(),
            );
            ui.separator();

            // ── Loading status ──────────────────────────────────────
            if self.is_loading {
                ui.spinner();
                ui.label(egui::RichText::new(&self.status_text).color(theme::text_secondary(dark)));
            } else if self.load_error.is_some() {
                ui.label(egui::RichText::new(&self.status_text).color(theme::STATUS_ERROR));
            } else {
                ui.label(egui::RichText::new("Ready").color(theme::ACCENT_DIM));
            }

            if let Some((msg, _)) = &self.export_message {
                ui.separator();
                ui.label(egui::RichText::new(msg).color(theme::accent(dark)));
            }

            // ── Errors indicator ────────────────────────────────────
            if !self.errors.is_empty() {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let err_text = format!("!! {} error(s)", self.errors.len());
                    let response =
                        ui.label(egui::RichText::new(err_text).color(theme::STATUS_WARNING));
                    response.on_hover_ui(|ui| {
                        for msg in &self.errors {
                            ui.label(
                                egui::RichText::new(msg)
                                    .color(theme::STATUS_ERROR)
                                    .small(),
                            );
                        }
                    });
                });
            }
        });
    }
}
