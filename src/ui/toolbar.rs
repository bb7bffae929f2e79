//! Top toolbar: reload, open, export, theme toggle and About.

use crate::app::PopDashApp;
use crate::ui::theme;
use crate::util::constants;

impl PopDashApp {
    /// Render the top toolbar within the given `Ui` region.
    pub fn render_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_centered(|ui| {
            ui.spacing_mut().item_spacing.x = 8.0;

            // ── Reload ──────────────────────────────────────────────
            if self.is_loading {
                ui.spinner();
                ui.label("Loading\u{2026}");
            } else if ui
                .button("🔄 Reload")
                .on_hover_text("Drop the cached table and re-read the data file (F5)")
                .clicked()
            {
                self.reload();
            }

            // ── Open ────────────────────────────────────────────────
            if ui
                .button("📂 Open CSV\u{2026}")
                .on_hover_text("Load a different population table")
                .clicked()
            {
                self.pick_data_file();
            }

            ui.separator();

            // ── Export dropdown ─────────────────────────────────────
            let has_view = self.view.is_some();
            ui.add_enabled_ui(has_view, |ui| {
                ui.menu_button("📤 Export", |ui| {
                    if ui.button("📄 Selected countries to CSV\u{2026}").clicked() {
                        self.export_csv();
                        ui.close_menu();
                    }
                    if ui.button("📋 Statistics summary to JSON\u{2026}").clicked() {
                        self.export_summary();
                        ui.close_menu();
                    }
                });
            });

            // ── Right-aligned app title + about + theme toggle ──────
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let about_btn = ui.add(
                    egui::Button::new(egui::RichText::new("ℹ").size(14.0))
                        .min_size(egui::vec2(22.0, 22.0)),
                );
                if about_btn
                    .on_hover_text(format!("About {}", constants::APP_NAME))
                    .clicked()
                {
                    self.show_about = true;
                }

                let theme_icon = if self.dark_mode { "☀" } else { "🌙" };
                let theme_tooltip = if self.dark_mode {
                    "Switch to light mode"
                } else {
                    "Switch to dark mode"
                };
                let theme_btn = ui.add(
                    egui::Button::new(egui::RichText::new(theme_icon).size(14.0))
                        .min_size(egui::vec2(22.0, 22.0)),
                );
                if theme_btn.on_hover_text(theme_tooltip).clicked() {
                    self.dark_mode = !self.dark_mode;
                    theme::apply_theme(ui.ctx(), self.dark_mode);
                }

                ui.label(
                    egui::RichText::new(format!("🌍 {}", constants::APP_NAME))
                        .color(theme::accent(self.dark_mode))
                        .strong()
                        .size(16.0),
                );
            });
        });
    }
}
