//! Central panel: title, optional raw data, then the chart sections for
//! the current selection.

use crate::app::PopDashApp;
use crate::ui::{charts, raw_table, stats_panel, theme};
use crate::util::constants;

impl PopDashApp {
    /// Render the scrollable dashboard in the central panel.
    pub fn render_dashboard(&mut self, ui: &mut egui::Ui) {
        let dark = self.dark_mode;

        egui::ScrollArea::vertical()
            .id_salt("dashboard")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading(
                    egui::RichText::new(constants::DASHBOARD_TITLE)
                        .strong()
                        .size(24.0),
                );
                ui.add_space(8.0);

                if let Some(err) = &self.load_error {
                    error_banner(ui, "\u{26A0} Could not load data.", err, dark);
                    return;
                }

                let Some(table) = self.table.clone() else {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label("Loading data\u{2026}");
                    });
                    return;
                };

                if self.show_raw_data {
                    section_header(ui, "Raw Data");
                    raw_table::render_raw_table(ui, &table, dark);
                    ui.add_space(12.0);
                }

                if let Some(err) = &self.view_error {
                    error_banner(ui, "\u{26A0} Could not build the dashboard.", err, dark);
                    return;
                }

                let Some(view) = &self.view else {
                    ui.label(
                        egui::RichText::new("Select one or more countries in the sidebar to see charts.")
                            .color(theme::text_secondary(dark))
                            .italics(),
                    );
                    return;
                };

                section_header(ui, "Population by Country");
                charts::bar_chart(ui, view);
                ui.add_space(12.0);

                section_header(ui, "Population Over Time");
                charts::line_chart(ui, view);
                ui.add_space(12.0);

                section_header(ui, "Statistics Summary");
                stats_panel::render_summary(ui, &view.summary, dark);
                ui.add_space(12.0);

                section_header(ui, "Population Map");
                charts::population_map(ui, view, dark);
                ui.add_space(12.0);
            });
    }
}

fn section_header(ui: &mut egui::Ui, title: &str) {
    ui.label(egui::RichText::new(title).strong().size(18.0));
    ui.add_space(4.0);
}

fn error_banner(ui: &mut egui::Ui, headline: &str, detail: &str, dark: bool) {
    egui::Frame::new()
        .fill(theme::BG_ERROR_BANNER)
        .inner_margin(egui::Margin::same(6))
        .corner_radius(4.0)
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.label(
                    egui::RichText::new(headline)
                        .color(theme::STATUS_ERROR)
                        .strong(),
                );
                ui.label(egui::RichText::new(detail).color(theme::text_secondary(dark)));
            });
        });
    ui.add_space(4.0);
}
