//! Left sidebar: raw-data toggle, the country multi-select and the line
//! chart axis option.
//!
//! Every control that affects the charts sets `needs_recompute` through the
//! app's selection methods; nothing is rebuilt here directly.

use crate::app::PopDashApp;
use crate::core::view::LineAxis;
use crate::ui::theme;
use crate::util::constants;

impl PopDashApp {
    /// Render the sidebar within the given `Ui` region.
    pub fn render_sidebar(&mut self, ui: &mut egui::Ui) {
        let dark = self.dark_mode;

        ui.heading(egui::RichText::new("Options").color(theme::accent(dark)));
        ui.separator();

        ui.checkbox(&mut self.show_raw_data, "Show Raw Data");
        ui.add_space(8.0);

        ui.label(egui::RichText::new("Visualization Options").strong());
        ui.add_space(4.0);

        self.render_country_multiselect(ui);

        ui.add_space(8.0);
        ui.separator();

        // ── Line chart axis ─────────────────────────────────────────
        ui.label("📈 Line chart x-axis");
        let mut axis = self.line_axis;
        ui.radio_value(&mut axis, LineAxis::Place, LineAxis::Place.label())
            .on_hover_text("Position each country at its place label");
        ui.radio_value(&mut axis, LineAxis::Year, LineAxis::Year.label())
            .on_hover_text("Position each point at its census year");
        self.set_line_axis(axis);
    }

    /// The "Select Countries" multi-select: search box, chips for the
    /// current picks and a scrollable checkbox list of every country.
    fn render_country_multiselect(&mut self, ui: &mut egui::Ui) {
        let dark = self.dark_mode;
        ui.label("🌐 Select Countries");

        let Some(table) = self.table.clone() else {
            ui.label(
                egui::RichText::new("No data loaded")
                    .color(theme::text_dim(dark))
                    .italics(),
            );
            return;
        };

        // ── Selected chips ──────────────────────────────────────────
        let mut to_remove: Option<String> = None;
        if self.selection.is_empty() {
            ui.label(
                egui::RichText::new("Choose an option")
                    .color(theme::text_dim(dark))
                    .italics(),
            );
        } else {
            ui.horizontal_wrapped(|ui| {
                for country in self.selection.iter() {
                    if ui
                        .small_button(format!("{country} ✖"))
                        .on_hover_text("Remove")
                        .clicked()
                    {
                        to_remove = Some(country.to_owned());
                    }
                }
            });
        }
        if let Some(country) = to_remove {
            self.toggle_country(&country);
        }

        ui.add_space(4.0);

        // ── Search + bulk buttons ───────────────────────────────────
        ui.add(
            egui::TextEdit::singleline(&mut self.country_search)
                .hint_text("🔎 Search countries")
                .desired_width(f32::INFINITY),
        );
        ui.horizontal(|ui| {
            if ui.small_button("☑ All").clicked() {
                self.select_all_countries();
            }
            if ui.small_button("✖ None").clicked() {
                self.clear_selection();
            }
            ui.label(
                egui::RichText::new(format!("{}/{}", self.selection.len(), table.len()))
                    .color(theme::text_secondary(dark))
                    .small(),
            );
        });

        // ── Checkbox list ───────────────────────────────────────────
        let search_lower = self.country_search.trim().to_lowercase();
        let mut toggled: Option<String> = None;
        egui::ScrollArea::vertical()
            .id_salt("country_list")
            .max_height(constants::COUNTRY_LIST_MAX_HEIGHT)
            .show(ui, |ui| {
                for country in table.countries() {
                    if !search_lower.is_empty() && !country.to_lowercase().contains(&search_lower) {
                        continue;
                    }
                    let mut checked = self.selection.contains(country);
                    if ui.checkbox(&mut checked, country).changed() {
                        toggled = Some(country.to_owned());
                    }
                }
            });
        if let Some(country) = toggled {
            self.toggle_country(&country);
        }
    }
}
