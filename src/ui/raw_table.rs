//! "Raw Data" table: every row of the loaded file, unfiltered.
//!
//! Uses `egui_extras::TableBuilder` so only visible rows are laid out.

use egui_extras::{Column, TableBuilder};

use crate::core::table::PopulationTable;
use crate::ui::theme;
use crate::util::constants::TABLE_ROW_HEIGHT;
use crate::util::format::format_population;

const RAW_TABLE_MAX_HEIGHT: f32 = 280.0;

const HEADERS: [&str; 8] = [
    "country",
    "place",
    "pop1980",
    "pop2000",
    "pop2010",
    "pop2022",
    "pop2023",
    "landAreaKm",
];

/// Render the full table in file order.
pub fn render_raw_table(ui: &mut egui::Ui, table: &PopulationTable, dark: bool) {
    let rows = table.rows();

    ui.push_id("raw_data", |ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .max_scroll_height(RAW_TABLE_MAX_HEIGHT)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::auto().at_least(140.0).clip(true)) // country
            .column(Column::auto().at_least(50.0)) // place
            .columns(Column::auto().at_least(110.0), 6) // numeric
            .header(TABLE_ROW_HEIGHT, |mut header| {
                for name in HEADERS {
                    header.col(|ui| {
                        ui.strong(name);
                    });
                }
            })
            .body(|body| {
                body.rows(TABLE_ROW_HEIGHT, rows.len(), |mut row| {
                    let record = &rows[row.index()];
                    row.col(|ui| {
                        ui.label(&record.country);
                    });
                    row.col(|ui| {
                        ui.label(
                            egui::RichText::new(&record.place).color(theme::text_secondary(dark)),
                        );
                    });
                    for (_, value) in record.numeric_fields() {
                        row.col(|ui| {
                            ui.monospace(format_population(value));
                        });
                    }
                });
            });
    });
}
