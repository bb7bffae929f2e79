//! "Statistics Summary" table: describe-style statistics for the
//! historical population columns of the current selection.

use egui_extras::{Column, TableBuilder};

use crate::core::stats::DescribeTable;
use crate::ui::theme;
use crate::util::constants::TABLE_ROW_HEIGHT;
use crate::util::format::format_stat;

/// Render the summary with one row per statistic and one column per
/// population column.
pub fn render_summary(ui: &mut egui::Ui, summary: &DescribeTable, dark: bool) {
    let rows = summary.rows();

    ui.push_id("stats_summary", |ui| {
        let mut table = TableBuilder::new(ui)
            .striped(true)
            .resizable(false)
            .vscroll(false)
            .cell_layout(egui::Layout::right_to_left(egui::Align::Center))
            .column(Column::exact(60.0));
        for _ in &summary.columns {
            table = table.column(Column::auto().at_least(130.0));
        }

        table
            .header(TABLE_ROW_HEIGHT, |mut header| {
                header.col(|_ui| {});
                for col in &summary.columns {
                    header.col(|ui| {
                        ui.strong(col.column.header());
                    });
                }
            })
            .body(|body| {
                body.rows(TABLE_ROW_HEIGHT, rows.len(), |mut row| {
                    let (label, cells) = &rows[row.index()];
                    let is_count = *label == "count";
                    row.col(|ui| {
                        ui.label(
                            egui::RichText::new(*label)
                                .color(theme::text_secondary(dark))
                                .strong(),
                        );
                    });
                    for value in cells {
                        row.col(|ui| {
                            ui.monospace(format_stat(*value, is_count));
                        });
                    }
                });
            });
    });
}
