//! Plot rendering for the dashboard: the latest-population bar chart, the
//! population-over-time lines and the population map.
//!
//! All three read from the prebuilt [`DashboardView`]; nothing here touches
//! the table. Plots sit inside the central scroll area, so scroll and drag
//! gestures are left to the scroll area rather than the plot.

use egui_plot::{Bar, BarChart, GridMark, Legend, Line, Plot, PlotPoints, Points, Polygon};
use std::ops::RangeInclusive;

use crate::core::map::{self, ColorRange, MapRegion};
use crate::core::view::{DashboardView, LineAxis};
use crate::ui::theme;
use crate::util::constants::{CHART_HEIGHT, MAP_HEIGHT, MAP_MARKER_MAX_RADIUS, MAP_MARKER_MIN_RADIUS};
use crate::util::format::{format_compact, format_population};

/// Number of swatches painted in the map's colour bar.
const COLOR_BAR_STEPS: usize = 48;

/// `(x, y)` axis titles of the bar chart.
const BAR_AXIS_TITLES: (&str, &str) = ("Country", "Population");

/// `(x, y)` axis titles of the line chart.
const LINE_AXIS_TITLES: (&str, &str) = ("Year", "Population");

/// Vertical bar chart of each selected country's latest population.
pub fn bar_chart(ui: &mut egui::Ui, view: &DashboardView) {
    let bars: Vec<Bar> = view
        .bars
        .iter()
        .enumerate()
        .map(|(i, b)| {
            Bar::new(i as f64, b.population)
                .name(format!("{}: {}", b.country, format_population(b.population)))
                .fill(theme::series_color(0))
                .width(0.7)
        })
        .collect();

    Plot::new("population_by_country")
        .height(CHART_HEIGHT)
        .allow_scroll(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .show_grid([false, true])
        .include_y(0.0)
        .x_axis_label(BAR_AXIS_TITLES.0)
        .y_axis_label(BAR_AXIS_TITLES.1)
        .x_axis_formatter(move |mark: GridMark, _range: &RangeInclusive<f64>| {
            view.country_at(mark.value).unwrap_or_default().to_owned()
        })
        .y_axis_formatter(|mark: GridMark, _range: &RangeInclusive<f64>| format_compact(mark.value))
        .label_formatter(|name, value| {
            if name.is_empty() {
                format_population(value.y)
            } else {
                name.to_owned()
            }
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new("pop2023", bars));
        });
}

/// One line per selected country across the historical census columns.
pub fn line_chart(ui: &mut egui::Ui, view: &DashboardView) {
    Plot::new("population_over_time")
        .height(CHART_HEIGHT)
        .allow_scroll(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .legend(Legend::default())
        .x_axis_label(LINE_AXIS_TITLES.0)
        .y_axis_label(LINE_AXIS_TITLES.1)
        .x_axis_formatter(move |mark: GridMark, _range: &RangeInclusive<f64>| {
            match view.line_axis {
                LineAxis::Place => view.place_at(mark.value).unwrap_or_default().to_owned(),
                LineAxis::Year => format!("{:.0}", mark.value),
            }
        })
        .y_axis_formatter(|mark: GridMark, _range: &RangeInclusive<f64>| format_compact(mark.value))
        .show(ui, |plot_ui| {
            for (i, series) in view.lines.iter().enumerate() {
                let points: Vec<[f64; 2]> =
                    series.points.iter().map(|p| [p.x, p.population]).collect();
                let color = theme::series_color(i);
                plot_ui.line(
                    Line::new(series.country.as_str(), PlotPoints::from(points.clone()))
                        .color(color)
                        .width(2.0),
                );
                // Markers keep stacked points visible on the place axis.
                plot_ui.points(
                    Points::new(series.country.as_str(), PlotPoints::from(points))
                        .color(color)
                        .radius(3.0)
                        .filled(true),
                );
            }
        });
}

/// Equirectangular world map with one marker per selected country,
/// coloured by latest population on a Viridis scale.
pub fn population_map(ui: &mut egui::Ui, view: &DashboardView, dark: bool) {
    let regions = &view.map;
    let color_range = ColorRange::from_values(regions.iter().map(|r| r.pop2023));
    let max_area = regions
        .iter()
        .map(|r| r.land_area_km)
        .fold(0.0_f64, f64::max);

    Plot::new("population_map")
        .height(MAP_HEIGHT)
        .data_aspect(1.0)
        .allow_scroll(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .show_grid(false)
        .show_axes(false)
        .include_x(-180.0)
        .include_x(180.0)
        .include_y(-60.0)
        .include_y(85.0)
        .label_formatter(|name, _value| name.to_owned())
        .show(ui, |plot_ui| {
            plot_ui.polygon(
                Polygon::new(
                    "ocean",
                    PlotPoints::from(vec![
                        [-180.0, -60.0],
                        [180.0, -60.0],
                        [180.0, 85.0],
                        [-180.0, 85.0],
                    ]),
                )
                .fill_color(theme::MAP_OCEAN)
                .stroke(egui::Stroke::new(1.0, theme::MAP_BORDER)),
            );

            for region in regions {
                let radius = marker_radius(region.land_area_km, max_area);
                let at = || PlotPoints::from(vec![[region.lon, region.lat]]);
                let label = region_label(region);

                plot_ui.points(
                    Points::new(label.as_str(), at())
                        .radius(radius + 1.5)
                        .color(theme::MAP_BORDER)
                        .filled(true),
                );
                plot_ui.points(
                    Points::new(label.as_str(), at())
                        .radius(radius)
                        .color(theme::MAP_LAND)
                        .filled(true),
                );
                plot_ui.points(
                    Points::new(label.as_str(), at())
                        .radius((radius * 0.6).max(MAP_MARKER_MIN_RADIUS * 0.75))
                        .color(theme::rgb(region.color))
                        .filled(true),
                );
            }
        });

    if let Some(range) = color_range {
        color_bar(ui, &range, dark);
    }
}

/// Horizontal Viridis legend under the map, labelled with the value range.
fn color_bar(ui: &mut egui::Ui, range: &ColorRange, dark: bool) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(format_compact(range.min))
                .color(theme::text_secondary(dark))
                .small(),
        );

        let (rect, _) = ui.allocate_exact_size(egui::vec2(240.0, 12.0), egui::Sense::hover());
        let step_w = rect.width() / COLOR_BAR_STEPS as f32;
        for i in 0..COLOR_BAR_STEPS {
            let t = i as f64 / (COLOR_BAR_STEPS - 1) as f64;
            let x0 = rect.left() + step_w * i as f32;
            let swatch = egui::Rect::from_min_max(
                egui::pos2(x0, rect.top()),
                egui::pos2(x0 + step_w + 0.5, rect.bottom()),
            );
            ui.painter()
                .rect_filled(swatch, 0.0, theme::rgb(map::viridis(t)));
        }

        ui.label(
            egui::RichText::new(format_compact(range.max))
                .color(theme::text_secondary(dark))
                .small(),
        );
        ui.label(
            egui::RichText::new("pop2023")
                .color(theme::text_dim(dark))
                .small(),
        );
    });
}

/// Marker radius scaled by the square root of land area relative to the
/// largest selected country.
fn marker_radius(area: f64, max_area: f64) -> f32 {
    if max_area <= 0.0 {
        return MAP_MARKER_MIN_RADIUS;
    }
    let t = (area / max_area).sqrt().clamp(0.0, 1.0) as f32;
    MAP_MARKER_MIN_RADIUS + t * (MAP_MARKER_MAX_RADIUS - MAP_MARKER_MIN_RADIUS)
}

fn region_label(region: &MapRegion) -> String {
    format!(
        "{} ({})\npop2023: {}\nland area: {} km²",
        region.country,
        region.iso3,
        format_population(region.pop2023),
        format_population(region.land_area_km),
    )
}
