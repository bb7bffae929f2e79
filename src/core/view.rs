//! The derived dashboard view.
//!
//! [`DashboardView::build`] turns the cached table plus the current
//! selection into everything the central panel draws: bar data, line
//! series, the statistics summary and the located map regions. It is
//! rebuilt only when the selection, the data or the line axis changes.

use crate::core::country_record::{PopColumn, HISTORY_COLUMNS, LATEST_COLUMN};
use crate::core::map::{self, MapRegion};
use crate::core::selection::{FilteredView, Selection};
use crate::core::stats::{self, DescribeTable};
use crate::core::table::PopulationTable;
use crate::util::error::Result;

/// What the line chart's x-axis is keyed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineAxis {
    /// Each country's points sit at its `place` label category.
    #[default]
    Place,
    /// Points sit at their census year.
    Year,
}

impl LineAxis {
    pub fn label(self) -> &'static str {
        match self {
            LineAxis::Place => "Place label",
            LineAxis::Year => "Census year",
        }
    }
}

/// One bar of the "Population by Country" chart.
#[derive(Debug, Clone, PartialEq)]
pub struct BarDatum {
    pub country: String,
    pub population: f64,
}

/// One point of a line series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePoint {
    pub column: PopColumn,
    pub x: f64,
    pub population: f64,
}

/// One country's populations across [`HISTORY_COLUMNS`].
#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    pub country: String,
    pub place: String,
    pub points: Vec<LinePoint>,
}

/// Everything the central panel renders for a non-empty selection.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub filtered: FilteredView,
    pub bars: Vec<BarDatum>,
    pub line_axis: LineAxis,
    /// Distinct place labels in filtered order; index = x position when
    /// `line_axis` is [`LineAxis::Place`].
    pub place_categories: Vec<String>,
    pub lines: Vec<LineSeries>,
    pub summary: DescribeTable,
    pub map: Vec<MapRegion>,
}

impl DashboardView {
    /// Build the view, or `None` when nothing is selected.
    ///
    /// # Errors
    /// Fails as a whole if any step fails (e.g. a selected country is
    /// missing from the map registry).
    pub fn build(
        table: &PopulationTable,
        selection: &Selection,
        line_axis: LineAxis,
    ) -> Result<Option<Self>> {
        if selection.is_empty() {
            return Ok(None);
        }

        let filtered = selection.filter(table);

        let bars = filtered
            .rows(table)
            .map(|r| BarDatum {
                country: r.country.clone(),
                population: LATEST_COLUMN.value(r),
            })
            .collect();

        let mut place_categories: Vec<String> = Vec::new();
        for row in filtered.rows(table) {
            if !place_categories.contains(&row.place) {
                place_categories.push(row.place.clone());
            }
        }

        let lines = filtered
            .rows(table)
            .map(|r| {
                let x_place = place_categories
                    .iter()
                    .position(|p| *p == r.place)
                    .unwrap_or(0) as f64;
                let points = HISTORY_COLUMNS
                    .iter()
                    .map(|&column| LinePoint {
                        column,
                        x: match line_axis {
                            LineAxis::Place => x_place,
                            LineAxis::Year => column.year() as f64,
                        },
                        population: column.value(r),
                    })
                    .collect();
                LineSeries {
                    country: r.country.clone(),
                    place: r.place.clone(),
                    points,
                }
            })
            .collect();

        let summary = stats::describe(filtered.rows(table), &HISTORY_COLUMNS);

        let map = map::locate(&map::aggregate(filtered.rows(table)))?;

        Ok(Some(Self {
            filtered,
            bars,
            line_axis,
            place_categories,
            lines,
            summary,
            map,
        }))
    }

    /// Place label for an x position on the line chart, if it names one.
    pub fn place_at(&self, x: f64) -> Option<&str> {
        if self.line_axis != LineAxis::Place {
            return None;
        }
        category_at(&self.place_categories, x)
    }

    /// Country whose bar sits at `x` on the bar chart.
    pub fn country_at(&self, x: f64) -> Option<&str> {
        let idx = category_index(x)?;
        self.bars.get(idx).map(|b| b.country.as_str())
    }
}

/// Categorical axes only label whole, non-negative ticks.
fn category_index(x: f64) -> Option<usize> {
    if x < 0.0 || x.fract() != 0.0 {
        return None;
    }
    Some(x as usize)
}

fn category_at(categories: &[String], x: f64) -> Option<&str> {
    categories.get(category_index(x)?).map(String::as_str)
}
