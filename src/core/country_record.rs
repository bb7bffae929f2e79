//! Canonical data structure for a single row of the population table.
//!
//! Each CSV row is deserialised into a [`CountryRecord`]. Columns not named
//! here are ignored, so the loader accepts the wider public datasets that
//! carry density, growth rate, etc.

/// One country's populations at each census year plus its land area.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CountryRecord {
    /// Country display name. Unique within a table.
    pub country: String,

    /// Free-form place label. Public datasets store a numeric country code
    /// here; it is treated as an opaque category label.
    pub place: String,

    pub pop1980: f64,
    pub pop2000: f64,
    pub pop2010: f64,
    pub pop2022: f64,
    pub pop2023: f64,

    /// Land area in square kilometres.
    #[serde(rename = "landAreaKm")]
    pub land_area_km: f64,
}

/// The population columns of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PopColumn {
    Pop1980,
    Pop2000,
    Pop2010,
    Pop2022,
    Pop2023,
}

/// Columns plotted over time and summarised in the statistics table.
pub const HISTORY_COLUMNS: [PopColumn; 4] = [
    PopColumn::Pop1980,
    PopColumn::Pop2000,
    PopColumn::Pop2010,
    PopColumn::Pop2022,
];

/// Column used for the bar chart and the map.
pub const LATEST_COLUMN: PopColumn = PopColumn::Pop2023;

impl PopColumn {
    /// CSV header name of the column.
    pub fn header(self) -> &'static str {
        match self {
            PopColumn::Pop1980 => "pop1980",
            PopColumn::Pop2000 => "pop2000",
            PopColumn::Pop2010 => "pop2010",
            PopColumn::Pop2022 => "pop2022",
            PopColumn::Pop2023 => "pop2023",
        }
    }

    /// Census year the column refers to.
    pub fn year(self) -> u16 {
        match self {
            PopColumn::Pop1980 => 1980,
            PopColumn::Pop2000 => 2000,
            PopColumn::Pop2010 => 2010,
            PopColumn::Pop2022 => 2022,
            PopColumn::Pop2023 => 2023,
        }
    }

    /// Read this column's value from a record.
    pub fn value(self, record: &CountryRecord) -> f64 {
        match self {
            PopColumn::Pop1980 => record.pop1980,
            PopColumn::Pop2000 => record.pop2000,
            PopColumn::Pop2010 => record.pop2010,
            PopColumn::Pop2022 => record.pop2022,
            PopColumn::Pop2023 => record.pop2023,
        }
    }
}

impl CountryRecord {
    /// Every numeric field as `(header, value)`, used for validation.
    pub fn numeric_fields(&self) -> [(&'static str, f64); 6] {
        [
            ("pop1980", self.pop1980),
            ("pop2000", self.pop2000),
            ("pop2010", self.pop2010),
            ("pop2022", self.pop2022),
            ("pop2023", self.pop2023),
            ("landAreaKm", self.land_area_km),
        ]
    }
}
