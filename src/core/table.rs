//! The immutable, validated population table.
//!
//! A [`PopulationTable`] is built once per load and shared read-only
//! (behind an `Arc`) between the loader cache and the UI.

use std::collections::HashSet;

use crate::core::country_record::CountryRecord;
use crate::util::error::{PopDashError, Result};

/// Row-per-country table in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct PopulationTable {
    rows: Vec<CountryRecord>,
}

impl PopulationTable {
    /// Build a table, enforcing its invariants:
    /// - country names are unique,
    /// - every population column and the land area is finite and `>= 0`.
    pub fn from_records(rows: Vec<CountryRecord>) -> Result<Self> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(rows.len());
        for row in &rows {
            if !seen.insert(row.country.as_str()) {
                return Err(PopDashError::DuplicateCountry(row.country.clone()));
            }
            for (column, value) in row.numeric_fields() {
                if !value.is_finite() || value < 0.0 {
                    return Err(PopDashError::InvalidValue {
                        country: row.country.clone(),
                        column: column.to_owned(),
                        value,
                    });
                }
            }
        }
        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[CountryRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&CountryRecord> {
        self.rows.get(idx)
    }

    /// Look up a row by exact country name.
    pub fn find(&self, country: &str) -> Option<&CountryRecord> {
        self.rows.iter().find(|r| r.country == country)
    }

    /// Distinct country names in table order. Feeds the multi-select.
    pub fn countries(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.country.as_str()).collect()
    }
}
